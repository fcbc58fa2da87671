//! CEA-608 layout resolver
//!
//! Screen positions use the fixed 15-row by 32-column caption grid, so
//! percentages are `row / 14` and `column / 31`.

use super::Layout;
use crate::{command::Cea608Command, tokenizer::Token};

/// Highest row index on the caption grid
const LAST_ROW: f64 = 14.0;
/// Highest column index on the caption grid
const LAST_COLUMN: f64 = 31.0;

fn row_percent(row: u8) -> f64 {
    f64::from(row) / LAST_ROW * 100.0
}

/// Derive a layout from one line's tokens
///
/// A positional preamble (`{R14:C8}`) sets row, column and both percentages.
/// A style preamble (`{R14:Yellow}`) sets only the row and vertical percent,
/// and only when no positional preamble appears anywhere on the line.
#[must_use]
pub fn resolve(tokens: &[Token<'_>]) -> Layout {
    let mut layout = Layout::default();
    let mut style_row = None;

    for body in tokens.iter().filter_map(Token::as_control) {
        match Cea608Command::parse(body) {
            Cea608Command::PreambleAddress { row, column, .. } => {
                if layout.row.is_none() {
                    layout.row = Some(u32::from(row));
                    layout.column = Some(u32::from(column));
                    layout.vertical_percent = Some(row_percent(row));
                    layout.horizontal_percent = Some(f64::from(column) / LAST_COLUMN * 100.0);
                }
            }
            Cea608Command::PreambleStyle { row, .. } => {
                style_row.get_or_insert(row);
            }
            Cea608Command::TabOffset(offset) => {
                layout.tab_offset.get_or_insert(offset);
            }
            Cea608Command::Global(code) => {
                if layout.mode.is_none() {
                    if let Some(mode) = code.mode() {
                        layout.mode = Some(mode);
                        layout.roll_up_rows = code.roll_up_rows();
                    }
                }
                if !layout.control_codes.contains(&code) {
                    layout.control_codes.push(code);
                }
            }
            _ => {}
        }
    }

    if layout.row.is_none() {
        if let Some(row) = style_row {
            layout.row = Some(u32::from(row));
            layout.vertical_percent = Some(row_percent(row));
        }
    }

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command::GlobalCode,
        layout::CaptionMode,
        tokenizer::{tokenize, Standard},
    };

    fn layout(content: &str) -> Layout {
        resolve(&tokenize(content, Standard::Cea608))
    }

    #[test]
    fn positional_preamble() {
        let layout = layout(r#"{R7:C15} "Middle""#);
        assert_eq!(layout.row, Some(7));
        assert_eq!(layout.column, Some(15));
        assert!((layout.vertical_percent.unwrap() - 50.0).abs() < 1e-9);
        assert!((layout.horizontal_percent.unwrap() - 48.387).abs() < 0.01);
    }

    #[test]
    fn first_positional_wins() {
        let layout = layout(r#"{R14:C8} "a" {R15:C4} "b""#);
        assert_eq!((layout.row, layout.column), (Some(14), Some(8)));
    }

    #[test]
    fn style_preamble_only_without_positional() {
        let styled = layout(r#"{R10:Yellow} "a""#);
        assert_eq!(styled.row, Some(10));
        assert_eq!(styled.column, None);
        assert_eq!(styled.horizontal_percent, None);

        let mixed = layout(r#"{R10:Yellow} "a" {R12:C0} "b""#);
        assert_eq!(mixed.row, Some(12));
    }

    #[test]
    fn modes_and_control_codes() {
        let layout = layout(r#"{RU3} {CR} {R14:C0} "text" {CR}"#);
        assert_eq!(layout.mode, Some(CaptionMode::RollUp));
        assert_eq!(layout.roll_up_rows, Some(3));
        assert_eq!(layout.control_codes, vec![GlobalCode::Ru3, GlobalCode::Cr]);

        let pop_on = layout_of_mode("{RCL} {RDC}");
        assert_eq!(pop_on, Some(CaptionMode::PopOn));
    }

    fn layout_of_mode(content: &str) -> Option<CaptionMode> {
        layout(content).mode
    }

    #[test]
    fn tab_offset() {
        assert_eq!(layout(r#"{R14:C4} {TO2} "x""#).tab_offset, Some(2));
    }

    #[test]
    fn nothing_recognised() {
        assert!(layout(r#"{XYZ} "plain""#).is_empty());
        assert!(layout("").is_empty());
    }
}
