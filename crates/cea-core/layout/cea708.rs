//! CEA-708 layout resolver
//!
//! Window definitions give geometry and mode, window attributes give fill,
//! border, direction and effects, pen locations give rows, and window
//! commands are recorded as their bitmask strings.

use super::{CaptionMode, Layout, PenPosition, TextAlign};
use crate::{
    command::{Cea708Command, WindowAttributes, WindowCommandKind, WindowDefinition},
    layout::AnchorPoint,
    tokenizer::Token,
};

/// Derive a layout from one line's tokens
#[must_use]
pub fn resolve(tokens: &[Token<'_>]) -> Layout {
    let mut layout = Layout::default();
    let mut window_seen = false;
    let mut attributes_seen = false;

    for body in tokens.iter().filter_map(Token::as_control) {
        match Cea708Command::parse(body) {
            Cea708Command::DefineWindow(window) if !window_seen => {
                window_seen = true;
                apply_window(&mut layout, &window);
            }
            Cea708Command::SetWindowAttributes(attrs) if !attributes_seen => {
                attributes_seen = true;
                apply_attributes(&mut layout, &attrs);
            }
            Cea708Command::SetPenLocation { row, column } => {
                if layout.pen_positions.is_empty() {
                    layout.row = Some(row);
                    layout.column = Some(column);
                }
                layout.pen_positions.push(PenPosition { row, column });
            }
            Cea708Command::WindowCommand { kind, mask } => {
                let slot = match kind {
                    WindowCommandKind::Clear => &mut layout.clear_windows,
                    WindowCommandKind::Display => &mut layout.display_windows,
                    WindowCommandKind::Hide => &mut layout.hide_windows,
                    WindowCommandKind::Toggle => &mut layout.toggle_windows,
                    WindowCommandKind::Delete => &mut layout.delete_windows,
                };
                slot.get_or_insert_with(|| mask.to_string());
            }
            _ => {}
        }
    }

    layout
}

fn apply_window(layout: &mut Layout, window: &WindowDefinition<'_>) {
    layout.window_id = Some(window.id);
    if !window.style.is_empty() {
        layout.window_style = Some(window.style.to_string());
        layout.mode = CaptionMode::from_window_style(window.style);
        layout.text_align = TextAlign::from_window_style(window.style);
        layout.transparent_background = window.style.to_ascii_lowercase().contains("transbg");
    }
    layout.window_rows = window.rows;
    layout.window_columns = window.columns;
    if let Some(anchor) = window.anchor {
        layout.anchor = Some(anchor.code.to_string());
        layout.anchor_point = AnchorPoint::from_code(anchor.code);
        layout.vertical_percent = Some(f64::from(anchor.vertical));
        layout.horizontal_percent = Some(f64::from(anchor.horizontal));
    }
    layout.priority = window.priority;
    layout.visible = window.visible;
    layout.row_locked = window.row_locked;
    layout.column_locked = window.column_locked;
    layout.relative_position = window.relative_position;
}

fn apply_attributes(layout: &mut Layout, attrs: &WindowAttributes) {
    if let Some(fill) = attrs.fill {
        layout.fill_color = Some(fill.color);
        layout.fill_opacity = fill.opacity;
    }
    if let Some(border) = attrs.border {
        layout.border_type = border.kind;
        layout.border_color = Some(border.color);
    }
    layout.print_direction = attrs.print_direction;
    layout.scroll_direction = attrs.scroll_direction;
    if attrs.justify.is_some() {
        layout.text_align = attrs.justify;
    }
    if let Some(effect) = attrs.effect {
        layout.display_effect = Some(effect.effect);
        layout.effect_speed = Some(effect.speed);
        layout.effect_direction = effect.direction;
    }
    layout.word_wrap = attrs.word_wrap;
}
