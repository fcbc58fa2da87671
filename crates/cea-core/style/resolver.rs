//! Style resolver: folds directives into a current style and snapshots it
//! onto each piece of text
//!
//! Directives only affect text that follows them. The resolver also tracks
//! the row and column the text lands on, advanced by CEA-608 preamble
//! address codes and CEA-708 pen locations.

use super::{
    attributes::{StyleAttributes, TextFormatting},
    values::{CaptionColor, FontFamily},
};
use crate::{
    command::{Cea608Command, Cea708Command},
    tokenizer::{Standard, Token, TokenKind},
};
use log::trace;

/// Text with the style snapshot and pen position that governed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    /// Text as printed, quotes removed
    pub text: String,
    /// Style in effect when the text arrived
    pub style: StyleAttributes,
    /// Row, or `None` before any CEA-608 positioning code
    pub row: Option<u32>,
    /// Column of the positioning code that preceded the text
    pub column: Option<u32>,
}

/// Stateful reducer over one token stream
#[derive(Debug, Clone)]
pub struct StyleResolver {
    standard: Standard,
    current: StyleAttributes,
    row: Option<u32>,
    column: Option<u32>,
    segments: Vec<StyledSegment>,
    /// Separate the next text from the row it continues
    continuation: bool,
}

impl StyleResolver {
    /// Create a resolver with an empty style
    ///
    /// CEA-608 text starts on an unknown row; CEA-708 text starts at the
    /// window origin.
    #[must_use]
    pub fn new(standard: Standard) -> Self {
        let origin = match standard {
            Standard::Cea608 => None,
            Standard::Cea708 => Some(0),
        };
        Self {
            standard,
            current: StyleAttributes::default(),
            row: origin,
            column: origin,
            segments: Vec::new(),
            continuation: false,
        }
    }

    /// Resolve a whole token stream into styled segments
    #[must_use]
    pub fn resolve(tokens: &[Token<'_>], standard: Standard) -> Vec<StyledSegment> {
        let mut resolver = Self::new(standard);
        resolver.feed_all(tokens);
        resolver.into_segments()
    }

    /// Process tokens in order
    pub fn feed_all(&mut self, tokens: &[Token<'_>]) {
        for token in tokens {
            self.feed(token);
        }
    }

    /// Process one token
    pub fn feed(&mut self, token: &Token<'_>) {
        match token.kind {
            TokenKind::Control(body) => match self.standard {
                Standard::Cea608 => self.apply_608(&Cea608Command::parse(body)),
                Standard::Cea708 => self.apply_708(&Cea708Command::parse(body)),
            },
            TokenKind::Text(text) => self.push_text(text),
            TokenKind::ExtendedChar(ch) => {
                let mut buf = [0u8; 4];
                self.push_text(ch.encode_utf8(&mut buf));
            }
        }
    }

    /// Style that applies to the next text
    #[must_use]
    pub const fn current(&self) -> &StyleAttributes {
        &self.current
    }

    /// Row that the next text lands on
    #[must_use]
    pub const fn row(&self) -> Option<u32> {
        self.row
    }

    /// Segments collected so far, in token order
    #[must_use]
    pub fn segments(&self) -> &[StyledSegment] {
        &self.segments
    }

    /// Check whether any segment carries non-whitespace text
    #[must_use]
    pub fn has_visible_text(&self) -> bool {
        self.segments.iter().any(|s| !s.text.trim().is_empty())
    }

    /// Continue the stream with a later line that carries no mode marker
    ///
    /// Text before the next positioning code lands on `row`. The first text
    /// joining existing text on that row is separated by a space unless
    /// either side already has whitespace at the junction. The current
    /// style carries over.
    pub fn continue_on_row(&mut self, row: Option<u32>) {
        self.row = row;
        self.continuation = true;
    }

    /// Apply a CEA-608 directive
    pub fn apply_608(&mut self, command: &Cea608Command<'_>) {
        let style = &mut self.current;
        match *command {
            Cea608Command::PreambleAddress {
                row,
                column,
                underline,
            } => {
                self.row = Some(u32::from(row));
                self.column = Some(u32::from(column));
                style.set_flag(TextFormatting::UNDERLINE, underline);
            }
            Cea608Command::PreambleStyle {
                row,
                color,
                italic,
                underline,
            } => {
                self.row = Some(u32::from(row));
                self.column = Some(0);
                if let Some(color) = color {
                    style.color = Some(color.into());
                }
                style.set_flag(TextFormatting::ITALIC, italic);
                style.set_flag(TextFormatting::UNDERLINE, underline);
            }
            Cea608Command::MidRowForeground {
                color,
                italic,
                partially_transparent,
                underline,
            } => {
                style.color = color.map(CaptionColor::from);
                style.set_flag(TextFormatting::ITALIC, italic);
                style.set_flag(TextFormatting::UNDERLINE, underline);
                style.partially_transparent = partially_transparent;
            }
            Cea608Command::MidRowBackground {
                color,
                partially_transparent,
                underline,
            } => {
                style.background_color = color.map(CaptionColor::from);
                style.background_partially_transparent = partially_transparent;
                if underline {
                    style.set_flag(TextFormatting::UNDERLINE, true);
                }
            }
            Cea608Command::Underline => style.set_flag(TextFormatting::UNDERLINE, true),
            Cea608Command::TabOffset(_) | Cea608Command::Global(_) => {}
            Cea608Command::Unknown(body) => trace!("ignoring unrecognised CEA-608 directive {{{body}}}"),
        }
    }

    /// Apply a CEA-708 directive
    pub fn apply_708(&mut self, command: &Cea708Command<'_>) {
        let style = &mut self.current;
        match command {
            Cea708Command::SetPenColor {
                foreground,
                background,
                edge,
            } => {
                if let Some(fg) = foreground {
                    style.color = Some(fg.color.into());
                    style.opacity = fg.opacity;
                }
                if let Some(bg) = background {
                    style.background_color = Some(bg.color.into());
                    style.background_opacity = bg.opacity;
                }
                if let Some(edge) = edge {
                    style.edge_color = Some(*edge);
                }
            }
            Cea708Command::SetPenAttributes(attrs) => {
                if let Some(size) = attrs.size {
                    style.font_size = Some(size);
                }
                if let Some(offset) = attrs.offset {
                    style.vertical_align = offset.vertical_align();
                }
                if let Some(tag) = attrs.text_tag {
                    style.text_tag = Some(tag.to_lowercase());
                }
                if let Some(font) = attrs.font {
                    style.font_family = Some(font);
                }
                if let Some(edge) = attrs.edge {
                    style.text_edge = Some(edge);
                }
                style.set_flag(TextFormatting::UNDERLINE, attrs.underline);
                style.set_flag(TextFormatting::ITALIC, attrs.italic);
                style.set_flag(TextFormatting::BOLD, attrs.bold);
            }
            Cea708Command::SetPenLocation { row, column } => {
                self.row = Some(*row);
                self.column = Some(*column);
            }
            Cea708Command::DefineWindow(window) => {
                if let Some(font) = window.pen_style.and_then(FontFamily::from_tag) {
                    style.font_family = Some(font);
                }
            }
            Cea708Command::SetWindowAttributes(_) | Cea708Command::WindowCommand { .. } => {}
            Cea708Command::Unknown(body) => trace!("ignoring unrecognised CEA-708 directive {{{body}}}"),
        }
    }

    /// Attach `text` to the current style and position
    ///
    /// Empty text is dropped. Text continuing the previous segment's row and
    /// style extends that segment.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if std::mem::take(&mut self.continuation) {
            let needs_space = self
                .segments
                .iter()
                .rev()
                .find(|s| s.row == self.row)
                .is_some_and(|s| !s.text.ends_with(char::is_whitespace))
                && !text.starts_with(char::is_whitespace);
            if needs_space {
                self.push_text(&format!(" {text}"));
                return;
            }
        }
        if let Some(last) = self.segments.last_mut() {
            if last.row == self.row && last.style == self.current {
                last.text.push_str(text);
                return;
            }
        }
        self.segments.push(StyledSegment {
            text: text.to_string(),
            style: self.current.clone(),
            row: self.row,
            column: self.column,
        });
    }

    /// Finish and return the collected segments in token order
    #[must_use]
    pub fn into_segments(self) -> Vec<StyledSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        style::values::{NamedColor, Rgb},
        tokenizer::tokenize,
    };

    fn rgb(components: [u8; 3]) -> CaptionColor {
        Rgb::from_cea708(components).into()
    }

    fn segments(content: &str, standard: Standard) -> Vec<StyledSegment> {
        StyleResolver::resolve(&tokenize(content, standard), standard)
    }

    #[test]
    fn style_applies_to_following_text_only() {
        let segs = segments(r#""before" {FG-Red} "after""#, Standard::Cea608);
        assert_eq!(segs.len(), 2);
        assert!(segs[0].style.is_empty());
        assert_eq!(segs[1].style.color, Some(NamedColor::Red.into()));
    }

    #[test]
    fn same_style_text_merges() {
        let segs = segments(r#"{FG-Blue} "Hello " "world""#, Standard::Cea608);
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].text, "Hello world");
    }

    #[test]
    fn foreground_replaces_family() {
        let segs = segments(r#"{FG-Italic-White:UL} "a" {FG-Red} "b""#, Standard::Cea608);
        assert!(segs[0].style.is_italic() && segs[0].style.is_underline());
        assert!(!segs[1].style.is_italic() && !segs[1].style.is_underline());
    }

    #[test]
    fn background_keeps_foreground() {
        let segs = segments(r#"{FG-Cyan} {BG-Black:PT} "x""#, Standard::Cea608);
        let style = &segs[0].style;
        assert_eq!(style.color, Some(NamedColor::Cyan.into()));
        assert_eq!(style.background_color, Some(NamedColor::Black.into()));
        assert!(style.background_partially_transparent);
    }

    #[test]
    fn cea608_rows_follow_preambles() {
        let segs = segments(r#""none" {R14:C8} "a" {R15:Yellow} "b""#, Standard::Cea608);
        let rows: Vec<Option<u32>> = segs.iter().map(|s| s.row).collect();
        assert_eq!(rows, vec![None, Some(14), Some(15)]);
        assert_eq!(segs[1].column, Some(8));
        assert_eq!(segs[2].style.color, Some(NamedColor::Yellow.into()));
    }

    #[test]
    fn pen_attributes_clear_absent_flags() {
        let segs = segments(
            r#"{SPA:Pen-[Size:Standard,Offset:Normal]:UL:IT:BL} "a" {SPA:Pen-[Size:Standard,Offset:Normal]:IT} "b""#,
            Standard::Cea708,
        );
        assert!(segs[0].style.is_underline() && segs[0].style.is_bold());
        assert!(segs[1].style.is_italic());
        assert!(!segs[1].style.is_underline() && !segs[1].style.is_bold());
    }

    #[test]
    fn pen_color_accumulates() {
        let segs = segments(
            r#"{SPC:FG-Solid-R3G0B0:BG-Solid-R0G0B0} {SPC:FG-Solid-R0G3B0} "x""#,
            Standard::Cea708,
        );
        let style = &segs[0].style;
        assert_eq!(style.color, Some(rgb([0, 3, 0])));
        assert_eq!(style.background_color, Some(rgb([0, 0, 0])));
    }

    #[test]
    fn window_pen_style_seeds_font() {
        let segs = segments(
            r#"{DF0:608-PopUp:R1-C29:Pen-MonoSerif} "x""#,
            Standard::Cea708,
        );
        assert_eq!(
            segs[0].style.font_family,
            Some(FontFamily::MonospaceSerif)
        );
    }

    #[test]
    fn continuation_keeps_style_and_separates_words() {
        let mut resolver = StyleResolver::new(Standard::Cea608);
        resolver.feed_all(&tokenize(r#"{R14:C0} {FG-Red} "Hello""#, Standard::Cea608));
        resolver.continue_on_row(Some(14));
        resolver.feed_all(&tokenize(r#""world""#, Standard::Cea608));

        let segs = resolver.into_segments();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].text, "Hello world");
        assert_eq!(segs[0].style.color, Some(NamedColor::Red.into()));
    }

    #[test]
    fn continuation_respects_whitespace_and_new_rows() {
        let mut resolver = StyleResolver::new(Standard::Cea608);
        resolver.feed_all(&tokenize(r#"{R14:C0} "Hello ""#, Standard::Cea608));
        resolver.continue_on_row(Some(14));
        resolver.feed_all(&tokenize(r#""world" {R15:C0} "next""#, Standard::Cea608));

        let texts: Vec<&str> = resolver.segments().iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello world", "next"]);
    }

    #[test]
    fn visible_text() {
        let mut resolver = StyleResolver::new(Standard::Cea608);
        resolver.push_text("   ");
        assert!(!resolver.has_visible_text());
        resolver.push_text(" a ");
        assert!(resolver.has_visible_text());
    }

    #[test]
    fn cea708_text_starts_at_origin_and_decodes_p16() {
        let segs = segments(
            r#""Hello " {P16:0x4E16}{P16:0x754C} " World""#,
            Standard::Cea708,
        );
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].row, Some(0));
        assert_eq!(segs[0].text, "Hello 世界 World");
    }
}
