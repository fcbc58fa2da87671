//! Style attribute snapshots and style runs
//!
//! [`StyleAttributes`] is a plain value type. Equality is structural, which
//! is what decides whether a cue collapses to one style or keeps its runs.

use super::values::{
    CaptionColor, FontFamily, FontSize, Opacity, Rgb, TextEdge, VerticalAlign,
};

bitflags::bitflags! {
    /// Text formatting flags carried by a style snapshot
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TextFormatting: u8 {
        /// Bold text formatting
        const BOLD = 1 << 0;
        /// Italic text formatting
        const ITALIC = 1 << 1;
        /// Underline text formatting
        const UNDERLINE = 1 << 2;
    }
}

impl Default for TextFormatting {
    fn default() -> Self {
        Self::empty()
    }
}

/// CSS-like visual properties applying to a span of caption text
///
/// Every field is optional; an empty value means "renderer default".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleAttributes {
    /// Foreground color
    pub color: Option<CaptionColor>,
    /// Background color
    pub background_color: Option<CaptionColor>,
    /// Character edge color
    pub edge_color: Option<Rgb>,
    /// Foreground opacity
    pub opacity: Option<Opacity>,
    /// Background opacity
    pub background_opacity: Option<Opacity>,
    pub font_size: Option<FontSize>,
    pub font_family: Option<FontFamily>,
    pub vertical_align: Option<VerticalAlign>,
    pub text_edge: Option<TextEdge>,
    /// Semantic text tag (`dialog`, `sound effect`, ...), lowercased
    pub text_tag: Option<String>,
    /// CEA-608 partially transparent foreground
    pub partially_transparent: bool,
    /// CEA-608 partially transparent background
    pub background_partially_transparent: bool,
    /// Bold, italic and underline
    pub formatting: TextFormatting,
}

impl StyleAttributes {
    /// Check if no attribute is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Turn a formatting flag on or off
    pub fn set_flag(&mut self, flag: TextFormatting, on: bool) {
        self.formatting.set(flag, on);
    }

    #[must_use]
    pub const fn is_bold(&self) -> bool {
        self.formatting.contains(TextFormatting::BOLD)
    }

    #[must_use]
    pub const fn is_italic(&self) -> bool {
        self.formatting.contains(TextFormatting::ITALIC)
    }

    #[must_use]
    pub const fn is_underline(&self) -> bool {
        self.formatting.contains(TextFormatting::UNDERLINE)
    }

    /// Snapshot for a run: `None` when nothing is set
    #[must_use]
    pub fn snapshot(&self) -> Option<Self> {
        (!self.is_empty()).then(|| self.clone())
    }

    /// CSS-like property list, in a fixed order
    ///
    /// Useful for renderers and for logging; boolean flags appear only when
    /// set.
    #[must_use]
    pub fn css_properties(&self) -> Vec<(&'static str, String)> {
        let mut props = Vec::new();
        if let Some(color) = &self.color {
            props.push(("color", color.to_string()));
        }
        if let Some(color) = &self.background_color {
            props.push(("background-color", color.to_string()));
        }
        if let Some(color) = &self.edge_color {
            props.push(("edge-color", color.to_string()));
        }
        if let Some(opacity) = self.opacity {
            props.push(("opacity", opacity.as_str().to_string()));
        }
        if let Some(opacity) = self.background_opacity {
            props.push(("background-opacity", opacity.as_str().to_string()));
        }
        if let Some(size) = self.font_size {
            props.push(("font-size", size.as_css().to_string()));
        }
        if let Some(family) = self.font_family {
            props.push(("font-family", family.as_css().to_string()));
        }
        if let Some(align) = self.vertical_align {
            props.push(("vertical-align", align.as_css().to_string()));
        }
        if let Some(edge) = self.text_edge {
            props.push(("text-edge", edge.as_css().to_string()));
        }
        if let Some(tag) = &self.text_tag {
            props.push(("text-tag", tag.clone()));
        }
        if self.is_italic() {
            props.push(("font-style", "italic".to_string()));
        }
        if self.is_bold() {
            props.push(("font-weight", "bold".to_string()));
        }
        if self.is_underline() {
            props.push(("text-decoration", "underline".to_string()));
        }
        props
    }
}

/// Contiguous span of cue text sharing one style snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRun {
    /// Run text, including a trailing newline when the next run is on a new row
    pub text: String,
    /// Style of the run; `None` for default styling
    pub style: Option<StyleAttributes>,
}
