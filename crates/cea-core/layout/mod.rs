//! Layout resolution: position, caption mode and window geometry
//!
//! Resolvers are stateless and look at one line's tokens. For each kind of
//! directive the first occurrence in token order wins. A line without any
//! recognised directive produces an empty [`Layout`].

pub mod cea608;
pub mod cea708;
pub mod values;

pub use values::{AnchorPoint, BorderType, CaptionMode, Direction, DisplayEffect, TextAlign};

use crate::{command::GlobalCode, style::values::Opacity, style::values::Rgb};

/// Text of one caption row with its starting position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionLine {
    /// 0-based row (CEA-608 screen row or CEA-708 window row)
    pub row: u32,
    /// Column of the first text on the row
    pub column: u32,
    pub text: String,
}

/// CEA-708 pen location from `SPL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenPosition {
    pub row: u32,
    pub column: u32,
}

/// Placement and presentation of a cue
///
/// CEA-608 fills the position, mode and control code fields; CEA-708 adds
/// window definition, window attribute and window command fields.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub row: Option<u32>,
    pub column: Option<u32>,
    /// Vertical position, 0-100
    pub vertical_percent: Option<f64>,
    /// Horizontal position, 0-100
    pub horizontal_percent: Option<f64>,
    pub mode: Option<CaptionMode>,
    pub roll_up_rows: Option<u8>,
    pub tab_offset: Option<u8>,
    /// Text per row, top to bottom
    pub lines: Vec<PositionLine>,
    /// CEA-608 global control codes seen, in first-appearance order
    pub control_codes: Vec<GlobalCode>,

    pub window_id: Option<u8>,
    /// Window style name as printed (`608-PopUp`)
    pub window_style: Option<String>,
    pub text_align: Option<TextAlign>,
    pub transparent_background: bool,
    pub window_rows: Option<u32>,
    pub window_columns: Option<u32>,
    /// Anchor code as printed (`UL`)
    pub anchor: Option<String>,
    pub anchor_point: Option<AnchorPoint>,
    pub priority: Option<u8>,
    pub visible: bool,
    pub row_locked: bool,
    pub column_locked: bool,
    pub relative_position: bool,

    pub fill_color: Option<Rgb>,
    pub fill_opacity: Option<Opacity>,
    pub border_type: Option<BorderType>,
    pub border_color: Option<Rgb>,
    pub print_direction: Option<Direction>,
    pub scroll_direction: Option<Direction>,
    pub display_effect: Option<DisplayEffect>,
    /// Effect duration in seconds
    pub effect_speed: Option<f64>,
    pub effect_direction: Option<Direction>,
    pub word_wrap: bool,

    /// Every `SPL` location in token order
    pub pen_positions: Vec<PenPosition>,

    /// Window bitmasks, kept as printed
    pub clear_windows: Option<String>,
    pub display_windows: Option<String>,
    pub hide_windows: Option<String>,
    pub toggle_windows: Option<String>,
    pub delete_windows: Option<String>,
}

impl Layout {
    /// Check if no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `None` for an empty layout
    #[must_use]
    pub fn into_option(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }

    /// Human-readable anchor name such as `upper-left`
    #[must_use]
    pub fn anchor_description(&self) -> Option<&'static str> {
        self.anchor_point.map(AnchorPoint::description)
    }

    /// Check whether a CEA-608 control code was present
    #[must_use]
    pub fn has_control_code(&self, code: GlobalCode) -> bool {
        self.control_codes.contains(&code)
    }
}
