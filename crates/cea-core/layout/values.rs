//! Typed layout values: caption modes, window geometry and window attributes

use crate::style::values::normalize_name;
use core::fmt;

/// How a caption appears on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaptionMode {
    /// Loaded off screen, shown on a buffer swap
    PopOn,
    /// Shown character by character as received
    PaintOn,
    /// Scrolls up a fixed number of rows
    RollUp,
    /// Scrolls horizontally
    Ticker,
}

impl CaptionMode {
    /// Mode of a CEA-708 window style name
    ///
    /// Predefined styles are matched exactly, then `popup`, `rollup`,
    /// `painton` and `ticker` are searched for as substrings.
    #[must_use]
    pub fn from_window_style(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        match lower.as_str() {
            "608-popup" | "popup-transbg" | "popup-centered" => return Some(Self::PopOn),
            "608-rollup" | "rollup-transbg" | "rollup-centered" => return Some(Self::RollUp),
            "tickertape" => return Some(Self::Ticker),
            _ => {}
        }
        if lower.contains("popup") {
            Some(Self::PopOn)
        } else if lower.contains("rollup") {
            Some(Self::RollUp)
        } else if lower.contains("painton") {
            Some(Self::PaintOn)
        } else if lower.contains("ticker") {
            Some(Self::Ticker)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PopOn => "pop-on",
            Self::PaintOn => "paint-on",
            Self::RollUp => "roll-up",
            Self::Ticker => "ticker",
        }
    }
}

impl fmt::Display for CaptionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text alignment within a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justify,
}

impl TextAlign {
    /// Alignment implied by a window style name (`PopUp-Cntrd`, `RollUp-Left`)
    #[must_use]
    pub fn from_window_style(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.contains("centered") || lower.contains("cntrd") {
            Some(Self::Center)
        } else if lower.contains("left") {
            Some(Self::Left)
        } else if lower.contains("right") {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Map a `JD-` justify direction (`L/T`, `R/B`, `Cntr`, `Full`)
    #[must_use]
    pub fn from_justify(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "l/t" | "left" => Some(Self::Left),
            "r/b" | "right" => Some(Self::Right),
            "cntr" | "center" => Some(Self::Center),
            "full" => Some(Self::Justify),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justify => "justify",
        }
    }
}

/// Window anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorPoint {
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

impl AnchorPoint {
    /// Map a two-letter anchor code (`UL` .. `LR`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "ul" => Some(Self::UpperLeft),
            "uc" => Some(Self::UpperCenter),
            "ur" => Some(Self::UpperRight),
            "ml" => Some(Self::MiddleLeft),
            "mc" => Some(Self::MiddleCenter),
            "mr" => Some(Self::MiddleRight),
            "ll" => Some(Self::LowerLeft),
            "lc" => Some(Self::LowerCenter),
            "lr" => Some(Self::LowerRight),
            _ => None,
        }
    }

    /// Human-readable name such as `upper-left`
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UpperLeft => "upper-left",
            Self::UpperCenter => "upper-center",
            Self::UpperRight => "upper-right",
            Self::MiddleLeft => "middle-left",
            Self::MiddleCenter => "middle-center",
            Self::MiddleRight => "middle-right",
            Self::LowerLeft => "lower-left",
            Self::LowerCenter => "lower-center",
            Self::LowerRight => "lower-right",
        }
    }
}

/// Window border type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderType {
    Raised,
    Depressed,
    Uniform,
    ShadowLeft,
    ShadowRight,
}

impl BorderType {
    /// Map a border name; `None` (the border type) yields `None`
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "raised" => Some(Self::Raised),
            "depressed" => Some(Self::Depressed),
            "uniform" => Some(Self::Uniform),
            "shadowleft" => Some(Self::ShadowLeft),
            "shadowright" => Some(Self::ShadowRight),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Raised => "raised",
            Self::Depressed => "depressed",
            Self::Uniform => "uniform",
            Self::ShadowLeft => "shadow-left",
            Self::ShadowRight => "shadow-right",
        }
    }
}

/// Print, scroll or effect direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl Direction {
    /// Map a direction code (`LtoR`, `RtoL`, `TtoB`, `BtoT`)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "ltor" => Some(Self::LeftToRight),
            "rtol" => Some(Self::RightToLeft),
            "ttob" => Some(Self::TopToBottom),
            "btot" => Some(Self::BottomToTop),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
            Self::TopToBottom => "top-to-bottom",
            Self::BottomToTop => "bottom-to-top",
        }
    }
}

/// Window display effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayEffect {
    Snap,
    Fade,
    Wipe,
    Mask,
}

impl DisplayEffect {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "snap" => Some(Self::Snap),
            "fade" => Some(Self::Fade),
            "wipe" => Some(Self::Wipe),
            "mask" => Some(Self::Mask),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Snap => "snap",
            Self::Fade => "fade",
            Self::Wipe => "wipe",
            Self::Mask => "mask",
        }
    }
}
