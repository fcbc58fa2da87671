//! Typed style values and their CSS-like renderings
//!
//! Decoder output spells values in several ways (`MonoSerif`, `Monospaced
//! Serif`, `Italic-White`). Lookups normalize case, spaces, hyphens and
//! underscores before matching; unknown names yield `None`.

use core::fmt;

/// Lowercase `name` and drop spaces, hyphens and underscores
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|&c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// The eight CEA-608 caption colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedColor {
    White,
    Green,
    Blue,
    Cyan,
    Red,
    Yellow,
    Magenta,
    Black,
}

impl NamedColor {
    /// Look up a color by name, case-insensitively
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "white" => Some(Self::White),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "cyan" => Some(Self::Cyan),
            "red" => Some(Self::Red),
            "yellow" => Some(Self::Yellow),
            "magenta" => Some(Self::Magenta),
            "black" => Some(Self::Black),
            _ => None,
        }
    }

    /// Lowercase CSS color keyword
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Magenta => "magenta",
            Self::Black => "black",
        }
    }
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Scale 2-bit CEA-708 components (0..=3) to 8 bits
    ///
    /// Out-of-range components clamp to 3.
    #[must_use]
    pub const fn from_cea708(components: [u8; 3]) -> Self {
        const fn scale(c: u8) -> u8 {
            match c {
                0 => 0,
                1 => 85,
                2 => 170,
                _ => 255,
            }
        }
        Self {
            r: scale(components[0]),
            g: scale(components[1]),
            b: scale(components[2]),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Text or background color as either a CEA-608 name or a CEA-708 RGB value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaptionColor {
    Named(NamedColor),
    Rgb(Rgb),
}

impl fmt::Display for CaptionColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => f.write_str(named.as_css()),
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
        }
    }
}

impl From<NamedColor> for CaptionColor {
    fn from(color: NamedColor) -> Self {
        Self::Named(color)
    }
}

impl From<Rgb> for CaptionColor {
    fn from(color: Rgb) -> Self {
        Self::Rgb(color)
    }
}

/// CEA-708 pen or window opacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opacity {
    Solid,
    Flash,
    Translucent,
    Transparent,
}

impl Opacity {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "solid" => Some(Self::Solid),
            "flash" => Some(Self::Flash),
            "translucent" => Some(Self::Translucent),
            "transparent" => Some(Self::Transparent),
            _ => None,
        }
    }

    /// Numeric alpha, or `None` for flashing text
    #[must_use]
    pub const fn alpha(self) -> Option<f64> {
        match self {
            Self::Solid => Some(1.0),
            Self::Flash => None,
            Self::Translucent => Some(0.5),
            Self::Transparent => Some(0.0),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Flash => "flash",
            Self::Translucent => "translucent",
            Self::Transparent => "transparent",
        }
    }
}

/// CEA-708 pen size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    /// Map a pen size name (`Small`, `Standard`, `Large`)
    #[must_use]
    pub fn from_pen_size(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "small" => Some(Self::Small),
            "standard" | "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// CEA-708 pen offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PenOffset {
    Subscript,
    Normal,
    Superscript,
}

impl PenOffset {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "subscript" => Some(Self::Subscript),
            "normal" => Some(Self::Normal),
            "superscript" => Some(Self::Superscript),
            _ => None,
        }
    }

    /// Vertical alignment for this offset; normal text has none
    #[must_use]
    pub const fn vertical_align(self) -> Option<VerticalAlign> {
        match self {
            Self::Subscript => Some(VerticalAlign::Sub),
            Self::Normal => None,
            Self::Superscript => Some(VerticalAlign::Super),
        }
    }
}

/// CSS `vertical-align` for sub/superscript pens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlign {
    Sub,
    Super,
}

impl VerticalAlign {
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Sub => "sub",
            Self::Super => "super",
        }
    }
}

/// Font family selected by a CEA-708 font tag or predefined pen style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFamily {
    MonospaceSerif,
    Serif,
    MonospaceSansSerif,
    SansSerif,
    Cursive,
    SmallCaps,
}

impl FontFamily {
    /// Map a font tag or pen style name
    ///
    /// `Default` and unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "monospacedserif" | "monoserif" => Some(Self::MonospaceSerif),
            "proportionalserif" | "proportserif" | "propserif" => Some(Self::Serif),
            "monospacedsanserif" | "monosanserif" | "monosans" => Some(Self::MonospaceSansSerif),
            "proportionalsanserif" | "proportionsanserif" | "propsans" | "propsanserif" => {
                Some(Self::SansSerif)
            }
            "casual" | "cursive" => Some(Self::Cursive),
            "smallcaps" => Some(Self::SmallCaps),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::MonospaceSerif => "monospace, serif",
            Self::Serif => "serif",
            Self::MonospaceSansSerif => "monospace, sans-serif",
            Self::SansSerif => "sans-serif",
            Self::Cursive => "cursive",
            Self::SmallCaps => "small-caps",
        }
    }
}

/// CEA-708 character edge type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextEdge {
    Raised,
    Depressed,
    Uniform,
    DropShadowLeft,
    DropShadowRight,
}

impl TextEdge {
    /// Map an edge type name; `None` (the edge type) yields `None`
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "raised" => Some(Self::Raised),
            "depressed" => Some(Self::Depressed),
            "uniform" => Some(Self::Uniform),
            "leftdropshadow" | "dropshadowleft" | "shadowleft" => Some(Self::DropShadowLeft),
            "rightdropshadow" | "dropshadowright" | "shadowright" => Some(Self::DropShadowRight),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Raised => "raised",
            Self::Depressed => "depressed",
            Self::Uniform => "uniform",
            Self::DropShadowLeft => "drop-shadow-left",
            Self::DropShadowRight => "drop-shadow-right",
        }
    }
}
