//! CEA-608 control directives
//!
//! The decoder prints preamble address codes as `{R14:C8}` or `{R14:Yellow}`,
//! mid-row codes as `{FG-Italic-White:PT:UL}` / `{BG-Blue:PT}`, tab offsets as
//! `{TO2}` and global control codes by mnemonic (`{RCL}`, `{EOC}`).

use crate::{
    layout::CaptionMode,
    style::values::{normalize_name, NamedColor},
    utils::parse_digits,
};
use core::fmt;

/// CEA-608 global (miscellaneous) control codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GlobalCode {
    Rcl,
    Bs,
    Aof,
    Aon,
    Der,
    Ru2,
    Ru3,
    Ru4,
    Fon,
    Rdc,
    Tr,
    Rtd,
    Edm,
    Cr,
    Enm,
    Eoc,
}

impl GlobalCode {
    /// Every code, in the order layouts list them
    pub const ALL: [Self; 16] = [
        Self::Rcl,
        Self::Bs,
        Self::Aof,
        Self::Aon,
        Self::Der,
        Self::Ru2,
        Self::Ru3,
        Self::Ru4,
        Self::Fon,
        Self::Rdc,
        Self::Tr,
        Self::Rtd,
        Self::Edm,
        Self::Cr,
        Self::Enm,
        Self::Eoc,
    ];

    /// Look up a code by its exact mnemonic
    #[must_use]
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.mnemonic() == mnemonic)
    }

    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Rcl => "RCL",
            Self::Bs => "BS",
            Self::Aof => "AOF",
            Self::Aon => "AON",
            Self::Der => "DER",
            Self::Ru2 => "RU2",
            Self::Ru3 => "RU3",
            Self::Ru4 => "RU4",
            Self::Fon => "FON",
            Self::Rdc => "RDC",
            Self::Tr => "TR",
            Self::Rtd => "RTD",
            Self::Edm => "EDM",
            Self::Cr => "CR",
            Self::Enm => "ENM",
            Self::Eoc => "EOC",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Rcl => "Resume Caption Loading",
            Self::Bs => "Backspace",
            Self::Aof => "Alarm Off",
            Self::Aon => "Alarm On",
            Self::Der => "Delete to End of Row",
            Self::Ru2 => "Roll Up Captions Two Rows",
            Self::Ru3 => "Roll Up Captions Three Rows",
            Self::Ru4 => "Roll Up Captions Four Rows",
            Self::Fon => "Flash On",
            Self::Rdc => "Resume Direct Captioning",
            Self::Tr => "Text Restart",
            Self::Rtd => "Resume Text Display",
            Self::Edm => "Erase Displayed Memory",
            Self::Cr => "Carriage Return",
            Self::Enm => "Erase Non-Displayed Memory",
            Self::Eoc => "End Of Caption",
        }
    }

    /// Caption mode selected by this code, if it is a mode code
    #[must_use]
    pub const fn mode(self) -> Option<CaptionMode> {
        match self {
            Self::Rdc => Some(CaptionMode::PaintOn),
            Self::Rcl => Some(CaptionMode::PopOn),
            Self::Ru2 | Self::Ru3 | Self::Ru4 => Some(CaptionMode::RollUp),
            _ => None,
        }
    }

    /// Visible rows for roll-up codes
    #[must_use]
    pub const fn roll_up_rows(self) -> Option<u8> {
        match self {
            Self::Ru2 => Some(2),
            Self::Ru3 => Some(3),
            Self::Ru4 => Some(4),
            _ => None,
        }
    }
}

impl fmt::Display for GlobalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A recognised CEA-608 directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cea608Command<'a> {
    /// `{R<row>:C<col>[:UL]}` positional preamble address code
    PreambleAddress { row: u8, column: u8, underline: bool },
    /// `{R<row>:<Color>[:UL]}` style preamble address code
    PreambleStyle {
        row: u8,
        color: Option<NamedColor>,
        italic: bool,
        underline: bool,
    },
    /// `{TO<n>}`
    TabOffset(u8),
    /// `{FG-<style>[:PT][:UL]}`
    MidRowForeground {
        color: Option<NamedColor>,
        italic: bool,
        partially_transparent: bool,
        underline: bool,
    },
    /// `{BG-<color>[:PT][:UL]}`
    MidRowBackground {
        color: Option<NamedColor>,
        partially_transparent: bool,
        underline: bool,
    },
    /// Standalone `{UL}`
    Underline,
    /// Global control code such as `{EOC}`
    Global(GlobalCode),
    /// Anything else, passed through untouched
    Unknown(&'a str),
}

impl<'a> Cea608Command<'a> {
    /// Classify a control token body
    #[must_use]
    pub fn parse(body: &'a str) -> Self {
        if let Some(code) = GlobalCode::from_mnemonic(body) {
            return Self::Global(code);
        }
        if body == "UL" {
            return Self::Underline;
        }
        if let Some(style) = body.strip_prefix("FG-") {
            return parse_foreground(style);
        }
        if let Some(style) = body.strip_prefix("BG-") {
            return parse_background(style);
        }
        if let Some(offset) = body.strip_prefix("TO").and_then(parse_digits) {
            return Self::TabOffset(offset);
        }
        parse_preamble(body).unwrap_or(Self::Unknown(body))
    }

    /// Row this directive moves the cursor to
    #[must_use]
    pub const fn row(&self) -> Option<u8> {
        match self {
            Self::PreambleAddress { row, .. } | Self::PreambleStyle { row, .. } => Some(*row),
            _ => None,
        }
    }
}

/// Split `name:FLAG:FLAG` into the name and presence of `PT` / `UL`
fn split_flags(s: &str) -> (&str, bool, bool) {
    let mut parts = s.split(':');
    let name = parts.next().unwrap_or_default();
    let (mut pt, mut ul) = (false, false);
    for flag in parts {
        match flag.trim() {
            "PT" => pt = true,
            "UL" => ul = true,
            _ => {}
        }
    }
    (name, pt, ul)
}

/// Resolve a foreground style name into color and italic
///
/// `Italic-White` (any spacing) is the color plus italic shorthand; other
/// hyphenated names are read part by part.
fn foreground_style(name: &str) -> (Option<NamedColor>, bool) {
    if normalize_name(name) == "italicwhite" {
        return (Some(NamedColor::White), true);
    }
    if let Some(color) = NamedColor::from_name(name) {
        return (Some(color), false);
    }
    let mut color = None;
    let mut italic = false;
    for part in name.split(['-', ' ']) {
        if part.eq_ignore_ascii_case("italic") {
            italic = true;
        } else if let Some(c) = NamedColor::from_name(part) {
            color = Some(c);
        }
    }
    (color, italic)
}

fn parse_foreground(style: &str) -> Cea608Command<'_> {
    let (name, partially_transparent, underline) = split_flags(style);
    let (color, italic) = foreground_style(name);
    Cea608Command::MidRowForeground {
        color,
        italic,
        partially_transparent,
        underline,
    }
}

fn parse_background(style: &str) -> Cea608Command<'_> {
    let (name, partially_transparent, underline) = split_flags(style);
    Cea608Command::MidRowBackground {
        color: NamedColor::from_name(name),
        partially_transparent,
        underline,
    }
}

/// Parse `R<row>:C<col>[:UL]` or `R<row>:<Color>[:UL]`
fn parse_preamble(body: &str) -> Option<Cea608Command<'_>> {
    let rest = body.strip_prefix('R')?;
    let (row, rest) = rest.split_once(':')?;
    let row: u8 = parse_digits(row)?;
    let (target, _, underline) = split_flags(rest);

    if let Some(column) = target.strip_prefix('C').and_then(parse_digits) {
        return Some(Cea608Command::PreambleAddress {
            row,
            column,
            underline,
        });
    }

    let valid_name = target.len() >= 2
        && target.starts_with(|c: char| c.is_ascii_alphabetic())
        && target.chars().all(|c| c.is_ascii_alphabetic() || c == ' ');
    if !valid_name {
        return None;
    }
    let (color, italic) = if normalize_name(target) == "italicwhite" {
        (Some(NamedColor::White), true)
    } else {
        (NamedColor::from_name(target), false)
    };
    Some(Cea608Command::PreambleStyle {
        row,
        color,
        italic,
        underline,
    })
}
