//! CEA-708 control directives
//!
//! Directive bodies look like:
//!
//! - `SPC:FG-Solid-R3G3B3:BG-Solid-R0G0B0:Edg-R0G0B0`
//! - `SPA:Pen-[Size:Standard,Offset:Normal]:TextTag-Dialog:FontTag-Default:EdgeType-None:UL:IT`
//! - `SPL:R14-C0`
//! - `DF0:608-PopUp:R1-C29:Anchor-UL-V65-H0:Pen-MonoSerif:Pr-0:VIS:RL:CL:RP`
//! - `SWA:Fill-Solid-R0G0B0:Brdr-None-R0G0B0:PD-LtoR:SD-BtoT:JD-L/T:Snap-0.5sec-LtoR:WW`
//! - `DSW:00000001` and the other window bitmask commands

use crate::{
    layout::{BorderType, Direction, DisplayEffect, TextAlign},
    style::values::{FontFamily, FontSize, Opacity, PenOffset, Rgb, TextEdge},
    utils::{parse_digits, parse_rgb_triplet, split_top_level},
};

/// Color with an optional opacity, as used by pen colors and window fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenColor {
    /// Opacity name, if recognised
    pub opacity: Option<Opacity>,
    /// Scaled 8-bit color
    pub color: Rgb,
}

/// Contents of a `SPA` (set pen attributes) directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenAttributes<'a> {
    pub size: Option<FontSize>,
    pub offset: Option<PenOffset>,
    pub text_tag: Option<&'a str>,
    pub font: Option<FontFamily>,
    pub edge: Option<TextEdge>,
    pub underline: bool,
    pub italic: bool,
    pub bold: bool,
}

/// Anchor part of a window definition (`Anchor-UL-V65-H0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowAnchor<'a> {
    /// Anchor code as printed (`UL`, `LC`, ...)
    pub code: &'a str,
    /// Vertical position, 0-100
    pub vertical: u32,
    /// Horizontal position, 0-100
    pub horizontal: u32,
}

/// Contents of a `DF<n>` (define window) directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowDefinition<'a> {
    pub id: u8,
    /// Window style name such as `608-PopUp`
    pub style: &'a str,
    pub rows: Option<u32>,
    pub columns: Option<u32>,
    pub anchor: Option<WindowAnchor<'a>>,
    /// Predefined pen style name (`MonoSerif`)
    pub pen_style: Option<&'a str>,
    pub priority: Option<u8>,
    pub visible: bool,
    pub row_locked: bool,
    pub column_locked: bool,
    pub relative_position: bool,
}

/// Window border from `Brdr-<type>-RrGgBb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowBorder {
    pub kind: Option<BorderType>,
    pub color: Rgb,
}

/// Display effect from `<Effect>-<speed>sec-<direction>`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEffect {
    pub effect: DisplayEffect,
    /// Effect duration in seconds
    pub speed: f64,
    pub direction: Option<Direction>,
}

/// Contents of a `SWA` (set window attributes) directive
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowAttributes {
    pub fill: Option<PenColor>,
    pub border: Option<WindowBorder>,
    pub print_direction: Option<Direction>,
    pub scroll_direction: Option<Direction>,
    pub justify: Option<TextAlign>,
    pub effect: Option<WindowEffect>,
    pub word_wrap: bool,
}

/// Window bitmask commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowCommandKind {
    /// `CLW`
    Clear,
    /// `DSW`
    Display,
    /// `HDW`
    Hide,
    /// `TGW`
    Toggle,
    /// `DLW`
    Delete,
}

impl WindowCommandKind {
    #[must_use]
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        match mnemonic {
            "CLW" => Some(Self::Clear),
            "DSW" => Some(Self::Display),
            "HDW" => Some(Self::Hide),
            "TGW" => Some(Self::Toggle),
            "DLW" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// A recognised CEA-708 directive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cea708Command<'a> {
    SetPenColor {
        foreground: Option<PenColor>,
        background: Option<PenColor>,
        edge: Option<Rgb>,
    },
    SetPenAttributes(PenAttributes<'a>),
    SetPenLocation { row: u32, column: u32 },
    DefineWindow(WindowDefinition<'a>),
    SetWindowAttributes(WindowAttributes),
    /// Window bitmask command; `mask` is kept as printed
    WindowCommand {
        kind: WindowCommandKind,
        mask: &'a str,
    },
    Unknown(&'a str),
}

impl<'a> Cea708Command<'a> {
    /// Classify a control token body
    #[must_use]
    pub fn parse(body: &'a str) -> Self {
        let parsed = match body.split_once(':') {
            Some(("SPC", args)) => Some(parse_pen_color(args)),
            Some(("SPA", args)) => Some(Self::SetPenAttributes(parse_pen_attributes(args))),
            Some(("SPL", args)) => parse_pen_location(args),
            Some(("SWA", args)) => Some(Self::SetWindowAttributes(parse_window_attributes(args))),
            Some((name, args)) if name.starts_with("DF") => parse_define_window(name, args),
            Some((name, mask)) => WindowCommandKind::from_mnemonic(name)
                .filter(|_| !mask.is_empty() && mask.bytes().all(|b| b.is_ascii_digit()))
                .map(|kind| Self::WindowCommand { kind, mask }),
            None => None,
        };
        parsed.unwrap_or(Self::Unknown(body))
    }
}

/// Leading word characters (`[A-Za-z0-9_]`) of `s`
fn word(s: &str) -> &str {
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    &s[..end]
}

/// Text following the first occurrence of `prefix`
fn after<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    s.find(prefix).map(|idx| &s[idx + prefix.len()..])
}

/// Text up to the next `:`
fn until_colon(s: &str) -> &str {
    s.split(':').next().unwrap_or_default()
}

/// Parse `<opacity>-RrGgBb`
fn opacity_color(s: &str) -> Option<PenColor> {
    let opacity = word(s);
    if opacity.is_empty() {
        return None;
    }
    let rgb = parse_rgb_triplet(s[opacity.len()..].strip_prefix('-')?)?;
    Some(PenColor {
        opacity: Opacity::from_name(opacity),
        color: Rgb::from_cea708(rgb),
    })
}

fn parse_pen_color(args: &str) -> Cea708Command<'_> {
    Cea708Command::SetPenColor {
        foreground: after(args, "FG-").and_then(opacity_color),
        background: after(args, "BG-").and_then(opacity_color),
        edge: after(args, "Edg-")
            .and_then(parse_rgb_triplet)
            .map(Rgb::from_cea708),
    }
}

fn parse_pen_attributes(args: &str) -> PenAttributes<'_> {
    let mut attrs = PenAttributes {
        size: after(args, "Size:").map(word).and_then(FontSize::from_pen_size),
        offset: after(args, "Offset:").map(word).and_then(PenOffset::from_name),
        text_tag: after(args, "TextTag-")
            .map(until_colon)
            .filter(|tag| !tag.is_empty()),
        font: after(args, "FontTag-")
            .map(until_colon)
            .and_then(FontFamily::from_tag),
        edge: after(args, "EdgeType-")
            .map(until_colon)
            .and_then(TextEdge::from_name),
        ..PenAttributes::default()
    };
    for segment in split_top_level(args, ':') {
        match segment.trim() {
            "UL" => attrs.underline = true,
            "IT" => attrs.italic = true,
            "BL" => attrs.bold = true,
            _ => {}
        }
    }
    attrs
}

/// Parse `R<row>-C<col>`
fn row_column(s: &str) -> Option<(u32, u32)> {
    let (row, column) = s.strip_prefix('R')?.split_once("-C")?;
    Some((parse_digits(row)?, parse_digits(column)?))
}

fn parse_pen_location(args: &str) -> Option<Cea708Command<'_>> {
    let (row, column) = row_column(args.trim())?;
    Some(Cea708Command::SetPenLocation { row, column })
}

/// Parse `Anchor-<code>-V<v>-H<h>`
fn parse_anchor(s: &str) -> Option<WindowAnchor<'_>> {
    let mut parts = s.strip_prefix("Anchor-")?.split('-');
    let code = parts.next().filter(|c| !c.is_empty())?;
    let vertical = parse_digits(parts.next()?.strip_prefix('V')?)?;
    let horizontal = parse_digits(parts.next()?.strip_prefix('H')?)?;
    Some(WindowAnchor {
        code,
        vertical,
        horizontal,
    })
}

fn parse_define_window<'a>(name: &str, args: &'a str) -> Option<Cea708Command<'a>> {
    let id = parse_digits(name.strip_prefix("DF")?)?;
    let mut segments = args.split(':');
    let mut window = WindowDefinition {
        id,
        style: segments.next().unwrap_or_default(),
        ..WindowDefinition::default()
    };
    for segment in segments {
        match segment {
            "VIS" => window.visible = true,
            "RL" => window.row_locked = true,
            "CL" => window.column_locked = true,
            "RP" => window.relative_position = true,
            s if s.starts_with("Anchor-") => window.anchor = parse_anchor(s),
            s if s.starts_with("Pen-") => {
                window.pen_style = s.strip_prefix("Pen-").filter(|p| !p.is_empty());
            }
            s if s.starts_with("Pr-") => window.priority = s.strip_prefix("Pr-").and_then(parse_digits),
            s => {
                if let Some((rows, columns)) = row_column(s) {
                    window.rows = Some(rows);
                    window.columns = Some(columns);
                }
            }
        }
    }
    Some(Cea708Command::DefineWindow(window))
}

/// Parse `<Effect>-<speed>sec-<direction>`
fn parse_effect(segment: &str) -> Option<WindowEffect> {
    let mut parts = segment.split('-');
    let effect = DisplayEffect::from_name(parts.next()?)?;
    let speed = parts.next()?.strip_suffix("sec")?.parse::<f64>().ok()?;
    let direction = parts.next().and_then(Direction::from_code);
    Some(WindowEffect {
        effect,
        speed,
        direction,
    })
}

fn parse_window_attributes(args: &str) -> WindowAttributes {
    let mut attrs = WindowAttributes::default();
    for segment in args.split(':') {
        if let Some(fill) = segment.strip_prefix("Fill-") {
            attrs.fill = opacity_color(fill);
        } else if let Some(border) = segment.strip_prefix("Brdr-") {
            let kind = word(border);
            attrs.border = border[kind.len()..]
                .strip_prefix('-')
                .and_then(parse_rgb_triplet)
                .map(|rgb| WindowBorder {
                    kind: BorderType::from_name(kind),
                    color: Rgb::from_cea708(rgb),
                });
        } else if let Some(dir) = segment.strip_prefix("PD-") {
            attrs.print_direction = Direction::from_code(dir);
        } else if let Some(dir) = segment.strip_prefix("SD-") {
            attrs.scroll_direction = Direction::from_code(dir);
        } else if let Some(justify) = segment.strip_prefix("JD-") {
            attrs.justify = TextAlign::from_justify(justify);
        } else if segment == "WW" {
            attrs.word_wrap = true;
        } else if let Some(effect) = parse_effect(segment) {
            attrs.effect = Some(effect);
        }
    }
    attrs
}
