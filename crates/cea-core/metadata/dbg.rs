//! `.dbg` decoder diagnostics
//!
//! Each entry reads `LEVEL CATEGORY [source:line] - message`, for example
//! `WARN DBG_708_DEC [dtvcc_decode.c:628] - Skipping Unknown G2 Char: 0x03`.

use core::{fmt, str::FromStr};

use crate::{CoreError, Result};

/// Severity printed at the start of a diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DebugLevel {
    UnknownDebugLevel,
    Verbose,
    Info,
    Warn,
    Error,
    Fatal,
    Assert,
}

impl DebugLevel {
    pub const ALL: [Self; 7] = [
        Self::UnknownDebugLevel,
        Self::Verbose,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Assert,
    ];

    /// Level name exactly as the decoder prints it
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownDebugLevel => "UNKNOWN_DEBUG_LEVEL",
            Self::Verbose => "VERBOSE",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Assert => "ASSERT",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == name)
    }

    /// Closest `log` level, for forwarding diagnostics
    #[must_use]
    pub const fn log_level(self) -> log::Level {
        match self {
            Self::Verbose => log::Level::Trace,
            Self::UnknownDebugLevel => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error | Self::Fatal | Self::Assert => log::Level::Error,
        }
    }
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugEntry {
    pub level: DebugLevel,
    /// Decoder subsystem such as `DBG_708_DEC`
    pub category: String,
    /// `file:line` inside the decoder
    pub source: String,
    pub message: String,
}

impl DebugEntry {
    /// Parse a line, returning `None` for anything that is not an entry
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        let (level, rest) = line.split_once(char::is_whitespace)?;
        let level = DebugLevel::from_name(level)?;
        let (category, rest) = rest.trim_start().split_once(char::is_whitespace)?;
        let rest = rest.trim_start().strip_prefix('[')?;
        let (source, rest) = rest.split_once(']')?;
        if source.is_empty() {
            return None;
        }
        let message = rest
            .strip_prefix(char::is_whitespace)?
            .trim_start()
            .strip_prefix('-')?
            .strip_prefix(char::is_whitespace)?
            .trim_start();

        Some(Self {
            level,
            category: category.to_string(),
            source: source.to_string(),
            message: message.to_string(),
        })
    }

    /// Forward the entry to the `log` facade under the `dbg` target
    pub fn log(&self) {
        log::log!(
            target: "dbg",
            self.level.log_level(),
            "{} [{}] - {}",
            self.category,
            self.source,
            self.message
        );
    }
}

impl FromStr for DebugEntry {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_line(s).ok_or_else(|| CoreError::metadata(format!("not a debug entry: {s:?}")))
    }
}

impl fmt::Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] - {}",
            self.level, self.category, self.source, self.message
        )
    }
}

/// Parse every entry of a `.dbg` text in order, skipping other lines
#[must_use]
pub fn parse_debug_log(text: &str) -> Vec<DebugEntry> {
    text.lines().filter_map(DebugEntry::parse_line).collect()
}
