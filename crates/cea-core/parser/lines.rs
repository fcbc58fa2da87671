//! Splitting decoder output lines into timecode and content

use core::fmt;

/// One `HH:MM:SS:FF - <content>` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedLine<'a> {
    /// Timecode as printed, `:` or `;` before the frame field
    pub timecode: &'a str,
    /// Everything after the dash
    pub content: &'a str,
}

impl<'a> DecodedLine<'a> {
    /// Width of `HH:MM:SS:FF`
    const TIMECODE_LEN: usize = 11;

    /// Pair an already split timecode with its content
    #[must_use]
    pub const fn new(timecode: &'a str, content: &'a str) -> Self {
        Self { timecode, content }
    }

    /// Split a line, returning `None` for header, blank or malformed lines
    ///
    /// Surrounding whitespace is ignored, as is whitespace around the dash.
    #[must_use]
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        let timecode = line.get(..Self::TIMECODE_LEN)?;
        if !is_timecode(timecode.as_bytes()) {
            return None;
        }
        let content = line[Self::TIMECODE_LEN..]
            .trim_start()
            .strip_prefix('-')?
            .trim_start();
        Some(Self { timecode, content })
    }
}

impl fmt::Display for DecodedLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.timecode, self.content)
    }
}

/// Check `dd:dd:dd[:;]dd`
fn is_timecode(bytes: &[u8]) -> bool {
    bytes.len() == DecodedLine::TIMECODE_LEN
        && bytes.iter().enumerate().all(|(idx, &b)| match idx {
            2 | 5 => b == b':',
            8 => b == b':' || b == b';',
            _ => b.is_ascii_digit(),
        })
}
