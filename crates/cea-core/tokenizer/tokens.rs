//! Token definitions for decoded caption content
//!
//! Tokens borrow from the line they were scanned from. Control bodies and
//! quoted text keep `&'a str` spans; extended characters carry the decoded
//! scalar value directly.

use core::fmt;

/// Caption standard whose decoded notation is being tokenized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Standard {
    /// Line 21 captions
    Cea608,
    /// DTVCC captions, which also print `{P16:0xXXXX}` extended characters
    Cea708,
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cea608 => write!(f, "CEA-608"),
            Self::Cea708 => write!(f, "CEA-708"),
        }
    }
}

/// Semantic kind of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Brace-delimited directive body, braces excluded (`RCL`, `R14:C8`)
    Control(&'a str),
    /// Quoted caption text, quotes excluded
    Text(&'a str),
    /// Single code point printed as `{P16:0xXXXX}` outside quotes
    ExtendedChar(char),
}

/// Token produced by [`super::ContentTokenizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token kind with its payload
    pub kind: TokenKind<'a>,

    /// Full source span including delimiters
    pub span: &'a str,

    /// Byte offset of the span within the line content
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Create new token
    #[must_use]
    pub const fn new(kind: TokenKind<'a>, span: &'a str, offset: usize) -> Self {
        Self { kind, span, offset }
    }

    /// Directive body if this is a control token
    #[must_use]
    pub const fn as_control(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Control(body) => Some(body),
            _ => None,
        }
    }

    /// Check if this token contributes caption text
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self.kind, TokenKind::Text(_) | TokenKind::ExtendedChar(_))
    }

    /// Byte offset just past the end of the span
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.span.len()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Control(body) => write!(f, "Control({body}) @{}", self.offset),
            TokenKind::Text(text) => write!(f, "Text({text:?}) @{}", self.offset),
            TokenKind::ExtendedChar(ch) => {
                write!(f, "ExtendedChar(U+{:04X}) @{}", u32::from(ch), self.offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_accessor() {
        let token = Token::new(TokenKind::Control("EOC"), "{EOC}", 3);
        assert_eq!(token.as_control(), Some("EOC"));
        assert!(!token.is_text());
        assert_eq!(token.end(), 8);
    }

    #[test]
    fn display_formats() {
        let token = Token::new(TokenKind::ExtendedChar('A'), "{P16:0x0041}", 0);
        assert_eq!(token.to_string(), "ExtendedChar(U+0041) @0");
        assert_eq!(Standard::Cea708.to_string(), "CEA-708");
    }
}
