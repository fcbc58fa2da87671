//! Low-level scanning for decoded caption content
//!
//! All delimiters (`{`, `}`, `"`) are ASCII, so the scanner works on byte
//! positions and only slices at delimiter boundaries, which are always valid
//! UTF-8 boundaries.

/// Byte-position scanner over one line of content
#[derive(Debug, Clone)]
pub struct TokenScanner<'a> {
    /// Source text being scanned
    source: &'a str,
    /// Current byte position in source
    position: usize,
}

/// Raw scan result before token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scanned<'a> {
    /// `{...}` or an unterminated `{...` running to end of line
    Brace {
        /// Body between the braces
        body: &'a str,
        /// Start offset of the opening brace
        start: usize,
    },
    /// `"..."` or an unterminated `"...` running to end of line
    Quote {
        /// Text between the quotes
        text: &'a str,
        /// Start offset of the opening quote
        start: usize,
    },
}

impl<'a> TokenScanner<'a> {
    /// Create new scanner at the start of `source`
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Current byte position
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Check if at end of source
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Slice of source from `start` up to the current position
    #[must_use]
    pub fn span_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Skip whitespace and stray characters up to the next delimiter
    pub fn skip_to_token_start(&mut self) {
        let rest = &self.source.as_bytes()[self.position..];
        self.position += rest
            .iter()
            .position(|&b| b == b'{' || b == b'"')
            .unwrap_or(rest.len());
    }

    /// Scan the next brace or quote at the current position
    ///
    /// Returns `None` if the current position is not a delimiter.
    pub fn scan(&mut self) -> Option<Scanned<'a>> {
        let start = self.position;
        match self.source.as_bytes().get(start)? {
            b'{' => {
                let body = self.consume_until(b'}');
                Some(Scanned::Brace { body, start })
            }
            b'"' => {
                let text = self.consume_until(b'"');
                Some(Scanned::Quote { text, start })
            }
            _ => None,
        }
    }

    /// Consume an opening delimiter and everything up to `close`
    ///
    /// The closing delimiter is consumed if present; otherwise the body runs
    /// to end of source.
    fn consume_until(&mut self, close: u8) -> &'a str {
        let body_start = self.position + 1;
        let rest = &self.source.as_bytes()[body_start..];
        match rest.iter().position(|&b| b == close) {
            Some(len) => {
                self.position = body_start + len + 1;
                &self.source[body_start..body_start + len]
            }
            None => {
                self.position = self.source.len();
                &self.source[body_start..]
            }
        }
    }
}
