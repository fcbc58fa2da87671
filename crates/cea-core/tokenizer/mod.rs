//! Content tokenizer for decoded caption lines
//!
//! Splits the content part of one decoded line (everything after the
//! `HH:MM:SS:FF - ` prefix) into control directives, quoted text and, for
//! CEA-708, `{P16:0xXXXX}` extended characters. Tokens are yielded in source
//! order and borrow from the input.
//!
//! # Example
//!
//! ```rust
//! use cea_core::tokenizer::{tokenize, Standard, TokenKind};
//!
//! let tokens = tokenize(r#"{RCL} {R14:C8} "Hello""#, Standard::Cea608);
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].kind, TokenKind::Text("Hello"));
//! ```

pub mod scanner;
pub mod tokens;

pub use scanner::{Scanned, TokenScanner};
pub use tokens::{Standard, Token, TokenKind};

/// Incremental tokenizer over one line of decoded caption content
///
/// Never fails: whitespace and stray characters between tokens are skipped,
/// and unterminated braces or quotes run to the end of the line so truncated
/// final lines still yield their text.
#[derive(Debug, Clone)]
pub struct ContentTokenizer<'a> {
    /// Character scanner
    scanner: TokenScanner<'a>,
    /// Notation being read
    standard: Standard,
}

impl<'a> ContentTokenizer<'a> {
    /// Create new tokenizer for a line's content
    #[must_use]
    pub const fn new(content: &'a str, standard: Standard) -> Self {
        Self {
            scanner: TokenScanner::new(content),
            standard,
        }
    }

    /// Get next token, or `None` at end of content
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        self.scanner.skip_to_token_start();
        let scanned = self.scanner.scan()?;

        let token = match scanned {
            Scanned::Brace { body, start } => {
                let span = self.scanner.span_from(start);
                let kind = match self.standard {
                    Standard::Cea708 => decode_p16(body)
                        .map_or(TokenKind::Control(body), TokenKind::ExtendedChar),
                    Standard::Cea608 => TokenKind::Control(body),
                };
                Token::new(kind, span, start)
            }
            Scanned::Quote { text, start } => {
                Token::new(TokenKind::Text(text), self.scanner.span_from(start), start)
            }
        };
        Some(token)
    }

    /// Collect all remaining tokens
    #[must_use]
    pub fn tokenize_all(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

impl<'a> Iterator for ContentTokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenize one line's content
#[must_use]
pub fn tokenize(content: &str, standard: Standard) -> Vec<Token<'_>> {
    ContentTokenizer::new(content, standard).tokenize_all()
}

/// Decode a `P16:0xXXXX` directive body into its code point
///
/// Exactly four hex digits are accepted. Surrogates and malformed payloads
/// return `None` and are kept as ordinary control tokens.
#[must_use]
pub fn decode_p16(body: &str) -> Option<char> {
    let payload = body.strip_prefix("P16:")?;
    let hex = payload
        .strip_prefix("0x")
        .or_else(|| payload.strip_prefix("0X"))?;
    if hex.len() != 4 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
}
