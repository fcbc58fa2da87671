//! Shared utilities: error types and small text helpers used by the
//! tokenizer, resolvers and decoders.

pub mod errors;

pub use errors::{CoreError, ErrorCategory, Result};

/// Parse a run of ASCII digits that makes up the whole of `s`.
///
/// Signs, whitespace and empty input are rejected, unlike `str::parse`
/// which accepts a leading `+`.
#[must_use]
pub fn parse_digits<T: core::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Split `s` at top-level occurrences of `sep`, ignoring separators nested
/// inside square brackets (as in `Pen-[Size:Standard,Offset:Normal]`).
#[must_use]
pub fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in s.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&s[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Parse an `R<r>G<g>B<b>` triple of 2-bit CEA-708 color components.
#[must_use]
pub fn parse_rgb_triplet(s: &str) -> Option<[u8; 3]> {
    let bytes = s.as_bytes();
    if bytes.len() < 6 || bytes[0] != b'R' || bytes[2] != b'G' || bytes[4] != b'B' {
        return None;
    }
    let component = |b: u8| (b'0'..=b'3').contains(&b).then(|| b - b'0');
    Some([
        component(bytes[1])?,
        component(bytes[3])?,
        component(bytes[5])?,
    ])
}
