//! Style resolution for caption text
//!
//! Control directives update a current [`StyleAttributes`] in token order and
//! each text token takes a snapshot of it. [`AssembledText`] then decides
//! between a single cue-level style and an ordered list of [`StyleRun`]s.
//!
//! # Example
//!
//! ```rust
//! use cea_core::style::{AssembledText, StyleResolver};
//! use cea_core::tokenizer::{tokenize, Standard};
//!
//! let tokens = tokenize(r#"{FG-Red} "Red text" {FG-Green} "Green text""#, Standard::Cea608);
//! let segments = StyleResolver::resolve(&tokens, Standard::Cea608);
//! let assembled = AssembledText::from_segments(&segments);
//!
//! assert_eq!(assembled.text, "Red textGreen text");
//! assert!(assembled.style.is_none());
//! assert_eq!(assembled.runs.map(|runs| runs.len()), Some(2));
//! ```

pub mod attributes;
pub mod resolver;
pub mod runs;
pub mod values;

pub use attributes::{StyleAttributes, StyleRun, TextFormatting};
pub use resolver::{StyleResolver, StyledSegment};
pub use runs::AssembledText;
pub use values::{
    CaptionColor, FontFamily, FontSize, NamedColor, Opacity, PenOffset, Rgb, TextEdge,
    VerticalAlign,
};
