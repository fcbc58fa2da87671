//! # CEA Core
//!
//! Parser for the textual decode of CEA-608 and CEA-708 closed captions.
//! Turns a line-oriented stream of control codes and quoted text into timed,
//! styled caption cues.
//!
//! ## Features
//!
//! - **Drop-frame timing**: exact NTSC 29.97/59.94 timecode conversion
//! - **Zero-copy tokenizing**: tokens borrow from the input line
//! - **Styled runs**: one cue style, or ordered runs when styles differ
//! - **Layout**: rows, screen percentages, caption mode and CEA-708 windows
//! - **Display state machines**: pop-on, paint-on and roll-up for CEA-608,
//!   window commands for CEA-708
//! - **Companion metadata**: `.ccd` timing and `.dbg` diagnostics
//!
//! ## Quick Start
//!
//! ```rust
//! use cea_core::{parse_708, CcdMetadata};
//!
//! let timing = CcdMetadata::parse("Frame Rate=30\nDrop Frame=False").into_timing_config()?;
//!
//! let decoded = "Service 1\n\
//!     00:00:01:00 - {DF0:PopUp:R1-C32:Anchor-UL-V65-H0:VIS} \"Hello \" {P16:0x4E16}{P16:0x754C}\n\
//!     00:00:03:00 - {DLW:00000001}\n";
//!
//! let cues = parse_708(decoded, timing);
//! assert_eq!(cues.len(), 1);
//! assert_eq!(cues[0].text, "Hello 世界");
//! assert_eq!(cues[0].end, Some(3_000_000));
//! # Ok::<(), cea_core::CoreError>(())
//! ```
//!
//! Decoding never fails on malformed caption text: bad timecodes convert to
//! zero and unknown directives are ignored. The only errors come from invalid
//! configuration such as a non-positive frame rate.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod command;
pub mod layout;
pub mod metadata;
pub mod parser;
pub mod style;
pub mod timecode;
pub mod tokenizer;
pub mod utils;

pub use layout::{CaptionMode, Layout, PositionLine};
pub use metadata::{parse_debug_log, CcdMetadata, DebugEntry, DebugLevel};
pub use parser::{parse_608, parse_708, CaptionCue, Cea608Decoder, Cea708Decoder, DecodedLine};
pub use style::{StyleAttributes, StyleRun, TextFormatting};
pub use timecode::{timecode_to_microseconds, FrameRate, TimingConfig};
pub use tokenizer::{tokenize, Standard, Token, TokenKind};
pub use utils::{CoreError, ErrorCategory, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
