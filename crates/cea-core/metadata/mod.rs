//! Companion files written next to the caption decode
//!
//! A `.ccd` file describes the source stream, most importantly its frame
//! rate and whether timecodes are drop-frame. A `.dbg` file holds the
//! decoder's own diagnostics. Both are parsed from text the caller has
//! already read.

pub mod ccd;
pub mod dbg;

pub use ccd::CcdMetadata;
pub use dbg::{parse_debug_log, DebugEntry, DebugLevel};
