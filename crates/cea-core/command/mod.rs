//! Typed control directives
//!
//! Control token bodies are classified once into per-standard enums so the
//! style and layout resolvers match on directive kind instead of re-scanning
//! raw text. Unrecognised bodies become `Unknown` and are ignored downstream.

pub mod cea608;
pub mod cea708;

pub use cea608::{Cea608Command, GlobalCode};
pub use cea708::{
    Cea708Command, PenAttributes, PenColor, WindowAnchor, WindowAttributes, WindowBorder,
    WindowCommandKind, WindowDefinition, WindowEffect,
};
