//! Caption cue construction and the per-standard display state machines
//!
//! Input is the text printed by a caption decoder: one header line followed by
//! `HH:MM:SS:FF - <content>` lines. Each decoder consumes lines in order and
//! emits [`CaptionCue`]s as they close; [`Cea608Decoder::finish`] and
//! [`Cea708Decoder::finish`] flush whatever is still on screen with an
//! unknown end time.
//!
//! # Example
//!
//! ```rust
//! use cea_core::parser::parse_608;
//! use cea_core::TimingConfig;
//!
//! let decoded = "CC1\n\
//!     00:00:01:00 - {RCL} {R14:C8} \"Hello\"\n\
//!     00:00:02:00 - {EOC}\n\
//!     00:00:04:00 - {EDM}\n";
//!
//! let cues = parse_608(decoded, TimingConfig::default());
//! assert_eq!(cues.len(), 1);
//! assert_eq!(cues[0].start, 2_000_000);
//! assert_eq!(cues[0].end, Some(4_000_000));
//! assert_eq!(cues[0].text, "Hello");
//! ```

pub mod cea608;
pub mod cea708;
pub mod lines;

pub use cea608::{parse_608, Cea608Decoder};
pub use cea708::{parse_708, Cea708Decoder};
pub use lines::DecodedLine;

use crate::{
    layout::Layout,
    style::{AssembledText, StyleAttributes, StyleResolver, StyleRun},
    tokenizer::Token,
};

/// A timed caption with its text, style and placement
///
/// `style` and `runs` are never both set: a cue whose text shares one style
/// carries it in `style`, otherwise every run keeps its own. Run texts
/// concatenate to `text`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaptionCue {
    /// Start time in microseconds
    pub start: u64,
    /// Start timecode as printed
    pub start_timecode: String,
    /// End time in microseconds, `None` when the stream ended first
    pub end: Option<u64>,
    /// End timecode as printed
    pub end_timecode: Option<String>,
    /// Text with rows separated by `\n`
    pub text: String,
    /// Style shared by all of the text
    pub style: Option<StyleAttributes>,
    /// Placement, or `None` when the lines carried no layout directives
    pub layout: Option<Layout>,
    /// Styled runs, when the text is not uniformly styled
    pub runs: Option<Vec<StyleRun>>,
}

impl CaptionCue {
    /// Duration in microseconds, if the end is known
    #[must_use]
    pub fn duration(&self) -> Option<u64> {
        self.end.map(|end| end.saturating_sub(self.start))
    }

    /// Check whether the cue has differently styled runs
    #[must_use]
    pub const fn has_runs(&self) -> bool {
        self.runs.is_some()
    }
}

/// A cue that is loading or on screen and has not been closed yet
///
/// The resolver that produced the text is kept so later lines merged into
/// the cue continue the same token stream before styles are collapsed.
#[derive(Debug, Clone)]
pub(crate) struct PendingCue {
    start: u64,
    start_timecode: String,
    resolver: StyleResolver,
    layout: Layout,
}

impl PendingCue {
    pub(crate) fn new(
        start: u64,
        start_timecode: &str,
        resolver: StyleResolver,
        layout: Layout,
    ) -> Self {
        Self {
            start,
            start_timecode: start_timecode.to_string(),
            resolver,
            layout,
        }
    }

    /// Move the start to the moment the cue became visible
    pub(crate) fn restamp(&mut self, start: u64, start_timecode: &str) {
        self.start = start;
        self.start_timecode = start_timecode.to_string();
    }

    pub(crate) const fn start(&self) -> u64 {
        self.start
    }

    /// Check if the cue would produce any visible text
    pub(crate) fn has_text(&self) -> bool {
        self.resolver.has_visible_text()
    }

    /// Feed a later line without a mode marker into the same stream
    ///
    /// Text before any positioning code continues the bottom row already in
    /// the buffer; a positioning code starts a new line.
    pub(crate) fn merge(&mut self, tokens: &[Token<'_>]) {
        let last_row = self.resolver.segments().iter().map(|s| s.row).max().flatten();
        self.resolver.continue_on_row(last_row);
        self.resolver.feed_all(tokens);
    }

    /// Close the cue
    pub(crate) fn into_cue(self, end: Option<(u64, &str)>) -> CaptionCue {
        let assembled = AssembledText::from_segments(self.resolver.segments());
        let mut layout = self.layout;
        layout.lines = assembled.lines;

        CaptionCue {
            start: self.start,
            start_timecode: self.start_timecode,
            end: end.map(|(time, _)| time),
            end_timecode: end.map(|(_, timecode)| timecode.to_string()),
            text: assembled.text,
            style: assembled.style,
            layout: layout.into_option(),
            runs: assembled.runs,
        }
    }
}
