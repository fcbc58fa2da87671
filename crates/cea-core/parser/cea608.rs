//! CEA-608 display state machine
//!
//! A channel has two buffers. `loading` holds pop-on text that is not yet
//! visible; `displayed` holds whatever is on screen. Per line the decoder
//! applies, in order: erase displayed memory, end of caption (swap), erase
//! non-displayed memory, and finally any text on the line.

use super::{lines::DecodedLine, CaptionCue, PendingCue};
use crate::{
    command::GlobalCode,
    layout::{self, CaptionMode},
    style::StyleResolver,
    timecode::TimingConfig,
    tokenizer::{tokenize, Standard},
};
use log::{debug, warn};

/// Decoder for one CEA-608 channel
#[derive(Debug, Clone, Default)]
pub struct Cea608Decoder {
    timing: TimingConfig,
    displayed: Option<PendingCue>,
    loading: Option<PendingCue>,
}

impl Cea608Decoder {
    /// Create a decoder with both buffers empty
    #[must_use]
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            displayed: None,
            loading: None,
        }
    }

    /// Check whether a cue is on screen
    #[must_use]
    pub const fn has_displayed(&self) -> bool {
        self.displayed.is_some()
    }

    /// Check whether a pop-on cue is waiting for end of caption
    #[must_use]
    pub const fn has_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Feed one line and return the cues it closed
    pub fn process_line(&mut self, line: &DecodedLine<'_>) -> Vec<CaptionCue> {
        let time = self.timing.timecode_to_microseconds(line.timecode);
        let tokens = tokenize(line.content, Standard::Cea608);
        let layout = layout::cea608::resolve(&tokens);
        let mut emitted = Vec::new();

        if layout.has_control_code(GlobalCode::Edm) {
            self.close_displayed(time, line.timecode, &mut emitted);
        }

        if layout.has_control_code(GlobalCode::Eoc) {
            self.close_displayed(time, line.timecode, &mut emitted);
            if let Some(mut loaded) = self.loading.take() {
                if loaded.has_text() {
                    debug!("{}: pop-on cue shown (loaded at {})", line.timecode, loaded.start());
                    loaded.restamp(time, line.timecode);
                    self.displayed = Some(loaded);
                }
            }
        }

        if layout.has_control_code(GlobalCode::Enm) && self.loading.take().is_some() {
            debug!("{}: loading buffer erased", line.timecode);
        }

        let mut resolver = StyleResolver::new(Standard::Cea608);
        resolver.feed_all(&tokens);
        if !resolver.has_visible_text() {
            return emitted;
        }

        match layout.mode {
            Some(CaptionMode::PopOn) => {
                debug!("{}: loading pop-on cue", line.timecode);
                self.loading = Some(PendingCue::new(time, line.timecode, resolver, layout));
            }
            Some(CaptionMode::PaintOn | CaptionMode::RollUp | CaptionMode::Ticker) => {
                self.close_displayed(time, line.timecode, &mut emitted);
                debug!("{}: displaying {:?} cue", line.timecode, layout.mode);
                self.displayed = Some(PendingCue::new(time, line.timecode, resolver, layout));
            }
            None => {
                if let Some(loading) = self.loading.as_mut() {
                    debug!("{}: merging text into loading buffer", line.timecode);
                    loading.merge(&tokens);
                } else {
                    self.close_displayed(time, line.timecode, &mut emitted);
                    debug!("{}: paint-on cue", line.timecode);
                    self.displayed = Some(PendingCue::new(time, line.timecode, resolver, layout));
                }
            }
        }

        emitted
    }

    /// Flush the displayed cue, then a loading cue that never got EOC
    pub fn finish(&mut self) -> Vec<CaptionCue> {
        let mut flushed = Vec::new();
        if let Some(displayed) = self.displayed.take().filter(PendingCue::has_text) {
            flushed.push(displayed.into_cue(None));
        }
        if let Some(loading) = self.loading.take().filter(PendingCue::has_text) {
            warn!(
                "loading buffer from {} never received EOC, emitting without end time",
                loading.start()
            );
            flushed.push(loading.into_cue(None));
        }
        flushed
    }

    fn close_displayed(&mut self, time: u64, timecode: &str, emitted: &mut Vec<CaptionCue>) {
        if let Some(displayed) = self.displayed.take() {
            if displayed.has_text() {
                debug!("{timecode}: closing displayed cue");
                emitted.push(displayed.into_cue(Some((time, timecode))));
            }
        }
    }
}

/// Decode a whole `.608` text
///
/// The first line is the channel header and is skipped, as are lines that do
/// not start with a timecode. Cues are returned in order of start time.
#[must_use]
pub fn parse_608(text: &str, timing: TimingConfig) -> Vec<CaptionCue> {
    let mut decoder = Cea608Decoder::new(timing);
    let mut cues: Vec<CaptionCue> = text
        .lines()
        .skip(1)
        .filter_map(DecodedLine::parse)
        .flat_map(|line| decoder.process_line(&line))
        .collect();
    cues.extend(decoder.finish());
    // A loading buffer flushed at the end may predate cues closed earlier.
    cues.sort_by_key(|cue| cue.start);
    debug!("decoded {} CEA-608 cues", cues.len());
    cues
}
