//! CEA-708 display state machine
//!
//! One cue is tracked per service. Text arriving with a display-window or
//! define-window command replaces it, a delete-window or clear-window command
//! closes it.

use super::{lines::DecodedLine, CaptionCue, PendingCue};
use crate::{
    layout::{self, Layout},
    style::StyleResolver,
    timecode::TimingConfig,
    tokenizer::{tokenize, Standard, TokenKind},
};
use log::debug;

/// Start timecode given to a cue seeded from the header
const HEADER_TIMECODE: &str = "00:00:00:00";

/// Decoder for one CEA-708 service
#[derive(Debug, Clone, Default)]
pub struct Cea708Decoder {
    timing: TimingConfig,
    current: Option<PendingCue>,
}

impl Cea708Decoder {
    /// Create a decoder with no open cue
    #[must_use]
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            current: None,
        }
    }

    /// Check whether a cue is open
    #[must_use]
    pub const fn has_current(&self) -> bool {
        self.current.is_some()
    }

    /// Inspect a line without a timecode
    ///
    /// Quoted text on such a line seeds a cue at time zero when none is open.
    /// Its text is built the way timed lines build theirs, with extended
    /// characters in token order. Directives on the line are not applied.
    pub fn process_header(&mut self, line: &str) {
        if self.current.is_some() {
            return;
        }
        let tokens = tokenize(line, Standard::Cea708);
        if !tokens.iter().any(|token| matches!(token.kind, TokenKind::Text(_))) {
            return;
        }
        let mut resolver = StyleResolver::new(Standard::Cea708);
        for token in tokens.iter().filter(|token| token.is_text()) {
            resolver.feed(token);
        }
        if !resolver.has_visible_text() {
            return;
        }

        debug!("seeding cue from header text");
        self.current = Some(PendingCue::new(0, HEADER_TIMECODE, resolver, Layout::default()));
    }

    /// Feed one timed line and return the cue it closed, if any
    pub fn process_line(&mut self, line: &DecodedLine<'_>) -> Vec<CaptionCue> {
        let time = self.timing.timecode_to_microseconds(line.timecode);
        let tokens = tokenize(line.content, Standard::Cea708);
        let layout = layout::cea708::resolve(&tokens);
        let mut resolver = StyleResolver::new(Standard::Cea708);
        resolver.feed_all(&tokens);
        let has_text = resolver.has_visible_text();
        let mut emitted = Vec::new();

        let shows_window = layout.display_windows.is_some() || layout.window_id.is_some();
        let removes_window = layout.delete_windows.is_some() || layout.clear_windows.is_some();

        if has_text && shows_window {
            if let Some(current) = self.current.take() {
                debug!("{}: window replaced", line.timecode);
                emitted.push(current.into_cue(Some((time, line.timecode))));
            }
            debug!("{}: window cue opened", line.timecode);
            self.current = Some(PendingCue::new(time, line.timecode, resolver, layout));
        } else if removes_window && self.current.is_some() {
            if let Some(current) = self.current.take() {
                debug!("{}: window cleared", line.timecode);
                emitted.push(current.into_cue(Some((time, line.timecode))));
            }
        } else if has_text && self.current.is_none() {
            debug!("{}: cue opened without window command", line.timecode);
            self.current = Some(PendingCue::new(time, line.timecode, resolver, layout));
        }

        emitted
    }

    /// Flush the open cue with an unknown end
    pub fn finish(&mut self) -> Vec<CaptionCue> {
        self.current
            .take()
            .filter(PendingCue::has_text)
            .map(|current| current.into_cue(None))
            .into_iter()
            .collect()
    }
}

/// Decode a whole `.708` text
///
/// Lines without a timecode go through [`Cea708Decoder::process_header`].
#[must_use]
pub fn parse_708(text: &str, timing: TimingConfig) -> Vec<CaptionCue> {
    let mut decoder = Cea708Decoder::new(timing);
    let mut cues = Vec::new();
    for raw in text.lines().filter(|l| !l.trim().is_empty()) {
        match DecodedLine::parse(raw) {
            Some(line) => cues.extend(decoder.process_line(&line)),
            None => decoder.process_header(raw),
        }
    }
    cues.extend(decoder.finish());
    debug!("decoded {} CEA-708 cues", cues.len());
    cues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::CaptionMode;
    use pretty_assertions::assert_eq;

    fn feed(decoder: &mut Cea708Decoder, timecode: &str, content: &str) -> Vec<CaptionCue> {
        decoder.process_line(&DecodedLine::new(timecode, content))
    }

    #[test]
    fn display_window_replaces_cue() {
        let mut decoder = Cea708Decoder::default();
        feed(&mut decoder, "00:00:01:00", r#"{DF0:PopUp:R1-C32} "One""#);
        let closed = feed(&mut decoder, "00:00:03:00", r#"{DSW:00000001} "Two""#);
        assert_eq!(closed.len(), 1);
        assert_eq!(closed[0].text, "One");
        assert_eq!(closed[0].start, 1_000_000);
        assert_eq!(closed[0].end, Some(3_000_000));
        assert_eq!(
            closed[0].layout.as_ref().and_then(|l| l.mode),
            Some(CaptionMode::PopOn)
        );
    }

    #[test]
    fn delete_window_closes_cue() {
        let mut decoder = Cea708Decoder::default();
        feed(&mut decoder, "00:00:01:00", r#"{DF0:PopUp:R1-C32} "One""#);
        let closed = feed(&mut decoder, "00:00:02:00", "{DLW:00000001}");
        assert_eq!(closed.len(), 1);
        assert!(!decoder.has_current());
        assert!(feed(&mut decoder, "00:00:03:00", "{CLW:00000001}").is_empty());
    }

    #[test]
    fn text_without_window_command() {
        let mut decoder = Cea708Decoder::default();
        feed(&mut decoder, "00:00:01:00", r#""first""#);
        assert!(decoder.has_current());
        // An open cue ignores plain text.
        assert!(feed(&mut decoder, "00:00:02:00", r#""second""#).is_empty());
        let flushed = decoder.finish();
        assert_eq!(flushed.len(), 1);
        assert_eq!(flushed[0].text, "first");
        assert_eq!(flushed[0].end, None);
    }

    #[test]
    fn header_seeds_cue() {
        let mut decoder = Cea708Decoder::default();
        decoder.process_header(r#"Service 1 "Hello " "there""#);
        let cue = decoder.finish().remove(0);
        assert_eq!(cue.start, 0);
        assert_eq!(cue.start_timecode, "00:00:00:00");
        assert_eq!(cue.text, "Hello there");
        assert_eq!(cue.style, None);
        assert_eq!(cue.layout, None);
    }

    #[test]
    fn header_keeps_extended_characters() {
        let mut decoder = Cea708Decoder::default();
        decoder.process_header(r#"Service 1 {SPC:FG-Solid-R3G0B0} "Hello " {P16:0x4E16}{P16:0x754C}"#);
        let cue = decoder.finish().remove(0);
        assert_eq!(cue.text, "Hello 世界");
        assert_eq!(cue.style, None);
    }

    #[test]
    fn header_ignored_with_open_cue_or_no_text() {
        let mut decoder = Cea708Decoder::default();
        decoder.process_header("Service 1");
        assert!(!decoder.has_current());
        feed(&mut decoder, "00:00:01:00", r#""live""#);
        decoder.process_header(r#""late""#);
        assert_eq!(decoder.finish()[0].text, "live");
    }

    #[test]
    fn pen_locations_reassemble_rows() {
        let mut decoder = Cea708Decoder::default();
        feed(
            &mut decoder,
            "00:00:01:00",
            r#"{DF0:PopUp:R2-C32} {SPL:R1-C12} "bottom" {SPL:R0-C16} "top""#,
        );
        let cue = decoder.finish().remove(0);
        assert_eq!(cue.text, "top\nbottom");
        let lines = cue.layout.unwrap().lines;
        assert_eq!((lines[0].row, lines[0].column), (0, 16));
        assert_eq!((lines[1].row, lines[1].column), (1, 12));
    }

    #[test]
    fn parse_with_header_and_extended_chars() {
        let text = "Service 1 \"intro\"\n\
                    00:00:02:00 - {DLW:11111111}\n\
                    00:00:03:00 - {DF0:PopUp:R0-C20:Anchor-UL-V65-H0:VIS} {P16:0x0041}{P16:0x0042}{P16:0x0043}\n\
                    00:00:05:00 - {DLW:11111111}\n";
        let cues = parse_708(text, TimingConfig::default());
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "intro");
        assert_eq!(cues[0].end, Some(2_000_000));
        assert_eq!(cues[1].text, "ABC");
        assert_eq!(cues[1].start, 3_000_000);
        assert_eq!(cues[1].end, Some(5_000_000));
    }
}
