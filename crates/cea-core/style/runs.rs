//! Cue text assembly and single-style vs. multi-run collapse
//!
//! Segments are ordered top to bottom by row (stable within a row), adjacent
//! segments sharing row and style are joined, and rows are separated by a
//! newline. If every segment carries the same style the cue gets that one
//! style; otherwise it keeps a run per segment, with each row-ending newline
//! attached to the run before it. Whitespace at the outer edges of the
//! text is dropped from the runs as well, so run texts always concatenate
//! to the full text.

use super::{
    attributes::{StyleAttributes, StyleRun},
    resolver::StyledSegment,
};
use crate::layout::PositionLine;

/// Full text of a cue together with its style representation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssembledText {
    /// Concatenated text with newlines between rows
    pub text: String,
    /// Uniform style, when every run shares one non-empty style
    pub style: Option<StyleAttributes>,
    /// Ordered runs, when styles differ
    pub runs: Option<Vec<StyleRun>>,
    /// One entry per known row, top to bottom
    pub lines: Vec<PositionLine>,
}

impl AssembledText {
    /// Assemble segments collected in token order
    #[must_use]
    pub fn from_segments(segments: &[StyledSegment]) -> Self {
        let mut ordered = order_segments(segments);
        trim_edges(&mut ordered);
        if ordered.is_empty() {
            return Self::default();
        }

        let mut run_texts: Vec<String> = Vec::with_capacity(ordered.len());
        for (idx, segment) in ordered.iter().enumerate() {
            let mut text = segment.text.clone();
            if ordered
                .get(idx + 1)
                .is_some_and(|next| next.row != segment.row)
            {
                text.push('\n');
            }
            run_texts.push(text);
        }
        let text: String = run_texts.concat();

        let uniform = ordered.windows(2).all(|w| w[0].style == w[1].style);
        let (style, runs) = if uniform {
            (ordered[0].style.snapshot(), None)
        } else {
            let runs = ordered
                .iter()
                .zip(run_texts)
                .map(|(segment, text)| StyleRun {
                    text,
                    style: segment.style.snapshot(),
                })
                .collect();
            (None, Some(runs))
        };

        Self {
            text,
            style,
            runs,
            lines: position_lines(&ordered),
        }
    }

    /// Check if there is no text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Stable-sort by row and join neighbours that share row and style
fn order_segments(segments: &[StyledSegment]) -> Vec<StyledSegment> {
    let mut sorted: Vec<&StyledSegment> = segments.iter().filter(|s| !s.text.is_empty()).collect();
    sorted.sort_by_key(|segment| segment.row);

    let mut ordered: Vec<StyledSegment> = Vec::with_capacity(sorted.len());
    for segment in sorted {
        match ordered.last_mut() {
            Some(last) if last.row == segment.row && last.style == segment.style => {
                last.text.push_str(&segment.text);
            }
            _ => ordered.push(segment.clone()),
        }
    }
    ordered
}

/// Strip leading whitespace from the first segments and trailing whitespace
/// from the last ones, dropping segments left empty
fn trim_edges(ordered: &mut Vec<StyledSegment>) {
    while let Some(first) = ordered.first_mut() {
        let skip = first.text.len() - first.text.trim_start().len();
        if skip < first.text.len() {
            first.text.drain(..skip);
            break;
        }
        ordered.remove(0);
    }
    while let Some(last) = ordered.last_mut() {
        let keep = last.text.trim_end().len();
        if keep > 0 {
            last.text.truncate(keep);
            break;
        }
        ordered.pop();
    }
}

/// One line per known row, text concatenated in order
fn position_lines(ordered: &[StyledSegment]) -> Vec<PositionLine> {
    let mut lines: Vec<PositionLine> = Vec::new();
    for segment in ordered {
        let Some(row) = segment.row else {
            continue;
        };
        match lines.last_mut() {
            Some(line) if line.row == row => line.text.push_str(&segment.text),
            _ => lines.push(PositionLine {
                row,
                column: segment.column.unwrap_or(0),
                text: segment.text.clone(),
            }),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::values::NamedColor;

    fn seg(text: &str, row: Option<u32>, style: StyleAttributes) -> StyledSegment {
        StyledSegment {
            text: text.to_string(),
            style,
            row,
            column: Some(0),
        }
    }

    fn red() -> StyleAttributes {
        StyleAttributes {
            color: Some(NamedColor::Red.into()),
            ..StyleAttributes::default()
        }
    }

    #[test]
    fn uniform_style_collapses() {
        let assembled = AssembledText::from_segments(&[
            seg("Top", Some(14), red()),
            seg("Bottom", Some(15), red()),
        ]);
        assert_eq!(assembled.text, "Top\nBottom");
        assert_eq!(assembled.style, Some(red()));
        assert_eq!(assembled.runs, None);
    }

    #[test]
    fn unstyled_text_has_neither() {
        let assembled =
            AssembledText::from_segments(&[seg("Plain", None, StyleAttributes::default())]);
        assert_eq!(assembled.text, "Plain");
        assert_eq!(assembled.style, None);
        assert_eq!(assembled.runs, None);
        assert!(assembled.lines.is_empty());
    }

    #[test]
    fn mixed_styles_keep_runs_with_newline_on_prior_run() {
        let assembled = AssembledText::from_segments(&[
            seg("Second", Some(1), StyleAttributes::default()),
            seg("First", Some(0), red()),
        ]);
        assert_eq!(assembled.text, "First\nSecond");
        assert_eq!(assembled.style, None);
        let runs = assembled.runs.unwrap();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "First\n");
        assert_eq!(runs[0].style, Some(red()));
        assert_eq!(runs[1].text, "Second");
        assert_eq!(runs[1].style, None);
    }

    #[test]
    fn rows_reassemble_after_sort() {
        let assembled = AssembledText::from_segments(&[
            seg("a", Some(1), red()),
            seg("b", Some(0), red()),
            seg("c", Some(1), red()),
        ]);
        assert_eq!(assembled.text, "b\nac");
        assert_eq!(assembled.lines.len(), 2);
        assert_eq!(assembled.lines[1].text, "ac");
    }

    #[test]
    fn outer_whitespace_is_trimmed_from_runs() {
        let blue = StyleAttributes {
            color: Some(NamedColor::Blue.into()),
            ..StyleAttributes::default()
        };
        let assembled = AssembledText::from_segments(&[
            seg(" Hello ", Some(14), red()),
            seg("world ", Some(14), blue),
        ]);
        assert_eq!(assembled.text, "Hello world");
        let runs = assembled.runs.unwrap();
        let joined: String = runs.iter().map(|run| run.text.as_str()).collect();
        assert_eq!(joined, assembled.text);
    }

    #[test]
    fn whitespace_only_edge_runs_are_dropped() {
        let assembled = AssembledText::from_segments(&[
            seg("  ", Some(14), StyleAttributes::default()),
            seg("Hello", Some(14), red()),
            seg(" ", Some(15), StyleAttributes::default()),
        ]);
        assert_eq!(assembled.text, "Hello");
        assert_eq!(assembled.style, Some(red()));
        assert_eq!(assembled.runs, None);
    }

    #[test]
    fn empty_input() {
        let assembled = AssembledText::from_segments(&[]);
        assert!(assembled.is_empty());
        assert_eq!(assembled, AssembledText::default());
    }
}
