//! `.ccd` stream description
//!
//! Only two keys matter for caption timing:
//!
//! ```text
//! Frame Rate=30
//! Drop Frame=True
//! ```
//!
//! Rates are reported as nominal values, so a drop-frame `30` means
//! 30000/1001 fps.

use crate::{
    timecode::{FrameRate, TimingConfig},
    CoreError, Result,
};
use log::debug;

const FRAME_RATE_KEY: &str = "Frame Rate=";
const DROP_FRAME_KEY: &str = "Drop Frame=";

/// Timing values found in a `.ccd` file
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CcdMetadata {
    /// Nominal frame rate as reported
    pub frame_rate: Option<f64>,
    /// Whether timecodes skip frame numbers
    pub drop_frame: Option<bool>,
}

impl CcdMetadata {
    /// Scan `.ccd` text for the frame rate and drop-frame keys
    ///
    /// Scanning stops once both are known. A frame rate that is not a number
    /// is ignored; a drop-frame value is true only for `true` in any case.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut meta = Self::default();
        for line in text.lines().map(str::trim) {
            if let Some(value) = line.strip_prefix(FRAME_RATE_KEY) {
                match value.trim().parse::<f64>() {
                    Ok(rate) => meta.frame_rate = Some(rate),
                    Err(err) => debug!("ignoring frame rate {value:?}: {err}"),
                }
            } else if let Some(value) = line.strip_prefix(DROP_FRAME_KEY) {
                meta.drop_frame = Some(value.trim().eq_ignore_ascii_case("true"));
            }
            if meta.is_complete() {
                break;
            }
        }
        meta
    }

    /// Scan `.ccd` text like [`parse`](Self::parse), rejecting bad values
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidNumeric`] if the frame rate is not a
    /// number, or [`CoreError::Metadata`] if the drop-frame value is neither
    /// `true` nor `false`.
    pub fn parse_strict(text: &str) -> Result<Self> {
        let mut meta = Self::default();
        for line in text.lines().map(str::trim) {
            if let Some(value) = line.strip_prefix(FRAME_RATE_KEY) {
                meta.frame_rate = Some(value.trim().parse::<f64>()?);
            } else if let Some(value) = line.strip_prefix(DROP_FRAME_KEY) {
                meta.drop_frame = Some(parse_flag(value.trim())?);
            }
            if meta.is_complete() {
                break;
            }
        }
        Ok(meta)
    }

    /// Check whether both keys were found
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.frame_rate.is_some() && self.drop_frame.is_some()
    }

    /// Build decoder timing from the metadata
    ///
    /// Missing values fall back to 24 fps and non-drop-frame. With drop-frame
    /// set, nominal NTSC rates are replaced by their 1000/1001 values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFrameRate`](crate::CoreError::InvalidFrameRate)
    /// if the reported rate is zero, negative or not finite.
    pub fn into_timing_config(self) -> Result<TimingConfig> {
        let drop_frame = self.drop_frame.unwrap_or(false);
        let mut frame_rate = match self.frame_rate {
            Some(rate) => FrameRate::new(rate)?,
            None => FrameRate::default(),
        };
        if drop_frame {
            frame_rate = frame_rate.ntsc_from_nominal();
        }
        debug!("timing from metadata: {frame_rate} fps, drop frame {drop_frame}");
        Ok(TimingConfig {
            frame_rate,
            drop_frame,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoreError::metadata(format!(
            "drop frame must be true or false, got {value:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "File Name=BigBuckBunny.mcc\n\
                          Frame Rate=30\n\
                          Drop Frame=True\n\
                          Frame Rate=25\n";

    #[test]
    fn parse_both_keys() {
        let meta = CcdMetadata::parse(SAMPLE);
        assert_eq!(meta.frame_rate, Some(30.0));
        assert_eq!(meta.drop_frame, Some(true));
        assert!(meta.is_complete());
    }

    #[test]
    fn drop_frame_adjusts_nominal_rate() {
        let config = CcdMetadata::parse(SAMPLE).into_timing_config().unwrap();
        assert!(config.drop_frame);
        assert!((config.frame_rate.get() - 29.97).abs() < 0.001);
    }

    #[test]
    fn non_drop_keeps_rate() {
        let config = CcdMetadata::parse("Frame Rate=30\nDrop Frame=False")
            .into_timing_config()
            .unwrap();
        assert!(!config.drop_frame);
        assert!((config.frame_rate.get() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_values_use_defaults() {
        let meta = CcdMetadata::parse("Frame Rate=abc\nSomething=else");
        assert_eq!(meta, CcdMetadata::default());
        assert_eq!(meta.into_timing_config().unwrap(), TimingConfig::default());
    }

    #[test]
    fn drop_frame_value_is_case_insensitive() {
        assert_eq!(CcdMetadata::parse("Drop Frame=TRUE").drop_frame, Some(true));
        assert_eq!(CcdMetadata::parse("Drop Frame=yes").drop_frame, Some(false));
    }

    #[test]
    fn invalid_rate_is_an_error() {
        let meta = CcdMetadata::parse("Frame Rate=0");
        assert_eq!(
            meta.into_timing_config(),
            Err(CoreError::InvalidFrameRate(0.0))
        );
    }

    #[test]
    fn strict_parse_accepts_well_formed_text() {
        assert_eq!(
            CcdMetadata::parse_strict(SAMPLE).unwrap(),
            CcdMetadata::parse(SAMPLE)
        );
        assert_eq!(
            CcdMetadata::parse_strict("Drop Frame=FALSE").unwrap().drop_frame,
            Some(false)
        );
    }

    #[test]
    fn strict_parse_rejects_bad_rate() {
        let err = CcdMetadata::parse_strict("Frame Rate=abc").unwrap_err();
        assert!(matches!(err, CoreError::InvalidNumeric(_)));
        assert!(err.to_string().contains("Float parse error"));
    }

    #[test]
    fn strict_parse_rejects_bad_flag() {
        let err = CcdMetadata::parse_strict("Frame Rate=30\nDrop Frame=yes").unwrap_err();
        assert!(matches!(err, CoreError::Metadata(_)));
    }
}
