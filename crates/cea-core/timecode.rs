//! Frame-based timecode conversion with NTSC drop-frame support
//!
//! Decoded caption streams stamp every line with an `HH:MM:SS:FF` (or
//! `HH:MM:SS;FF`) timecode. Converting it to elapsed time needs the stream's
//! frame rate and, for NTSC material, whether the timecode drops frame numbers.
//!
//! # Example
//!
//! ```rust
//! use cea_core::timecode::{timecode_to_microseconds, FrameRate};
//!
//! let fps = FrameRate::new(25.0)?;
//! assert_eq!(timecode_to_microseconds("00:00:01:00", fps, false), 1_000_000);
//! assert_eq!(timecode_to_microseconds("garbage", fps, false), 0);
//! # Ok::<(), cea_core::CoreError>(())
//! ```

use crate::{
    utils::{parse_digits, CoreError},
    Result,
};
use core::fmt;

/// Microseconds per second
const MICROS_PER_SECOND: u128 = 1_000_000;

/// Frames per second of a caption stream
///
/// Always positive and finite. The only way to build one is [`FrameRate::new`],
/// which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct FrameRate(f64);

impl FrameRate {
    /// 24 fps, the rate assumed when no metadata is available
    pub const FILM: Self = Self(24.0);

    /// 30000/1001 fps (29.97)
    pub const NTSC: Self = Self(30_000.0 / 1_001.0);

    /// 60000/1001 fps (59.94)
    pub const NTSC_DOUBLE: Self = Self(60_000.0 / 1_001.0);

    /// Validate and wrap a frame rate
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFrameRate`] for zero, negative, NaN or
    /// infinite values.
    pub fn new(fps: f64) -> Result<Self> {
        if fps.is_finite() && fps > 0.0 {
            Ok(Self(fps))
        } else {
            Err(CoreError::InvalidFrameRate(fps))
        }
    }

    /// Raw frames-per-second value
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Map a nominal rate reported by decoder metadata to its NTSC value
    ///
    /// Nominal 24, 30, 48, 60 and 120 fps become their 1000/1001 counterparts;
    /// every other rate (PAL 25/50 included) is returned unchanged.
    #[must_use]
    pub fn ntsc_from_nominal(self) -> Self {
        const NOMINAL: [f64; 5] = [24.0, 30.0, 48.0, 60.0, 120.0];
        if NOMINAL.iter().any(|&n| (self.0 - n).abs() < f64::EPSILON) {
            Self(self.0 * 1_000.0 / 1_001.0)
        } else {
            self
        }
    }

    /// NTSC family this rate falls in, if any
    fn ntsc_band(self) -> Option<NtscBand> {
        if self.0 > 29.9 && self.0 < 30.1 {
            Some(NtscBand::Ntsc30)
        } else if self.0 > 59.9 && self.0 < 60.1 {
            Some(NtscBand::Ntsc60)
        } else {
            None
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FILM
    }
}

impl TryFrom<f64> for FrameRate {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<FrameRate> for f64 {
    fn from(rate: FrameRate) -> Self {
        rate.0
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.0)
    }
}

/// NTSC frame rate families where drop-frame numbering applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NtscBand {
    /// 29.97 fps
    Ntsc30,
    /// 59.94 fps
    Ntsc60,
}

impl NtscBand {
    /// Frame numbers skipped at the start of each non-tenth minute
    const fn dropped_per_minute(self) -> u128 {
        match self {
            Self::Ntsc30 => 2,
            Self::Ntsc60 => 4,
        }
    }

    /// Rounded frame rate used for frame numbering
    const fn nominal(self) -> u128 {
        match self {
            Self::Ntsc30 => 30,
            Self::Ntsc60 => 60,
        }
    }

    /// Numerator of the exact rate `n/1001`
    const fn exact_numerator(self) -> u128 {
        match self {
            Self::Ntsc30 => 30_000,
            Self::Ntsc60 => 60_000,
        }
    }
}

/// Stream timing configuration consumed by both decoders
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingConfig {
    /// Stream frame rate
    pub frame_rate: FrameRate,
    /// Whether timecodes use drop-frame numbering
    pub drop_frame: bool,
}

impl TimingConfig {
    /// Build a configuration from a raw frame rate
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidFrameRate`] if `fps` is not a positive,
    /// finite number.
    pub fn new(fps: f64, drop_frame: bool) -> Result<Self> {
        Ok(Self {
            frame_rate: FrameRate::new(fps)?,
            drop_frame,
        })
    }

    /// Convert a timecode using this configuration
    #[must_use]
    pub fn timecode_to_microseconds(&self, timecode: &str) -> u64 {
        timecode_to_microseconds(timecode, self.frame_rate, self.drop_frame)
    }

    /// Convert a timecode, rejecting malformed input instead of mapping it to 0
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTime`] unless the timecode has exactly four
    /// unsigned integer components.
    pub fn try_timecode_to_microseconds(&self, timecode: &str) -> Result<u64> {
        if split_timecode(timecode).is_none() {
            return Err(CoreError::InvalidTime(timecode.to_string()));
        }
        Ok(self.timecode_to_microseconds(timecode))
    }
}

/// Split a timecode into hours, minutes, seconds and frames
///
/// Either `:` or `;` may separate any component. Returns `None` unless there
/// are exactly four unsigned integer components.
#[must_use]
pub fn split_timecode(timecode: &str) -> Option<[u64; 4]> {
    let mut parts = timecode.trim().split([':', ';']);
    let mut out = [0u64; 4];
    for slot in &mut out {
        *slot = parse_digits(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

/// Convert a frame-based timecode to elapsed microseconds
///
/// Malformed timecodes convert to `0`. The drop-frame flag only has effect
/// for rates in the 29.97 and 59.94 families; for those, frame numbers
/// skipped at the start of every minute not divisible by ten are subtracted
/// and the remaining frame count is converted at the exact `n/1001` rate.
/// Results are truncated toward zero.
#[must_use]
pub fn timecode_to_microseconds(timecode: &str, frame_rate: FrameRate, drop_frame: bool) -> u64 {
    let Some([hours, minutes, seconds, frames]) = split_timecode(timecode) else {
        return 0;
    };
    let (hours, minutes, seconds, frames) = (
        u128::from(hours),
        u128::from(minutes),
        u128::from(seconds),
        u128::from(frames),
    );

    let micros = match frame_rate.ntsc_band() {
        Some(band) if drop_frame => {
            let total_minutes = hours * 60 + minutes;
            let dropped = band.dropped_per_minute() * (total_minutes - total_minutes / 10);
            let nominal = band.nominal();
            let total_frames = (hours * 3600 * nominal
                + minutes * 60 * nominal
                + seconds * nominal
                + frames)
                .saturating_sub(dropped);
            total_frames * 1_001 * MICROS_PER_SECOND / band.exact_numerator()
        }
        _ => {
            let whole_seconds = hours * 3600 + minutes * 60 + seconds;
            let fraction = (frames as f64) * 1_000_000.0 / frame_rate.get();
            whole_seconds * MICROS_PER_SECOND + fraction as u128
        }
    };

    u64::try_from(micros).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fps(value: f64) -> FrameRate {
        FrameRate::new(value).unwrap()
    }

    #[test]
    fn frame_rate_rejects_invalid_values() {
        for bad in [0.0, -24.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                FrameRate::new(bad),
                Err(CoreError::InvalidFrameRate(_))
            ));
        }
        assert!(FrameRate::new(23.976).is_ok());
    }

    #[test]
    fn default_config_is_film_non_drop() {
        let config = TimingConfig::default();
        assert!((config.frame_rate.get() - 24.0).abs() < f64::EPSILON);
        assert!(!config.drop_frame);
    }

    #[test]
    fn split_accepts_both_separators() {
        assert_eq!(split_timecode("01:02:03;04"), Some([1, 2, 3, 4]));
        assert_eq!(split_timecode("01;02;03;04"), Some([1, 2, 3, 4]));
        assert_eq!(split_timecode("01:02:03"), None);
        assert_eq!(split_timecode("01:02:03:04:05"), None);
        assert_eq!(split_timecode("aa:02:03:04"), None);
        assert_eq!(split_timecode(""), None);
    }

    #[test]
    fn non_drop_conversion() {
        assert_eq!(timecode_to_microseconds("00:00:01:00", fps(24.0), false), 1_000_000);
        assert_eq!(timecode_to_microseconds("00:00:00:12", fps(24.0), false), 500_000);
        assert_eq!(
            timecode_to_microseconds("01:00:00:00", fps(25.0), false),
            3_600_000_000
        );
    }

    #[test]
    fn drop_frame_one_minute() {
        let micros = timecode_to_microseconds("00:01:00;02", FrameRate::NTSC, true);
        // 1800 frames at 30000/1001
        assert_eq!(micros, 60_060_000);

        let at_minute = timecode_to_microseconds("00:01:00:00", fps(29.97), true);
        assert!((59_340_600..=60_539_400).contains(&at_minute));
    }

    #[test]
    fn drop_frame_ten_minute_boundary() {
        let micros = timecode_to_microseconds("00:10:00:00", fps(29.97), true);
        // 17982 frames at 30000/1001
        assert_eq!(micros, 599_999_400);
        assert!((593_406_000..=605_394_000).contains(&micros));
    }

    #[test]
    fn drop_frame_sixty_band() {
        let micros = timecode_to_microseconds("00:01:00:04", FrameRate::NTSC_DOUBLE, true);
        // 3600 frames at 60000/1001
        assert_eq!(micros, 60_060_000);
    }

    #[test]
    fn drop_flag_ignored_outside_ntsc() {
        for rate in [24.0, 25.0, 50.0] {
            assert_eq!(
                timecode_to_microseconds("00:12:34:05", fps(rate), true),
                timecode_to_microseconds("00:12:34:05", fps(rate), false)
            );
        }
    }

    #[test]
    fn malformed_is_zero() {
        assert_eq!(timecode_to_microseconds("invalid", fps(24.0), false), 0);
        assert_eq!(timecode_to_microseconds("00:00:01", fps(24.0), false), 0);
        assert_eq!(timecode_to_microseconds("00:00:-1:00", fps(24.0), false), 0);
    }

    #[test]
    fn ntsc_from_nominal() {
        assert!((FrameRate::FILM.ntsc_from_nominal().get() - 23.976).abs() < 0.001);
        assert!((fps(30.0).ntsc_from_nominal().get() - 29.97).abs() < 0.001);
        assert!((fps(120.0).ntsc_from_nominal().get() - 119.88).abs() < 0.001);
        assert!((fps(25.0).ntsc_from_nominal().get() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn config_convenience() {
        let config = TimingConfig::new(30.0, false).unwrap();
        assert_eq!(config.timecode_to_microseconds("00:00:02:15"), 2_500_000);
        assert!(TimingConfig::new(-1.0, false).is_err());
    }

    #[test]
    fn strict_conversion() {
        let config = TimingConfig::default();
        assert_eq!(config.try_timecode_to_microseconds("00:00:01:12"), Ok(1_500_000));
        assert_eq!(
            config.try_timecode_to_microseconds("00:01"),
            Err(CoreError::InvalidTime("00:01".to_string()))
        );
    }
}
