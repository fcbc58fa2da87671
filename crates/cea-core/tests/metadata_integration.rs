//! Companion metadata feeding the decoders

use cea_core::{parse_608, parse_debug_log, CcdMetadata, CoreError, DebugLevel, ErrorCategory};
use pretty_assertions::assert_eq;

const CCD: &str = "\
Caption Inspector CCD
File Name=BigBuckBunny_256x144-24fps.mcc
Frame Rate=30
Drop Frame=True
Timecode Start=00:00:00;00
";

#[test]
fn test_ccd_timing_drives_drop_frame_decoding() {
    let _ = env_logger::builder().is_test(true).try_init();
    let timing = CcdMetadata::parse(CCD).into_timing_config().unwrap();
    assert!(timing.drop_frame);

    let decoded = "CC1\n\
                   00:09:59;29 - {RCL} {R14:C0} \"Ten minutes\"\n\
                   00:10:00;00 - {EOC}\n";
    let cues = parse_608(decoded, timing);
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].start, 599_999_400);
}

#[test]
fn test_missing_ccd_values_fall_back_to_film_rate() {
    let timing = CcdMetadata::parse("").into_timing_config().unwrap();
    let cues = parse_608("CC1\n00:00:01:12 - {RDC} \"x\"\n", timing);
    assert_eq!(cues[0].start, 1_500_000);
}

#[test]
fn test_invalid_ccd_rate_is_configuration_error() {
    let err = CcdMetadata::parse("Frame Rate=-30\nDrop Frame=False")
        .into_timing_config()
        .unwrap_err();
    assert_eq!(err, CoreError::InvalidFrameRate(-30.0));
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(err.suggestion().is_some());
}

#[test]
fn test_strict_ccd_rejects_malformed_rate() {
    let err = CcdMetadata::parse_strict("Frame Rate=thirty\nDrop Frame=True").unwrap_err();
    assert!(matches!(err, CoreError::InvalidNumeric(_)));
    assert_eq!(err.category(), ErrorCategory::Format);

    let timing = CcdMetadata::parse_strict("Frame Rate=25\nDrop Frame=False")
        .and_then(CcdMetadata::into_timing_config)
        .unwrap();
    let cues = parse_608("CC1\n00:00:01:05 - {RDC} \"x\"\n", timing);
    assert_eq!(cues[0].start, 1_200_000);
}

#[test]
fn test_debug_log_entries() {
    let log = "\
INFO DBG_GENERAL [main.c:194] - Version: v0.0
VERBOSE DBG_708_DEC [dtvcc_decode.c:120] - Service 1 packet
this line is not an entry
WARN DBG_708_DEC [dtvcc_decode.c:628] - Skipping Unknown G2 Char: 0x03
ASSERT DBG_GENERAL [buffer.c:77] - Buffer overrun
";
    let entries = parse_debug_log(log);
    let levels: Vec<DebugLevel> = entries.iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![
            DebugLevel::Info,
            DebugLevel::Verbose,
            DebugLevel::Warn,
            DebugLevel::Assert
        ]
    );
    assert_eq!(entries[2].source, "dtvcc_decode.c:628");
    for entry in &entries {
        entry.log();
    }
}
