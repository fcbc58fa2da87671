//! Benchmarks for caption decoding
//!
//! Generates synthetic `.608` and `.708` decode text programmatically so no
//! sample files are needed. Covers tokenizing a single line and decoding
//! whole documents with both state machines.

use cea_core::{
    parse_608, parse_708,
    timecode::timecode_to_microseconds,
    tokenizer::{tokenize, Standard},
    FrameRate, TimingConfig,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;

/// Format a frame count as a 30 fps timecode
fn timecode(frame: usize) -> String {
    let (seconds, frames) = (frame / 30, frame % 30);
    format!(
        "{:02}:{:02}:{:02}:{frames:02}",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}

/// Pop-on captions with a style change and two rows each
fn generate_608(captions: usize) -> String {
    let mut text = String::from("Decoded Line 21 / CEA-608 for Asset: bench - Channel: 1\n");
    for idx in 0..captions {
        let base = idx * 90;
        writeln!(
            text,
            "{} - {{RCL}} {{R14:C4}} {{FG-Yellow}} \"Caption number {idx}\" {{R15:C4}} {{FG-White}} \"second row\"",
            timecode(base)
        )
        .unwrap();
        writeln!(text, "{} - {{EOC}}", timecode(base + 30)).unwrap();
        writeln!(text, "{} - {{EDM}}", timecode(base + 80)).unwrap();
    }
    text
}

/// Window captions mixing quoted text and extended characters
fn generate_708(captions: usize) -> String {
    let mut text = String::from("Service 1\n");
    for idx in 0..captions {
        let base = idx * 90;
        writeln!(
            text,
            "{} - {{DLW:11111111}} {{DF0:608-PopUp:R2-C32:Anchor-LC-V90-H50:Pen-MonoSerif:Pr-0:VIS}} \
             {{SPA:Pen-[Size:Standard,Offset:Normal]:TextTag-Dialog:FontTag-Default:EdgeType-None}} \
             {{SPC:FG-Solid-R3G3B3:BG-Solid-R0G0B0:Edg-R0G0B0}} {{SPL:R0-C4}} \"Caption {idx}\" \
             {{SPL:R1-C4}} {{P16:0x06A9}} {{P16:0x0647}} \" - \" {{P16:0x4E16}}",
            timecode(base)
        )
        .unwrap();
        writeln!(text, "{} - {{DSW:00000001}}", timecode(base + 2)).unwrap();
        writeln!(text, "{} - {{CLW:00000001}}", timecode(base + 80)).unwrap();
    }
    text
}

fn bench_timecode(c: &mut Criterion) {
    let ntsc = FrameRate::NTSC;
    c.bench_function("timecode_drop_frame", |b| {
        b.iter(|| timecode_to_microseconds(black_box("01:23:45;12"), ntsc, true));
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let line = "{DF0:608-PopUp:R2-C32:Anchor-LC-V90-H50:VIS} {SPL:R0-C4} \"Hello\" \
                {P16:0x06A9} {P16:0x0647} \" \" {P16:0x4E16}";
    c.bench_function("tokenize_708_line", |b| {
        b.iter(|| tokenize(black_box(line), Standard::Cea708));
    });
}

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");
    let timing = TimingConfig::default();

    for &count in &[10, 100, 1000] {
        let text_608 = generate_608(count);
        group.throughput(Throughput::Bytes(text_608.len() as u64));
        group.bench_with_input(BenchmarkId::new("cea608", count), &text_608, |b, text| {
            b.iter(|| parse_608(black_box(text), timing));
        });

        let text_708 = generate_708(count);
        group.throughput(Throughput::Bytes(text_708.len() as u64));
        group.bench_with_input(BenchmarkId::new("cea708", count), &text_708, |b, text| {
            b.iter(|| parse_708(black_box(text), timing));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_timecode, bench_tokenize, bench_decoding);
criterion_main!(benches);
