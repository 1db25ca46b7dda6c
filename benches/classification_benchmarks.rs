#![allow(missing_docs)]
//! Classification benchmarks.
//!
//! Measures single-record classification for a few record shapes and
//! sequential vs. rayon batch classification over a mixed batch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use marcfacet::{Field, FormatClassifier, HoldingsItem, Record};

fn leader(value: &str) -> marcfacet::Leader {
    value.parse().expect("benchmark leader parses")
}

fn field(tag: &str, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag.to_string(), ' ', ' ');
    for &(code, value) in subfields {
        field.add_subfield_str(code, value);
    }
    field
}

fn video_record() -> Record {
    Record::builder(leader("04711cgm a2200733Ia 4500"))
        .control_field_str("008", "030807s2002    cau120            vleng d")
        .control_field_str("007", "vd cvaizq")
        .field(field("538", &[('a', "DVD; region 1")]))
        .build()
}

fn music_record() -> Record {
    Record::builder(leader("02229cjm a2200409Ia 4500"))
        .control_field_str("007", "sd fungnnmmneu")
        .field(field(
            "300",
            &[('a', "1 sound disc :"), ('b', "digital ;"), ('c', "4 3/4 in.")],
        ))
        .build()
}

fn serial_record() -> Record {
    Record::builder(leader("02015cai a2200385 a 4500"))
        .control_field_str("008", "130110c20139999enk|| woo     0    2eng  ")
        .control_field_str("006", "suu wss|||||0   |2")
        .field(field("956", &[('u', " http://library.stanford.edu/sfx?stuff")]))
        .build()
}

fn held(call_number: &str) -> HoldingsItem {
    HoldingsItem::builder("GREEN").call_number(call_number).build()
}

fn mixed_batch(size: usize) -> Vec<(Record, Vec<HoldingsItem>)> {
    (0..size)
        .map(|i| match i % 3 {
            0 => (video_record(), vec![held("ZDVD 11932")]),
            1 => (music_record(), vec![held("MCD 1234")]),
            _ => (serial_record(), Vec::new()),
        })
        .collect()
}

/// Benchmark classification of single records.
fn benchmark_single_record(c: &mut Criterion) {
    let classifier = FormatClassifier::with_defaults().expect("default classifier");
    let video = video_record();
    let music = music_record();
    let serial = serial_record();
    let items = vec![held("ZDVD 11932")];

    c.bench_function("classify_video_record", |b| {
        b.iter(|| classifier.classify(black_box(&video), black_box(&items)));
    });
    c.bench_function("classify_music_record", |b| {
        b.iter(|| classifier.classify(black_box(&music), black_box(&items)));
    });
    c.bench_function("classify_serial_record", |b| {
        b.iter(|| classifier.classify(black_box(&serial), &[]));
    });
}

/// Benchmark sequential classification of 1k records.
fn benchmark_sequential_1k(c: &mut Criterion) {
    let classifier = FormatClassifier::with_defaults().expect("default classifier");
    let batch = mixed_batch(1_000);

    c.bench_function("sequential_1k_records", |b| {
        b.iter(|| {
            batch
                .iter()
                .map(|(record, items)| classifier.classify(black_box(record), items))
                .filter(|result| !result.is_empty())
                .count()
        });
    });
}

/// Benchmark rayon batch classification of 1k records.
fn benchmark_parallel_1k(c: &mut Criterion) {
    let classifier = FormatClassifier::with_defaults().expect("default classifier");
    let batch = mixed_batch(1_000);

    c.bench_function("parallel_1k_records", |b| {
        b.iter(|| classifier.classify_batch(black_box(&batch)).len());
    });
}

criterion_group!(
    classification_benches,
    benchmark_single_record,
    benchmark_sequential_1k,
    benchmark_parallel_1k,
);
criterion_main!(classification_benches);
