//! Privacy benchmarks for the PII detection and redaction pipeline.
//!
//! These benches cover the hot paths: raw detection, the existence check,
//! redaction in each mode, and a configured detector with the
//! longest-at-start overlap policy.
//!
//! Run with: `cargo bench --bench privacy_bench -p piiguard-common`

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use piiguard_common::privacy::patterns::{
    contains_pii, detect, redact, OverlapPolicy, PiiDetectionConfig, PiiDetector, RedactionMode,
};

const BASE_LOG_LINE: &str = "\
    [2024-03-17T12:01:45Z] customer=John Doe email=john.doe@example.com \
    phone=+1-415-555-2671 ssn=123-45-6789 card=4111-1111-1111-1111 \
    ip=192.168.42.17 dob=04/12/1985 notes=\"Follow-up required\"\n";

const CLEAN_LOG_LINE: &str = "\
    [2024-03-17T12:01:45Z] worker=ingest status=ok batch=done \
    notes=\"nothing sensitive in this line at all\"\n";

type CorpusEntry = (&'static str, Arc<str>);

fn generate_detection_corpus() -> Vec<CorpusEntry> {
    vec![
        ("short_log", Arc::<str>::from(BASE_LOG_LINE)),
        ("medium_log", Arc::<str>::from(BASE_LOG_LINE.repeat(8))),
        ("long_log", Arc::<str>::from(BASE_LOG_LINE.repeat(32))),
        ("clean_log", Arc::<str>::from(CLEAN_LOG_LINE.repeat(32))),
    ]
}

fn bench_pattern_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("privacy_pattern_detection");
    group.sample_size(20);

    for (label, text) in &generate_detection_corpus() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("detect", label), text, |b, text| {
            b.iter(|| black_box(detect(black_box(text.as_ref()))));
        });
        group.bench_with_input(BenchmarkId::new("contains_pii", label), text, |b, text| {
            b.iter(|| black_box(contains_pii(black_box(text.as_ref()))));
        });
    }

    group.finish();
}

fn bench_pattern_redaction(c: &mut Criterion) {
    let mut group = c.benchmark_group("privacy_pattern_redaction");
    group.sample_size(20);

    let modes = [RedactionMode::Replace, RedactionMode::Mask, RedactionMode::Fake];

    for (label, text) in &generate_detection_corpus() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        for mode in modes {
            group.bench_with_input(BenchmarkId::new(mode.as_str(), label), text, |b, text| {
                b.iter(|| black_box(redact(black_box(text.as_ref()), mode)));
            });
        }
    }

    group.finish();
}

fn bench_configured_detector(c: &mut Criterion) {
    let mut group = c.benchmark_group("privacy_configured_detector");
    group.sample_size(20);

    let config = PiiDetectionConfig {
        overlap_policy: OverlapPolicy::LongestAtStart,
        max_input_bytes: Some(1 << 20),
        ..Default::default()
    };
    let detector = PiiDetector::new(config).expect("benchmark config should be valid");

    for (label, text) in &generate_detection_corpus() {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("redact", label), text, |b, text| {
            b.iter(|| {
                let result = detector.redact(black_box(text.as_ref())).expect("redaction failed");
                black_box(result);
            });
        });
    }

    group.finish();
}

criterion_group!(
    privacy_benches,
    bench_pattern_detection,
    bench_pattern_redaction,
    bench_configured_detector
);
criterion_main!(privacy_benches);
