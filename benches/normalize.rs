//! Stream pipeline benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use termrelay::{StreamNormalizer, Tracker};

fn bench_normalize_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let plain_text = "Hello, World! ".repeat(1000).into_bytes();
    group.throughput(Throughput::Bytes(plain_text.len() as u64));

    group.bench_function("plain_text", |b| {
        b.iter(|| {
            let mut normalizer = StreamNormalizer::new();
            black_box(normalizer.feed(black_box(&plain_text)))
        })
    });

    group.finish();
}

fn bench_normalize_c1_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    let mut c1_heavy = Vec::new();
    for _ in 0..1000 {
        c1_heavy.push(0x9B);
        c1_heavy.extend_from_slice(b"31mred");
        c1_heavy.push(0x9B);
        c1_heavy.extend_from_slice(b"0m");
    }
    group.throughput(Throughput::Bytes(c1_heavy.len() as u64));

    group.bench_function("c1_controls", |b| {
        b.iter(|| {
            let mut normalizer = StreamNormalizer::new();
            black_box(normalizer.feed(black_box(&c1_heavy)))
        })
    });

    group.finish();
}

fn bench_tracker_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker");

    let styled = "\x1b[1;31mRed\x1b[0m plain \x1b[4;44munderlined\x1b[0m\r\n"
        .repeat(200)
        .into_bytes();
    group.throughput(Throughput::Bytes(styled.len() as u64));

    group.bench_function("styled_output", |b| {
        b.iter(|| {
            let mut tracker = Tracker::new(80, 24);
            tracker.feed(black_box(&styled)).unwrap();
            black_box(tracker.snapshot())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize_plain_text,
    bench_normalize_c1_heavy,
    bench_tracker_feed
);
criterion_main!(benches);
