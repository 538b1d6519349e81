//! Performance benchmarks for pipeline execution
//!
//! Run with: cargo bench --bench pipeline_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate test text of roughly the requested size
fn generate_text(size: usize) -> String {
    let base = "#fun #lol    Why  @Alex33 is so funny? :) Check here: https://some-url.com \n";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

/// Benchmark the full clean pipeline over different text sizes
fn bench_clean_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_text_sizes");

    let cleaner = scour::clean()
        .url()
        .hashtag()
        .nickname()
        .emoticons()
        .punctuation();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("execute", size), &text, |b, text| {
            b.iter(|| cleaner.execute(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark a snapshot function against repeated execute calls
fn bench_function_vs_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("function_vs_execute");

    let text = generate_text(10_240);
    let cleaner = scour::clean().url().hashtag().nickname();
    let func = cleaner.function();

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_with_input(BenchmarkId::new("execute", "10k"), &text, |b, text| {
        b.iter(|| cleaner.execute(black_box(text)));
    });
    group.bench_with_input(BenchmarkId::new("function", "10k"), &text, |b, text| {
        b.iter(|| func(black_box(text)));
    });

    group.finish();
}

/// Benchmark collect-mode extraction
fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");

    let text = generate_text(102_400);
    let collector = scour::collect().hashtag().nickname().url();

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_with_input(BenchmarkId::new("extract", "100k"), &text, |b, text| {
        b.iter(|| collector.execute(black_box(text)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_clean_text_sizes,
    bench_function_vs_execute,
    bench_collect
);
criterion_main!(benches);
