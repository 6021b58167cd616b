//! Performance benchmarks for TextAnalyzer
//!
//! Run with: cargo bench --bench analyze

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use textlens_engine::{EngineConfig, TextAnalyzer};

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "El servicio fue excelente y la comida increíble. The staff was helpful! ";
    let mut text = base.repeat(size / base.len() + 1);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

/// Uncached single-text analysis at different sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let analyzer = TextAnalyzer::new(EngineConfig::uncached()).unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size), &text, |b, text| {
            b.iter(|| {
                analyzer.reset_statistics();
                analyzer.analyze(black_box(text)).unwrap()
            });
        });
    }

    group.finish();
}

/// Cache hits against computed analyses
fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");
    let text = generate_text(10_240);

    let cached = TextAnalyzer::with_defaults().unwrap();
    cached.analyze(&text).unwrap();
    group.bench_function("hit", |b| b.iter(|| cached.analyze(black_box(&text)).unwrap()));

    let uncached = TextAnalyzer::new(EngineConfig::uncached()).unwrap();
    group.bench_function("miss", |b| {
        b.iter(|| {
            uncached.reset_statistics();
            uncached.analyze(black_box(&text)).unwrap()
        })
    });

    group.finish();
}

/// Parallel batches with different worker counts
fn bench_workers(c: &mut Criterion) {
    let mut group = c.benchmark_group("workers");
    let texts: Vec<String> = (0..64)
        .map(|i| format!("{} #{i}", generate_text(4096)))
        .collect();

    for workers in [1, 2, 4, 8] {
        let analyzer = TextAnalyzer::new(EngineConfig::uncached()).unwrap();
        group.bench_with_input(BenchmarkId::new("parallel", workers), &texts, |b, texts| {
            b.iter(|| {
                analyzer.reset_statistics();
                analyzer.parallel_analyze(black_box(texts), workers).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_cache, bench_workers);
criterion_main!(benches);
