//! Benchmarks comparing the pointer-linked trie with its flattened form.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexitrie::prelude::*;
use rayon::prelude::*;

/// Create a word list of the specified size with varied word lengths
fn create_words(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| {
            // Words of varying lengths (4-12 characters)
            let len = 4 + (i % 9);
            format!("word{:0width$}", i, width = len - 4)
        })
        .collect()
}

/// Benchmark: building the trie and flattening it
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100, 1000, 10000].iter() {
        let words = create_words(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| {
                let trie: Trie = Trie::from_terms(black_box(words));
                black_box(trie);
            });
        });

        let trie: Trie = Trie::from_terms(&words);
        group.bench_with_input(BenchmarkId::new("flatten", size), &trie, |b, trie| {
            b.iter(|| black_box(trie.flattened()));
        });
    }
    group.finish();
}

/// Benchmark: exact lookups on both engines
fn bench_find(c: &mut Criterion) {
    let words = create_words(10000);
    let trie: Trie = Trie::from_terms(&words);
    let flat = trie.flattened();
    let queries: Vec<&str> = words.iter().step_by(97).map(String::as_str).collect();

    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(queries.len() as u64));

    group.bench_function("trie", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(trie.find(black_box(query)));
            }
        });
    });

    group.bench_function("flat", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(flat.find(black_box(query)));
            }
        });
    });

    group.bench_function("flat_missing", |b| {
        b.iter(|| black_box(flat.find(black_box("wordzzzz"))));
    });

    group.finish();
}

/// Benchmark: prefix completion with different prefix lengths
fn bench_complete(c: &mut Criterion) {
    let words = create_words(10000);
    let trie: Trie = Trie::from_terms(&words);
    let flat = trie.flattened();

    let mut group = c.benchmark_group("complete");
    for prefix in ["word", "word1", "word12", "word123"].iter() {
        group.bench_with_input(BenchmarkId::new("trie", prefix), prefix, |b, prefix| {
            b.iter(|| black_box(trie.complete(black_box(prefix))));
        });
        group.bench_with_input(BenchmarkId::new("flat", prefix), prefix, |b, prefix| {
            b.iter(|| black_box(flat.complete(black_box(prefix))));
        });
    }
    group.finish();
}

/// Benchmark: concurrent reads of a shared flat trie
fn bench_parallel_find(c: &mut Criterion) {
    let words = create_words(10000);
    let flat = Trie::<u16>::from_terms(&words).flattened();

    let mut group = c.benchmark_group("parallel_find");
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| flat.find(w) == MatchKind::Exact)
                .count()
        });
    });

    group.bench_function("rayon", |b| {
        b.iter(|| {
            words
                .par_iter()
                .filter(|w| flat.find(w) == MatchKind::Exact)
                .count()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_find,
    bench_complete,
    bench_parallel_find
);
criterion_main!(benches);
