//! Benchmarks comparing the three matching engines.
//!
//! The BWT engine pays an index-construction cost up front and answers
//! queries from the tables; the scanners pay per query. Both build-included
//! and query-only timings are reported so the crossover is visible.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wildex::{build_index, scan, search, Traversal};

/// Deterministic pseudo-random text over a small alphabet.
fn make_text(len: usize) -> Vec<u8> {
    let alphabet = [b'a', b'b', b'c', b'd'];
    let mut state = 0x2545f4914f6cdd1du64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            alphabet[(state % alphabet.len() as u64) as usize]
        })
        .collect()
}

const TEXT_SIZES: &[usize] = &[1_000, 10_000];
const PATTERNS: &[&[u8]] = &[b"abcd", b"ab#d", b"##"];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");
    for &size in TEXT_SIZES {
        let text = make_text(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| build_index(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    for &size in TEXT_SIZES {
        let text = make_text(size);
        let index = build_index(&text).unwrap();
        for &pattern in PATTERNS {
            let label = format!("{}/{}", size, String::from_utf8_lossy(pattern));

            group.bench_with_input(BenchmarkId::new("bwt", &label), &pattern, |b, &pattern| {
                b.iter(|| search(black_box(&index), black_box(pattern)).unwrap());
            });
            group.bench_with_input(BenchmarkId::new("z", &label), &pattern, |b, &pattern| {
                b.iter(|| scan::z::find_matches(black_box(&text), black_box(pattern)));
            });
            if !pattern.contains(&b'#') {
                group.bench_with_input(
                    BenchmarkId::new("reverse_bm", &label),
                    &pattern,
                    |b, &pattern| {
                        b.iter(|| {
                            scan::reverse_bm::find_matches(black_box(&text), black_box(pattern))
                        });
                    },
                );
            }
        }
    }
    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let text = make_text(10_000);
    let index = build_index(&text).unwrap();
    let pattern: &[u8] = b"####";
    for (name, traversal) in [
        ("depth_first", Traversal::DepthFirst),
        ("breadth_first", Traversal::BreadthFirst),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                wildex::search_with(black_box(&index), black_box(pattern), traversal).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_traversal);
criterion_main!(benches);
