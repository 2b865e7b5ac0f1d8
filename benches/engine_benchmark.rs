//! Policy engine benchmarks.
//!
//! Measures trace construction for:
//! - Each policy on the same reference string
//! - Growing frame counts (Optimal's lookahead cost)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pagesim::{PageId, Policy, PolicyEngine};

/// Deterministic pseudo-random references with some locality.
fn reference_string(len: usize, distinct: u32) -> Vec<PageId> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            // Every fourth request revisits a small hot set
            let id = if i % 4 == 0 {
                (state % 4) as u32
            } else {
                (state % distinct as u64) as u32
            };
            PageId::new(id)
        })
        .collect()
}

/// Benchmark each policy on a fixed workload
fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_policy");
    let refs = reference_string(2_000, 64);

    group.throughput(Throughput::Elements(refs.len() as u64));
    for policy in Policy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(policy), &policy, |b, &policy| {
            b.iter(|| {
                let trace = PolicyEngine::build(black_box(&refs), 16, policy).expect("build trace");
                black_box(trace.stats())
            });
        });
    }

    group.finish();
}

/// Benchmark frame count scaling
fn bench_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_capacity");
    let refs = reference_string(2_000, 256);

    for capacity in &[4usize, 16, 64, 128] {
        group.bench_with_input(BenchmarkId::new("optimal", capacity), capacity, |b, &cap| {
            b.iter(|| {
                let trace =
                    PolicyEngine::build(black_box(&refs), cap, Policy::Optimal).expect("build trace");
                black_box(trace.stats().fault_count)
            });
        });
        group.bench_with_input(BenchmarkId::new("lru", capacity), capacity, |b, &cap| {
            b.iter(|| {
                let trace =
                    PolicyEngine::build(black_box(&refs), cap, Policy::Lru).expect("build trace");
                black_box(trace.stats().fault_count)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_policies, bench_capacity);
criterion_main!(benches);
