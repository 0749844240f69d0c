//! Fusion benchmark: RRF over synthetic multi-query ranked lists.
//!
//! Usage: cargo bench --bench fusion

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resumerag_core::{config, rrf_fusion};

/// Builds `lists` ranked lists of `len` entries with partially overlapping ids.
fn synthetic_lists(lists: usize, len: usize) -> Vec<Vec<(String, f32)>> {
    (0..lists)
        .map(|l| {
            (0..len)
                .map(|r| {
                    // Every other entry is shared across all lists.
                    let id = if r % 2 == 0 {
                        format!("shared-{r}")
                    } else {
                        format!("list{l}-{r}")
                    };
                    (id, r as f32 / len as f32)
                })
                .collect()
        })
        .collect()
}

fn bench_rrf(c: &mut Criterion) {
    let small = synthetic_lists(4, 5);
    c.bench_function("rrf_4_lists_of_5", |b| {
        b.iter(|| rrf_fusion(black_box(&small), config::RRF_K));
    });

    let large = synthetic_lists(8, 1_000);
    c.bench_function("rrf_8_lists_of_1000", |b| {
        b.iter(|| rrf_fusion(black_box(&large), config::RRF_K));
    });
}

criterion_group!(benches, bench_rrf);
criterion_main!(benches);
