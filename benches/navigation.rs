// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for slide navigation and catalog lookups.
//!
//! Measures the performance of:
//! - Cursor transitions (advance/retreat/wheel)
//! - Counter label formatting
//! - Slug resolution through the catalog

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::catalog;
use iced_folio::navigation::SlideNavigator;
use std::hint::black_box;

/// Benchmark the pure cursor transitions.
fn bench_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let gallery_len = catalog::default_project().images.len();

    group.bench_function("advance", |b| {
        let mut navigator = SlideNavigator::new(gallery_len);
        b.iter(|| {
            navigator.advance();
            black_box(navigator.current_index());
        });
    });

    group.bench_function("retreat", |b| {
        let mut navigator = SlideNavigator::new(gallery_len);
        b.iter(|| {
            navigator.retreat();
            black_box(navigator.current_index());
        });
    });

    group.bench_function("wheel", |b| {
        let mut navigator = SlideNavigator::new(gallery_len);
        b.iter(|| {
            navigator.on_wheel(black_box(1.0));
            black_box(navigator.current_index());
        });
    });

    group.bench_function("counter_label", |b| {
        let navigator = SlideNavigator::new(gallery_len);
        b.iter(|| black_box(navigator.counter_label()));
    });

    group.finish();
}

/// Benchmark slug lookups, including the fallback path.
fn bench_catalog_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");

    group.bench_function("find_known", |b| {
        b.iter(|| black_box(catalog::find(black_box("haus-m"))));
    });

    group.bench_function("find_fallback", |b| {
        b.iter(|| black_box(catalog::find(black_box("unknown-slug"))));
    });

    group.finish();
}

criterion_group!(benches, bench_transitions, bench_catalog_lookup);
criterion_main!(benches);
