// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_visibility::{ObserveOptions, RootMargin, VisibilityTracker, intersection_ratio};

const WIDTH: f64 = 1280.0;
const VIEWPORT_HEIGHT: f64 = 720.0;
const SECTION_HEIGHT: f64 = 400.0;

fn section_bounds(index: &usize) -> Option<Rect> {
    let y = *index as f64 * SECTION_HEIGHT;
    Some(Rect::new(0.0, y, WIDTH, y + SECTION_HEIGHT))
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/evaluate");

    // One evaluation per scroll event; most regions stay on the same side of
    // the threshold, so this is dominated by ratio computation, not events.
    for len in [16usize, 256, 4_096] {
        let mut tracker = VisibilityTracker::new();
        for i in 0..len {
            tracker.attach(i, ObserveOptions::default());
        }
        let page_height = len as f64 * SECTION_HEIGHT;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("scroll_sweep", len), &len, |b, _| {
            let mut y = 0.0;
            b.iter(|| {
                y = (y + 37.0) % page_height;
                let viewport = Rect::new(0.0, y, WIDTH, y + VIEWPORT_HEIGHT);
                black_box(tracker.evaluate(viewport, section_bounds));
            });
        });
    }

    group.finish();
}

fn bench_intersection_ratio(c: &mut Criterion) {
    let viewport = Rect::new(0.0, 0.0, WIDTH, VIEWPORT_HEIGHT);
    let region = Rect::new(0.0, 600.0, WIDTH, 1000.0);
    let margin = RootMargin::symmetric(40.0, 0.0);
    c.bench_function("visibility/intersection_ratio", |b| {
        b.iter(|| intersection_ratio(black_box(region), black_box(viewport), margin));
    });
}

criterion_group!(benches, bench_evaluate, bench_intersection_ratio);
criterion_main!(benches);
