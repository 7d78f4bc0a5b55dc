// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use understory_smooth_scroll::{Easing, ScrollAnimation};

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_scroll/easing");

    // Bézier timing functions invert x(t) by bisection; compare against the
    // closed-form cubic used by default.
    let curves = [
        ("ease_in_out_cubic", Easing::EaseInOutCubic),
        ("css_ease_out", Easing::EASE_OUT),
        ("overshoot_bezier", Easing::cubic_bezier(0.34, 1.56, 0.64, 1.0)),
    ];
    for (name, easing) in curves {
        group.bench_with_input(BenchmarkId::new("apply", name), &easing, |b, easing| {
            let mut t = 0.0;
            b.iter(|| {
                t = (t + 0.013) % 1.0;
                easing.apply(black_box(t))
            });
        });
    }

    group.finish();
}

fn bench_animation_frames(c: &mut Criterion) {
    c.bench_function("smooth_scroll/sample_650ms_at_60hz", |b| {
        b.iter(|| {
            let mut anim = ScrollAnimation::new(500.0, 2928.0, 0.0, 650.0, Easing::default());
            let mut now = 0.0;
            let mut frame = anim.sample(now);
            while !frame.finished {
                now += 1000.0 / 60.0;
                frame = anim.sample(black_box(now));
            }
            frame.offset
        });
    });
}

criterion_group!(benches, bench_easing, bench_animation_frames);
criterion_main!(benches);
