use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tween_core::{Curve, ManualClock, Tween};

fn bench_curves(c: &mut Criterion) {
    c.bench_function("all_curves_101_samples", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for curve in Curve::ALL {
                for i in 0..=100 {
                    acc += curve.apply(black_box(i as f64 / 100.0));
                }
            }
            acc
        })
    });
}

fn bench_tween_value(c: &mut Criterion) {
    let clock = ManualClock::new();
    let tween = Tween::with_clock([0.0_f32; 4], [1.0; 4], 2.0, Curve::EaseOutElastic, &clock);
    clock.advance(0.75);
    c.bench_function("tween_value_vec4", |b| b.iter(|| black_box(tween.value())));
}

criterion_group!(benches, bench_curves, bench_tween_value);
criterion_main!(benches);
