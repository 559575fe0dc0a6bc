//! Tween and coordinator micro-benchmarks.
#![allow(missing_docs)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use portico::animation::{Tween, TweenRunner};
use portico::coordinator::Presentation;
use portico::options::Options;
use portico::session::{Scenario, Session};
use portico::util::easing::EasingFunction;

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::BounceOut;
    let _ = c.bench_function("bounce_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.7))));
    });
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    let _ = c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn runner_advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner_advance");

    for count in [1_usize, 10, 100] {
        let _ = group.bench_function(format!("{count}_tweens"), |b| {
            b.iter_with_setup(
                || {
                    let mut runner: TweenRunner<()> = TweenRunner::new();
                    for _ in 0..count {
                        let _ = runner.add(Tween::new(
                            0.0,
                            1.0,
                            Duration::from_secs(2),
                            EasingFunction::BounceOut,
                        ));
                    }
                    runner
                },
                |mut runner| {
                    black_box(runner.advance(Duration::from_millis(16)))
                },
            );
        });
    }
    group.finish();
}

fn reference_cycle_benchmark(c: &mut Criterion) {
    let _ = c.bench_function("reference_scenario_60fps", |b| {
        b.iter(|| {
            let mut session =
                Session::new(Options::default(), Presentation::default());
            black_box(Scenario::reference().replay(&mut session))
        });
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    runner_advance_benchmark,
    reference_cycle_benchmark
);
criterion_main!(benches);
