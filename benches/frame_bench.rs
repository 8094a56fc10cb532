//! Frame rendering and easing benchmarks.

#![allow(missing_docs)]

use std::hint::black_box;

use bloch::animation::FrameState;
use bloch::engine::BlochEngine;
use bloch::gates::parse_gate_list;
use bloch::options::Options;
use bloch::renderer::FrameRenderer;
use bloch::util::easing::EasingFunction;
use criterion::{criterion_group, criterion_main, Criterion};
use glam::{DQuat, DVec3};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
    c.bench_function("cubic_hermite_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
    let sine = EasingFunction::Sine;
    c.bench_function("sine_easing", |b| {
        b.iter(|| black_box(sine.evaluate(black_box(0.5))));
    });
}

fn frame_render_benchmark(c: &mut Criterion) {
    let renderer = FrameRenderer::new(&Options::default());
    let state = FrameState {
        orientation: DQuat::from_axis_angle(
            DVec3::new(1.0, 0.0, 1.0).normalize(),
            1.0,
        ),
        extra_opacity: 1.0,
        axis: Some(DVec3::new(1.0, 0.0, 1.0).normalize()),
        ..FrameState::initial()
    };

    c.bench_function("single_frame_svg", |b| {
        b.iter(|| black_box(renderer.single_frame(black_box(&state)).to_svg()));
    });
}

fn sequence_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_single");
    let engine = BlochEngine::default();

    for gates in ["h", "h,z,h", "x,y,z,s,t,sqrt_x,sqrt_y,inv_t"] {
        let instructions = parse_gate_list(&[gates]).unwrap_or_default();
        group.bench_function(gates, |b| {
            b.iter(|| black_box(engine.record_single(&instructions)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    frame_render_benchmark,
    sequence_benchmark
);
criterion_main!(benches);
