// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rangecal_grid::{Cell, UniformGridMeasure};
use rangecal_selection::{
    CellAnimationType, DefaultTransitionController, SelectionManager, SelectionRenderOptions,
    TransitionController,
};

/// Number of frames in one simulated animation.
const FRAMES: u32 = 60;

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition/frames");
    let measure = UniformGridMeasure::new(280.0, 32.0, 28.0);
    let options = SelectionRenderOptions {
        cell_animation_type: CellAnimationType::Bubble,
        ..SelectionRenderOptions::default()
    };

    let cases = [
        ("move_to_cell", (9, 9), (13, 13)),
        ("dual_bubble", (9, 9), (30, 30)),
        ("range_to_range", (3, 10), (8, 38)),
    ];

    for (name, previous, current) in cases {
        let mut manager = SelectionManager::new();
        manager.set_state(Cell::new(previous.0), Cell::new(previous.1), &measure);
        manager.set_state(Cell::new(current.0), Cell::new(current.1), &measure);

        let transition = manager
            .create_transition(&options, &measure)
            .expect("transition is supported");

        group.bench_with_input(BenchmarkId::from_parameter(name), &transition, |b, t| {
            let mut t = *t;
            b.iter(|| {
                for frame in 0..=FRAMES {
                    let fraction = f64::from(frame) / f64::from(FRAMES);
                    DefaultTransitionController.handle_transition(&mut t, &measure, fraction);
                }
                black_box(&t);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frames);
criterion_main!(benches);
