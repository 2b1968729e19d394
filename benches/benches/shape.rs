// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rangecal_grid::{CellRange, UniformGridMeasure};
use rangecal_shape::{
    SelectionShape, SelectionShapeInfo, ShapeFlags, ShapeOrigin, composite_rects,
};

fn ranges() -> [(&'static str, CellRange); 4] {
    [
        ("one_row", CellRange::from_indices(8, 12)),
        ("two_rows", CellRange::from_indices(10, 16)),
        ("disjoint_rows", CellRange::from_indices(12, 15)),
        ("many_rows", CellRange::from_indices(3, 38)),
    ]
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape/rebuild");
    let measure = UniformGridMeasure::new(280.0, 32.0, 28.0).with_round_radius(6.0);

    for (name, range) in ranges() {
        let info = SelectionShapeInfo::from_range(range, &measure);

        // Alternate origins so that every update misses the cache.
        group.bench_with_input(BenchmarkId::new("path", name), &info, |b, info| {
            let mut shape = SelectionShape::new();
            let mut local = false;
            b.iter(|| {
                local = !local;
                let origin = if local {
                    ShapeOrigin::Local
                } else {
                    ShapeOrigin::Grid
                };
                black_box(shape.update(info, origin, ShapeFlags::FORCE_PATH));
            });
        });

        group.bench_with_input(BenchmarkId::new("composite", name), &info, |b, info| {
            b.iter(|| black_box(composite_rects(black_box(info), 6.0)));
        });
    }

    group.finish();
}

fn bench_cache_hit(c: &mut Criterion) {
    let measure = UniformGridMeasure::new(280.0, 32.0, 28.0).with_round_radius(6.0);
    let info = SelectionShapeInfo::from_range(CellRange::from_indices(3, 38), &measure);

    let mut shape = SelectionShape::new();
    shape.update(&info, ShapeOrigin::Grid, ShapeFlags::empty());

    c.bench_function("shape/cache_hit", |b| {
        b.iter(|| black_box(shape.update(black_box(&info), ShapeOrigin::Grid, ShapeFlags::empty())));
    });
}

criterion_group!(benches, bench_rebuild, bench_cache_hit);
criterion_main!(benches);
