use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera::{GridConfig, HexGrid, HexPoint, Placement, Point2, Viewport};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tessellation");

    let grid = HexGrid::new(GridConfig::default()).unwrap();
    let viewport = Viewport {
        width: 1920.0,
        height: 1080.0,
        offset_x: -960.0,
        offset_y: -540.0,
    };
    group.bench_function("grid overlay 1080p", |b| {
        b.iter(|| grid.grid_overlay(black_box(&viewport)))
    });

    // A busy canvas: a 15x15 block of placed items
    let placements: Vec<Placement> = (0..15)
        .flat_map(|q| (0..15).map(move |r| (q, r)))
        .map(|(q, r)| {
            Placement::new(
                format!("item-{q}-{r}"),
                grid.hex_to_pixel(HexPoint::new(q, r)),
            )
        })
        .collect();
    let cursor = Point2 { x: 1300.0, y: 800.0 };
    group.bench_function("snap target", |b| {
        b.iter(|| grid.snap_target(black_box(cursor), black_box(&placements)))
    });

    group.bench_function("validate tessellation", |b| {
        b.iter(|| grid.validate_tessellation(black_box(&placements)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
