use assert_approx_eq::assert_approx_eq;
use proptest::prelude::*;
use tessera::{GridConfig, HexGrid, HexPoint, Placement, Point2};

fn grid_with_size(hex_size: f64) -> HexGrid {
    HexGrid::new(GridConfig {
        hex_size,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_origin_center_for_any_size() {
    for size in [0.0, 0.5, 50.0, 175.0, 4000.0] {
        assert_eq!(
            grid_with_size(size).hex_to_pixel(HexPoint::ORIGIN),
            Point2 { x: 0.0, y: 0.0 }
        );
    }
}

#[test]
fn test_distance_table() {
    let origin = HexPoint::ORIGIN;
    assert_eq!(origin.distance_to(origin), 0);
    assert_eq!(origin.distance_to(HexPoint::new(1, 0)), 1);
    assert_eq!(origin.distance_to(HexPoint::new(0, 1)), 1);
    assert_eq!(origin.distance_to(HexPoint::new(2, 0)), 2);
    assert_eq!(origin.distance_to(HexPoint::new(1, 1)), 2);
}

#[test]
fn test_cube_constraint_for_arbitrary_pixels() {
    let grid = grid_with_size(175.0);
    for (x, y) in [
        (0.0, 0.0),
        (13.7, -9998.2),
        (-1e7, 3.25),
        (481.0, 481.0),
        (f64::MAX, f64::MIN),
    ] {
        let cell = grid.pixel_to_hex(x, y);
        assert_eq!(cell.q() + cell.r() + cell.s(), 0);
    }
}

#[test]
fn test_snap_assisted_layout_session() {
    let grid = grid_with_size(50.0);
    let mut placements = vec![Placement::new("seed", Point2 { x: 0.0, y: 0.0 })];

    // Drop items at rough cursor positions; snapping pulls each one onto a
    // free cell next to the nearest existing item
    let drops = [
        (70.0, 20.0),
        (-60.0, 30.0),
        (30.0, -60.0),
        (120.0, 70.0),
        (-30.0, 80.0),
    ];
    for (i, (x, y)) in drops.into_iter().enumerate() {
        let target = grid
            .snap_target(Point2 { x, y }, &placements)
            .expect("drop position should be within snapping range");
        placements.push(Placement::new(format!("item-{i}"), target.position));
    }

    // Snapping only ever offers free cells, so the layout stays clean
    let report = grid.validate_tessellation(&placements);
    assert!(report.is_valid, "overlaps: {:?}", report.overlaps);
    assert_eq!(placements.len(), drops.len() + 1);
}

#[test]
fn test_snapped_positions_are_cell_centers() {
    let grid = grid_with_size(50.0);
    let placements = [Placement::new("a", Point2 { x: 0.0, y: 0.0 })];
    let target = grid
        .snap_target(Point2 { x: 80.0, y: 10.0 }, &placements)
        .unwrap();
    let recentered =
        grid.tessellation_position(target.position.x, target.position.y);
    assert_approx_eq!(target.position.x, recentered.x);
    assert_approx_eq!(target.position.y, recentered.y);
}

#[test]
fn test_optimal_zoom_scales_with_container() {
    let grid = grid_with_size(175.0);
    let zoom_small = grid.optimal_zoom(800.0, 600.0);
    let zoom_large = grid.optimal_zoom(1600.0, 1200.0);
    assert!(zoom_small.is_finite() && zoom_small > 0.0);
    // Double the container, half the zoom
    assert_approx_eq!(zoom_small, zoom_large * 2.0);
}

proptest! {
    // The discrete grid identity is the invariant that matters: a cell's
    // center always resolves back to that cell, for any sane size
    #[test]
    fn prop_pixel_round_trip(
        q in -200i32..200,
        r in -200i32..200,
        size in 1.0f64..400.0,
    ) {
        let grid = grid_with_size(size);
        let point = HexPoint::new(q, r);
        let center = grid.hex_to_pixel(point);
        prop_assert_eq!(grid.pixel_to_hex(center.x, center.y), point);
    }

    // Snapping a position that is already a cell center is a no-op
    #[test]
    fn prop_tessellation_position_idempotent(
        x in -1e5f64..1e5,
        y in -1e5f64..1e5,
    ) {
        let grid = grid_with_size(175.0);
        let snapped = grid.tessellation_position(x, y);
        let snapped_again =
            grid.tessellation_position(snapped.x, snapped.y);
        prop_assert_eq!(snapped, snapped_again);
    }
}
