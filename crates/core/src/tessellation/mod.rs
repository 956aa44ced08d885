//! The tessellation engine: conversions between canvas pixels and hex
//! cells, plus the placement queries built on top of them. See [HexGrid].
//!
//! All of the math in here assumes **pointy topped** tiles. The forward and
//! inverse transforms are the matching pair from
//! <https://www.redblobgames.com/grids/hexagons/#hex-to-pixel>, so
//! converting a cell to its pixel center and back always lands on the same
//! cell.

mod snap;
#[cfg(feature = "svg")]
pub mod svg;
mod unit;
mod validate;

pub use self::{snap::*, unit::*, validate::*};

use crate::{
    config::GridConfig,
    hex::{FractionalHexPoint, HexDirection, HexPoint},
};
use log::debug;
use nalgebra::{Point2 as NaPoint2, Vector2};
use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "js")]
use wasm_bindgen::prelude::*;

/// The pixel-space footprint of a single cell, derived from the configured
/// circumradius at grid construction. Pointy-top geometry: `width` is the
/// edge-to-edge horizontal extent, `height` the vertex-to-vertex vertical
/// extent.
#[cfg_attr(feature = "js", wasm_bindgen)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexDimensions {
    /// Distance from the center of a cell to one of its 6 vertices. This is
    /// also the length of one side of the cell.
    pub size: f64,
    /// `sqrt(3) * size`: horizontal distance between the centers of two
    /// east/west neighbors.
    pub width: f64,
    /// `2 * size`: vertical extent of a cell. Row centers are `0.75` of
    /// this apart.
    pub height: f64,
}

impl HexDimensions {
    fn new(size: f64) -> Self {
        Self {
            size,
            width: f64::sqrt(3.0) * size,
            height: size * 2.0,
        }
    }
}

/// A tessellation grid is the bridge between the canvas's pixel space and
/// discrete hex cells. A grid is created from a [GridConfig], and from there
/// every operation is a pure function of its arguments; the grid itself
/// never changes and never stores canvas state. The canvas owns the list of
/// placed items and passes a snapshot of it into the queries that need one.
///
/// Grids are cheap to create, so when the config changes (e.g. the user
/// picks a different cell size), just build a new one. Separate canvases
/// with different configs can each own their own grid.
#[cfg_attr(feature = "js", wasm_bindgen)]
#[derive(Clone, Debug)]
pub struct HexGrid {
    config: GridConfig,
    dims: HexDimensions,
}

// Non-Wasm API
impl HexGrid {
    /// Number of cells that should fit across the smaller dimension of a
    /// container at the zoom suggested by [Self::optimal_zoom].
    pub const TARGET_HEXES_ACROSS: f64 = 10.0;
    /// Extra candidate cells on each side of the overlay's computed
    /// `(q, r)` range, so partially visible cells near the viewport edge
    /// are never clipped by range math alone.
    const OVERLAY_RANGE_MARGIN: i32 = 2;

    /// Initialize a new grid with the given config. Returns an error if the
    /// config is invalid (negative size or threshold). A zero `hex_size` is
    /// valid but degenerate: every conversion collapses to the origin cell
    /// and the grid overlay is empty.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            dims: HexDimensions::new(config.hex_size),
            config,
        })
    }

    /// Get a reference to the config this grid was built from
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Get the six cells adjacent to the given one, each with its pixel
    /// center. The order is fixed (see [HexDirection::ALL]) and is part of
    /// the contract: the snapping search and overlay consumers rely on it.
    pub fn neighbors(&self, point: HexPoint) -> [GridCell; 6] {
        HexDirection::ALL.map(|dir| {
            let position = point.adjacent(dir);
            GridCell {
                position,
                center: self.hex_to_pixel(position),
            }
        })
    }

    /// Enumerate the cells connecting `from` to `to`, excluding `from` and
    /// including `to`. Adjacent cells yield a single-element path; equal
    /// cells yield an empty one.
    pub fn path_between(&self, from: HexPoint, to: HexPoint) -> Vec<HexPoint> {
        from.line_to(to)
    }

    /// Compute the endpoints of the shared edge between the cells under two
    /// pixel positions, or `None` if those cells aren't adjacent. The
    /// endpoints are derived by offsetting the midpoint of the two cell
    /// centers perpendicular to the center-to-center line, a quarter of the
    /// cell size each way.
    pub fn edge_connection(
        &self,
        pos1: Point2,
        pos2: Point2,
    ) -> Option<EdgeConnection> {
        if !self.are_adjacent(pos1, pos2) {
            return None;
        }

        let center1 = self.tessellation_position(pos1.x, pos1.y);
        let center2 = self.tessellation_position(pos2.x, pos2.y);
        let midpoint = NaPoint2::new(
            (center1.x + center2.x) / 2.0,
            (center1.y + center2.y) / 2.0,
        );
        let delta = Vector2::new(center2.x - center1.x, center2.y - center1.y);
        // Rotate the center-to-center direction a quarter turn to walk
        // along the shared edge. `delta` can't be zero: the cells are
        // adjacent, so the centers are distinct.
        let along_edge =
            Vector2::new(-delta.y, delta.x).normalize() * (self.dims.size / 4.0);

        Some(EdgeConnection {
            point1: (midpoint + along_edge).into(),
            point2: (midpoint - along_edge).into(),
        })
    }

    /// Enumerate every cell whose center falls within the given viewport,
    /// expanded by one cell `size` of padding on each side so cells that
    /// are only partially visible still get drawn. Used by the canvas to
    /// paint the background grid; recomputed on pan/zoom/resize.
    ///
    /// The output is finite and deterministic. A degenerate (zero-size)
    /// grid or a non-finite viewport yields no cells.
    pub fn grid_overlay(&self, viewport: &Viewport) -> Vec<GridCell> {
        let dims = self.dims;
        let pad = dims.size;
        let x_min = viewport.offset_x - pad;
        let x_max = viewport.offset_x + viewport.width + pad;
        let y_min = viewport.offset_y - pad;
        let y_max = viewport.offset_y + viewport.height + pad;
        if dims.size <= 0.0
            || !(x_min.is_finite()
                && x_max.is_finite()
                && y_min.is_finite()
                && y_max.is_finite())
        {
            return Vec::new();
        }

        // Candidate ranges from the row/column spacing, then an exact
        // center check per cell. Columns are `width` apart, rows
        // `1.5 * size`; the q range shifts by r/2 per row (pointy-top
        // stagger).
        let row_spacing = dims.size * 1.5;
        let r_min =
            (y_min / row_spacing).floor() as i32 - Self::OVERLAY_RANGE_MARGIN;
        let r_max =
            (y_max / row_spacing).ceil() as i32 + Self::OVERLAY_RANGE_MARGIN;

        let mut cells = Vec::new();
        for r in r_min..=r_max {
            let stagger = r as f64 / 2.0;
            let q_min = (x_min / dims.width - stagger).floor() as i32
                - Self::OVERLAY_RANGE_MARGIN;
            let q_max = (x_max / dims.width - stagger).ceil() as i32
                + Self::OVERLAY_RANGE_MARGIN;
            for q in q_min..=q_max {
                let position = HexPoint::new(q, r);
                let center = self.hex_to_pixel(position);
                if x_min <= center.x
                    && center.x <= x_max
                    && y_min <= center.y
                    && center.y <= y_max
                {
                    cells.push(GridCell { position, center });
                }
            }
        }

        debug!(
            "grid overlay: {} cells for viewport {:?}",
            cells.len(),
            viewport
        );
        cells
    }
}

// Wasm-friendly API
#[cfg_attr(feature = "js", wasm_bindgen)]
impl HexGrid {
    /// Get the pixel-space cell footprint derived from the configured size
    pub fn dimensions(&self) -> HexDimensions {
        self.dims
    }

    /// Convert a continuous pixel position to the cell that contains it.
    /// Total over all inputs: a degenerate (zero-size) grid maps every
    /// pixel to the origin cell.
    pub fn pixel_to_hex(&self, x: f64, y: f64) -> HexPoint {
        let size = self.dims.size;
        if size <= 0.0 {
            return HexPoint::ORIGIN;
        }
        let q = (f64::sqrt(3.0) / 3.0 * x - y / 3.0) / size;
        let r = (2.0 / 3.0 * y) / size;
        FractionalHexPoint::new(q, r).round()
    }

    /// Get the pixel center of a cell
    pub fn hex_to_pixel(&self, point: HexPoint) -> Point2 {
        let size = self.dims.size;
        Point2 {
            x: size
                * f64::sqrt(3.0)
                * (point.q() as f64 + point.r() as f64 / 2.0),
            y: size * 1.5 * point.r() as f64,
        }
    }

    /// Snap an arbitrary pixel position to the center of the cell that
    /// contains it
    pub fn tessellation_position(&self, x: f64, y: f64) -> Point2 {
        self.hex_to_pixel(self.pixel_to_hex(x, y))
    }

    /// Alias for [Self::tessellation_position], named for the drag-and-drop
    /// call site on the canvas
    pub fn snap_to_grid(&self, x: f64, y: f64) -> Point2 {
        self.tessellation_position(x, y)
    }

    /// Look up the cell under a raw pixel position. Thin wrapper over
    /// [Self::pixel_to_hex] for call sites that hold a [Point2].
    pub fn hex_at_position(&self, position: Point2) -> HexPoint {
        self.pixel_to_hex(position.x, position.y)
    }

    /// Whether the cells under two pixel positions share an edge. False for
    /// the same cell.
    pub fn are_adjacent(&self, pos1: Point2, pos2: Point2) -> bool {
        let hex1 = self.pixel_to_hex(pos1.x, pos1.y);
        let hex2 = self.pixel_to_hex(pos2.x, pos2.y);
        hex1.distance_to(hex2) == 1
    }

    /// Whether a cell's center falls within the configured canvas bounds.
    /// The bounds are workspace configuration (see
    /// [CanvasConfig](crate::CanvasConfig)), not grid math.
    pub fn is_valid_hex(&self, point: HexPoint) -> bool {
        let center = self.hex_to_pixel(point);
        let canvas = self.config.canvas;
        0.0 <= center.x
            && center.x <= canvas.width
            && 0.0 <= center.y
            && center.y <= canvas.height
    }

    /// Suggest a zoom factor at which roughly
    /// [TARGET_HEXES_ACROSS](Self::TARGET_HEXES_ACROSS) cells span the
    /// smaller dimension of a container. A heuristic for the initial view,
    /// not a hard constraint.
    pub fn optimal_zoom(&self, container_width: f64, container_height: f64) -> f64 {
        let hexes_across = f64::min(
            container_width / self.dims.width,
            container_height / self.dims.height,
        );
        Self::TARGET_HEXES_ACROSS / hexes_across
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CanvasConfig;
    use assert_approx_eq::assert_approx_eq;

    fn grid(hex_size: f64) -> HexGrid {
        HexGrid::new(GridConfig {
            hex_size,
            snap_threshold: 200.0,
            canvas: CanvasConfig::default(),
        })
        .unwrap()
    }

    #[test]
    fn test_construction() {
        assert!(HexGrid::new(GridConfig::default()).is_ok());
        // Zero size is degenerate but accepted
        assert!(HexGrid::new(GridConfig {
            hex_size: 0.0,
            ..Default::default()
        })
        .is_ok());
        // Negative sizes are misconfiguration
        assert!(HexGrid::new(GridConfig {
            hex_size: -10.0,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn test_dimensions() {
        let dims = grid(50.0).dimensions();
        assert_approx_eq!(dims.width, 86.60254037844386);
        assert_approx_eq!(dims.height, 100.0);
    }

    #[test]
    fn test_origin_is_fixed() {
        for size in [0.0, 1.0, 50.0, 175.0] {
            let center = grid(size).hex_to_pixel(HexPoint::ORIGIN);
            assert_eq!(center, Point2 { x: 0.0, y: 0.0 });
        }
    }

    #[test]
    fn test_hex_to_pixel() {
        let grid = grid(50.0);
        let east = grid.hex_to_pixel(HexPoint::new(1, 0));
        assert_approx_eq!(east.x, 86.60254037844386);
        assert_approx_eq!(east.y, 0.0);
        let southeast = grid.hex_to_pixel(HexPoint::new(0, 1));
        assert_approx_eq!(southeast.x, 43.30127018922193);
        assert_approx_eq!(southeast.y, 75.0);
    }

    #[test]
    fn test_pixel_to_hex() {
        let grid = grid(50.0);
        assert_eq!(grid.pixel_to_hex(0.0, 0.0), HexPoint::ORIGIN);
        // A point near a center resolves to that center's cell
        assert_eq!(grid.pixel_to_hex(80.0, -3.0), HexPoint::new(1, 0));
        assert_eq!(grid.pixel_to_hex(40.0, 70.0), HexPoint::new(0, 1));
    }

    #[test]
    fn test_round_trip() {
        let grid = grid(50.0);
        for q in -10..=10 {
            for r in -10..=10 {
                let point = HexPoint::new(q, r);
                let center = grid.hex_to_pixel(point);
                assert_eq!(
                    grid.pixel_to_hex(center.x, center.y),
                    point,
                    "round trip failed for {point}"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_size() {
        let grid = grid(0.0);
        assert_eq!(
            grid.hex_to_pixel(HexPoint::new(12, -40)),
            Point2 { x: 0.0, y: 0.0 }
        );
        assert_eq!(grid.pixel_to_hex(123.0, 456.0), HexPoint::ORIGIN);
        assert_eq!(
            grid.grid_overlay(&Viewport {
                width: 1920.0,
                height: 1080.0,
                ..Default::default()
            }),
            vec![]
        );
    }

    #[test]
    fn test_neighbor_order() {
        let grid = grid(50.0);
        let neighbors = grid.neighbors(HexPoint::ORIGIN);
        let expected_cells = [
            (1, 0, 86.60254037844386, 0.0),
            (1, -1, 43.30127018922193, -75.0),
            (0, -1, -43.30127018922193, -75.0),
            (-1, 0, -86.60254037844386, 0.0),
            (-1, 1, -43.30127018922193, 75.0),
            (0, 1, 43.30127018922193, 75.0),
        ];
        for (neighbor, (q, r, x, y)) in neighbors.iter().zip(expected_cells) {
            assert_eq!(neighbor.position, HexPoint::new(q, r));
            assert_approx_eq!(neighbor.center.x, x);
            assert_approx_eq!(neighbor.center.y, y);
        }
    }

    #[test]
    fn test_are_adjacent() {
        let grid = grid(50.0);
        let origin = grid.hex_to_pixel(HexPoint::ORIGIN);
        for neighbor in grid.neighbors(HexPoint::ORIGIN) {
            assert!(grid.are_adjacent(origin, neighbor.center));
        }
        // Two cells apart
        let far = grid.hex_to_pixel(HexPoint::new(2, 0));
        assert!(!grid.are_adjacent(origin, far));
        // Same cell isn't adjacent to itself
        assert!(!grid.are_adjacent(origin, origin));
    }

    #[test]
    fn test_path_between() {
        let grid = grid(50.0);
        assert_eq!(
            grid.path_between(HexPoint::ORIGIN, HexPoint::ORIGIN),
            vec![]
        );
        assert_eq!(
            grid.path_between(HexPoint::ORIGIN, HexPoint::new(1, 0)),
            vec![HexPoint::new(1, 0)]
        );
        assert_eq!(
            grid.path_between(HexPoint::ORIGIN, HexPoint::new(2, 0)),
            vec![HexPoint::new(1, 0), HexPoint::new(2, 0)]
        );
    }

    #[test]
    fn test_edge_connection() {
        let grid = grid(50.0);
        let center1 = grid.hex_to_pixel(HexPoint::ORIGIN);
        let center2 = grid.hex_to_pixel(HexPoint::new(1, 0));
        let edge = grid.edge_connection(center1, center2).unwrap();

        // Endpoints straddle the midpoint of the centers, a quarter size
        // apart each way
        assert_approx_eq!(edge.point1.distance_to(edge.point2), 25.0);
        assert_approx_eq!(
            edge.point1.distance_to(center1),
            edge.point1.distance_to(center2)
        );
        assert_approx_eq!(
            edge.point2.distance_to(center1),
            edge.point2.distance_to(center2)
        );

        // Non-adjacent cells have no shared edge
        let far = grid.hex_to_pixel(HexPoint::new(2, 0));
        assert_eq!(grid.edge_connection(center1, far), None);
        assert_eq!(grid.edge_connection(center1, center1), None);
    }

    #[test]
    fn test_grid_overlay() {
        let grid = grid(50.0);
        let viewport = Viewport {
            width: 200.0,
            height: 200.0,
            offset_x: 0.0,
            offset_y: 0.0,
        };
        let cells = grid.grid_overlay(&viewport);
        assert!(!cells.is_empty());
        // Every center is inside the padded viewport
        for cell in &cells {
            assert!(
                (-50.0..=250.0).contains(&cell.center.x)
                    && (-50.0..=250.0).contains(&cell.center.y),
                "cell {} center {} escapes the padded viewport",
                cell.position,
                cell.center
            );
        }
        // The origin cell is in view
        assert!(cells.iter().any(|cell| cell.position == HexPoint::ORIGIN));
        // No duplicates
        let unique: crate::hex::HexPointSet =
            cells.iter().map(|cell| cell.position).collect();
        assert_eq!(unique.len(), cells.len());
    }

    #[test]
    fn test_grid_overlay_panned() {
        let grid = grid(50.0);
        let viewport = Viewport {
            width: 300.0,
            height: 300.0,
            offset_x: -1000.0,
            offset_y: 2000.0,
        };
        for cell in grid.grid_overlay(&viewport) {
            assert!((-1050.0..=-650.0).contains(&cell.center.x));
            assert!((1950.0..=2350.0).contains(&cell.center.y));
        }
    }

    #[test]
    fn test_optimal_zoom() {
        let grid = grid(50.0);
        // Exactly 10 hexes fit in both dimensions: zoom is 1
        assert_approx_eq!(grid.optimal_zoom(866.0254037844386, 1000.0), 1.0);
        // Half the container: twice the zoom
        assert_approx_eq!(grid.optimal_zoom(433.0127018922193, 500.0), 2.0);
        // The smaller dimension wins
        assert_approx_eq!(grid.optimal_zoom(866.0254037844386, 10000.0), 1.0);
    }

    #[test]
    fn test_is_valid_hex() {
        let grid = grid(50.0);
        assert!(grid.is_valid_hex(HexPoint::ORIGIN));
        assert!(grid.is_valid_hex(HexPoint::new(10, 10)));
        // Negative pixel space is off-canvas
        assert!(!grid.is_valid_hex(HexPoint::new(-1, 0)));
        // Far past the configured bounds
        assert!(!grid.is_valid_hex(HexPoint::new(100, 0)));
    }
}
