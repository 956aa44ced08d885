//! Debug rendering of a grid overlay as an SVG document. The CLI uses this
//! for its `svg` output format; it's also handy for eyeballing snapping and
//! validation scenarios outside the canvas.

use crate::tessellation::{GridCell, HexGrid, Placement, Viewport};
use std::f64;
use svg::{
    node::{
        element::{Group, Polygon},
        Comment,
    },
    Document,
};

const CELL_STROKE: &str = "#c4c4c4";
const PLACEMENT_FILL: &str = "#7aa7e0";

/// Render the overlay for a viewport as a 2D top-down SVG. Cells holding a
/// placed item are filled; the rest are drawn as outlines.
pub fn draw_overlay(
    grid: &HexGrid,
    viewport: &Viewport,
    placements: &[Placement],
) -> Document {
    let mut document = Document::new()
        .set(
            "viewBox",
            (
                viewport.offset_x,
                viewport.offset_y,
                viewport.width,
                viewport.height,
            ),
        )
        .set("shape-rendering", "crispEdges")
        .add(Comment::new(format!("\n{:#?}\n", grid.config())));

    let occupied: Vec<_> = placements
        .iter()
        .map(|placement| grid.hex_at_position(placement.position))
        .collect();
    for cell in grid.grid_overlay(viewport) {
        let filled = occupied.contains(&cell.position);
        document = document.add(draw_cell(grid, &cell, filled));
    }

    document
}

/// Generate an SVG polygon for a single cell
fn draw_cell(grid: &HexGrid, cell: &GridCell, filled: bool) -> Group {
    let size = grid.dimensions().size;
    // Pointy-top vertices: the first sits 30° below the +x axis, then every
    // 60° around
    let vertices: Vec<(f64, f64)> = (0..6)
        .map(|i| {
            let angle =
                f64::consts::PI / 180.0 * (60.0 * i as f64 - 30.0);
            (size * angle.cos(), size * angle.sin())
        })
        .collect();

    let polygon = Polygon::new()
        .set("points", vertices)
        .set("fill", if filled { PLACEMENT_FILL } else { "none" })
        .set("stroke", CELL_STROKE)
        .set("stroke-width", 1);
    Group::new()
        .set(
            "transform",
            format!("translate({} {})", cell.center.x, cell.center.y),
        )
        .add(Comment::new(cell.position.to_string())) // Readability!
        .add(polygon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn test_draw_overlay() {
        let grid = HexGrid::new(GridConfig {
            hex_size: 50.0,
            ..Default::default()
        })
        .unwrap();
        let viewport = Viewport {
            width: 400.0,
            height: 300.0,
            ..Default::default()
        };
        let placements = [Placement::new(
            "a",
            crate::tessellation::Point2 { x: 0.0, y: 0.0 },
        )];

        let rendered =
            draw_overlay(&grid, &viewport, &placements).to_string();
        assert!(rendered.contains("<svg"));
        assert!(rendered.contains("polygon"));
        // The occupied origin cell gets a fill
        assert!(rendered.contains(PLACEMENT_FILL));
    }
}
