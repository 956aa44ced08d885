//! Integrity checks over a full set of placed items. The canvas runs these
//! after bulk operations (imports, multi-drag) to find items that ended up
//! stacked on one cell, and holes inside otherwise-solid layouts.

use crate::{
    hex::{HexPointIndexMap, Region},
    tessellation::{HexGrid, Placement, Point2},
};
use serde::{Deserialize, Serialize};

/// The outcome of validating a set of placements against the grid.
///
/// `is_valid` reflects overlaps only: a layout with interior gaps but no
/// stacked items is still valid. Gaps are advisory, for the canvas to
/// surface as a layout hint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TessellationReport {
    pub is_valid: bool,
    /// Pixel centers of cells that are fully enclosed by placed items but
    /// hold none themselves
    pub gaps: Vec<Point2>,
    /// Groups of items that resolve to the same cell
    pub overlaps: Vec<Overlap>,
}

/// A set of placed items occupying a single cell. Anything beyond one item
/// per cell breaks the tessellation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Overlap {
    pub placements: Vec<Placement>,
}

#[cfg(feature = "json")]
impl TessellationReport {
    /// Serialize this report to a JSON string, e.g. for the canvas's
    /// diagnostics panel.
    pub fn to_json(&self) -> String {
        // Panics only if the report shape isn't serializable (a bug)
        serde_json::to_string_pretty(self).expect("error serializing report")
    }
}

impl HexGrid {
    /// Check a full set of placements for tessellation integrity: every
    /// item alone on its cell, no enclosed empty cells.
    ///
    /// Items are bucketed by the cell their position resolves to; buckets
    /// with more than one item are reported as overlaps, in first-seen
    /// order. Gaps are found by flood-filling the free cells around the
    /// occupied region: see [Region::interior_gaps].
    pub fn validate_tessellation(
        &self,
        placements: &[Placement],
    ) -> TessellationReport {
        let mut cells: HexPointIndexMap<Vec<Placement>> =
            HexPointIndexMap::default();
        for placement in placements {
            cells
                .entry(self.hex_at_position(placement.position))
                .or_default()
                .push(placement.clone());
        }

        let overlaps: Vec<Overlap> = cells
            .values()
            .filter(|bucket| bucket.len() > 1)
            .map(|bucket| Overlap {
                placements: bucket.clone(),
            })
            .collect();

        let region: Region = cells.keys().copied().collect();
        let gaps: Vec<Point2> = region
            .interior_gaps()
            .into_iter()
            .map(|point| self.hex_to_pixel(point))
            .collect();

        TessellationReport {
            is_valid: overlaps.is_empty(),
            gaps,
            overlaps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::GridConfig, hex::HexPoint};
    use assert_approx_eq::assert_approx_eq;

    fn grid() -> HexGrid {
        HexGrid::new(GridConfig {
            hex_size: 50.0,
            ..Default::default()
        })
        .unwrap()
    }

    fn placed_at_cells(grid: &HexGrid, cells: &[(i32, i32)]) -> Vec<Placement> {
        cells
            .iter()
            .enumerate()
            .map(|(i, &(q, r))| {
                Placement::new(
                    format!("item-{i}"),
                    grid.hex_to_pixel(HexPoint::new(q, r)),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_is_valid() {
        let report = grid().validate_tessellation(&[]);
        assert!(report.is_valid);
        assert!(report.gaps.is_empty());
        assert!(report.overlaps.is_empty());
    }

    #[test]
    fn test_distinct_cells_are_valid() {
        let grid = grid();
        let placements =
            placed_at_cells(&grid, &[(0, 0), (1, 0), (5, -2), (-3, 4)]);
        let report = grid.validate_tessellation(&placements);
        assert!(report.is_valid);
        assert!(report.overlaps.is_empty());
    }

    #[test]
    fn test_overlap_detection() {
        let grid = grid();
        // Two items whose positions differ in raw pixels but resolve to the
        // same cell
        let placements = vec![
            Placement::new("a", Point2 { x: 0.0, y: 0.0 }),
            Placement::new("b", Point2 { x: 4.0, y: -6.0 }),
            Placement::new(
                "c",
                grid.hex_to_pixel(HexPoint::new(2, 2)),
            ),
        ];
        let report = grid.validate_tessellation(&placements);
        assert!(!report.is_valid);
        assert_eq!(report.overlaps.len(), 1);
        let ids: Vec<&str> = report.overlaps[0]
            .placements
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_gap_reporting() {
        let grid = grid();
        // A full ring with nothing in the middle
        let placements = placed_at_cells(
            &grid,
            &[(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)],
        );
        let report = grid.validate_tessellation(&placements);
        // Gaps don't invalidate the layout
        assert!(report.is_valid);
        assert_eq!(report.gaps.len(), 1);
        assert_approx_eq!(report.gaps[0].x, 0.0);
        assert_approx_eq!(report.gaps[0].y, 0.0);
    }
}
