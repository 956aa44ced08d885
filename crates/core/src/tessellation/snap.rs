//! The placement-assist search behind drag-and-drop snapping. The canvas
//! calls [HexGrid::snap_target] on every pointer move during a drag and
//! renders the returned cell as a live suggestion.

use crate::tessellation::{HexGrid, Point2};
use log::trace;
use serde::{Deserialize, Serialize};

/// One item currently placed on the canvas. The canvas owns these; a
/// snapshot of all of them is passed into every query that needs occupancy
/// information. `id` is whatever identity the canvas tracks items by.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: String,
    pub position: Point2,
}

impl Placement {
    pub fn new(id: impl Into<String>, position: Point2) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

/// A snap suggestion: the free cell to pull the dragged item into, and the
/// id of the placed item it would sit next to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub position: Point2,
    pub anchor: String,
}

impl HexGrid {
    /// How much farther than the snap threshold an *anchor* may be. The
    /// dragged item can be up to this factor times the threshold away from
    /// the nearest placed item and still be considered a deliberate
    /// placement near it.
    const ANCHOR_RANGE_FACTOR: f64 = 1.5;
    /// A neighbor cell counts as occupied when a placed item sits within
    /// this many pixels of its center on both axes. Tolerance, not exact
    /// equality, so float drift in persisted positions doesn't reopen a
    /// taken cell.
    const OCCUPIED_TOLERANCE: f64 = 10.0;

    /// Find the cell a dragged item should snap to, if any.
    ///
    /// The search is anchored on the single placed item nearest the cursor:
    /// only the six cells around *that* item are candidates. Of those, cells
    /// already holding an item are discarded and the one closest to the
    /// cursor wins, provided it's within the configured snap threshold.
    ///
    /// This is deliberately not a global nearest-free-cell search across
    /// the whole canvas: one anchor keeps the cost constant per pointer
    /// event, and the UX question of which cluster wins when two are nearby
    /// is answered by "the one whose item is closest".
    pub fn snap_target(
        &self,
        cursor: Point2,
        placements: &[Placement],
    ) -> Option<SnapTarget> {
        // Nothing on the canvas, nothing to snap to
        let anchor = placements.iter().min_by(|a, b| {
            cursor
                .distance_to(a.position)
                .total_cmp(&cursor.distance_to(b.position))
        })?;

        let anchor_distance = cursor.distance_to(anchor.position);
        let anchor_range =
            self.config().snap_threshold * Self::ANCHOR_RANGE_FACTOR;
        if anchor_distance > anchor_range {
            trace!(
                "no snap: nearest item {} is {anchor_distance:.1}px away \
                 (limit {anchor_range:.1})",
                anchor.id
            );
            return None;
        }

        let anchor_cell =
            self.pixel_to_hex(anchor.position.x, anchor.position.y);
        let candidate = self
            .neighbors(anchor_cell)
            .into_iter()
            .filter(|cell| {
                !placements.iter().any(|placement| {
                    (placement.position.x - cell.center.x).abs()
                        < Self::OCCUPIED_TOLERANCE
                        && (placement.position.y - cell.center.y).abs()
                            < Self::OCCUPIED_TOLERANCE
                })
            })
            .min_by(|a, b| {
                cursor
                    .distance_to(a.center)
                    .total_cmp(&cursor.distance_to(b.center))
            })?;

        let candidate_distance = cursor.distance_to(candidate.center);
        if candidate_distance > self.config().snap_threshold {
            trace!(
                "no snap: free cell {} near {} is {candidate_distance:.1}px \
                 from the cursor",
                candidate.position,
                anchor.id
            );
            return None;
        }

        trace!(
            "snap: cell {} next to {} ({candidate_distance:.1}px)",
            candidate.position,
            anchor.id
        );
        Some(SnapTarget {
            position: candidate.center,
            anchor: anchor.id.clone(),
        })
    }
}
