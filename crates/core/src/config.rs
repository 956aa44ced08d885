use serde::{Deserialize, Serialize};
use validator::Validate;
#[cfg(feature = "js")]
use wasm_bindgen::prelude::*;

/// Configuration that defines a tessellation grid. Two grids built from the
/// same config behave identically; there is no hidden state beyond these
/// values. Typically loaded from workspace settings on the canvas side.
#[cfg_attr(feature = "js", wasm_bindgen)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Circumradius of a hex cell, in pixels (center to vertex). This single
    /// value determines the full cell geometry; see
    /// [HexDimensions](crate::HexDimensions).
    ///
    /// Zero is accepted and collapses every conversion to the origin cell.
    /// Negative sizes are rejected when the grid is constructed.
    #[validate(range(min = 0.0))]
    pub hex_size: f64,

    /// Maximum distance, in pixels, between the cursor and a candidate cell
    /// center for snapping to engage. The search for a snap *anchor* uses a
    /// slightly wider net (1.5× this value); see
    /// [HexGrid::snap_target](crate::HexGrid::snap_target).
    #[validate(range(min = 0.0))]
    pub snap_threshold: f64,

    /// Nominal canvas bounds, used only by cell validity checks. These are
    /// workspace settings, not a property of the grid math.
    #[validate]
    pub canvas: CanvasConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            hex_size: 175.0,
            snap_threshold: 200.0,
            canvas: CanvasConfig::default(),
        }
    }
}

/// The nominal pixel extent of the canvas a grid lives on. Cells whose
/// centers fall outside this rectangle are reported as invalid by
/// [HexGrid::is_valid_hex](crate::HexGrid::is_valid_hex).
#[cfg_attr(feature = "js", wasm_bindgen)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CanvasConfig {
    #[validate(range(min = 0.0))]
    pub width: f64,
    #[validate(range(min = 0.0))]
    pub height: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 5000.0,
            height: 5000.0,
        }
    }
}
