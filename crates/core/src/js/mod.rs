//! JS-compatibility code. This code is meant for Wasm contexts, where the
//! web canvas drives the grid from TS but the geometry itself runs in Rust.
//! The simple scalar conversions are exposed directly on
//! [HexGrid](crate::HexGrid) via `wasm_bindgen`; this module is the home
//! for everything that has to cross the boundary through `JsValue` (configs
//! and the list/report shaped operations).
//!
//! You probably won't ever want to enable this feature when including this
//! crate in another Rust project. Instead, use `wasm-pack` to build the
//! `tessera-wasm` crate into an npm package, then import that into your JS
//! project.

mod util;

use crate::{
    config::GridConfig,
    js::util::ResultExt,
    tessellation::{HexGrid, Placement, Point2, Viewport},
};
use wasm_bindgen::prelude::*;

/// Executed when the Wasm module is first loaded
#[wasm_bindgen(start)]
pub fn main() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    wasm_logger::init(wasm_logger::Config::default());
}

/// Validate the given config and return it as a strictly typed JS object.
/// Any missing values will be populated with defaults. If the given value
/// fails to deserialize, or has any invalid values, this will fail.
#[wasm_bindgen]
pub fn validate_grid_config(
    input: JsValue,
) -> Result<GridConfigObject, JsValue> {
    util::validate_config::<GridConfig, GridConfigObject>(input)
}

/// Build a grid from the given config. The config is given as a JS object;
/// it will be deserialized and validated, and if either of those fail this
/// will return an error.
#[wasm_bindgen]
pub fn build_grid(config: GridConfigObject) -> Result<HexGrid, JsValue> {
    // Deserialize the config JS object into a Rust value
    let config: GridConfig = JsValue::into_serde(&config).into_js()?;
    // This will validate the config
    HexGrid::new(config).into_js()
}

/// Find the cell a dragged item should snap to, if any. `placements` is the
/// canvas's current item list as a JS array; the return value is either a
/// `{position, anchor}` object or `undefined`.
#[wasm_bindgen]
pub fn snap_target(
    grid: &HexGrid,
    x: f64,
    y: f64,
    placements: PlacementArray,
) -> Result<JsValue, JsValue> {
    let placements: Vec<Placement> =
        JsValue::into_serde(&placements).into_js()?;
    let target = grid.snap_target(Point2 { x, y }, &placements);
    JsValue::from_serde(&target).into_js()
}

/// Enumerate the overlay cells for a viewport, as a JS array of
/// `{position, center}` objects.
#[wasm_bindgen]
pub fn grid_overlay(
    grid: &HexGrid,
    viewport: JsValue,
) -> Result<JsValue, JsValue> {
    let viewport: Viewport = JsValue::into_serde(&viewport).into_js()?;
    JsValue::from_serde(&grid.grid_overlay(&viewport)).into_js()
}

/// Validate a full set of placements, returning the report as a JS object
#[wasm_bindgen]
pub fn validate_tessellation(
    grid: &HexGrid,
    placements: PlacementArray,
) -> Result<JsValue, JsValue> {
    let placements: Vec<Placement> =
        JsValue::into_serde(&placements).into_js()?;
    JsValue::from_serde(&grid.validate_tessellation(&placements)).into_js()
}

/// Render the overlay for a viewport as an SVG string, with placed items
/// filled in. This backs the canvas's export flow.
#[cfg(feature = "svg")]
#[wasm_bindgen]
pub fn overlay_svg(
    grid: &HexGrid,
    viewport: JsValue,
    placements: PlacementArray,
) -> Result<String, JsValue> {
    let viewport: Viewport = JsValue::into_serde(&viewport).into_js()?;
    let placements: Vec<Placement> =
        JsValue::into_serde(&placements).into_js()?;
    Ok(
        crate::tessellation::svg::draw_overlay(grid, &viewport, &placements)
            .to_string(),
    )
}

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"
/**
 * See description in the `extern "C"` section below
 */
export interface GridConfigObject {
    hex_size: number;
    snap_threshold: number;
    canvas: {
        width: number;
        height: number;
    };
}

/**
 * See description in the `extern "C"` section below
 */
export type PlacementArrayObject = Array<{
    id: string;
    position: { x: number; y: number };
}>;
"#;

#[wasm_bindgen]
extern "C" {
    /// A TS version of the [GridConfig] type from this crate. This needs to
    /// be mapped manually because some types change between Rust and TS.
    /// This type represents what **can be deserialized into a
    /// [GridConfig]**.
    ///
    /// **It is very important that this stays up to date with the
    /// [GridConfig] type**.
    #[wasm_bindgen(typescript_type = "GridConfigObject")]
    pub type GridConfigObject;

    /// A TS version of a list of [Placement]s, i.e. the canvas's current
    /// item snapshot.
    #[wasm_bindgen(typescript_type = "PlacementArrayObject")]
    pub type PlacementArray;
}
