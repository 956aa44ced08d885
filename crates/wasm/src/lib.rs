//! This crate provides WebAssembly bindings for Tessera. The [Tessera]
//! struct is the main interface; initialize a single instance of it in
//! order to do any grid operations from JS. From there, [Tessera] provides
//! functions for creating and validating grid configs and building a
//! [HexGrid] from a config. The grid itself exposes the per-pointer-event
//! conversions directly; the list-shaped operations (snapping, overlay,
//! validation) are exported as free functions by the core crate's `js`
//! feature, which this crate enables.
//!
//! You probably won't ever want to include this crate in another Rust
//! project. Instead, use `wasm-pack` to build this into an npm package,
//! then import that into your JS project.

use serde::Serialize;
use std::fmt::Display;
use tessera::{GridConfig, HexGrid};
use wasm_bindgen::{prelude::*, JsCast};

/// A top-level interface for interacting with Tessera from Wasm.
#[wasm_bindgen]
pub struct Tessera;

#[wasm_bindgen]
impl Tessera {
    /// Initialize global state (panic hook, logger). Should be called once
    /// per app instance.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        wasm_logger::init(wasm_logger::Config::default());
        Self
    }

    /// Get the default grid config as a JS object.
    pub fn default_grid_config(&self) -> GridConfigObject {
        to_object(&GridConfig::default())
    }

    /// Verify that the given JS object is a valid grid config. Return the
    /// validated config, with all defaults populated, if it's valid. Return
    /// an error if it isn't.
    pub fn validate_grid_config(
        &self,
        input: GridConfigObject,
    ) -> Result<GridConfigObject, JsValue> {
        let config: GridConfig =
            JsValue::into_serde(&input).map_err(to_js_error)?;
        // Construction runs the full config validation
        HexGrid::new(config).map_err(to_js_error)?;
        Ok(to_object(&config))
    }

    /// Build a grid from the given config, validating it first. The
    /// returned grid carries all the conversion and placement operations.
    pub fn build_grid(
        &self,
        config: GridConfigObject,
    ) -> Result<HexGrid, JsValue> {
        let config: GridConfig =
            JsValue::into_serde(&config).map_err(to_js_error)?;
        HexGrid::new(config).map_err(to_js_error)
    }
}

fn to_js_error(error: impl Display) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// Serialize a Rust value into its strictly typed JS object form. This
/// assumes the TS interface type matches the serialization format of the
/// Rust type.
fn to_object<T: Serialize, O: JsCast>(value: &T) -> O {
    // Panics only if the value shape isn't serializable (a bug)
    JsValue::from_serde(value)
        .expect("error serializing to JS object")
        .unchecked_into()
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
"#;

#[wasm_bindgen]
extern "C" {
    /// A TS version of the [GridConfig] type from the core crate. This
    /// needs to be mapped manually because some types change between Rust
    /// and TS. This type represents what **can be deserialized into a
    /// [GridConfig]**.
    ///
    /// **It is very important that this stays up to date with the
    /// [GridConfig] type**.
    #[wasm_bindgen(typescript_type = "GridConfigObject")]
    pub type GridConfigObject;
}
