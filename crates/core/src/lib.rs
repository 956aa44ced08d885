//! Tessera is the hexagonal tessellation engine behind the Hexies canvas.
//! This crate contains all the core grid geometry: pixel↔hex coordinate
//! conversion, neighbor and adjacency queries, snap-to-grid placement
//! assistance, and grid overlay enumeration. Presentation layers (the canvas
//! itself) are implemented elsewhere.
//!
//! ```
//! use tessera::{GridConfig, HexGrid};
//!
//! let grid = HexGrid::new(GridConfig::default()).unwrap();
//! let cell = grid.pixel_to_hex(312.0, -88.5);
//! let center = grid.hex_to_pixel(cell);
//! // From here the canvas can render the cell, snap a dragged item to
//! // `center`, etc.
//! # let _ = center;
//! ```
//!
//! See [GridConfig] for details on how the grid can be customized.

mod config;
mod hex;
#[cfg(feature = "js")]
mod js;
mod tessellation;
mod util;

pub use crate::{
    config::{CanvasConfig, GridConfig},
    hex::{
        FractionalHexPoint, HexDirection, HexPoint, HexPointIndexMap,
        HexPointMap, HexPointSet, HexVector, Region,
    },
    tessellation::{
        EdgeConnection, GridCell, HexDimensions, HexGrid, Overlap, Placement,
        Point2, SnapTarget, TessellationReport, Viewport,
    },
};
#[cfg(feature = "svg")]
pub use crate::tessellation::svg::draw_overlay;
