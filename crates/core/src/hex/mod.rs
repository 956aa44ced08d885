//! This module holds basic types and data structures related to hexagon
//! grids.
//!
//! ## Coordinate Systems
//!
//! Tessera uses two different coordinate systems:
//!
//! ### Grid Coordinates
//!
//! Grid coordinates (AKA hex coordinates) define cells within the
//! hexagon-tiled canvas. The system is the [axial/cube coordinate system
//! defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-axial).
//!
//! **In this page's vernacular, we use "pointy topped" tiles.**
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any cell
//! coordinate, all three components are integers and `q + r + s = 0`.** The
//! redundancy makes distance and rotation math around hexagonal grids much
//! simpler, and because of the constraint only two components ever need to
//! be stored; the third can always be derived.
//!
//! ### Canvas Coordinates
//!
//! Canvas coordinates are plain 2D pixel positions on the collaboration
//! canvas: `x` grows to the right, `y` grows downward, and values are
//! unbounded reals (a dragged item can sit outside the visible viewport).
//! The canvas owns all pixel state; this crate only converts between the
//! two systems. See [HexGrid](crate::HexGrid) for the conversions.

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
