use crate::hex::HexPoint;
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign, Sum,
};
use serde::{Deserialize, Serialize};
#[cfg(feature = "js")]
use wasm_bindgen::prelude::*;

/// A 2D point in canvas space. See module-level docs in [crate::hex] for a
/// description of what canvas space means.
#[cfg_attr(feature = "js", wasm_bindgen)]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    /// Euclidean distance to another point
    pub fn distance_to(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

/// A single cell of the tessellation: its grid coordinate paired with its
/// pixel center. This is what neighbor queries and overlay enumeration hand
/// to the canvas, which renders with the pixel value and tracks identity
/// with the grid value.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub position: HexPoint,
    pub center: Point2,
}

/// The visible portion of the canvas, in canvas coordinates. `offset_x`/
/// `offset_y` are the top-left corner (i.e. the current pan), `width`/
/// `height` the on-screen extent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// The two endpoints of the shared edge between two adjacent cells, for
/// rendering a connector or boundary highlight. The endpoints are a
/// perpendicular-offset approximation of the true edge, which is plenty for
/// visual purposes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeConnection {
    pub point1: Point2,
    pub point2: Point2,
}
