//! This sub-module contains the basic units of the hex coordinate system.
//! See the parent module documentation for more info on the coordinate
//! system.

use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Mul, MulAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::ops;
use strum::{EnumIter, IntoEnumIterator};
#[cfg(feature = "js")]
use wasm_bindgen::prelude::*;

/// A cell coordinate in the hex grid. See the module-level docs for a
/// description of the coordinate system.
///
/// By definition `q + r + s = 0` for every cell, so this struct only stores
/// `q` and `r`; `s` is derived as needed, which saves a third of the memory
/// and makes the invariant impossible to violate for stored values.
#[cfg_attr(feature = "js", wasm_bindgen)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct HexPoint {
    q: i32,
    r: i32,
}

#[cfg_attr(feature = "js", wasm_bindgen)]
impl HexPoint {
    #[cfg_attr(feature = "js", wasm_bindgen(getter))]
    pub fn q(&self) -> i32 {
        self.q
    }

    #[cfg_attr(feature = "js", wasm_bindgen(getter))]
    pub fn r(&self) -> i32 {
        self.r
    }

    #[cfg_attr(feature = "js", wasm_bindgen(getter))]
    pub fn s(&self) -> i32 {
        -(self.q + self.r)
    }

    /// Calculate the path distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the cells are equal,
    /// 1 if they are adjacent, 2 if there is one cell between them, etc.
    pub fn distance_to(&self, other: HexPoint) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        (self.q() - other.q())
            .abs()
            .max((self.r() - other.r()).abs())
            .max((self.s() - other.s()).abs()) as u32
    }
}

impl HexPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Construct a new cell coordinate with the given q and r. Since
    /// `q+r+s=0` for all cells, s is derived from q & r.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a cell coordinate from all three cube components,
    /// validating that they fall on the plane `q+r+s=0`. Returns an error if
    /// they don't.
    pub fn from_cube(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if q + r + s != 0 {
            Err(anyhow!(
                "invalid cell coordinate ({}, {}, {}); \
                 must be on the plane q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::new(q, r))
        }
    }

    /// Get the cell directly adjacent to this one in the given direction
    pub fn adjacent(self, direction: HexDirection) -> HexPoint {
        self + direction.to_vector()
    }

    /// Get an iterator of all the cells directly adjacent to this one. The
    /// iterator always contains exactly 6 values, in the fixed order of
    /// [HexDirection::ALL].
    pub fn adjacents(self) -> impl Iterator<Item = HexPoint> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Enumerate the cells on the straight hex line from this cell to
    /// another, **excluding** this cell and **including** the destination.
    /// Adjacent cells yield a single-element line; equal cells yield an
    /// empty one. Interpolates in cube space and rounds each sample, so
    /// every consecutive pair in the output is adjacent.
    pub fn line_to(self, other: HexPoint) -> Vec<HexPoint> {
        // https://www.redblobgames.com/grids/hexagons/#line-drawing
        let steps = self.distance_to(other);
        (1..=steps)
            .map(|i| {
                FractionalHexPoint::lerp(self, other, i as f64 / steps as f64)
                    .round()
            })
            .collect()
    }
}

impl ops::Add<HexVector> for HexPoint {
    type Output = HexPoint;

    fn add(self, rhs: HexVector) -> Self::Output {
        Self::new(self.q + rhs.q(), self.r + rhs.r())
    }
}

/// A cell coordinate with fractional components: a point somewhere *within*
/// the hex grid, not necessarily at a cell center. These appear as the
/// intermediate value when converting a continuous pixel position to a
/// discrete cell; [Self::round] resolves one to the cell that contains it.
#[derive(Copy, Clone, Debug, Display)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct FractionalHexPoint {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHexPoint {
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Linearly interpolate between two cell centers in cube space.
    /// `t = 0` is `from`, `t = 1` is `to`.
    pub fn lerp(from: HexPoint, to: HexPoint, t: f64) -> Self {
        let q = from.q() as f64 + (to.q() - from.q()) as f64 * t;
        let r = from.r() as f64 + (to.r() - from.r()) as f64 * t;
        Self::new(q, r)
    }

    /// Resolve this fractional coordinate to the discrete cell containing
    /// it. Rounds all three components independently, then recomputes the
    /// one with the largest rounding error from the other two so the output
    /// still satisfies `q+r+s=0`. Errors are compared with strict `>` in
    /// q, r, s order, so q survives ties with r, and r survives ties with s.
    pub fn round(self) -> HexPoint {
        // https://www.redblobgames.com/grids/hexagons/#rounding
        let rq = self.q.round();
        let rr = self.r.round();
        let rs = self.s.round();
        let dq = (rq - self.q).abs();
        let dr = (rr - self.r).abs();
        let ds = (rs - self.s).abs();

        if dq > dr && dq > ds {
            HexPoint::new((-rr - rs) as i32, rr as i32)
        } else if dr > ds {
            HexPoint::new(rq as i32, (-rq - rs) as i32)
        } else {
            // Correcting s is implicit: stored coordinates derive s from
            // q and r
            HexPoint::new(rq as i32, rr as i32)
        }
    }
}

/// A vector in the hex grid. This is a `(q, r, s)` kind of vector, not a
/// list vector: it represents a positional translation between cells. Like
/// [HexPoint], `q+r+s` always equals 0, so only two components are stored.
#[derive(
    Copy, Clone, Debug, Display, Add, Sub, Mul, AddAssign, SubAssign,
    MulAssign,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct HexVector {
    q: i32,
    r: i32,
}

impl HexVector {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -(self.q + self.r)
    }
}

/// The 6 directions in which hex cells line up side-to-side. For any given
/// cell, a direction can represent two useful things:
///
/// - Direction from the cell center to the midpoint of one of its sides
/// - Direction to a neighboring cell's center
///
/// The declaration order is a contract: neighbor enumeration, the snapping
/// search, and overlay consumers all see neighbors in exactly this order.
/// Compass names assume canvas coordinates (y grows downward), with pointy
/// topped tiles.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    /// East
    E,
    /// Northeast
    NE,
    /// Northwest
    NW,
    /// West
    W,
    /// Southwest
    SW,
    /// Southeast
    SE,
}

impl HexDirection {
    /// All six directions, in the fixed contract order (matches the
    /// declaration order used by [strum]'s iterator).
    pub const ALL: [Self; 6] =
        [Self::E, Self::NE, Self::NW, Self::W, Self::SW, Self::SE];

    /// Get a vector offset that would move a cell coordinate one step in
    /// this direction
    pub fn to_vector(self) -> HexVector {
        match self {
            Self::E => HexVector::new(1, 0),
            Self::NE => HexVector::new(1, -1),
            Self::NW => HexVector::new(0, -1),
            Self::W => HexVector::new(-1, 0),
            Self::SW => HexVector::new(-1, 1),
            Self::SE => HexVector::new(0, 1),
        }
    }
}
