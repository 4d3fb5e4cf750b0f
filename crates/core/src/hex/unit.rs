//! This sub-module contains the basic value types of the cube coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use crate::{
    error::{plane_sum, HexError, Result},
    hex::directions::{self, HexDirection},
};
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A trait representing any three-component value in the cube coordinate
/// system. Integer hexes and fractional hexes both implement this, which lets
/// generic code (e.g. widening, interpolation) treat them the same.
pub trait HexCoordinateValue: Sized {
    /// The primitive type of each component. Must be convertible to `f64` so
    /// it can be mathematically converted to pixel space
    type Component: Into<f64>;

    /// The `q` component of the coordinate
    fn q(&self) -> Self::Component;

    /// The `r` component of the coordinate
    fn r(&self) -> Self::Component;

    /// The `s` component of the coordinate
    fn s(&self) -> Self::Component;
}

/// A single hex cell, addressed by cube coordinates. **For every hex,
/// `q + r + s = 0`.** The fields are private so that the only ways to get a
/// hex are the checked constructor [Hex::new], the axial constructor
/// [Hex::new_axial] (which derives `s`), and arithmetic on existing hexes,
/// all of which stay on that plane.
///
/// The same type doubles as an axial coordinate: just ignore `s`.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
#[serde(try_from = "UncheckedHex", into = "UncheckedHex")]
pub struct Hex {
    q: i32,
    r: i32,
    s: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_axial(0, 0);

    /// Construct a new hex from all three cube components. Returns an error if
    /// the components don't sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self> {
        if plane_sum(q, r, s) != 0 {
            Err(HexError::InvariantViolation { q, r, s })
        } else {
            Ok(Self { q, r, s })
        }
    }

    /// Construct a new hex from axial coordinates. Since q+r+s=0 for all
    /// hexes, we can derive s from q & r.
    pub const fn new_axial(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// Multiply every component by `k`. Any integer multiple of a zero-sum
    /// triple is still zero-sum, so this can't fail.
    pub fn scale(self, k: i32) -> Self {
        self * k
    }

    /// Number of steps between this hex and the origin. The farthest hex from
    /// the origin is 2^31 steps away, which still fits.
    pub fn length(self) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // |q|+|r|+|s| is always even on the plane, so this never truncates.
        // On the plane it's twice the largest component, so half fits in u32.
        (cube_length(
            i64::from(self.q),
            i64::from(self.r),
            i64::from(self.s),
        ) / 2) as u32
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they're adjacent, 2 if there is 1 hex between them, etc.
    ///
    /// Two hexes can be up to 2^32 steps apart, so unlike [Self::length]
    /// this returns a `u64`.
    pub fn distance_to(self, other: Hex) -> u64 {
        // Subtracting in i32 could overflow for far-apart hexes
        cube_length(
            i64::from(self.q) - i64::from(other.q),
            i64::from(self.r) - i64::from(other.r),
            i64::from(self.s) - i64::from(other.s),
        ) / 2
    }

    /// Get the neighbor of this hex in the direction with the given index.
    /// See [direction](crate::direction) for the index ordering. Returns an
    /// error if the index isn't in `[0, 6)`.
    pub fn neighbor(self, index: usize) -> Result<Self> {
        Ok(self + directions::direction(index)?)
    }

    /// Get the location of the hex adjacent to this one in a particular
    /// direction. Unlike [Self::neighbor], the direction is typed so this
    /// can't fail.
    pub fn adjacent(self, direction: HexDirection) -> Self {
        self + direction.to_hex()
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// direction index order. The iterator will always contain exactly 6
    /// values.
    pub fn adjacents(self) -> impl Iterator<Item = Hex> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }
}

/// `|q| + |r| + |s|`. Each input is at most 2^32 in magnitude, so nothing
/// here can overflow.
fn cube_length(q: i64, r: i64, s: i64) -> u64 {
    q.unsigned_abs() + r.unsigned_abs() + s.unsigned_abs()
}

impl HexCoordinateValue for Hex {
    type Component = i32;

    fn q(&self) -> Self::Component {
        self.q
    }

    fn r(&self) -> Self::Component {
        self.r
    }

    fn s(&self) -> Self::Component {
        self.s
    }
}

/// An unvalidated version of [Hex]. This is only used as the serialized form
/// of a hex, so that deserialization can go through [Hex::new] and reject
/// anything off the plane.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
struct UncheckedHex {
    q: i32,
    r: i32,
    s: i32,
}

impl TryFrom<UncheckedHex> for Hex {
    type Error = HexError;

    fn try_from(value: UncheckedHex) -> Result<Self> {
        Self::new(value.q, value.r, value.s)
    }
}

impl From<Hex> for UncheckedHex {
    fn from(hex: Hex) -> Self {
        Self {
            q: hex.q,
            r: hex.r,
            s: hex.s,
        }
    }
}

/// A fractional cube coordinate. This is what you get when converting an
/// arbitrary pixel into hex space, before snapping it to a cell with
/// [HexFrac::round]. Nothing enforces `q + r + s = 0` here; it will usually
/// only hold approximately anyway because of float error.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct HexFrac {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl HexFrac {
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Linearly interpolate between this point and another. `t = 0` gives
    /// `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: HexFrac, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Snap this fractional coordinate to the nearest hex cell.
    ///
    /// Rounding each component independently can knock the result off the
    /// plane, so the component that moved the most while rounding gets
    /// recomputed from the other two. Ties are resolved in a fixed order:
    /// `q` only wins if it is strictly the worst, then `r` if it's strictly
    /// worse than `s`, otherwise `s` is recomputed. Points exactly on an edge
    /// or vertex depend on that order, so don't change it.
    ///
    /// Returns an error if any component is NaN or the nearest hex doesn't
    /// fit in `i32` components.
    pub fn round(self) -> Result<Hex> {
        // https://www.redblobgames.com/grids/hexagons/#rounding
        // f64::round goes half away from zero
        let rq = self.q.round();
        let rr = self.r.round();
        let rs = self.s.round();

        let q_diff = (rq - self.q).abs();
        let r_diff = (rr - self.r).abs();
        let s_diff = (rs - self.s).abs();

        let unrepresentable = || HexError::Unrepresentable {
            q: self.q,
            r: self.r,
            s: self.s,
        };
        let q = to_component(rq).ok_or_else(unrepresentable)?;
        let r = to_component(rr).ok_or_else(unrepresentable)?;
        let s = to_component(rs).ok_or_else(unrepresentable)?;

        // Fix up in integer space, then narrow. The recomputed component can
        // land outside i32 even when all three rounded ones fit.
        let (q, r, s) = if q_diff > r_diff && q_diff > s_diff {
            log::trace!("Rounding {}: recomputing q", self);
            (-r - s, r, s)
        } else if r_diff > s_diff {
            log::trace!("Rounding {}: recomputing r", self);
            (q, -q - s, s)
        } else {
            log::trace!("Rounding {}: recomputing s", self);
            (q, r, -q - r)
        };
        match (i32::try_from(q), i32::try_from(r), i32::try_from(s)) {
            // One component was just derived from the other two, so we're on
            // the plane by construction
            (Ok(q), Ok(r), Ok(s)) => Ok(Hex { q, r, s }),
            _ => Err(unrepresentable()),
        }
    }
}

/// Convert an already-rounded float to an integer, or `None` if it's NaN or
/// outside the `i32` range. Checked before casting since `as` saturates.
fn to_component(value: f64) -> Option<i64> {
    if value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Some(value as i64)
    } else {
        None
    }
}

impl HexCoordinateValue for HexFrac {
    type Component = f64;

    fn q(&self) -> Self::Component {
        self.q
    }

    fn r(&self) -> Self::Component {
        self.r
    }

    fn s(&self) -> Self::Component {
        self.s
    }
}

impl From<Hex> for HexFrac {
    fn from(hex: Hex) -> Self {
        Self::new(hex.q.into(), hex.r.into(), hex.s.into())
    }
}
