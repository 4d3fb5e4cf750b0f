//! Offset coordinates, for storing a hex grid in a plain rectangular array.
//!
//! Every other row (for pointy-topped hexes) or column (for flat-topped
//! hexes) gets shoved half a cell over so that the array lines up with the
//! hex grid. [Parity] picks which ones get shoved.
//!
//! See https://www.redblobgames.com/grids/hexagons/#conversions-offset

use crate::{
    error::{HexError, Result},
    hex::unit::{Hex, HexCoordinateValue},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Which rows/columns get pushed half a cell over in an offset grid.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Parity {
    /// Even rows/columns are shoved. Numerically `+1`.
    Even,
    /// Odd rows/columns are shoved. Numerically `-1`.
    Odd,
}

impl Parity {
    /// The numeric form of this parity, as it appears in the offset formulas
    pub fn sign(self) -> i32 {
        match self {
            Self::Even => 1,
            Self::Odd => -1,
        }
    }

    /// Half of `x`, nudged by this parity when `x` is odd. This is the shear
    /// applied to every other row/column.
    fn shift(self, x: i32) -> i32 {
        // x & 1 is 0 or 1 even for negative x, so the numerator is always
        // even. That makes floor and truncating division agree, but
        // div_euclid says what we mean
        (x + self.sign() * (x & 1)).div_euclid(2)
    }
}

impl Default for Parity {
    fn default() -> Self {
        Self::Even
    }
}

impl TryFrom<i32> for Parity {
    type Error = HexError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::Even),
            -1 => Ok(Self::Odd),
            _ => Err(HexError::InvalidArgument {
                what: "parity",
                value,
            }),
        }
    }
}

/// A cell address in a rectangular array that stores a hex grid. Any pair of
/// integers is a valid address, but which hex it refers to depends on the
/// layout's orientation and [Parity].
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", row, col)]
pub struct HexOff {
    pub row: i32,
    pub col: i32,
}

impl HexOff {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Convert a column-offset address (flat-topped hexes) back to a hex
    pub fn to_hex_q(self, parity: Parity) -> Hex {
        let q = self.col;
        let r = self.row - parity.shift(self.col);
        Hex::new_axial(q, r)
    }

    /// Convert a row-offset address (pointy-topped hexes) back to a hex
    pub fn to_hex_r(self, parity: Parity) -> Hex {
        let q = self.col - parity.shift(self.row);
        let r = self.row;
        Hex::new_axial(q, r)
    }
}

impl Hex {
    /// Get this hex's address in a column-offset grid (flat-topped hexes)
    pub fn to_offset_q(self, parity: Parity) -> HexOff {
        let col = self.q();
        let row = self.r() + parity.shift(self.q());
        HexOff::new(row, col)
    }

    /// Get this hex's address in a row-offset grid (pointy-topped hexes)
    pub fn to_offset_r(self, parity: Parity) -> HexOff {
        let col = self.q() + parity.shift(self.r());
        let row = self.r();
        HexOff::new(row, col)
    }
}
