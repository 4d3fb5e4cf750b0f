//! The 6 unit steps between adjacent hexes.

use crate::{
    error::{HexError, Result},
    hex::unit::Hex,
};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Number of sides (and corners, and neighbors) on a hex
pub const HEX_DIM: usize = 6;

/// The unit vector for each direction, in index order. Consecutive entries
/// are 60° apart, and entries `i` and `(i + 3) % 6` point in opposite
/// directions. Lots of callers rely on that ordering, so don't shuffle it.
pub const HEX_DIRECTIONS: [Hex; HEX_DIM] = [
    Hex::new_axial(1, 0),
    Hex::new_axial(1, -1),
    Hex::new_axial(0, -1),
    Hex::new_axial(-1, 0),
    Hex::new_axial(-1, 1),
    Hex::new_axial(0, 1),
];

/// Get the unit vector for the direction at `index`. Returns an error if the
/// index isn't in `[0, 6)`.
pub fn direction(index: usize) -> Result<Hex> {
    HEX_DIRECTIONS
        .get(index)
        .copied()
        .ok_or(HexError::OutOfRange {
            what: "direction",
            index,
        })
}

/// The 6 directions in which hexes can line up side-to-side, named by the
/// cube component that each one holds constant. Variant order matches
/// [HEX_DIRECTIONS], so `dir as usize` is the direction index.
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HexDirection {
    /// `(1, 0, -1)`
    PlusQMinusS,
    /// `(1, -1, 0)`
    PlusQMinusR,
    /// `(0, -1, 1)`
    PlusSMinusR,
    /// `(-1, 0, 1)`
    PlusSMinusQ,
    /// `(-1, 1, 0)`
    PlusRMinusQ,
    /// `(0, 1, -1)`
    PlusRMinusS,
}

impl HexDirection {
    /// All directions, in index order.
    pub const ALL: [Self; HEX_DIM] = [
        Self::PlusQMinusS,
        Self::PlusQMinusR,
        Self::PlusSMinusR,
        Self::PlusSMinusQ,
        Self::PlusRMinusQ,
        Self::PlusRMinusS,
    ];

    /// Get the direction with the given index. Returns an error if the index
    /// isn't in `[0, 6)`.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or(HexError::OutOfRange {
            what: "direction",
            index,
        })
    }

    /// Index of this direction within [HEX_DIRECTIONS]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get a unit vector that would move a hex one step in this direction
    pub fn to_hex(self) -> Hex {
        HEX_DIRECTIONS[self.index()]
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + HEX_DIM / 2) % HEX_DIM]
    }

    /// Rotate this direction by the given number of 60° steps, in index
    /// order. Negative steps go backwards.
    pub fn rotate(self, steps: isize) -> Self {
        let index =
            (self.index() as isize + steps).rem_euclid(HEX_DIM as isize);
        Self::ALL[index as usize]
    }
}

impl From<HexDirection> for Hex {
    fn from(direction: HexDirection) -> Self {
        direction.to_hex()
    }
}
