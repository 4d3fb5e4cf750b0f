//! hexcoord is a coordinate library for hexagonal grids. It covers the cube
//! coordinate system and its algebra (neighbors, distances, etc.), conversion
//! between hexes and pixels for pointy- or flat-topped layouts, and conversion
//! to and from the `(row, col)` offset coordinates used to store a hex grid in
//! a rectangular array. Drawing, storing cell contents, and pathfinding are up
//! to you; this crate just does the coordinate math.
//!
//! ```
//! use hexcoord::{Hex, Layout, OrientationKind, Parity, Point};
//!
//! let layout = Layout::new(
//!     OrientationKind::Pointy,
//!     Parity::Even,
//!     Point::new(10.0, 10.0),
//!     Point::ORIGIN,
//! )
//! .unwrap();
//!
//! let hex = Hex::new(1, -1, 0).unwrap();
//! let center = layout.hex_to_pixel(hex);
//! assert_eq!(layout.pixel_to_hex(center).unwrap(), hex);
//! assert_eq!(hex.distance_to(Hex::ORIGIN), 1);
//! ```
//!
//! See [hex] for a description of the coordinate systems.

mod error;
pub mod hex;
mod layout;

pub use crate::{
    error::{HexError, Result},
    hex::{
        direction, Hex, HexCoordinateValue, HexDirection, HexFrac, HexOff,
        Parity, HEX_DIM, HEX_DIRECTIONS,
    },
    layout::{Layout, LayoutConfig, Orientation, OrientationKind, Point},
};
