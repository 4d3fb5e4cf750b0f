//! This module holds the basic types of the hex coordinate system and the
//! algebra on them.
//!
//! ## Coordinate Systems
//!
//! There are three coordinate systems in play, and this crate converts
//! between all of them.
//!
//! ### Cube Coordinates
//!
//! Cube coordinates (AKA hex coordinates) address cells of the hex grid. The
//! system is the [cube coordinate system described by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any cell,
//! all three components are integers and `q + r + s = 0`.** The grid is only
//! two-dimensional, so the third component is redundant, but keeping it
//! around makes the math symmetric: neighbors, distances, and rotations all
//! treat the three axes the same way. If you drop `s` you get axial
//! coordinates, which is exactly what [Hex::new_axial] takes.
//!
//! [Hex] is an integer cell. [HexFrac] is a fractional point anywhere in hex
//! space, which is what you get from a pixel before it's been snapped to a
//! cell with [HexFrac::round].
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates are plain 2D points ([Point](crate::Point)), used for
//! drawing hexes and for picking a hex from a mouse position. The mapping
//! between cube and pixel coordinates is a linear transform defined by the
//! [Layout](crate::Layout): which way up the hexes are (pointy or flat
//! topped), how big they are, and where the origin hex sits.
//!
//! ### Offset Coordinates
//!
//! Offset coordinates ([HexOff]) are `(row, col)` addresses into a
//! rectangular array that stores a hex grid. Every other row (pointy layouts)
//! or column (flat layouts) is shoved half a cell over, and [Parity] picks
//! whether it's the even or odd ones. Offset coordinates are handy for
//! storage, but none of the algebra works on them directly, so convert to
//! [Hex] first.

mod directions;
mod offset;
mod unit;

pub use self::{directions::*, offset::*, unit::*};
