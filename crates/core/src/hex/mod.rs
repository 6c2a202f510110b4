//! This module holds the coordinate types for hexagon grids, and every
//! conversion between them.
//!
//! ## Coordinate Systems
//!
//! ### Cube Coordinates
//!
//! The canonical address of a hexagon is a [Hex], which uses the [cube
//! coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each coordinate has three integer components `q`, `r` and `s`, on three
//! axes 120° apart. **For every hex, `q + r + s = 0`.** That constraint is
//! checked once, when the value is built, and every operation on [Hex] keeps
//! it intact, so it never has to be checked again.
//!
//! Axial coordinates are just the `(q, r)` pair of a cube coordinate, with `s`
//! left implied. [Hex::new_axial] builds a hex that way and can't fail.
//!
//! ### Fractional Coordinates
//!
//! A [FractionalHex] is a cube coordinate with real-valued components. These
//! come out of pixel-to-hex conversion and line interpolation, and can be
//! snapped to the containing hex with [FractionalHex::hex_round].
//!
//! ### Pixel Coordinates
//!
//! A [Layout] maps hexes onto a 2D plane of [Point]s and back. The y axis
//! points down, so angles increase clockwise. A layout combines:
//!
//! - An [Orientation], either [Orientation::POINTY] or [Orientation::FLAT]
//! - A size, which scales each axis independently. A negative `size.y` flips
//!   the vertical axis.
//! - An origin, the pixel position of the center of [Hex::ORIGIN]
//!
//! ### Offset and Doubled Coordinates
//!
//! [OffsetCoord] and [DoubledCoord] are `(col, row)` addressing schemes that
//! are friendlier for storage (e.g. rectangular arrays). Neither value knows
//! how it should be interpreted: the same pair means a different hex depending
//! on the [Topology] (and for offset coordinates, the [Parity]) used to read
//! it. Both convert losslessly to and from [Hex].

mod cube;
mod doubled;
mod fractional;
mod layout;
mod offset;

pub use self::{cube::*, doubled::*, fractional::*, layout::*, offset::*};
