//! Hexgrid provides coordinate types for hexagon grids, and the conversions
//! between them: cube, axial, fractional, pixel, offset and doubled
//! coordinates. Everything here is plain value math; there's no grid storage.
//!
//! ```
//! use hexgrid::{Hex, Layout, LayoutConfig, Point, Topology};
//!
//! let layout = Layout::from_config(LayoutConfig {
//!     topology: Topology::Flat,
//!     size: Point::new(10.0, 10.0),
//!     origin: Point::new(0.0, 0.0),
//! })
//! .unwrap();
//!
//! let hex = Hex::new(3, -1, -2).unwrap();
//! let center = layout.hex_to_pixel(hex);
//! assert_eq!(layout.pixel_to_hex(center), hex);
//! assert_eq!(hex.distance(Hex::ORIGIN), 3);
//! ```
//!
//! Start at [Hex] for grid algebra, and [Layout] for going to and from
//! pixels. [OffsetCoord] and [DoubledCoord] cover rectangular storage.

mod error;
mod hex;
mod util;

pub use crate::{
    error::CoordError,
    hex::{
        hex_linedraw, DoubledCoord, FractionalHex, Hex, Layout, LayoutConfig,
        OffsetCoord, Orientation, Parity, Point, Topology,
    },
};

// Used by the timed! macro
#[doc(hidden)]
pub use log as __log;
