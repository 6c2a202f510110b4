//! Doubled coordinates: one axis advances by 2 per hex, so neighbors along the
//! other axis land on integer positions without any per-row shoving.
//!
//! <https://www.redblobgames.com/grids/hexagons/#coordinates-doubled>

use crate::hex::{Hex, Topology};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A `(col, row)` position on a doubled grid. Positions produced from a hex
/// always have `col + row` even. The inverse conversions divide by two, so
/// positions with an odd sum don't map back exactly.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[display(fmt = "DoubledCoord(col: {}, row: {})", col, row)]
pub struct DoubledCoord {
    pub col: i32,
    pub row: i32,
}

impl DoubledCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Flat-top: rows are doubled
    pub fn flat_top_from_cube(hex: Hex) -> Self {
        Self {
            col: hex.q(),
            row: 2 * hex.r() + hex.q(),
        }
    }

    pub fn flat_top_to_cube(self) -> Hex {
        Hex::new_axial(self.col, (self.row - self.col) / 2)
    }

    /// Pointy-top: columns are doubled
    pub fn pointy_top_from_cube(hex: Hex) -> Self {
        Self {
            col: 2 * hex.q() + hex.r(),
            row: hex.r(),
        }
    }

    pub fn pointy_top_to_cube(self) -> Hex {
        Hex::new_axial((self.col - self.row) / 2, self.row)
    }

    pub fn from_cube(hex: Hex, topology: Topology) -> Self {
        match topology {
            Topology::Flat => Self::flat_top_from_cube(hex),
            Topology::Pointy => Self::pointy_top_from_cube(hex),
        }
    }

    pub fn to_cube(self, topology: Topology) -> Hex {
        match topology {
            Topology::Flat => self.flat_top_to_cube(),
            Topology::Pointy => self.pointy_top_to_cube(),
        }
    }
}
