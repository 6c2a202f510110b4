//! Offset coordinates: each alternate row or column is shoved over by half a
//! hex, so the grid fits into a rectangle.
//!
//! <https://www.redblobgames.com/grids/hexagons/#coordinates-offset>

use crate::{
    error::CoordError,
    hex::{Hex, Topology},
};
use anyhow::bail;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Which set of alternate rows/columns gets shoved. For a flat-top grid,
/// [Parity::Even] means the even columns are shoved down; [Parity::Odd] means
/// the odd ones are. For pointy-top, same thing but rows shoved right.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    strum::Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// `+1` for even, `-1` for odd. This is the sign applied to the half-hex
    /// shift in the conversion formulas.
    pub fn sign(self) -> i32 {
        match self {
            Self::Even => 1,
            Self::Odd => -1,
        }
    }
}

impl TryFrom<i32> for Parity {
    type Error = anyhow::Error;

    /// Convert the integer form (`+1` or `-1`) to a parity. Anything else is
    /// a [CoordError::InvalidParity].
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Even),
            -1 => Ok(Self::Odd),
            _ => bail!(CoordError::InvalidParity(value)),
        }
    }
}

/// A `(col, row)` position on an offset grid. Any pair is a valid position,
/// but it only identifies a hex in combination with a [Topology] and a
/// [Parity].
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
#[display(fmt = "OffsetCoord(col: {}, row: {})", col, row)]
pub struct OffsetCoord {
    pub col: i32,
    pub row: i32,
}

impl OffsetCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert a hex to a flat-top offset position, where columns are shoved
    /// vertically
    pub fn flat_top_from_cube(hex: Hex, parity: Parity) -> Self {
        let q = hex.q();
        let r = hex.r();
        Self {
            col: q,
            row: r + (q + parity.sign() * (q & 1)) / 2,
        }
    }

    /// Inverse of [Self::flat_top_from_cube]
    pub fn flat_top_to_cube(self, parity: Parity) -> Hex {
        let q = self.col;
        let r = self.row - (self.col + parity.sign() * (self.col & 1)) / 2;
        Hex::new_axial(q, r)
    }

    /// Convert a hex to a pointy-top offset position, where rows are shoved
    /// horizontally
    pub fn pointy_top_from_cube(hex: Hex, parity: Parity) -> Self {
        let q = hex.q();
        let r = hex.r();
        Self {
            col: q + (r + parity.sign() * (r & 1)) / 2,
            row: r,
        }
    }

    /// Inverse of [Self::pointy_top_from_cube]
    pub fn pointy_top_to_cube(self, parity: Parity) -> Hex {
        let q = self.col - (self.row + parity.sign() * (self.row & 1)) / 2;
        let r = self.row;
        Hex::new_axial(q, r)
    }

    /// Convert a hex to an offset position, using whichever variant matches
    /// the topology
    pub fn from_cube(hex: Hex, topology: Topology, parity: Parity) -> Self {
        match topology {
            Topology::Flat => Self::flat_top_from_cube(hex, parity),
            Topology::Pointy => Self::pointy_top_from_cube(hex, parity),
        }
    }

    pub fn to_cube(self, topology: Topology, parity: Parity) -> Hex {
        match topology {
            Topology::Flat => self.flat_top_to_cube(parity),
            Topology::Pointy => self.pointy_top_to_cube(parity),
        }
    }
}
