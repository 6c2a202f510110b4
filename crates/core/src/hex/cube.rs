//! Integer cube coordinates and the algebra over them.

use crate::error::CoordError;
use anyhow::bail;
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

/// Unit vectors to each of the 6 adjacent hexes, indexed by direction. Index 0
/// points along +q, and the rest proceed clockwise (in a y-down plane).
const DIRECTIONS: [Hex; 6] = [
    Hex::new_axial(1, 0),
    Hex::new_axial(1, -1),
    Hex::new_axial(0, -1),
    Hex::new_axial(-1, 0),
    Hex::new_axial(-1, 1),
    Hex::new_axial(0, 1),
];

/// Vectors to each of the 6 diagonal hexes, i.e. the hexes that share a single
/// vertex with the source hex, but no side. Each changes one component by ±2
/// and the other two by ∓1.
const DIAGONALS: [Hex; 6] = [
    Hex::new_axial(2, -1),
    Hex::new_axial(1, -2),
    Hex::new_axial(-1, -1),
    Hex::new_axial(-2, 1),
    Hex::new_axial(-1, 2),
    Hex::new_axial(1, 1),
];

/// A single hexagon on the grid, addressed by its cube coordinate. See the
/// module-level docs for a description of the coordinate system.
///
/// ## Implementation
///
/// Since `q + r + s = 0` for every valid hex, we only need to store `q` and
/// `r`. `s` is derived whenever it's needed. This means the invariant can't
/// be broken after construction, and equality over `(q, r)` is the same as
/// equality over all three components.
///
/// ## Operators
///
/// `+`, `-`, unary `-` and `* i32` are all component-wise, same as
/// [Self::add], [Self::subtract] and [Self::scale].
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "Hex(q: {}, r: {}, s: {})", "self.q", "self.r", "self.s()")]
#[serde(into = "UncheckedHex", try_from = "UncheckedHex")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_axial(0, 0);

    /// Construct a new hex from all three cube components. Returns
    /// [CoordError::InvalidHex] if `q + r + s != 0`. The sum is taken in
    /// `i64`, so extreme components can't overflow the check.
    pub fn new(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            bail!(CoordError::InvalidHex { q, r, s });
        }
        Ok(Self::new_axial(q, r))
    }

    /// Construct a new hex from an axial coordinate. Since `q + r + s = 0`
    /// for all hexes, `s` is derived from `q` and `r`, so this can't fail.
    /// `-q - r` must still fit in an `i32` for [Self::s] to be meaningful.
    pub const fn new_axial(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    pub fn add(self, other: Hex) -> Hex {
        self + other
    }

    pub fn subtract(self, other: Hex) -> Hex {
        self - other
    }

    /// Get the hex that is `factor` times farther from the origin than this
    /// one, in the same direction
    pub fn scale(self, factor: i32) -> Hex {
        self * factor
    }

    /// Rotate 60° around the origin, to `(-s, -q, -r)`. Which way is "left"
    /// depends on the map orientation, so you may have to swap this with
    /// [Self::rotate_right].
    pub fn rotate_left(self) -> Hex {
        Self::new_axial(-self.s(), -self.q)
    }

    /// Rotate 60° around the origin, to `(-r, -s, -q)`. The inverse of
    /// [Self::rotate_left].
    pub fn rotate_right(self) -> Hex {
        Self::new_axial(-self.r, -self.s())
    }

    /// Number of steps between this hex and the origin. This can be up to
    /// `2^31`, which is why it's unsigned.
    pub fn length(self) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // |q|+|r|+|s| is always even for a valid hex, so this is exact.
        // Summed in i64 since it can reach 2^32
        let q = i64::from(self.q);
        let r = i64::from(self.r);
        let s = -q - r;
        ((q.abs() + r.abs() + s.abs()) / 2) as u32
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they are adjacent, 2 if there is 1 hex between them, etc.
    pub fn distance(self, other: Hex) -> u32 {
        self.subtract(other).length()
    }

    /// Get the unit vector for one of the 6 neighbor directions. See
    /// [Self::neighbor] for the index rules.
    ///
    /// ## Panics
    ///
    /// Panics if `direction > 5`.
    pub fn direction(direction: usize) -> Hex {
        DIRECTIONS[direction]
    }

    /// Get the offset vector for one of the 6 diagonal directions.
    ///
    /// ## Panics
    ///
    /// Panics if `direction > 5`.
    pub fn diagonal(direction: usize) -> Hex {
        DIAGONALS[direction]
    }

    /// Get the hex adjacent to this one in the given direction. Direction `0`
    /// is `+q`, and indexes proceed clockwise from there. Indexes do **not**
    /// wrap around.
    ///
    /// ## Panics
    ///
    /// Panics if `direction > 5`. Use [Self::try_neighbor] if the index comes
    /// from somewhere you don't control.
    pub fn neighbor(self, direction: usize) -> Hex {
        self + Self::direction(direction)
    }

    /// Same as [Self::neighbor], but returns [CoordError::InvalidDirection]
    /// instead of panicking for an index outside `[0, 5]`
    pub fn try_neighbor(self, direction: usize) -> anyhow::Result<Hex> {
        match DIRECTIONS.get(direction) {
            Some(vector) => Ok(self + *vector),
            None => bail!(CoordError::InvalidDirection(direction)),
        }
    }

    /// Get the hex in the given diagonal direction, i.e. one that shares a
    /// vertex with this hex but no side.
    ///
    /// ## Panics
    ///
    /// Panics if `direction > 5`.
    pub fn diagonal_neighbor(self, direction: usize) -> Hex {
        self + Self::diagonal(direction)
    }

    /// Same as [Self::diagonal_neighbor], but returns
    /// [CoordError::InvalidDirection] instead of panicking
    pub fn try_diagonal_neighbor(self, direction: usize) -> anyhow::Result<Hex> {
        match DIAGONALS.get(direction) {
            Some(vector) => Ok(self + *vector),
            None => bail!(CoordError::InvalidDirection(direction)),
        }
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// direction order. The iterator will always contain exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        DIRECTIONS.iter().map(move |vector| self + *vector)
    }

    /// Get an iterator of the 6 diagonal neighbors of this hex, in direction
    /// order
    pub fn diagonal_neighbors(self) -> impl Iterator<Item = Hex> {
        DIAGONALS.iter().map(move |vector| self + *vector)
    }
}

/// An unvalidated mirror of [Hex]. This is only used as the serialized form,
/// so that deserialization goes through [Hex::new] and rejects anything off
/// the plane `q + r + s = 0`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename = "Hex")]
struct UncheckedHex {
    q: i32,
    r: i32,
    s: i32,
}

impl From<Hex> for UncheckedHex {
    fn from(hex: Hex) -> Self {
        Self {
            q: hex.q(),
            r: hex.r(),
            s: hex.s(),
        }
    }
}

impl TryFrom<UncheckedHex> for Hex {
    type Error = anyhow::Error;

    fn try_from(value: UncheckedHex) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    fn hex(q: i32, r: i32, s: i32) -> Hex {
        Hex::new(q, r, s).unwrap()
    }

    #[test]
    fn test_new() {
        let h = hex(1, -3, 2);
        assert_eq!((h.q(), h.r(), h.s()), (1, -3, 2));
        assert_eq!(Hex::new_axial(1, -3), h);

        let err = Hex::new(1, 1, 1).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoordError>(),
            Some(&CoordError::InvalidHex { q: 1, r: 1, s: 1 })
        );
    }

    #[test]
    fn test_new_extreme_components() {
        // Partial sums overflow i32, but the whole triple is valid
        let h = Hex::new(i32::MAX, 1, i32::MIN).unwrap();
        assert_eq!((h.q(), h.r(), h.s()), (i32::MAX, 1, i32::MIN));

        let err = Hex::new(i32::MAX, i32::MAX, 0).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoordError>(),
            Some(&CoordError::InvalidHex {
                q: i32::MAX,
                r: i32::MAX,
                s: 0
            })
        );
    }

    #[test]
    fn test_length_extreme() {
        assert_eq!(Hex::new_axial(1 << 30, 1 << 30).length(), 1 << 31);
        assert_eq!(Hex::new(i32::MAX, 1, i32::MIN).unwrap().length(), 1 << 31);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(hex(1, -3, 2).add(hex(3, -7, 4)), hex(4, -10, 6));
        assert_eq!(hex(1, -3, 2).subtract(hex(3, -7, 4)), hex(-2, 4, -2));
        assert_eq!(hex(1, -3, 2).scale(3), hex(3, -9, 6));
        assert_eq!(hex(1, -3, 2) * 3, hex(3, -9, 6));
        assert_eq!(-hex(1, -3, 2), hex(-1, 3, -2));
    }

    #[test]
    fn test_direction() {
        assert_eq!(Hex::direction(2), hex(0, -1, 1));
        assert_eq!(Hex::diagonal(3), hex(-2, 1, 1));
    }

    #[test]
    fn test_neighbor() {
        assert_eq!(hex(1, -2, 1).neighbor(2), hex(1, -3, 2));
        assert_eq!(hex(1, -2, 1).try_neighbor(2).unwrap(), hex(1, -3, 2));
        assert_eq!(hex(1, -2, 1).diagonal_neighbor(3), hex(-1, -1, 2));
    }

    #[test]
    fn test_neighbors() {
        let center = hex(2, -1, -1);
        let neighbors: Vec<Hex> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 6);
        for (i, neighbor) in neighbors.iter().enumerate() {
            assert_eq!(*neighbor, center.neighbor(i));
            assert_eq!(center.distance(*neighbor), 1);
        }
        for diagonal in center.diagonal_neighbors() {
            assert_eq!(center.distance(diagonal), 2);
        }
    }

    #[test]
    fn test_invalid_direction() {
        let err = Hex::ORIGIN.try_neighbor(6).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoordError>(),
            Some(&CoordError::InvalidDirection(6))
        );
        assert!(Hex::ORIGIN.try_diagonal_neighbor(17).is_err());
    }

    #[test]
    #[should_panic]
    fn test_neighbor_out_of_range() {
        Hex::ORIGIN.neighbor(6);
    }

    #[test]
    fn test_distance() {
        assert_eq!(hex(3, -7, 4).distance(Hex::ORIGIN), 7);
        assert_eq!(Hex::ORIGIN.distance(hex(3, -7, 4)), 7);
        assert_eq!(hex(3, -7, 4).distance(hex(3, -7, 4)), 0);
        assert_eq!(hex(-1, 1, 0).distance(hex(2, -1, -1)), 3);
        assert_eq!(hex(3, -7, 4).length(), 7);
    }

    #[test]
    fn test_rotate() {
        assert_eq!(hex(1, -3, 2).rotate_right(), hex(3, -2, -1));
        assert_eq!(hex(1, -3, 2).rotate_left(), hex(-2, -1, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(hex(1, -3, 2).to_string(), "Hex(q: 1, r: -3, s: 2)");
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &hex(1, -3, 2),
            &[
                Token::Struct { name: "Hex", len: 3 },
                Token::Str("q"),
                Token::I32(1),
                Token::Str("r"),
                Token::I32(-3),
                Token::Str("s"),
                Token::I32(2),
                Token::StructEnd,
            ],
        );

        // Anything off the plane gets rejected
        assert_de_tokens_error::<Hex>(
            &[
                Token::Struct { name: "Hex", len: 3 },
                Token::Str("q"),
                Token::I32(1),
                Token::Str("r"),
                Token::I32(1),
                Token::Str("s"),
                Token::I32(1),
                Token::StructEnd,
            ],
            "Invalid hex (1, 1, 1); q + r + s must be 0",
        );
    }
}
