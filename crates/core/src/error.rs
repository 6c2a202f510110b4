use derive_more::Display;
use std::error::Error;

/// Precondition violations surfaced by coordinate construction and
/// conversion. None of these are recoverable inside the library; they all
/// indicate a bug at the call site.
///
/// Fallible constructors return [anyhow::Result], with one of these values
/// inside. Use [anyhow::Error::downcast_ref] to inspect which one you got.
#[derive(Copy, Clone, Debug, Display, PartialEq)]
pub enum CoordError {
    /// The components of a cube coordinate don't sum to zero
    #[display(
        fmt = "Invalid hex ({}, {}, {}); q + r + s must be 0",
        q,
        r,
        s
    )]
    InvalidHex { q: i32, r: i32, s: i32 },

    /// The components of a fractional cube coordinate don't round to a zero
    /// sum
    #[display(
        fmt = "Invalid fractional hex ({}, {}, {}); q + r + s must round to 0",
        q,
        r,
        s
    )]
    InvalidFractionalHex { q: f64, r: f64, s: f64 },

    /// An offset parity other than EVEN (+1) or ODD (-1)
    #[display(fmt = "Invalid offset {}; must be EVEN (+1) or ODD (-1)", _0)]
    InvalidParity(i32),

    /// A neighbor direction outside of `[0, 5]`
    #[display(fmt = "Invalid direction {}; must be in [0, 5]", _0)]
    InvalidDirection(usize),
}

impl Error for CoordError {}
