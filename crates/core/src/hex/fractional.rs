//! Real-valued cube coordinates, and snapping them back onto the grid.

use crate::{error::CoordError, hex::Hex};
use anyhow::bail;
use derive_more::Display;
use log::trace;
use serde::{Deserialize, Serialize};

/// Offset added to both endpoints of a line before interpolating. Samples that
/// land exactly on the side between two hexes get pushed consistently to one
/// side, instead of flip-flopping with float error.
const LINE_NUDGE: FractionalHex = FractionalHex {
    q: 1e-6,
    r: 1e-6,
    s: -2e-6,
};

/// A point in the hex plane that doesn't necessarily fall on a hex center. This
/// looks just like [Hex], but uses `f64`s for each component.
///
/// The components still sum to (approximately) zero. Since float error makes
/// an exact check useless, the constraint is that `q + r + s` **rounds** to
/// zero.
#[derive(Copy, Clone, Debug, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "FractionalHex(q: {}, r: {}, s: {})", q, r, s)]
#[serde(into = "UncheckedFractionalHex", try_from = "UncheckedFractionalHex")]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// Construct a new fractional hex. Returns
    /// [CoordError::InvalidFractionalHex] if `q + r + s` doesn't round to `0`
    /// (including if any component is NaN).
    pub fn new(q: f64, r: f64, s: f64) -> anyhow::Result<Self> {
        if (q + r + s).round() != 0.0 {
            bail!(CoordError::InvalidFractionalHex { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Construct a fractional hex from an axial pair, deriving `s = -q - r`
    pub fn new_axial(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Get the hex that contains this point.
    ///
    /// Each component gets rounded to the nearest integer on its own, which
    /// may leave a triple that doesn't sum to zero. The component that moved
    /// the most while rounding is then thrown out and recomputed from the
    /// other two. Ties go to `s` first, then `r`: `q` is only recomputed if
    /// its change is strictly the largest.
    ///
    /// <https://www.redblobgames.com/grids/hexagons/#rounding>
    pub fn hex_round(self) -> Hex {
        let qi = self.q.round();
        let ri = self.r.round();
        let si = self.s.round();
        let q_diff = (qi - self.q).abs();
        let r_diff = (ri - self.r).abs();
        let s_diff = (si - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            Hex::new_axial((-ri - si) as i32, ri as i32)
        } else if r_diff > s_diff {
            Hex::new_axial(qi as i32, (-qi - si) as i32)
        } else {
            // s gets recomputed, which Hex does for us
            Hex::new_axial(qi as i32, ri as i32)
        }
    }

    /// Linearly interpolate between this point and another. `fraction` of
    /// `0.0` gives this point, `1.0` gives `other`.
    pub fn hex_lerp(self, other: FractionalHex, fraction: f64) -> FractionalHex {
        Self {
            q: self.q * (1.0 - fraction) + other.q * fraction,
            r: self.r * (1.0 - fraction) + other.r * fraction,
            s: self.s * (1.0 - fraction) + other.s * fraction,
        }
    }

    fn nudge(self) -> FractionalHex {
        Self {
            q: self.q + LINE_NUDGE.q,
            r: self.r + LINE_NUDGE.r,
            s: self.s + LINE_NUDGE.s,
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self {
            q: hex.q().into(),
            r: hex.r().into(),
            s: hex.s().into(),
        }
    }
}

/// Get every hex along the straight line between two hexes. For `N` steps
/// between the endpoints, the line is sampled at `N + 1` evenly spaced points,
/// and each sample is rounded to its hex. The output always starts with
/// `start` and ends with `end`, and each hex is adjacent to the one before it.
///
/// <https://www.redblobgames.com/grids/hexagons/#line-drawing>
pub fn hex_linedraw(start: Hex, end: Hex) -> Vec<Hex> {
    let steps = start.distance(end);
    trace!("Drawing line {} -> {} in {} steps", start, end, steps);

    let start = FractionalHex::from(start).nudge();
    let end = FractionalHex::from(end).nudge();
    let step = 1.0 / f64::from(steps.max(1));
    (0..=steps)
        .map(|i| start.hex_lerp(end, step * f64::from(i)).hex_round())
        .collect()
}

/// Serialized form of [FractionalHex]. See `UncheckedHex` for why this exists.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename = "FractionalHex")]
struct UncheckedFractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl From<FractionalHex> for UncheckedFractionalHex {
    fn from(hex: FractionalHex) -> Self {
        Self {
            q: hex.q,
            r: hex.r,
            s: hex.s,
        }
    }
}

impl TryFrom<UncheckedFractionalHex> for FractionalHex {
    type Error = anyhow::Error;

    fn try_from(value: UncheckedFractionalHex) -> Result<Self, Self::Error> {
        Self::new(value.q, value.r, value.s)
    }
}
