//! Conversions between hex coordinates and pixel space.

use crate::hex::{FractionalHex, Hex};
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use log::debug;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use strum::{EnumIter, EnumString};
use validator::{Validate, ValidationError};

/// `sqrt(3)`, rounded to the nearest `f64`. `f64::sqrt` isn't const, so this
/// has to be spelled out to build the orientation constants.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// A 2D point in pixel space. The y axis points down.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vector2<f64>> for Point {
    fn from(other: Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point> for Vector2<f64> {
    fn from(other: Point) -> Self {
        Vector2::new(other.x, other.y)
    }
}

/// The geometric convention for a hex grid: the 2×2 matrix that maps axial
/// coordinates to (unscaled) pixels, its inverse, and the angle of the first
/// corner (in sixths of a full turn).
///
/// There are only two orientations that make sense, [Self::POINTY] and
/// [Self::FLAT]. The coefficients of both must stay exactly as they are,
/// since rendering code may match against them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub start_angle: f64,
}

impl Orientation {
    /// Hexes with a vertex at the top; rows line up horizontally. Corners
    /// start at 30°.
    pub const POINTY: Self = Self {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    /// Hexes with a flat side on top; columns line up vertically. Corners
    /// start at 0°.
    pub const FLAT: Self = Self {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };

    /// The hex-to-pixel matrix
    pub fn forward_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.f0, self.f1, self.f2, self.f3)
    }

    /// The pixel-to-hex matrix, the inverse of [Self::forward_matrix]
    pub fn inverse_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.b0, self.b1, self.b2, self.b3)
    }
}

/// Which way up the hexes sit. Besides picking the [Orientation] for a
/// [Layout], this also picks which variant of the offset and doubled
/// conversions applies: flat-top grids shift alternate **columns**, pointy-top
/// grids shift alternate **rows**.
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
pub enum Topology {
    Flat,
    Pointy,
}

impl Topology {
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Flat => Orientation::FLAT,
            Self::Pointy => Orientation::POINTY,
        }
    }
}

/// User-facing definition of a [Layout]. Use [Layout::from_config] to turn
/// this into a layout; that validates the config first.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Orientation of the hexes
    pub topology: Topology,

    /// Scale of each axis. These are **not** the width and height of a hex;
    /// they're the distance from center to corner along each axis. They can
    /// differ, to stretch or squash hexes to fit your art. A negative `y`
    /// flips the vertical axis. Neither can be zero.
    #[validate(custom = "validate_size")]
    pub size: Point,

    /// Pixel position of the center of [Hex::ORIGIN]
    #[validate(custom = "validate_origin")]
    pub origin: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Pointy,
            size: Point::new(1.0, 1.0),
            origin: Point::new(0.0, 0.0),
        }
    }
}

fn validate_size(size: &Point) -> Result<(), ValidationError> {
    let valid = |v: f64| v.is_finite() && v != 0.0;
    if valid(size.x) && valid(size.y) {
        Ok(())
    } else {
        Err(ValidationError::new("size_zero_or_not_finite"))
    }
}

fn validate_origin(origin: &Point) -> Result<(), ValidationError> {
    if origin.x.is_finite() && origin.y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("origin_not_finite"))
    }
}

/// Mapping between hexes and pixel space. A layout is an [Orientation], plus
/// a per-axis size and an origin. See [LayoutConfig] for what each field
/// means.
///
/// Layouts are very cheap to create, so if you need a different size or
/// origin, just make a new one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    orientation: Orientation,
    size: Point,
    origin: Point,
}

impl Layout {
    /// Create a layout without any validation. A zero size here will produce
    /// infinite or NaN pixel-to-hex results. Prefer [Self::from_config] for
    /// sizes that come from outside the program.
    pub const fn new(orientation: Orientation, size: Point, origin: Point) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Initialize a new layout from a config. Returns an error if the config
    /// is invalid.
    pub fn from_config(config: LayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        debug!(
            "Using {} layout with size {} and origin {}",
            config.topology, config.size, config.origin
        );
        Ok(Self::new(
            config.topology.orientation(),
            config.size,
            config.origin,
        ))
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the pixel position of the center of a hex
    ///
    /// <https://www.redblobgames.com/grids/hexagons/#hex-to-pixel>
    pub fn hex_to_pixel(&self, hex: Hex) -> Point {
        let axial = Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        let unscaled = self.orientation.forward_matrix() * axial;
        let scaled = unscaled.component_mul(&Vector2::from(self.size));
        Point::from(scaled) + self.origin
    }

    /// Get the exact (unrounded) position of a pixel in hex space
    ///
    /// <https://www.redblobgames.com/grids/hexagons/#pixel-to-hex>
    pub fn pixel_to_fractional_hex(&self, point: Point) -> FractionalHex {
        let unscaled = Vector2::from(point - self.origin)
            .component_div(&Vector2::from(self.size));
        let axial = self.orientation.inverse_matrix() * unscaled;
        FractionalHex::new_axial(axial.x, axial.y)
    }

    /// Get the hex that contains a pixel
    pub fn pixel_to_hex(&self, point: Point) -> Hex {
        self.pixel_to_fractional_hex(point).hex_round()
    }

    /// Get the offset from a hex's center to one of its corners. Corners are
    /// numbered `0` through `5`, with `0` at the orientation's start angle.
    /// Because the angle is `start_angle - corner`, corners wind the opposite
    /// way from the neighbor directions.
    pub fn hex_corner_offset(&self, corner: usize) -> Point {
        let angle =
            2.0 * PI * (self.orientation.start_angle - corner as f64) / 6.0;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get the pixel positions of all 6 corners of a hex, in corner order
    pub fn polygon_corners(&self, hex: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(hex);
        [0, 1, 2, 3, 4, 5].map(|corner| center + self.hex_corner_offset(corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;
    use validator::ValidationErrors;

    fn layout(topology: Topology) -> Layout {
        Layout::new(
            topology.orientation(),
            Point::new(10.0, 15.0),
            Point::new(35.0, 71.0),
        )
    }

    #[test]
    fn test_sqrt_3() {
        assert_eq!(SQRT_3, 3.0f64.sqrt());
    }

    #[test]
    fn test_point_vector_conversion() {
        let v = Vector2::from(Point::new(3.0, -4.5));
        assert_eq!((v.x, v.y), (3.0, -4.5));
        assert_eq!(Point::from(v * 2.0), Point::new(6.0, -9.0));
    }

    #[test]
    fn test_orientation_inverse() {
        for topology in Topology::iter() {
            let orientation = topology.orientation();
            let product =
                orientation.forward_matrix() * orientation.inverse_matrix();
            assert_approx_eq!(product[(0, 0)], 1.0);
            assert_approx_eq!(product[(0, 1)], 0.0);
            assert_approx_eq!(product[(1, 0)], 0.0);
            assert_approx_eq!(product[(1, 1)], 1.0);
        }
    }

    #[test]
    fn test_layout_roundtrip() {
        let h = Hex::new(3, 4, -7).unwrap();
        for topology in Topology::iter() {
            let layout = layout(topology);
            assert_eq!(layout.pixel_to_hex(layout.hex_to_pixel(h)), h);
        }
    }

    #[test]
    fn test_hex_to_pixel() {
        let origin = Point::new(35.0, 71.0);
        assert_eq!(layout(Topology::Flat).hex_to_pixel(Hex::ORIGIN), origin);
        assert_eq!(layout(Topology::Pointy).hex_to_pixel(Hex::ORIGIN), origin);

        // Flat: one step along +q is 1.5 sizes right and sqrt(3)/2 sizes down
        let p = layout(Topology::Flat).hex_to_pixel(Hex::new_axial(1, 0));
        assert_approx_eq!(p.x, 35.0 + 15.0);
        assert_approx_eq!(p.y, 71.0 + 15.0 * SQRT_3 / 2.0);

        // Pointy: one step along +r is sqrt(3)/2 sizes right, 1.5 down
        let p = layout(Topology::Pointy).hex_to_pixel(Hex::new_axial(0, 1));
        assert_approx_eq!(p.x, 35.0 + 10.0 * SQRT_3 / 2.0);
        assert_approx_eq!(p.y, 71.0 + 22.5);
    }

    #[test]
    fn test_pixel_to_hex() {
        let layout = layout(Topology::Pointy);
        // Slightly off-center still lands in the same hex
        let h = Hex::new(-2, 1, 1).unwrap();
        let center = layout.hex_to_pixel(h);
        assert_eq!(layout.pixel_to_hex(center + Point::new(2.0, -3.0)), h);

        let frac = layout.pixel_to_fractional_hex(center);
        assert_approx_eq!(frac.q(), -2.0);
        assert_approx_eq!(frac.r(), 1.0);
        assert_approx_eq!(frac.s(), 1.0);
    }

    #[test]
    fn test_flipped_y() {
        let layout = Layout::new(
            Orientation::POINTY,
            Point::new(10.0, -10.0),
            Point::new(0.0, 0.0),
        );
        let h = Hex::new_axial(0, 1);
        // +r goes up instead of down
        assert!(layout.hex_to_pixel(h).y < 0.0);
        assert_eq!(layout.pixel_to_hex(layout.hex_to_pixel(h)), h);
    }

    #[test]
    fn test_hex_corner_offset() {
        let flat = layout(Topology::Flat);
        let corner = flat.hex_corner_offset(0);
        assert_approx_eq!(corner.x, 10.0);
        assert_approx_eq!(corner.y, 0.0);

        // Pointy starts at 30°, and corner 1 is 60° counterclockwise of that
        let pointy = layout(Topology::Pointy);
        let corner = pointy.hex_corner_offset(0);
        assert_approx_eq!(corner.x, 10.0 * SQRT_3 / 2.0);
        assert_approx_eq!(corner.y, 15.0 * 0.5);
        let corner = pointy.hex_corner_offset(1);
        assert_approx_eq!(corner.x, 10.0 * SQRT_3 / 2.0);
        assert_approx_eq!(corner.y, -15.0 * 0.5);
    }

    #[test]
    fn test_polygon_corners() {
        let layout = layout(Topology::Flat);
        let h = Hex::new(1, -2, 1).unwrap();
        let center = layout.hex_to_pixel(h);
        let corners = layout.polygon_corners(h);

        for (i, corner) in corners.iter().enumerate() {
            let offset = layout.hex_corner_offset(i);
            assert_approx_eq!(corner.x, center.x + offset.x);
            assert_approx_eq!(corner.y, center.y + offset.y);
        }
        // Opposite corners are mirrored around the center
        assert_approx_eq!(corners[0].x + corners[3].x, 2.0 * center.x);
        assert_approx_eq!(corners[0].y + corners[3].y, 2.0 * center.y);
    }

    #[test]
    fn test_from_config() {
        let config = LayoutConfig {
            topology: Topology::Flat,
            size: Point::new(10.0, 15.0),
            origin: Point::new(35.0, 71.0),
        };
        assert_eq!(Layout::from_config(config).unwrap(), layout(Topology::Flat));
    }

    #[test]
    fn test_config_validation() {
        let config = LayoutConfig {
            topology: Topology::Pointy,
            size: Point::new(0.0, 1.0),          // invalid
            origin: Point::new(f64::NAN, 71.0), // invalid
        };

        let err = Layout::from_config(config).unwrap_err();
        let validation_errors = err.downcast::<ValidationErrors>().unwrap();
        let mut error_fields = validation_errors
            .errors()
            .keys()
            .copied()
            .collect::<Vec<&str>>();
        error_fields.sort_unstable();
        assert_eq!(
            error_fields,
            vec!["origin", "size"],
            "incorrect validation errors in {:#?}",
            validation_errors
        );
    }
}
