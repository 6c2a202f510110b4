//! Self-test cases for the coordinate math. These are well-known values that
//! any correct implementation of the hex grid algorithms must reproduce.

use derive_more::Display;
use hexgrid::{
    hex_linedraw, DoubledCoord, FractionalHex, Hex, Layout, OffsetCoord,
    Orientation, Parity, Point, Topology,
};
use serde::Serialize;

/// Outcome of a single named check
#[derive(Clone, Debug, Display, Serialize)]
#[display(fmt = "{} - {}", "self.name", "self.status()")]
pub struct CheckResult {
    pub name: &'static str,
    pub ok: bool,
}

impl CheckResult {
    fn status(&self) -> &'static str {
        if self.ok {
            "OK"
        } else {
            "FAIL"
        }
    }
}

/// Build a hex from known-good cube components
fn hex(q: i32, r: i32, s: i32) -> Hex {
    debug_assert_eq!(q + r + s, 0);
    Hex::new_axial(q, r)
}

fn frac(q: f64, r: f64, s: f64) -> FractionalHex {
    debug_assert_eq!(q + r + s, 0.0);
    FractionalHex::new_axial(q, r)
}

/// Weighted blend of three fractional hexes
fn blend(points: [FractionalHex; 3], weights: [f64; 3]) -> FractionalHex {
    let [a, b, c] = points;
    let [wa, wb, wc] = weights;
    FractionalHex::new_axial(
        a.q() * wa + b.q() * wb + c.q() * wc,
        a.r() * wa + b.r() * wb + c.r() * wc,
    )
}

fn check_arithmetic() -> Vec<(&'static str, bool)> {
    vec![
        ("hex_add", hex(1, -3, 2).add(hex(3, -7, 4)) == hex(4, -10, 6)),
        (
            "hex_subtract",
            hex(1, -3, 2).subtract(hex(3, -7, 4)) == hex(-2, 4, -2),
        ),
        ("hex_direction", Hex::direction(2) == hex(0, -1, 1)),
        ("hex_neighbor", hex(1, -2, 1).neighbor(2) == hex(1, -3, 2)),
        (
            "hex_diagonal",
            hex(1, -2, 1).diagonal_neighbor(3) == hex(-1, -1, 2),
        ),
        ("hex_distance", hex(3, -7, 4).distance(Hex::ORIGIN) == 7),
        ("hex_rotate_right", hex(1, -3, 2).rotate_right() == hex(3, -2, -1)),
        ("hex_rotate_left", hex(1, -3, 2).rotate_left() == hex(-2, -1, 3)),
    ]
}

fn check_rounding() -> Vec<(&'static str, bool)> {
    let a = frac(0.0, 0.0, 0.0);
    let b = frac(1.0, -1.0, 0.0);
    let c = frac(0.0, -1.0, 1.0);
    vec![
        (
            "hex_round 1",
            a.hex_lerp(frac(10.0, -20.0, 10.0), 0.5).hex_round()
                == hex(5, -10, 5),
        ),
        ("hex_round 2", a.hex_lerp(b, 0.499).hex_round() == a.hex_round()),
        ("hex_round 3", a.hex_lerp(b, 0.501).hex_round() == b.hex_round()),
        (
            "hex_round 4",
            blend([a, b, c], [0.4, 0.3, 0.3]).hex_round() == a.hex_round(),
        ),
        (
            "hex_round 5",
            blend([a, b, c], [0.3, 0.3, 0.4]).hex_round() == c.hex_round(),
        ),
        (
            "hex_linedraw",
            hex_linedraw(Hex::ORIGIN, hex(1, -5, 4))
                == vec![
                    hex(0, 0, 0),
                    hex(0, -1, 1),
                    hex(0, -2, 2),
                    hex(1, -3, 2),
                    hex(1, -4, 3),
                    hex(1, -5, 4),
                ],
        ),
    ]
}

fn check_layout() -> Vec<(&'static str, bool)> {
    let h = hex(3, 4, -7);
    let size = Point::new(10.0, 15.0);
    let origin = Point::new(35.0, 71.0);
    let flat = Layout::new(Orientation::FLAT, size, origin);
    let pointy = Layout::new(Orientation::POINTY, size, origin);
    vec![
        ("layout flat", flat.pixel_to_hex(flat.hex_to_pixel(h)) == h),
        ("layout pointy", pointy.pixel_to_hex(pointy.hex_to_pixel(h)) == h),
    ]
}

fn check_offset() -> Vec<(&'static str, bool)> {
    let a = hex(3, 4, -7);
    let b = OffsetCoord::new(1, -3);
    let roundtrip = |topology, parity| {
        let a_out = OffsetCoord::from_cube(a, topology, parity);
        let b_out = b.to_cube(topology, parity);
        a_out.to_cube(topology, parity) == a
            && OffsetCoord::from_cube(b_out, topology, parity) == b
    };
    vec![
        (
            "conversion_roundtrip even-q",
            roundtrip(Topology::Flat, Parity::Even),
        ),
        (
            "conversion_roundtrip odd-q",
            roundtrip(Topology::Flat, Parity::Odd),
        ),
        (
            "conversion_roundtrip even-r",
            roundtrip(Topology::Pointy, Parity::Even),
        ),
        (
            "conversion_roundtrip odd-r",
            roundtrip(Topology::Pointy, Parity::Odd),
        ),
        (
            "offset_from_cube even-q",
            OffsetCoord::flat_top_from_cube(hex(1, 2, -3), Parity::Even)
                == OffsetCoord::new(1, 3),
        ),
        (
            "offset_from_cube odd-q",
            OffsetCoord::flat_top_from_cube(hex(1, 2, -3), Parity::Odd)
                == OffsetCoord::new(1, 2),
        ),
        (
            "offset_to_cube even-q",
            OffsetCoord::new(1, 3).flat_top_to_cube(Parity::Even)
                == hex(1, 2, -3),
        ),
        (
            "offset_to_cube odd-q",
            OffsetCoord::new(1, 2).flat_top_to_cube(Parity::Odd)
                == hex(1, 2, -3),
        ),
    ]
}

fn check_doubled() -> Vec<(&'static str, bool)> {
    let a = hex(3, 4, -7);
    let b = DoubledCoord::new(1, -3);
    let roundtrip = |topology| {
        DoubledCoord::from_cube(a, topology).to_cube(topology) == a
            && DoubledCoord::from_cube(b.to_cube(topology), topology) == b
    };
    vec![
        ("conversion_roundtrip doubled-q", roundtrip(Topology::Flat)),
        ("conversion_roundtrip doubled-r", roundtrip(Topology::Pointy)),
        (
            "doubled_from_cube doubled-q",
            DoubledCoord::flat_top_from_cube(hex(1, 2, -3))
                == DoubledCoord::new(1, 5),
        ),
        (
            "doubled_from_cube doubled-r",
            DoubledCoord::pointy_top_from_cube(hex(1, 2, -3))
                == DoubledCoord::new(4, 2),
        ),
        (
            "doubled_to_cube doubled-q",
            DoubledCoord::new(1, 5).flat_top_to_cube() == hex(1, 2, -3),
        ),
        (
            "doubled_to_cube doubled-r",
            DoubledCoord::new(4, 2).pointy_top_to_cube() == hex(1, 2, -3),
        ),
    ]
}

/// Run every check, in order
pub fn run_checks() -> Vec<CheckResult> {
    [
        check_arithmetic(),
        check_rounding(),
        check_layout(),
        check_offset(),
        check_doubled(),
    ]
    .into_iter()
    .flatten()
    .map(|(name, ok)| CheckResult { name, ok })
    .collect()
}
