use crate::math::{point, Point};
use crate::rounding::{clamp_coordinate, to_coordinate};

use num_traits::ToPrimitive;

/// Per-axis ratios between local units and absolute units.
///
/// A scale of zero is accepted. It collapses every converted position onto
/// the origin along that axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Scale {
    /// The identity scale.
    pub const ONE: Self = Scale { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Scale { x, y }
    }

    /// The same factor on both axes.
    #[inline]
    pub const fn uniform(factor: f64) -> Self {
        Scale {
            x: factor,
            y: factor,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}

/// Maps local `(x, y)` positions to absolute units.
///
/// The origin is expressed in absolute units and is not scaled. A local
/// position `(x, y)` maps to
/// `(round(origin.x + x * scale.x), round(origin.y + y * scale.y))` where
/// `round` is [round_half_even](fn.round_half_even.html). Rounding happens
/// exactly once per coordinate so converting the same input always produces
/// the same output.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CoordinateTransform {
    origin: Point,
    scale: Scale,
}

impl CoordinateTransform {
    /// Creates a transform with its origin at the rounded `(start_x, start_y)`.
    ///
    /// The start position is already in absolute units: it is rounded but not
    /// scaled. Start coordinates are clamped to `MAX_COORDINATE` in magnitude.
    /// Values that are not representable as a number (including `NaN`) become `0`.
    pub fn new<X, Y>(start_x: X, start_y: Y, x_scale: f64, y_scale: f64) -> Self
    where
        X: ToPrimitive,
        Y: ToPrimitive,
    {
        let start = |v: Option<f64>| v.map_or(0, clamp_coordinate);

        CoordinateTransform::with_scale(
            point(start(start_x.to_f64()), start(start_y.to_f64())),
            Scale::new(x_scale, y_scale),
        )
    }

    #[inline]
    pub const fn with_scale(origin: Point, scale: Scale) -> Self {
        CoordinateTransform { origin, scale }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Converts a local position to absolute units, clamping the result.
    ///
    /// This is the lossy variant: coordinates beyond `MAX_COORDINATE` are
    /// clamped and `NaN` results become `0`. The builder records positions
    /// with the checked `try_convert` instead.
    pub fn convert(&self, x: f64, y: f64) -> Point {
        point(
            clamp_coordinate(self.origin.x as f64 + x * self.scale.x),
            clamp_coordinate(self.origin.y as f64 + y * self.scale.y),
        )
    }

    /// Converts a local position of any primitive numeric type to absolute
    /// units.
    ///
    /// Returns `None` if a coordinate cannot be represented as a finite `f64`
    /// or if the converted value is beyond `MAX_COORDINATE` in magnitude.
    pub fn try_convert<X: ToPrimitive, Y: ToPrimitive>(&self, x: X, y: Y) -> Option<Point> {
        let x = x.to_f64()?;
        let y = y.to_f64()?;
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        Some(point(
            to_coordinate(self.origin.x as f64 + x * self.scale.x)?,
            to_coordinate(self.origin.y as f64 + y * self.scale.y)?,
        ))
    }
}

#[test]
fn start_position_is_rounded_not_scaled() {
    let transform = CoordinateTransform::new(10.4, 2.5, 3.0, 4.0);
    assert_eq!(transform.origin(), point(10, 2));
    assert_eq!(transform.scale(), Scale::new(3.0, 4.0));
    assert_eq!(transform.convert(0.0, 0.0), point(10, 2));
}

#[test]
fn convert_applies_scale_then_rounds() {
    let transform = CoordinateTransform::new(7.0, -3.0, 2.0, 0.25);
    assert_eq!(transform.convert(3.0, 8.0), point(7 + 6, -3 + 2));
    // -3 + 2.5 = -0.5, a tie resolved toward zero.
    assert_eq!(transform.convert(0.0, 10.0).y, 0);
    // 7 + 0.75 * 2 = 8.5, a tie resolved toward 8.
    assert_eq!(transform.convert(0.75, 0.0).x, 8);
}

#[test]
fn convert_is_deterministic() {
    let transform = CoordinateTransform::new(0.0, 0.0, 1.0 / 3.0, 914_400.0 / 7.0);
    let a = transform.convert(123.456, -987.654);
    let b = transform.convert(123.456, -987.654);
    assert_eq!(a, b);
}

#[test]
fn zero_scale_collapses_onto_origin() {
    let transform = CoordinateTransform::new(5.0, 6.0, 0.0, 0.0);
    assert_eq!(transform.convert(1000.0, -1000.0), point(5, 6));
}

#[test]
fn try_convert_accepts_integers_and_floats() {
    let transform = CoordinateTransform::new(0.0, 0.0, 2.0, 2.0);
    assert_eq!(transform.try_convert(3i32, 4u8), Some(point(6, 8)));
    assert_eq!(transform.try_convert(1.25f32, 0.75f64), Some(point(2, 2)));
}

#[test]
fn try_convert_rejects_non_finite_input() {
    let transform = CoordinateTransform::new(0.0, 0.0, 1.0, 1.0);
    assert_eq!(transform.try_convert(f64::NAN, 0.0), None);
    assert_eq!(transform.try_convert(0.0, f32::INFINITY), None);

    let huge = CoordinateTransform::new(0.0, 0.0, 1e300, 1.0);
    assert_eq!(huge.try_convert(1e300, 0.0), None);
    assert_eq!(huge.try_convert(1e10, 0.0), None);
}

#[test]
fn start_and_lossy_conversion_are_clamped() {
    use crate::rounding::MAX_COORDINATE;

    let transform = CoordinateTransform::new(f64::NAN, 1e30, 1.0, 1.0);
    assert_eq!(transform.origin(), point(0, MAX_COORDINATE));

    let transform = CoordinateTransform::new(0u64, -7i8, 1.0, 1.0);
    assert_eq!(transform.origin(), point(0, -7));
    assert_eq!(transform.convert(-1e300, f64::NAN), point(-MAX_COORDINATE, 0));
    assert_eq!(transform.try_convert(-1e300, 0.0), None);
}
