use num_traits::{cast, Float};

/// Rounds to the nearest integer, resolving ties toward the even neighbour.
///
/// `0.5` rounds to `0.0`, `1.5` and `2.5` both round to `2.0`, `-2.5` rounds
/// to `-2.0`. Non-finite values are returned unchanged.
pub fn round_half_even(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    if Float::abs(value - Float::trunc(value)) == 0.5 {
        // A tie: halving keeps the fraction away from .5 so the regular
        // rounding of the half lands on the even integer.
        return 2.0 * Float::round(value / 2.0);
    }

    Float::round(value)
}

/// The largest magnitude of an absolute-unit coordinate.
///
/// The difference between any two coordinates in `-MAX_COORDINATE..=MAX_COORDINATE`
/// fits in an `i64`.
pub const MAX_COORDINATE: i64 = (1 << 62) - 1;

/// Rounds `value` half-to-even and converts it to an integer coordinate.
///
/// Returns `None` if `value` is not finite or if the rounded value is outside
/// `-MAX_COORDINATE..=MAX_COORDINATE`.
pub fn to_coordinate(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }

    let coord = cast::<f64, i64>(round_half_even(value))?;
    if !(-MAX_COORDINATE..=MAX_COORDINATE).contains(&coord) {
        return None;
    }

    Some(coord)
}

/// Rounds `value` half-to-even and clamps it to
/// `-MAX_COORDINATE..=MAX_COORDINATE`. `NaN` becomes `0`.
pub fn clamp_coordinate(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }

    // `as` saturates at the i64 bounds.
    (round_half_even(value) as i64).clamp(-MAX_COORDINATE, MAX_COORDINATE)
}

#[test]
fn round_ties_to_even() {
    assert_eq!(round_half_even(0.5), 0.0);
    assert_eq!(round_half_even(1.5), 2.0);
    assert_eq!(round_half_even(2.5), 2.0);
    assert_eq!(round_half_even(3.5), 4.0);
    assert_eq!(round_half_even(-0.5), 0.0);
    assert_eq!(round_half_even(-1.5), -2.0);
    assert_eq!(round_half_even(-2.5), -2.0);
}

#[test]
fn round_non_ties_to_nearest() {
    assert_eq!(round_half_even(0.49), 0.0);
    assert_eq!(round_half_even(0.51), 1.0);
    assert_eq!(round_half_even(2.4999), 2.0);
    assert_eq!(round_half_even(-7.6), -8.0);
    assert_eq!(round_half_even(12.0), 12.0);
}

#[test]
fn coordinate_conversion_rejects_unrepresentable_values() {
    assert_eq!(to_coordinate(2.5), Some(2));
    assert_eq!(to_coordinate(-3.7), Some(-4));
    assert_eq!(to_coordinate(f64::NAN), None);
    assert_eq!(to_coordinate(f64::INFINITY), None);
    assert_eq!(to_coordinate(f64::NEG_INFINITY), None);
    assert_eq!(to_coordinate(1e30), None);
    assert_eq!(to_coordinate(-1e30), None);
}

#[test]
fn coordinates_stay_within_limits() {
    let limit = MAX_COORDINATE as f64;

    assert_eq!(to_coordinate(-4.0e18), Some(-4_000_000_000_000_000_000));
    assert_eq!(to_coordinate(9.0e18), None);
    assert_eq!(to_coordinate(-9.0e18), None);
    assert_eq!(to_coordinate(limit * 1.5), None);

    assert_eq!(clamp_coordinate(2.5), 2);
    assert_eq!(clamp_coordinate(f64::NAN), 0);
    assert_eq!(clamp_coordinate(f64::INFINITY), MAX_COORDINATE);
    assert_eq!(clamp_coordinate(-1e30), -MAX_COORDINATE);
    assert!(MAX_COORDINATE.checked_sub(-MAX_COORDINATE).is_some());
}
