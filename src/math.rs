//! Mathy related things
//!
//! Points and the unit newtypes used by the correction pipeline.

use std::str::FromStr;

use derive_more::{Deref, Display};
use glam::DVec2;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A 2D point. Unit and frame come from context; the canonical frame is
/// inches with +X right and +Y up, origin at the bullseye.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}
impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point2D) -> f64 {
        DVec2::from(*self).distance(DVec2::from(other))
    }
}
impl From<DVec2> for Point2D {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}
impl From<Point2D> for DVec2 {
    fn from(p: Point2D) -> Self {
        DVec2::new(p.x, p.y)
    }
}
impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Linear distance in inches
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Deref, Display, Serialize)]
#[serde(transparent)]
pub struct Inches(f64);
impl Inches {
    pub fn new(inches: f64) -> Self {
        Self(inches)
    }
}

/// Minutes of angle
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Deref, Display, Serialize)]
#[serde(transparent)]
pub struct Moa(f64);
impl Moa {
    pub fn new(moa: f64) -> Self {
        Self(moa)
    }

    /// Angle subtended by `inches` at `distance`, given how many inches one
    /// MOA covers at 100 yards.
    pub fn subtended(inches: f64, distance: Yards, true_moa_inches_at_100: f64) -> Self {
        Self(inches / inches_per_moa(distance, true_moa_inches_at_100))
    }
}

/// Range to target in yards
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Deref, Display, Serialize)]
#[serde(transparent)]
pub struct Yards(f64);
impl Yards {
    pub fn new(yards: f64) -> Self {
        Self(yards)
    }
}

/// Scope turret clicks. Fractional; callers decide how to dial partial clicks.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Deref, Display, Serialize)]
#[serde(transparent)]
pub struct Clicks(f64);
impl Clicks {
    pub fn new(clicks: f64) -> Self {
        Self(clicks)
    }

    pub fn from_moa(moa: Moa, click_value_moa: f64) -> Self {
        Self(*moa / click_value_moa)
    }
}

/// Inches covered by one MOA at `distance`.
pub fn inches_per_moa(distance: Yards, true_moa_inches_at_100: f64) -> f64 {
    true_moa_inches_at_100 * (*distance / 100.0)
}

/// Round to two decimals, half away from zero.
///
/// Ties are judged on the shortest decimal form of `v` (what `Display`
/// prints), so 1.005 rounds to 1.01 even though its binary value sits just
/// below the tie.
pub fn round_display(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    // far below the first tie at 0.005, and too many digits for Decimal
    if v.abs() < 1e-4 {
        return 0.0;
    }
    match Decimal::from_str(&v.to_string()) {
        Ok(d) => {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            f64::from_str(&rounded.to_string()).unwrap_or(v)
        }
        // beyond Decimal's range a two-decimal rounding is a no-op
        Err(_) => v,
    }
}

/// Strictly positive and finite. NaN never passes.
pub(crate) fn is_positive(v: f64) -> bool {
    v > 0.0 && v.is_finite()
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_round_display() {
        assert_eq!(round_display(1.910219675), 1.91);
        assert_eq!(round_display(7.640878701), 7.64);
        assert_eq!(round_display(0.125), 0.13);
        assert_eq!(round_display(-0.125), -0.13);
        assert_eq!(round_display(2.0), 2.0);
        assert_eq!(round_display(0.0), 0.0);
    }

    #[test]
    fn test_round_display_decimal_ties() {
        // each of these is stored just below the tie in binary
        assert_eq!(round_display(1.005), 1.01);
        assert_eq!(round_display(0.285), 0.29);
        assert_eq!(round_display(1.115), 1.12);
        assert_eq!(round_display(2.675), 2.68);
        assert_eq!(round_display(-1.005), -1.01);
        assert_eq!(round_display(-2.675), -2.68);
    }

    #[test]
    fn test_round_display_edges() {
        assert_eq!(round_display(0.00004), 0.0);
        assert_eq!(round_display(0.004), 0.0);
        assert_eq!(round_display(0.005), 0.01);
        assert_eq!(round_display(123456.785), 123456.79);
        assert!(round_display(f64::NAN).is_nan());
        assert_eq!(round_display(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_is_positive() {
        assert!(is_positive(0.25));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-1.0));
        assert!(!is_positive(f64::NAN));
        assert!(!is_positive(f64::INFINITY));
    }

    #[test]
    fn test_round_display_does_not_truncate() {
        assert_eq!(round_display(5.7307), 5.73);
        assert_eq!(round_display(1.4326), 1.43);
        assert_eq!(round_display(0.999), 1.0);
    }

    #[test]
    fn test_inches_per_moa_scales_with_distance() {
        assert_relative_eq!(inches_per_moa(Yards::new(100.0), 1.047), 1.047);
        assert_relative_eq!(inches_per_moa(Yards::new(200.0), 1.047), 2.094);
        assert_relative_eq!(inches_per_moa(Yards::new(50.0), 1.0), 0.5);
    }

    #[test]
    fn test_moa_and_clicks() {
        let moa = Moa::subtended(2.0, Yards::new(100.0), 1.047);
        assert_relative_eq!(*moa, 2.0 / 1.047);
        let clicks = Clicks::from_moa(moa, 0.25);
        assert_relative_eq!(*clicks, 4.0 * 2.0 / 1.047);
    }

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, -4.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_eq!(Point2D::from(DVec2::from(b)), b);
    }
}
