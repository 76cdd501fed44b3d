//! Basic vector math helper functions.
//! Small helpers for magnitudes, normalised directions and horizontal headings.
use std::f64::consts::TAU;

use glam::DVec3;

/// Returns the Euclidean length of a displacement.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use hillbilly::vector_math::magnitude;
/// let length = magnitude(DVec3::new(3.0, 4.0, 12.0));
/// assert!((length - 13.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn magnitude(vector: DVec3) -> f64 {
    vector.length()
}

/// Returns the unit vector pointing along `vector`.
///
/// The function checks that all components are finite and the vector is
/// non-zero before normalising. Invalid input and the zero vector yield
/// `None`, leaving the caller to decide how a missing direction is reported.
///
/// # Examples
///
/// ```
/// use glam::DVec3;
/// use hillbilly::vector_math::unit_vector;
/// let dir = unit_vector(DVec3::new(3.0, 0.0, 4.0)).unwrap();
/// assert!((dir.x - 0.6).abs() < 1e-12);
/// assert!((dir.z - 0.8).abs() < 1e-12);
///
/// assert!(unit_vector(DVec3::ZERO).is_none());
/// ```
#[must_use]
pub fn unit_vector(vector: DVec3) -> Option<DVec3> {
    if !vector.is_finite() {
        return None;
    }
    vector.try_normalize()
}

/// Horizontal heading of `vector` as `atan2(y, x)`, folded into `[0, 2π)`.
///
/// A vector with no horizontal component has heading zero.
#[must_use]
pub fn heading(vector: DVec3) -> f64 {
    let angle = vector.y.atan2(vector.x);
    let folded = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative angles.
    if folded >= TAU {
        0.0
    } else {
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[rstest]
    #[case(DVec3::X, 0.0)]
    #[case(DVec3::Y, FRAC_PI_2)]
    #[case(DVec3::NEG_X, PI)]
    #[case(DVec3::NEG_Y, 3.0 * FRAC_PI_2)]
    #[case(DVec3::Z, 0.0)]
    fn headings_stay_in_range(#[case] vector: DVec3, #[case] expected: f64) {
        let angle = heading(vector);
        assert_relative_eq!(angle, expected, epsilon = 1e-12);
        assert!((0.0..TAU).contains(&angle));
    }

    #[test]
    fn unit_vector_rejects_nan() {
        assert!(unit_vector(DVec3::new(f64::NAN, 1.0, 0.0)).is_none());
    }
}
