//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains. Values are clamped into the target type before the cast so the
//! call-sites stay ergonomic.

/// Floor the value and clamp it into the `i32` domain.
///
/// Non-finite input maps to zero.
///
/// # Examples
/// ```
/// use hillbilly::numeric::floor_to_i32;
/// assert_eq!(floor_to_i32(3.7), 3);
/// assert_eq!(floor_to_i32(-0.5), -1);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn floor_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let floored = value.floor();
    let clamped = floored.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    clamped as i32
}

/// Floor a pool value and convert to `u32`, saturating at both ends.
///
/// Used to report hit points and stamina, which are tracked as real-valued
/// pools but exposed as whole points.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The floored value is clamped into the u32 domain."
)]
#[must_use]
pub fn floor_to_u32(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.floor().min(f64::from(u32::MAX)) as u32
}

/// Integer ceiling of `numerator / denominator` without going through floats.
///
/// Returns zero when `denominator` is zero.
#[must_use]
pub const fn div_ceil_u32(numerator: u32, denominator: u32) -> u32 {
    if denominator == 0 {
        return 0;
    }
    numerator.div_ceil(denominator)
}
