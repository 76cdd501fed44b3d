//! Regeneration rates while resting.

use crate::constants::{HIT_POINT_REGEN_DIVISOR, STAMINA_REGEN_DIVISOR, TIME_EPSILON};
use crate::error::DurationError;

/// Hit points regained over `duration` seconds at `toughness`.
#[must_use]
pub fn hit_point_gain(duration: f64, toughness: u32) -> f64 {
    duration * f64::from(toughness) / HIT_POINT_REGEN_DIVISOR
}

/// Stamina regained over `duration` seconds at `toughness`.
#[must_use]
pub fn stamina_gain(duration: f64, toughness: u32) -> f64 {
    duration * f64::from(toughness) / STAMINA_REGEN_DIVISOR
}

/// Shortest rest that restores at least one whole point.
///
/// # Examples
/// ```
/// use hillbilly::rest::min_restore_duration;
/// assert!((min_restore_duration(40) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn min_restore_duration(toughness: u32) -> f64 {
    STAMINA_REGEN_DIVISOR / f64::from(toughness.max(1))
}

/// Whether a rest of `duration` seconds yields an integral effect.
///
/// # Errors
/// Returns [`DurationError::TooShort`] for durations that are negative,
/// not finite, or shorter than [`min_restore_duration`].
pub fn check_restore_duration(duration: f64, toughness: u32) -> Result<(), DurationError> {
    if duration.is_finite() && duration + TIME_EPSILON >= min_restore_duration(toughness) {
        Ok(())
    } else {
        Err(DurationError::TooShort {
            duration,
            toughness,
        })
    }
}
