//! Uniform random draws consumed by combat.

use rand::Rng;

/// Source of uniform samples in `[0, 1)`.
///
/// Combat rolls go through this trait so callers can inject a seeded
/// generator or a scripted sequence.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Draws the next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Adapter exposing any [`rand::Rng`] as a [`RandomSource`].
///
/// # Examples
/// ```
/// use hillbilly::{RandomSource, RngSource};
/// use rand::{rngs::SmallRng, SeedableRng};
/// let mut source = RngSource::new(SmallRng::seed_from_u64(7));
/// let draw = source.next_unit();
/// assert!((0.0..1.0).contains(&draw));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wraps `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
