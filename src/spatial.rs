//! World bounds, cube addressing and point-to-point geometry.
//!
//! Positions are continuous `DVec3` values; cubes are the integer voxels
//! obtained by flooring each coordinate. Every axis shares the same
//! `[lower, upper]` range.

use std::cmp::Ordering;

use glam::{DVec3, IVec3};
use serde::Serialize;

use crate::config::ConfigError;
use crate::constants::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
use crate::error::PositionError;
use crate::numeric::floor_to_i32;
use crate::vector_math::{magnitude, unit_vector};

/// Closed range shared by all three axes of the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorldBounds {
    lower: f64,
    upper: f64,
}

impl WorldBounds {
    /// Creates bounds, rejecting non-finite or inverted ranges.
    ///
    /// Every cube of the world must be addressable with `i32` indices.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBounds`] unless `lower < upper`, both
    /// are finite and both round outward into the `i32` range.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ConfigError> {
        let addressable =
            lower.floor() >= f64::from(i32::MIN) && upper.ceil() <= f64::from(i32::MAX);
        if lower.is_finite() && upper.is_finite() && lower < upper && addressable {
            Ok(Self { lower, upper })
        } else {
            Err(ConfigError::InvalidBounds { lower, upper })
        }
    }

    /// Lower bound of every axis.
    #[must_use]
    pub const fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound of every axis.
    #[must_use]
    pub const fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether every coordinate of `position` is finite and inside the bounds.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use hillbilly::WorldBounds;
    /// let world = WorldBounds::default();
    /// assert!(world.is_valid_position(DVec3::splat(50.0)));
    /// assert!(!world.is_valid_position(DVec3::new(50.001, 0.0, 0.0)));
    /// ```
    #[must_use]
    pub fn is_valid_position(&self, position: DVec3) -> bool {
        position
            .to_array()
            .iter()
            .all(|c| c.is_finite() && (self.lower..=self.upper).contains(c))
    }

    /// Checks `position`, reporting the bounds on failure.
    ///
    /// # Errors
    /// Returns [`PositionError::OutOfBounds`] for an invalid position.
    pub fn ensure_valid(&self, position: DVec3) -> Result<DVec3, PositionError> {
        if self.is_valid_position(position) {
            Ok(position)
        } else {
            Err(PositionError::OutOfBounds {
                position,
                lower: self.lower,
                upper: self.upper,
            })
        }
    }

    /// A cube belongs to the world when its centre does.
    #[must_use]
    pub fn is_valid_cube(&self, cube: IVec3) -> bool {
        self.is_valid_position(cube_centre(cube))
    }

    /// Checks `cube`, reporting its centre on failure.
    ///
    /// # Errors
    /// Returns [`PositionError::OutOfBounds`] when the cube centre lies
    /// outside the world.
    pub fn ensure_valid_cube(&self, cube: IVec3) -> Result<IVec3, PositionError> {
        self.ensure_valid(cube_centre(cube)).map(|_| cube)
    }

    /// Clamps each coordinate of `position` into the bounds.
    #[must_use]
    pub fn clamp(&self, position: DVec3) -> DVec3 {
        position.clamp(DVec3::splat(self.lower), DVec3::splat(self.upper))
    }

    /// Euclidean distance between two valid positions.
    ///
    /// # Errors
    /// Returns [`PositionError::OutOfBounds`] if either endpoint is invalid.
    pub fn distance(&self, from: DVec3, to: DVec3) -> Result<f64, PositionError> {
        let start = self.ensure_valid(from)?;
        let end = self.ensure_valid(to)?;
        Ok(magnitude(end - start))
    }

    /// Unit vector pointing from `from` toward `to`.
    ///
    /// # Errors
    /// Returns [`PositionError::OutOfBounds`] if either endpoint is invalid
    /// and [`PositionError::CoincidentPoints`] when they are equal.
    pub fn direction_unit(&self, from: DVec3, to: DVec3) -> Result<DVec3, PositionError> {
        let start = self.ensure_valid(from)?;
        let end = self.ensure_valid(to)?;
        unit_vector(end - start).ok_or(PositionError::CoincidentPoints(start))
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_BOUND,
            upper: DEFAULT_UPPER_BOUND,
        }
    }
}

/// Cube containing `position`, by component-wise floor.
///
/// # Examples
/// ```
/// use glam::{DVec3, IVec3};
/// use hillbilly::spatial::to_cube;
/// assert_eq!(to_cube(DVec3::new(1.5, 0.0, 49.99)), IVec3::new(1, 0, 49));
/// ```
#[must_use]
pub fn to_cube(position: DVec3) -> IVec3 {
    IVec3::new(
        floor_to_i32(position.x),
        floor_to_i32(position.y),
        floor_to_i32(position.z),
    )
}

/// Centre point of `cube`.
#[must_use]
pub fn cube_centre(cube: IVec3) -> DVec3 {
    cube.as_dvec3() + DVec3::splat(0.5)
}

/// Whether two cubes differ by at most one on every axis.
///
/// A cube counts as adjacent to itself.
#[must_use]
pub fn is_adjacent(a: IVec3, b: IVec3) -> bool {
    a.x.abs_diff(b.x) <= 1 && a.y.abs_diff(b.y) <= 1 && a.z.abs_diff(b.z) <= 1
}

/// Neighbour of `current` one step closer to `destination` on every axis.
#[must_use]
pub fn step_toward(current: IVec3, destination: IVec3) -> IVec3 {
    IVec3::new(
        axis_step(current.x, destination.x),
        axis_step(current.y, destination.y),
        axis_step(current.z, destination.z),
    )
}

/// Moves `from` one index toward `to`; the result never passes `to`.
fn axis_step(from: i32, to: i32) -> i32 {
    match to.cmp(&from) {
        Ordering::Greater => from + 1,
        Ordering::Less => from - 1,
        Ordering::Equal => from,
    }
}
