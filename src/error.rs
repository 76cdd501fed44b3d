//! Error types raised by unit operations.
//!
//! Each concern gets its own enum so callers can match on the class of
//! failure; [`UnitError`] wraps them for operations that can fail in more
//! than one way. Attribute setters never appear here because out-of-range
//! attribute values are silently ignored.

use glam::{DVec3, IVec3};
use thiserror::Error;

use crate::activity::ActivityKind;

/// A position or cube violated the world's spatial rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// A coordinate lies outside `[lower, upper]` or is not finite.
    #[error("position {position} lies outside the world bounds [{lower}, {upper}]")]
    OutOfBounds {
        /// Offending position.
        position: DVec3,
        /// Lower bound of every axis.
        lower: f64,
        /// Upper bound of every axis.
        upper: f64,
    },
    /// A single-step move targeted a cube that is not a neighbour.
    #[error("cube {target} is not adjacent to cube {current}")]
    NotAdjacent {
        /// Cube the unit currently occupies.
        current: IVec3,
        /// Requested target cube.
        target: IVec3,
    },
    /// A direction was requested between two identical points.
    #[error("direction from {0} to itself is undefined")]
    CoincidentPoints(DVec3),
}

/// A time span was unusable for the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DurationError {
    /// A tick duration fell outside `[0, 0.2)` seconds.
    #[error("tick duration {0}s is outside [0, 0.2)")]
    OutOfRange(f64),
    /// A rest period is too short to restore a whole point.
    #[error("rest of {duration}s restores nothing at toughness {toughness}")]
    TooShort {
        /// Requested rest duration in seconds.
        duration: f64,
        /// Toughness of the resting unit.
        toughness: u32,
    },
}

/// A unit name failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Names need at least two characters.
    #[error("name {0:?} is shorter than two characters")]
    TooShort(String),
    /// Names start with an uppercase letter.
    #[error("name {0:?} must start with an uppercase letter")]
    LowercaseInitial(String),
    /// Only letters, spaces, apostrophes and double quotes are allowed.
    #[error("name {name:?} contains forbidden character {character:?}")]
    ForbiddenCharacter {
        /// The rejected name.
        name: String,
        /// First offending character.
        character: char,
    },
}

/// A request does not fit the unit's current activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActivityError {
    /// The state machine has no edge between the two activities.
    #[error("cannot switch from {from} to {to}")]
    IllegalTransition {
        /// Activity the unit is in.
        from: ActivityKind,
        /// Activity that was requested.
        to: ActivityKind,
    },
    /// A defeated unit took part in the request.
    #[error("defeated units take no further part in play")]
    Defeated,
    /// Regeneration was requested while the unit was not resting.
    #[error("unit is {0}, not resting")]
    NotResting(ActivityKind),
    /// Sprinting needs an active move and stamina to burn.
    #[error("sprinting requires a moving unit with stamina left")]
    CannotSprint,
}

/// Any failure surfaced by [`crate::Unit`] operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    /// See [`PositionError`].
    #[error(transparent)]
    Position(#[from] PositionError),
    /// See [`DurationError`].
    #[error(transparent)]
    Duration(#[from] DurationError),
    /// See [`NameError`].
    #[error(transparent)]
    Name(#[from] NameError),
    /// See [`ActivityError`].
    #[error(transparent)]
    Activity(#[from] ActivityError),
}
