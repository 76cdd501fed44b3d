//! Motion helpers for stepping a unit between cubes.
//!
//! Provides speed and velocity calculations plus the per-tick integration
//! of a single step. The functions are free of unit state so they can be
//! checked in isolation and reused by the activity handlers.

use glam::{DVec3, IVec3};

use crate::activity::MovementMode;
use crate::attributes::AttributeSet;
use crate::constants::{
    ASCENT_MODIFIER, BASE_VELOCITY_FACTOR, DESCENT_MODIFIER, SPRINT_MULTIPLIER,
    SPRINT_STAMINA_INTERVAL, TIME_EPSILON,
};
use crate::error::PositionError;
use crate::spatial::{cube_centre, step_toward, WorldBounds};

/// Level walking speed in metres per second.
///
/// `0.75 * (strength + agility) / weight`.
///
/// # Examples
/// ```
/// use hillbilly::{AttributeSet, BaseAttributes};
/// use hillbilly::motion::base_velocity;
/// let attrs = AttributeSet::from_base(BaseAttributes::new(50, 50, 50, 50));
/// assert!((base_velocity(&attrs) - 1.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn base_velocity(attributes: &AttributeSet) -> f64 {
    let drive = f64::from(attributes.strength() + attributes.agility());
    BASE_VELOCITY_FACTOR * drive / f64::from(attributes.weight())
}

/// Speed factor for a step from cube level `from_z` to `to_z`.
#[must_use]
pub const fn vertical_modifier(from_z: i32, to_z: i32) -> f64 {
    if to_z < from_z {
        DESCENT_MODIFIER
    } else if to_z > from_z {
        ASCENT_MODIFIER
    } else {
        1.0
    }
}

/// Scalar speed for a step from `origin` to `target` in the given mode.
#[must_use]
pub fn speed(attributes: &AttributeSet, origin: IVec3, target: IVec3, mode: MovementMode) -> f64 {
    let walk = base_velocity(attributes) * vertical_modifier(origin.z, target.z);
    match mode {
        MovementMode::Walking => walk,
        MovementMode::Sprinting => walk * SPRINT_MULTIPLIER,
    }
}

/// Velocity carrying `position` toward the centre of `target`.
///
/// # Errors
/// Returns [`PositionError::CoincidentPoints`] when `position` already sits
/// on the target centre and [`PositionError::OutOfBounds`] for positions
/// outside `world`.
pub fn velocity_toward(
    world: &WorldBounds,
    attributes: &AttributeSet,
    position: DVec3,
    origin: IVec3,
    target: IVec3,
    mode: MovementMode,
) -> Result<DVec3, PositionError> {
    let direction = world.direction_unit(position, cube_centre(target))?;
    Ok(direction * speed(attributes, origin, target, mode))
}

/// Next cube on the way to `destination`, or `None` once there.
#[must_use]
pub fn next_step(current: IVec3, destination: IVec3) -> Option<IVec3> {
    (current != destination).then(|| step_toward(current, destination))
}

/// Result of integrating one tick of a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepProgress {
    /// Still short of the target; carries the new position.
    EnRoute(DVec3),
    /// Reached the target; carries the snapped centre.
    Arrived(DVec3),
}

/// Moves `position` by `velocity * duration`, snapping onto `destination`
/// when the remaining distance is covered.
#[must_use]
pub fn advance_step(
    position: DVec3,
    destination: DVec3,
    velocity: DVec3,
    duration: f64,
) -> StepProgress {
    let travel = velocity * duration;
    let remaining = (destination - position).length();
    if travel.length() + TIME_EPSILON >= remaining {
        StepProgress::Arrived(destination)
    } else {
        StepProgress::EnRoute(position + travel)
    }
}

/// Stamina burned by sprinting for `duration` seconds.
#[must_use]
pub fn sprint_cost(duration: f64) -> f64 {
    duration / SPRINT_STAMINA_INTERVAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::BaseAttributes;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn attrs() -> AttributeSet {
        AttributeSet::from_base(BaseAttributes::new(50, 50, 50, 50))
    }

    #[rstest]
    #[case::level(IVec3::new(0, 0, 3), IVec3::new(1, 0, 3), MovementMode::Walking, 1.5)]
    #[case::descending(IVec3::new(0, 0, 3), IVec3::new(0, 1, 2), MovementMode::Walking, 1.8)]
    #[case::ascending(IVec3::new(0, 0, 3), IVec3::new(0, 0, 4), MovementMode::Walking, 0.75)]
    #[case::sprint_level(IVec3::ZERO, IVec3::X, MovementMode::Sprinting, 3.0)]
    #[case::sprint_descending(IVec3::Z, IVec3::ZERO, MovementMode::Sprinting, 3.6)]
    fn speeds(
        attrs: AttributeSet,
        #[case] origin: IVec3,
        #[case] target: IVec3,
        #[case] mode: MovementMode,
        #[case] expected: f64,
    ) {
        assert_relative_eq!(speed(&attrs, origin, target, mode), expected, epsilon = 1e-12);
    }

    #[rstest]
    fn velocity_points_at_target_centre(attrs: AttributeSet) {
        let world = WorldBounds::default();
        let velocity = velocity_toward(
            &world,
            &attrs,
            DVec3::splat(0.5),
            IVec3::ZERO,
            IVec3::X,
            MovementMode::Walking,
        )
        .expect("target differs from position");
        assert_relative_eq!(velocity.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(velocity.y, 0.0);
        assert_relative_eq!(velocity.z, 0.0);
    }

    #[test]
    fn step_snaps_on_overshoot() {
        let progress = advance_step(
            DVec3::splat(0.5),
            DVec3::new(1.5, 0.5, 0.5),
            DVec3::X * 6.0,
            0.19,
        );
        assert_eq!(progress, StepProgress::Arrived(DVec3::new(1.5, 0.5, 0.5)));
    }

    #[test]
    fn step_integrates_velocity() {
        let progress = advance_step(DVec3::splat(0.5), DVec3::new(1.5, 0.5, 0.5), DVec3::X, 0.1);
        let StepProgress::EnRoute(position) = progress else {
            panic!("expected the unit to still be en route, got {progress:?}");
        };
        assert_relative_eq!(position.x, 0.6, epsilon = 1e-12);
    }

    #[rstest]
    #[case(IVec3::ZERO, IVec3::ZERO, None)]
    #[case(IVec3::ZERO, IVec3::new(-4, 2, 0), Some(IVec3::new(-1, 1, 0)))]
    fn path_steps(#[case] current: IVec3, #[case] goal: IVec3, #[case] expected: Option<IVec3>) {
        assert_eq!(next_step(current, goal), expected);
    }
}
