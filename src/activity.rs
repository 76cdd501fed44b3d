//! Activity states of a unit.
//!
//! `Activity` is the tagged state the unit dispatches on every tick; each
//! variant carries the data its handler needs. [`ActivityKind`] is the plain
//! label exposed through accessors and errors.

use std::fmt;

use glam::{DVec3, IVec3};
use serde::Serialize;

use crate::constants::{attack_duration, TIME_EPSILON};

/// Top-level behavioural state of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum ActivityKind {
    /// Doing nothing; the initial state.
    #[default]
    Idle,
    /// Walking or sprinting toward a cube.
    Moving,
    /// Regenerating hit points and stamina.
    Resting,
    /// Winding up or resolving an attack.
    Attacking,
}

impl ActivityKind {
    /// Whether the state machine allows a switch from `self` to `next`.
    ///
    /// Attacking is reachable from anywhere; moving only from idle or an
    /// ongoing move; resting only from idle or moving. Leaving rest or an
    /// attack happens through the tick handlers, never by request.
    #[must_use]
    pub const fn can_request(self, next: Self) -> bool {
        match next {
            Self::Attacking => true,
            Self::Moving | Self::Resting => matches!(self, Self::Idle | Self::Moving),
            Self::Idle => false,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Moving => "moving",
            Self::Resting => "resting",
            Self::Attacking => "attacking",
        };
        f.write_str(label)
    }
}

/// Gait used while moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum MovementMode {
    /// Regular walking speed.
    #[default]
    Walking,
    /// Double speed, draining stamina.
    Sprinting,
}

/// An in-progress step toward an adjacent cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MoveState {
    /// Cube the step started from; fixes the vertical modifier.
    pub(crate) origin: IVec3,
    /// Neighbouring cube currently being entered.
    pub(crate) target: IVec3,
    /// Final cube of a multi-step path, if any.
    pub(crate) destination: Option<IVec3>,
    pub(crate) velocity: DVec3,
}

/// Rest time banked until it yields a whole point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct RestState {
    pub(crate) banked: f64,
}

/// Progress through an attack wind-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct AttackState {
    pub(crate) elapsed: f64,
}

impl AttackState {
    /// Adds `duration` to the wind-up and reports whether it has finished.
    pub(crate) fn advance(&mut self, duration: f64) -> bool {
        self.elapsed += duration;
        self.elapsed + TIME_EPSILON >= attack_duration()
    }
}

/// Tagged activity state driving the per-tick dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum Activity {
    #[default]
    Idle,
    Moving(MoveState),
    Resting(RestState),
    Attacking(AttackState),
}

impl Activity {
    pub(crate) const fn kind(&self) -> ActivityKind {
        match self {
            Self::Idle => ActivityKind::Idle,
            Self::Moving(_) => ActivityKind::Moving,
            Self::Resting(_) => ActivityKind::Resting,
            Self::Attacking(_) => ActivityKind::Attacking,
        }
    }

    /// Destination the unit was heading for, used when a path is suspended.
    pub(crate) fn path_goal(&self) -> Option<IVec3> {
        match self {
            Self::Moving(step) => Some(step.destination.unwrap_or(step.target)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ActivityKind::Idle, ActivityKind::Moving, true)]
    #[case(ActivityKind::Moving, ActivityKind::Moving, true)]
    #[case(ActivityKind::Resting, ActivityKind::Moving, false)]
    #[case(ActivityKind::Attacking, ActivityKind::Moving, false)]
    #[case(ActivityKind::Idle, ActivityKind::Resting, true)]
    #[case(ActivityKind::Moving, ActivityKind::Resting, true)]
    #[case(ActivityKind::Attacking, ActivityKind::Resting, false)]
    #[case(ActivityKind::Resting, ActivityKind::Attacking, true)]
    #[case(ActivityKind::Idle, ActivityKind::Attacking, true)]
    #[case(ActivityKind::Resting, ActivityKind::Idle, false)]
    fn transition_table(
        #[case] from: ActivityKind,
        #[case] to: ActivityKind,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_request(to), allowed);
    }

    #[test]
    fn wind_up_finishes_after_four_sub_ticks() {
        let mut state = AttackState::default();
        let finished: Vec<bool> = (0..4).map(|_| state.advance(0.2)).collect();
        assert_eq!(finished, vec![false, false, false, true]);
    }

    #[test]
    fn moving_goal_prefers_destination() {
        let step = MoveState {
            origin: IVec3::ZERO,
            target: IVec3::X,
            destination: Some(IVec3::new(5, 0, 0)),
            velocity: DVec3::X,
        };
        assert_eq!(Activity::Moving(step).path_goal(), Some(IVec3::new(5, 0, 0)));
        assert_eq!(Activity::Idle.path_goal(), None);
    }
}
