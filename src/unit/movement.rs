//! Stepping between cubes, path following and sprinting.

use glam::{DVec3, IVec3};
use log::debug;

use super::Unit;
use crate::activity::{Activity, ActivityKind, MoveState, MovementMode, RestState};
use crate::error::{ActivityError, PositionError, UnitError};
use crate::motion::{advance_step, next_step, sprint_cost, velocity_toward, StepProgress};
use crate::spatial::{cube_centre, is_adjacent};
use crate::vector_math::heading;

impl Unit {
    /// Starts a single step into a neighbouring cube.
    ///
    /// A unit that is already moving abandons its current step and any
    /// path it was following.
    ///
    /// # Errors
    /// - [`ActivityError::Defeated`] for a defeated unit.
    /// - [`ActivityError::IllegalTransition`] unless idle or moving.
    /// - [`PositionError::OutOfBounds`] for a cube outside the world.
    /// - [`PositionError::NotAdjacent`] for a cube more than one step away.
    pub fn move_to_adjacent(&mut self, target: IVec3) -> Result<(), UnitError> {
        self.ensure_can_request(ActivityKind::Moving)?;
        self.world.ensure_valid_cube(target)?;
        let current = self.cube();
        if !is_adjacent(current, target) {
            return Err(PositionError::NotAdjacent { current, target }.into());
        }
        self.suspended_destination = None;
        self.begin_step(target, None)?;
        Ok(())
    }

    /// Walks toward `destination` one neighbouring cube at a time.
    ///
    /// Each step moves by the sign of the remaining offset on every axis,
    /// so diagonal moves are taken while more than one axis differs.
    ///
    /// # Errors
    /// - [`ActivityError::Defeated`] for a defeated unit.
    /// - [`ActivityError::IllegalTransition`] unless idle or moving.
    /// - [`PositionError::OutOfBounds`] for a destination outside the world.
    pub fn move_to(&mut self, destination: IVec3) -> Result<(), UnitError> {
        self.ensure_can_request(ActivityKind::Moving)?;
        self.world.ensure_valid_cube(destination)?;
        self.suspended_destination = None;
        let first = next_step(self.cube(), destination).unwrap_or(destination);
        self.begin_step(first, Some(destination))?;
        Ok(())
    }

    /// Restarts the path abandoned by the last suspension.
    ///
    /// Does nothing when no path is suspended.
    ///
    /// # Errors
    /// Returns [`ActivityError::IllegalTransition`] unless the unit is idle,
    /// plus any error of [`Unit::move_to`].
    pub fn resume_path(&mut self) -> Result<(), UnitError> {
        let Some(destination) = self.suspended_destination else {
            return Ok(());
        };
        let current = self.activity.kind();
        if current != ActivityKind::Idle {
            return Err(ActivityError::IllegalTransition {
                from: current,
                to: ActivityKind::Moving,
            }
            .into());
        }
        debug!("{}: resuming path to {destination}", self.name);
        self.move_to(destination)
    }

    /// Doubles movement speed at the cost of stamina.
    ///
    /// # Errors
    /// Returns [`ActivityError::Defeated`] for a defeated unit and
    /// [`ActivityError::CannotSprint`] unless the unit is moving with
    /// stamina left.
    pub fn start_sprinting(&mut self) -> Result<(), UnitError> {
        if self.is_defeated() {
            return Err(ActivityError::Defeated.into());
        }
        if self.activity.kind() != ActivityKind::Moving || self.stamina() == 0 {
            return Err(ActivityError::CannotSprint.into());
        }
        self.change_mode(MovementMode::Sprinting)
    }

    /// Returns to walking speed.
    ///
    /// # Errors
    /// Surfaces a [`PositionError`] if the step velocity cannot be
    /// recomputed.
    pub fn stop_sprinting(&mut self) -> Result<(), UnitError> {
        self.change_mode(MovementMode::Walking)
    }

    pub(super) fn moving_tick(&mut self, step: MoveState, duration: f64) -> Result<(), UnitError> {
        if self.take_interruption() {
            debug!("{}: interrupted while moving", self.name);
            self.suspend_path();
            self.set_activity(Activity::Resting(RestState::default()));
            return Ok(());
        }
        match advance_step(self.position, cube_centre(step.target), step.velocity, duration) {
            StepProgress::EnRoute(next) => {
                self.position = self.world.clamp(next);
                if self.drain_sprint(duration) {
                    self.set_course(step.origin, step.target, step.destination)?;
                }
            }
            StepProgress::Arrived(centre) => {
                self.position = centre;
                self.drain_sprint(duration);
                self.continue_path(step.destination)?;
            }
        }
        Ok(())
    }

    /// Remembers where an ongoing move was heading.
    pub(super) fn suspend_path(&mut self) {
        if let Some(goal) = self.activity.path_goal() {
            debug!("{}: suspending path to {goal}", self.name);
            self.suspended_destination = Some(goal);
        }
    }

    fn change_mode(&mut self, mode: MovementMode) -> Result<(), UnitError> {
        if self.movement_mode == mode {
            return Ok(());
        }
        debug!("{}: switching to {mode:?}", self.name);
        self.movement_mode = mode;
        if let Activity::Moving(step) = self.activity {
            self.set_course(step.origin, step.target, step.destination)?;
        }
        Ok(())
    }

    /// Burns sprint stamina; returns `true` when the unit drops to walking.
    fn drain_sprint(&mut self, duration: f64) -> bool {
        if self.movement_mode != MovementMode::Sprinting {
            return false;
        }
        self.stamina = (self.stamina - sprint_cost(duration)).max(0.0);
        let exhausted = self.stamina() == 0;
        if exhausted {
            debug!("{}: out of stamina", self.name);
            self.movement_mode = MovementMode::Walking;
        }
        exhausted
    }

    /// Picks the next cube toward `destination` or stops.
    fn continue_path(&mut self, destination: Option<IVec3>) -> Result<(), PositionError> {
        let upcoming =
            destination.and_then(|goal| next_step(self.cube(), goal).map(|next| (next, goal)));
        match upcoming {
            Some((next, goal)) => self.begin_step(next, Some(goal)),
            None => {
                debug!("{}: arrived at {}", self.name, self.cube());
                self.set_activity(Activity::Idle);
                Ok(())
            }
        }
    }

    fn begin_step(
        &mut self,
        target: IVec3,
        destination: Option<IVec3>,
    ) -> Result<(), PositionError> {
        self.set_course(self.cube(), target, destination)
    }

    /// Points the unit at the centre of `target` and enters `Moving`.
    fn set_course(
        &mut self,
        origin: IVec3,
        target: IVec3,
        destination: Option<IVec3>,
    ) -> Result<(), PositionError> {
        if self.position == cube_centre(target) {
            return self.continue_path(destination);
        }
        let velocity = velocity_toward(
            &self.world,
            &self.attributes,
            self.position,
            origin,
            target,
            self.movement_mode,
        )?;
        self.face_along(velocity);
        self.set_activity(Activity::Moving(MoveState {
            origin,
            target,
            destination,
            velocity,
        }));
        Ok(())
    }

    fn face_along(&mut self, velocity: DVec3) {
        if velocity.x != 0.0 || velocity.y != 0.0 {
            self.attributes.set_orientation(heading(velocity));
        }
    }
}
