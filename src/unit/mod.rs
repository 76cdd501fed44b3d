//! The simulated unit and its activity state machine.
//!
//! A [`Unit`] owns its position, attributes, pools and current activity
//! state. External drivers call [`Unit::advance_time`] once per tick
//! and the call is routed to the handler for the current activity:
//!
//! - `movement` integrates steps and walks multi-cube paths,
//! - `resting` banks rest time and regenerates pools,
//! - `encounter` resolves attacks and runs the wind-up timer.
//!
//! Requests (`move_to`, `rest`, `attack`, ...) are checked against
//! [`ActivityKind::can_request`] before any state is touched.

mod encounter;
mod movement;
mod resting;
mod snapshot;

use glam::{DVec3, IVec3};
use log::debug;

pub use snapshot::UnitSnapshot;

use crate::activity::{Activity, ActivityKind, MovementMode};
use crate::attributes::{AttributeSet, BaseAttributes};
use crate::constants::MAX_TICK_DURATION;
use crate::error::{ActivityError, DurationError, UnitError};
use crate::name::UnitName;
use crate::numeric::floor_to_u32;
use crate::spatial::{to_cube, WorldBounds};

/// A single autonomous unit living in a cube world.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    name: UnitName,
    world: WorldBounds,
    position: DVec3,
    attributes: AttributeSet,
    hit_points: f64,
    stamina: f64,
    activity: Activity,
    movement_mode: MovementMode,
    interrupted: bool,
    suspended_destination: Option<IVec3>,
}

impl Unit {
    /// Creates an idle unit at full hit points and stamina.
    ///
    /// Out-of-range attribute values are replaced by defaults as described
    /// on [`AttributeSet::from_base`].
    ///
    /// # Errors
    /// Returns [`UnitError::Position`] if `position` lies outside `world`
    /// and [`UnitError::Name`] if `name` is malformed.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use hillbilly::{ActivityKind, BaseAttributes, Unit, WorldBounds};
    /// let unit = Unit::new(
    ///     WorldBounds::default(),
    ///     DVec3::splat(0.5),
    ///     "Jed",
    ///     BaseAttributes::new(50, 50, 50, 50),
    /// )
    /// .unwrap();
    /// assert_eq!(unit.activity(), ActivityKind::Idle);
    /// assert_eq!(unit.hit_points(), 50);
    /// ```
    pub fn new(
        world: WorldBounds,
        position: DVec3,
        name: &str,
        base: BaseAttributes,
    ) -> Result<Self, UnitError> {
        let start = world.ensure_valid(position)?;
        let unit_name = UnitName::parse(name)?;
        let attributes = AttributeSet::from_base(base);
        let full = f64::from(attributes.max_hit_points());
        debug!("created unit {unit_name} at {start}");
        Ok(Self {
            name: unit_name,
            world,
            position: start,
            attributes,
            hit_points: full,
            stamina: full,
            activity: Activity::Idle,
            movement_mode: MovementMode::Walking,
            interrupted: false,
            suspended_destination: None,
        })
    }

    /// Applies an initial orientation, keeping the default if `angle` is
    /// outside `[0, 2π]`.
    #[must_use]
    pub fn with_orientation(mut self, angle: f64) -> Self {
        if !self.attributes.set_orientation(angle) {
            debug!("{}: ignoring initial orientation {angle}", self.name);
        }
        self
    }

    /// The unit's name.
    #[must_use]
    pub const fn name(&self) -> &UnitName {
        &self.name
    }

    /// Bounds of the world the unit lives in.
    #[must_use]
    pub const fn world(&self) -> &WorldBounds {
        &self.world
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> DVec3 {
        self.position
    }

    /// Cube containing the current position.
    #[must_use]
    pub fn cube(&self) -> IVec3 {
        to_cube(self.position)
    }

    /// All attributes, including orientation.
    #[must_use]
    pub const fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    /// Current weight.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.attributes.weight()
    }

    /// Current strength.
    #[must_use]
    pub const fn strength(&self) -> u32 {
        self.attributes.strength()
    }

    /// Current agility.
    #[must_use]
    pub const fn agility(&self) -> u32 {
        self.attributes.agility()
    }

    /// Current toughness.
    #[must_use]
    pub const fn toughness(&self) -> u32 {
        self.attributes.toughness()
    }

    /// Current orientation in radians.
    #[must_use]
    pub const fn orientation(&self) -> f64 {
        self.attributes.orientation()
    }

    /// Whole hit points left.
    #[must_use]
    pub fn hit_points(&self) -> u32 {
        floor_to_u32(self.hit_points)
    }

    /// Whole stamina points left.
    #[must_use]
    pub fn stamina(&self) -> u32 {
        floor_to_u32(self.stamina)
    }

    /// Hit point cap derived from weight and toughness.
    #[must_use]
    pub const fn max_hit_points(&self) -> u32 {
        self.attributes.max_hit_points()
    }

    /// Stamina cap; equal to the hit point cap.
    #[must_use]
    pub const fn max_stamina(&self) -> u32 {
        self.attributes.max_stamina()
    }

    /// Current activity.
    #[must_use]
    pub const fn activity(&self) -> ActivityKind {
        self.activity.kind()
    }

    /// Current gait.
    #[must_use]
    pub const fn movement_mode(&self) -> MovementMode {
        self.movement_mode
    }

    /// Whether an interruption is waiting to be consumed.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Whether the unit has run out of hit points.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hit_points() == 0
    }

    /// Destination of a path abandoned by interruption, rest or attack.
    #[must_use]
    pub const fn suspended_destination(&self) -> Option<IVec3> {
        self.suspended_destination
    }

    /// Sets the weight if allowed, clamping the pools to the new cap.
    pub fn set_weight(&mut self, weight: u32) -> bool {
        let accepted = self.attributes.set_weight(weight);
        if accepted {
            self.clamp_pools();
        }
        accepted
    }

    /// Sets the strength if allowed.
    pub fn set_strength(&mut self, strength: u32) -> bool {
        self.attributes.set_strength(strength)
    }

    /// Sets the agility if allowed.
    pub fn set_agility(&mut self, agility: u32) -> bool {
        self.attributes.set_agility(agility)
    }

    /// Sets the toughness if allowed, clamping the pools to the new cap.
    pub fn set_toughness(&mut self, toughness: u32) -> bool {
        let accepted = self.attributes.set_toughness(toughness);
        if accepted {
            self.clamp_pools();
        }
        accepted
    }

    /// Sets the orientation if it lies in `[0, 2π]`.
    pub fn set_orientation(&mut self, angle: f64) -> bool {
        self.attributes.set_orientation(angle)
    }

    /// Raises or clears the interruption flag.
    ///
    /// The flag is consumed by the next tick handler that acts on it.
    pub fn set_interruption(&mut self, interrupted: bool) {
        self.interrupted = interrupted;
    }

    /// Advances the unit by `duration` seconds.
    ///
    /// # Errors
    /// Returns [`UnitError::Duration`] when `duration` is not in
    /// `[0, 0.2)`; the unit is left untouched in that case. Movement
    /// handlers may surface [`UnitError::Position`].
    pub fn advance_time(&mut self, duration: f64) -> Result<(), UnitError> {
        check_tick_duration(duration)?;
        if self.is_defeated() {
            return Ok(());
        }
        match self.activity {
            Activity::Idle => {
                if self.take_interruption() {
                    debug!("{}: interruption while idle has nothing to abandon", self.name);
                }
            }
            Activity::Moving(step) => self.moving_tick(step, duration)?,
            Activity::Resting(rest) => self.resting_tick(rest, duration),
            Activity::Attacking(wind_up) => self.attacking_tick(wind_up, duration),
        }
        Ok(())
    }

    /// Clears the interruption flag, reporting whether it was set.
    fn take_interruption(&mut self) -> bool {
        std::mem::take(&mut self.interrupted)
    }

    /// Rejects requests from defeated units and missing state machine edges.
    fn ensure_can_request(&self, next: ActivityKind) -> Result<(), ActivityError> {
        if self.is_defeated() {
            return Err(ActivityError::Defeated);
        }
        let current = self.activity.kind();
        if current.can_request(next) {
            Ok(())
        } else {
            debug!("{}: refused switch from {current} to {next}", self.name);
            Err(ActivityError::IllegalTransition {
                from: current,
                to: next,
            })
        }
    }

    fn set_activity(&mut self, activity: Activity) {
        let from = self.activity.kind();
        let to = activity.kind();
        if from != to {
            debug!("{}: {from} -> {to}", self.name);
        }
        if to != ActivityKind::Moving {
            self.movement_mode = MovementMode::Walking;
        }
        self.activity = activity;
    }

    fn clamp_pools(&mut self) {
        self.hit_points = self.hit_points.min(f64::from(self.max_hit_points()));
        self.stamina = self.stamina.min(f64::from(self.max_stamina()));
    }
}

/// Accepts finite durations in `[0, MAX_TICK_DURATION)`.
fn check_tick_duration(duration: f64) -> Result<(), DurationError> {
    if duration.is_finite() && (0.0..MAX_TICK_DURATION).contains(&duration) {
        Ok(())
    } else {
        Err(DurationError::OutOfRange(duration))
    }
}
