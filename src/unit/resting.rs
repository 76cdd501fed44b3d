//! Resting and regeneration.

use log::debug;

use super::Unit;
use crate::activity::{Activity, ActivityKind, AttackState, RestState};
use crate::error::{ActivityError, UnitError};
use crate::rest::{check_restore_duration, hit_point_gain, stamina_gain};

impl Unit {
    /// Starts resting.
    ///
    /// A moving unit abandons its step and remembers its destination; an
    /// already resting unit is left as it is.
    ///
    /// # Errors
    /// Returns [`ActivityError::Defeated`] for a defeated unit and
    /// [`ActivityError::IllegalTransition`] while attacking.
    pub fn rest(&mut self) -> Result<(), UnitError> {
        if self.is_defeated() {
            return Err(ActivityError::Defeated.into());
        }
        if self.activity.kind() == ActivityKind::Resting {
            return Ok(());
        }
        self.ensure_can_request(ActivityKind::Resting)?;
        self.suspend_path();
        self.set_activity(Activity::Resting(RestState::default()));
        Ok(())
    }

    /// Regenerates over `duration` seconds of rest.
    ///
    /// Hit points recover first at `duration * toughness / 40`; once they
    /// are full, stamina recovers at `duration * toughness / 20`. A unit
    /// with both pools full stops resting. A pending interruption is
    /// consumed instead and sends the unit into an attack wind-up.
    ///
    /// # Errors
    /// - [`ActivityError::Defeated`] for a defeated unit.
    /// - [`ActivityError::NotResting`] unless resting.
    /// - [`crate::error::DurationError::TooShort`] when `duration` would
    ///   restore less than one stamina point.
    pub fn restore(&mut self, duration: f64) -> Result<(), UnitError> {
        if self.is_defeated() {
            return Err(ActivityError::Defeated.into());
        }
        let current = self.activity.kind();
        if current != ActivityKind::Resting {
            return Err(ActivityError::NotResting(current).into());
        }
        if self.take_interruption() {
            self.break_rest();
            return Ok(());
        }
        check_restore_duration(duration, self.toughness())?;
        if self.is_fully_restored() {
            self.set_activity(Activity::Idle);
        } else {
            self.regenerate(duration);
        }
        Ok(())
    }

    pub(super) fn resting_tick(&mut self, rest: RestState, duration: f64) {
        if self.take_interruption() {
            self.break_rest();
            return;
        }
        if self.is_fully_restored() {
            self.set_activity(Activity::Idle);
            return;
        }
        let banked = rest.banked + duration;
        if check_restore_duration(banked, self.toughness()).is_ok() {
            self.regenerate(banked);
            self.activity = Activity::Resting(RestState::default());
        } else {
            self.activity = Activity::Resting(RestState { banked });
        }
    }

    fn break_rest(&mut self) {
        debug!("{}: rest interrupted", self.name);
        self.set_activity(Activity::Attacking(AttackState::default()));
    }

    fn is_fully_restored(&self) -> bool {
        self.hit_points >= f64::from(self.max_hit_points())
            && self.stamina >= f64::from(self.max_stamina())
    }

    fn regenerate(&mut self, duration: f64) {
        let max_hit_points = f64::from(self.max_hit_points());
        let max_stamina = f64::from(self.max_stamina());
        if self.hit_points < max_hit_points {
            let gain = hit_point_gain(duration, self.toughness());
            self.hit_points = (self.hit_points + gain).min(max_hit_points);
        } else if self.stamina < max_stamina {
            let gain = stamina_gain(duration, self.toughness());
            self.stamina = (self.stamina + gain).min(max_stamina);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::activity::ActivityKind;
    use crate::attributes::BaseAttributes;
    use crate::error::{ActivityError, DurationError, UnitError};
    use crate::spatial::WorldBounds;
    use crate::Unit;
    use glam::DVec3;
    use rstest::{fixture, rstest};

    /// A resting unit at 10 of 50 hit points and stamina.
    #[fixture]
    fn wounded() -> Unit {
        let mut unit = Unit::new(
            WorldBounds::default(),
            DVec3::splat(3.5),
            "Granny",
            BaseAttributes::new(50, 50, 50, 50),
        )
        .expect("fixture unit is valid");
        assert!(unit.set_toughness(10));
        assert!(unit.set_toughness(50));
        unit.rest().expect("idle units may rest");
        unit
    }

    #[rstest]
    fn restore_requires_rest() {
        let mut unit = Unit::new(
            WorldBounds::default(),
            DVec3::ZERO,
            "Granny",
            BaseAttributes::default(),
        )
        .expect("valid unit");
        assert_eq!(
            unit.restore(1.0),
            Err(UnitError::Activity(ActivityError::NotResting(
                ActivityKind::Idle
            )))
        );
    }

    #[rstest]
    fn short_rest_is_refused(mut wounded: Unit) {
        assert_eq!(
            wounded.restore(0.39),
            Err(UnitError::Duration(DurationError::TooShort {
                duration: 0.39,
                toughness: 50,
            }))
        );
        assert_eq!(wounded.hit_points(), 10);
    }

    #[rstest]
    fn hit_points_come_back_first(mut wounded: Unit) {
        wounded.restore(2.0).expect("long enough");
        assert_eq!(wounded.hit_points(), 12);
        assert_eq!(wounded.stamina(), 10);
    }

    #[rstest]
    fn interrupted_rest_turns_to_attack(mut wounded: Unit) {
        wounded.set_interruption(true);
        wounded.restore(0.01).expect("interruption wins over duration");
        assert_eq!(wounded.activity(), ActivityKind::Attacking);
        assert!(!wounded.is_interrupted());
    }

    #[rstest]
    fn ticks_bank_until_a_point_is_due(mut wounded: Unit) {
        // Each 0.4 s bank restores half a hit point at toughness 50.
        for _ in 0..7 {
            wounded.advance_time(0.1).expect("valid tick");
        }
        assert_eq!(wounded.hit_points(), 10);
        wounded.advance_time(0.1).expect("valid tick");
        assert_eq!(wounded.hit_points(), 11);
        assert_eq!(wounded.stamina(), 10);
    }

    #[rstest]
    fn rest_is_idempotent(mut wounded: Unit) {
        wounded.rest().expect("already resting");
        assert_eq!(wounded.activity(), ActivityKind::Resting);
    }
}
