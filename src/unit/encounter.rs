//! Attacks between two units.

use log::{debug, info};

use super::Unit;
use crate::activity::{Activity, AttackState};
use crate::combat::{facing, roll, CombatOutcome};
use crate::constants::{COMBAT_SUB_TICK, COMBAT_SUB_TICKS};
use crate::error::{ActivityError, UnitError};
use crate::random::RandomSource;

impl Unit {
    /// Attacks `defender`, resolving the blow with draws from `random`.
    ///
    /// Both units turn to face each other and wind up for four fixed
    /// sub-ticks before the dodge, block and hit rolls. A defender that was
    /// moving has its path suspended. Both units are idle afterwards.
    ///
    /// # Errors
    /// Returns [`ActivityError::Defeated`] when either unit is defeated;
    /// neither unit is touched in that case.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec3;
    /// use hillbilly::{ActivityKind, BaseAttributes, RngSource, Unit, WorldBounds};
    /// use rand::{rngs::SmallRng, SeedableRng};
    /// let world = WorldBounds::default();
    /// let base = BaseAttributes::new(60, 60, 40, 40);
    /// let mut jed = Unit::new(world, DVec3::splat(5.5), "Jed", base).unwrap();
    /// let mut jethro = Unit::new(world, DVec3::new(6.5, 5.5, 5.5), "Jethro", base).unwrap();
    /// let mut dice = RngSource::new(SmallRng::seed_from_u64(1));
    /// jed.attack(&mut jethro, &mut dice).unwrap();
    /// assert_eq!(jed.activity(), ActivityKind::Idle);
    /// assert_eq!(jethro.activity(), ActivityKind::Idle);
    /// ```
    pub fn attack(
        &mut self,
        defender: &mut Self,
        random: &mut dyn RandomSource,
    ) -> Result<CombatOutcome, UnitError> {
        if self.is_defeated() || defender.is_defeated() {
            return Err(ActivityError::Defeated.into());
        }
        info!("{} attacks {}", self.name, defender.name);
        self.enter_attack();
        defender.enter_attack();
        if let Some(angle) = facing(self.position, defender.position) {
            self.attributes.set_orientation(angle);
        }
        if let Some(angle) = facing(defender.position, self.position) {
            defender.attributes.set_orientation(angle);
        }

        for _ in 0..COMBAT_SUB_TICKS {
            self.wind_up(COMBAT_SUB_TICK);
            defender.wind_up(COMBAT_SUB_TICK);
        }

        let verdict = roll(&self.attributes, &defender.attributes, random);
        match verdict.outcome {
            CombatOutcome::Dodged => {
                defender.position = defender.world.clamp(defender.position + verdict.offset);
                info!("{} dodges to {}", defender.name, defender.position);
            }
            CombatOutcome::Blocked => info!("{} blocks", defender.name),
            CombatOutcome::Hit { damage } => defender.take_damage(damage),
        }
        self.set_activity(Activity::Idle);
        defender.set_activity(Activity::Idle);
        Ok(verdict.outcome)
    }

    pub(super) fn attacking_tick(&mut self, mut wind_up: AttackState, duration: f64) {
        if wind_up.advance(duration) {
            self.set_activity(Activity::Idle);
        } else {
            self.activity = Activity::Attacking(wind_up);
        }
    }

    fn enter_attack(&mut self) {
        self.suspend_path();
        self.set_activity(Activity::Attacking(AttackState::default()));
    }

    fn wind_up(&mut self, duration: f64) {
        if let Activity::Attacking(state) = self.activity {
            self.attacking_tick(state, duration);
        }
    }

    fn take_damage(&mut self, damage: u32) {
        self.hit_points = (self.hit_points - f64::from(damage)).max(0.0);
        info!(
            "{} takes {damage} damage, {} hit points left",
            self.name,
            self.hit_points()
        );
        if self.is_defeated() {
            info!("{} is defeated", self.name);
            self.hit_points = 0.0;
            self.interrupted = false;
            self.suspended_destination = None;
            self.set_activity(Activity::Idle);
        } else {
            debug!("{} survives the blow", self.name);
        }
    }
}
