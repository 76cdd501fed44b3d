//! Attack resolution between two units.
//!
//! The probabilities and damage are pure functions of the participants'
//! attributes; [`roll`] consumes draws from a [`RandomSource`] and returns
//! the verdict together with any dodge displacement. Applying the verdict
//! to the units is left to [`crate::Unit::attack`].

use glam::DVec3;
use serde::Serialize;

use crate::attributes::AttributeSet;
use crate::constants::{BLOCK_FACTOR, DAMAGE_DIVISOR, DODGE_FACTOR};
use crate::random::RandomSource;
use crate::vector_math::heading;

/// How an attack ended for the defender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CombatOutcome {
    /// The defender stepped aside.
    Dodged,
    /// The defender parried the blow.
    Blocked,
    /// The blow landed.
    Hit {
        /// Hit points removed from the defender before flooring at zero.
        damage: u32,
    },
}

/// Verdict of the dice plus the displacement a dodge produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Roll {
    /// Outcome to apply.
    pub outcome: CombatOutcome,
    /// Horizontal offset for a dodging defender; zero otherwise.
    pub offset: DVec3,
}

/// Orientation that turns a unit at `from` toward `to`.
///
/// Returns `None` when the two points share a vertical line, leaving the
/// current orientation in place.
#[must_use]
pub fn facing(from: DVec3, to: DVec3) -> Option<f64> {
    let delta = to - from;
    (delta.x != 0.0 || delta.y != 0.0).then(|| heading(delta))
}

/// `0.2 * defender_agility / attacker_agility`, clamped to `[0, 1]`.
///
/// # Examples
/// ```
/// use hillbilly::{AttributeSet, BaseAttributes};
/// use hillbilly::combat::dodge_probability;
/// let attacker = AttributeSet::from_base(BaseAttributes::new(50, 50, 40, 50));
/// let defender = AttributeSet::from_base(BaseAttributes::new(50, 50, 20, 50));
/// assert!((dodge_probability(&attacker, &defender) - 0.1).abs() < 1e-12);
/// ```
#[must_use]
pub fn dodge_probability(attacker: &AttributeSet, defender: &AttributeSet) -> f64 {
    let ratio = f64::from(defender.agility()) / f64::from(attacker.agility());
    (DODGE_FACTOR * ratio).clamp(0.0, 1.0)
}

/// `0.25 * (defender_strength - defender_agility) /
/// (attacker_strength - attacker_agility)`, clamped to `[0, 1]`.
///
/// With equal attacker strength and agility the ratio is undefined; the
/// block then succeeds for a defender whose strength exceeds their agility
/// and fails otherwise.
#[must_use]
pub fn block_probability(attacker: &AttributeSet, defender: &AttributeSet) -> f64 {
    let numerator = f64::from(defender.strength()) - f64::from(defender.agility());
    let denominator = f64::from(attacker.strength()) - f64::from(attacker.agility());
    if denominator == 0.0 {
        return if numerator > 0.0 { 1.0 } else { 0.0 };
    }
    (BLOCK_FACTOR * numerator / denominator).clamp(0.0, 1.0)
}

/// Hit points an unblocked, undodged attack removes.
#[must_use]
pub const fn damage(attacker: &AttributeSet) -> u32 {
    attacker.strength() / DAMAGE_DIVISOR
}

/// Random horizontal displacement in `[-1, 1)` on x and y.
pub fn dodge_offset(random: &mut dyn RandomSource) -> DVec3 {
    let dx = 2.0f64.mul_add(random.next_unit(), -1.0);
    let dy = 2.0f64.mul_add(random.next_unit(), -1.0);
    DVec3::new(dx, dy, 0.0)
}

/// Rolls dodge, then block, then settles for a hit.
///
/// Dodge and block each take their own draw; a successful dodge takes two
/// more for the displacement.
pub fn roll(
    attacker: &AttributeSet,
    defender: &AttributeSet,
    random: &mut dyn RandomSource,
) -> Roll {
    if random.next_unit() <= dodge_probability(attacker, defender) {
        return Roll {
            outcome: CombatOutcome::Dodged,
            offset: dodge_offset(random),
        };
    }
    let outcome = if random.next_unit() <= block_probability(attacker, defender) {
        CombatOutcome::Blocked
    } else {
        CombatOutcome::Hit {
            damage: damage(attacker),
        }
    };
    Roll {
        outcome,
        offset: DVec3::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::BaseAttributes;
    use crate::random::MockRandomSource;
    use approx::assert_relative_eq;
    use mockall::Sequence;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn attrs(strength: u32, agility: u32) -> AttributeSet {
        AttributeSet::from_base(BaseAttributes::new(200, strength, agility, 50))
    }

    fn scripted(draws: &[f64]) -> MockRandomSource {
        let mut source = MockRandomSource::new();
        let mut seq = Sequence::new();
        for &draw in draws {
            source
                .expect_next_unit()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(draw);
        }
        source
    }

    #[rstest]
    #[case::equal_split(attrs(60, 40), attrs(60, 40), 0.25)]
    #[case::clamped_high(attrs(41, 40), attrs(100, 10), 1.0)]
    #[case::negative_numerator(attrs(60, 40), attrs(10, 40), 0.0)]
    #[case::zero_denominator_strong(attrs(40, 40), attrs(60, 40), 1.0)]
    #[case::zero_denominator_weak(attrs(40, 40), attrs(40, 40), 0.0)]
    fn block_chances(
        #[case] attacker: AttributeSet,
        #[case] defender: AttributeSet,
        #[case] expected: f64,
    ) {
        assert_relative_eq!(block_probability(&attacker, &defender), expected);
    }

    #[test]
    fn dodge_is_capped_at_certainty() {
        assert_relative_eq!(dodge_probability(&attrs(50, 1), &attrs(50, 200)), 1.0);
    }

    #[rstest]
    #[case(DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0), Some(0.0))]
    #[case(DVec3::ZERO, DVec3::new(0.0, 2.0, 5.0), Some(FRAC_PI_2))]
    #[case(DVec3::new(1.0, 0.0, 0.0), DVec3::ZERO, Some(PI))]
    #[case(DVec3::ZERO, DVec3::new(0.0, 0.0, 3.0), None)]
    fn facing_angles(#[case] from: DVec3, #[case] to: DVec3, #[case] expected: Option<f64>) {
        match (facing(from, to), expected) {
            (Some(angle), Some(want)) => assert_relative_eq!(angle, want, epsilon = 1e-12),
            (got, want) => assert_eq!(got, want),
        }
    }

    #[test]
    fn zero_draws_dodge_to_lower_left() {
        let mut source = scripted(&[0.0, 0.0, 0.0]);
        let result = roll(&attrs(50, 50), &attrs(50, 30), &mut source);
        assert_eq!(result.outcome, CombatOutcome::Dodged);
        assert_eq!(result.offset, DVec3::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn failed_dodge_falls_through_to_block() {
        let mut source = scripted(&[0.9, 0.1]);
        let result = roll(&attrs(60, 40), &attrs(60, 40), &mut source);
        assert_eq!(result.outcome, CombatOutcome::Blocked);
        assert_eq!(result.offset, DVec3::ZERO);
    }

    #[test]
    fn failed_rolls_land_a_hit() {
        let mut source = scripted(&[0.99, 0.99]);
        let result = roll(&attrs(87, 40), &attrs(60, 40), &mut source);
        assert_eq!(result.outcome, CombatOutcome::Hit { damage: 8 });
    }
}
