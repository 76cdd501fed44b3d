//! Bounded unit attributes and the pools derived from them.
//!
//! Setters follow a best-effort policy: a candidate is stored only when it
//! lies in `[MIN_ATTRIBUTE, MAX_ATTRIBUTE]` and keeps the weight floor
//! `2 * weight >= strength + agility` intact. Rejected candidates leave the
//! previous value in place and are reported by a `false` return, never an
//! error.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ATTRIBUTE, DEFAULT_ORIENTATION, MAX_ATTRIBUTE, MIN_ATTRIBUTE};
use crate::numeric::div_ceil_u32;

/// `max_hit_points = ceil(weight * toughness / HIT_POINT_DIVISOR)`,
/// i.e. `ceil(weight * toughness * 0.02)` in exact integer arithmetic.
const HIT_POINT_DIVISOR: u32 = 50;

/// Raw construction values for a unit's four base attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAttributes {
    /// Body weight.
    pub weight: u32,
    /// Physical strength.
    pub strength: u32,
    /// Nimbleness.
    pub agility: u32,
    /// Resilience.
    pub toughness: u32,
}

impl BaseAttributes {
    /// Bundles the four values in `weight, strength, agility, toughness` order.
    #[must_use]
    pub const fn new(weight: u32, strength: u32, agility: u32, toughness: u32) -> Self {
        Self {
            weight,
            strength,
            agility,
            toughness,
        }
    }
}

impl Default for BaseAttributes {
    fn default() -> Self {
        Self::new(
            DEFAULT_ATTRIBUTE,
            DEFAULT_ATTRIBUTE,
            DEFAULT_ATTRIBUTE,
            DEFAULT_ATTRIBUTE,
        )
    }
}

/// Returns whether `value` lies inside the absolute attribute range.
#[must_use]
pub const fn is_valid_attribute(value: u32) -> bool {
    value >= MIN_ATTRIBUTE && value <= MAX_ATTRIBUTE
}

/// Returns whether `angle` is an acceptable orientation in `[0, 2π]`.
#[must_use]
pub fn is_valid_orientation(angle: f64) -> bool {
    angle.is_finite() && (0.0..=TAU).contains(&angle)
}

/// Weight, strength, agility, toughness and orientation of one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSet {
    weight: u32,
    strength: u32,
    agility: u32,
    toughness: u32,
    orientation: f64,
}

impl AttributeSet {
    /// Builds the set from construction values, keeping defaults for any
    /// value that is out of range.
    ///
    /// Strength, agility and toughness are range-checked first. A rejected
    /// weight falls back to [`DEFAULT_ATTRIBUTE`] raised to the weight floor
    /// implied by the accepted strength and agility.
    #[must_use]
    pub fn from_base(base: BaseAttributes) -> Self {
        let pick = |value: u32| {
            if is_valid_attribute(value) {
                value
            } else {
                DEFAULT_ATTRIBUTE
            }
        };
        let strength = pick(base.strength);
        let agility = pick(base.agility);
        let toughness = pick(base.toughness);
        let floor = weight_floor(strength, agility);
        let weight = if is_valid_attribute(base.weight) && base.weight >= floor {
            base.weight
        } else {
            log::debug!(
                "weight {} rejected at construction; using floor-adjusted default",
                base.weight
            );
            DEFAULT_ATTRIBUTE.max(floor)
        };
        Self {
            weight,
            strength,
            agility,
            toughness,
            orientation: DEFAULT_ORIENTATION,
        }
    }

    /// Current weight.
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Current strength.
    #[must_use]
    pub const fn strength(&self) -> u32 {
        self.strength
    }

    /// Current agility.
    #[must_use]
    pub const fn agility(&self) -> u32 {
        self.agility
    }

    /// Current toughness.
    #[must_use]
    pub const fn toughness(&self) -> u32 {
        self.toughness
    }

    /// Current orientation in radians.
    #[must_use]
    pub const fn orientation(&self) -> f64 {
        self.orientation
    }

    /// Whether `weight` would be accepted by [`Self::set_weight`].
    #[must_use]
    pub const fn can_have_as_weight(&self, weight: u32) -> bool {
        is_valid_attribute(weight) && 2 * weight >= self.strength + self.agility
    }

    /// Whether `strength` would be accepted by [`Self::set_strength`].
    #[must_use]
    pub const fn can_have_as_strength(&self, strength: u32) -> bool {
        is_valid_attribute(strength) && strength + self.agility <= 2 * self.weight
    }

    /// Whether `agility` would be accepted by [`Self::set_agility`].
    #[must_use]
    pub const fn can_have_as_agility(&self, agility: u32) -> bool {
        is_valid_attribute(agility) && self.strength + agility <= 2 * self.weight
    }

    /// Stores `weight` if allowed; returns whether it was stored.
    pub fn set_weight(&mut self, weight: u32) -> bool {
        let accepted = self.can_have_as_weight(weight);
        if accepted {
            self.weight = weight;
        }
        accepted
    }

    /// Stores `strength` if allowed; returns whether it was stored.
    pub fn set_strength(&mut self, strength: u32) -> bool {
        let accepted = self.can_have_as_strength(strength);
        if accepted {
            self.strength = strength;
        }
        accepted
    }

    /// Stores `agility` if allowed; returns whether it was stored.
    pub fn set_agility(&mut self, agility: u32) -> bool {
        let accepted = self.can_have_as_agility(agility);
        if accepted {
            self.agility = agility;
        }
        accepted
    }

    /// Stores `toughness` if in range; returns whether it was stored.
    pub fn set_toughness(&mut self, toughness: u32) -> bool {
        let accepted = is_valid_attribute(toughness);
        if accepted {
            self.toughness = toughness;
        }
        accepted
    }

    /// Stores `angle` if it lies in `[0, 2π]`; returns whether it was stored.
    pub fn set_orientation(&mut self, angle: f64) -> bool {
        let accepted = is_valid_orientation(angle);
        if accepted {
            self.orientation = angle;
        }
        accepted
    }

    /// `ceil(weight * toughness * 0.02)`, recomputed on every call.
    ///
    /// # Examples
    /// ```
    /// use hillbilly::{AttributeSet, BaseAttributes};
    /// let attrs = AttributeSet::from_base(BaseAttributes::new(33, 17, 17, 17));
    /// assert_eq!(attrs.max_hit_points(), 12);
    /// ```
    #[must_use]
    pub const fn max_hit_points(&self) -> u32 {
        div_ceil_u32(self.weight * self.toughness, HIT_POINT_DIVISOR)
    }

    /// Stamina shares the hit point cap.
    #[must_use]
    pub const fn max_stamina(&self) -> u32 {
        self.max_hit_points()
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::from_base(BaseAttributes::default())
    }
}

/// `ceil((strength + agility) / 2)`.
const fn weight_floor(strength: u32, agility: u32) -> u32 {
    div_ceil_u32(strength + agility, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn attrs(weight: u32, strength: u32, agility: u32, toughness: u32) -> AttributeSet {
        AttributeSet::from_base(BaseAttributes::new(weight, strength, agility, toughness))
    }

    #[rstest]
    #[case(50, 50, 50, 50, 50)]
    #[case(100, 50, 50, 37, 74)]
    #[case(1, 1, 1, 1, 1)]
    #[case(200, 200, 200, 200, 800)]
    #[case(33, 17, 17, 17, 12)]
    fn max_hit_points_rounds_up(
        #[case] weight: u32,
        #[case] strength: u32,
        #[case] agility: u32,
        #[case] toughness: u32,
        #[case] expected: u32,
    ) {
        let set = attrs(weight, strength, agility, toughness);
        assert_eq!(set.max_hit_points(), expected);
        assert_eq!(set.max_stamina(), expected);
    }

    #[rstest]
    #[case::zero(BaseAttributes::new(50, 0, 40, 40), 25, 40)]
    #[case::too_large(BaseAttributes::new(50, 40, 201, 40), 40, 25)]
    fn out_of_range_base_values_keep_default(
        #[case] base: BaseAttributes,
        #[case] strength: u32,
        #[case] agility: u32,
    ) {
        let set = AttributeSet::from_base(base);
        assert_eq!(set.strength(), strength);
        assert_eq!(set.agility(), agility);
        assert_eq!(set.weight(), 50);
    }

    #[test]
    fn rejected_weight_respects_floor() {
        let set = attrs(10, 100, 60, 20);
        assert_eq!(set.weight(), 80);
        assert!(2 * set.weight() >= set.strength() + set.agility());
    }

    #[test]
    fn strength_cannot_break_weight_floor() {
        let mut set = attrs(50, 50, 50, 50);
        assert!(!set.set_strength(51));
        assert_eq!(set.strength(), 50);
        assert!(set.set_strength(10));
        assert_eq!(set.strength(), 10);
    }

    #[test]
    fn toughness_change_updates_cap() {
        let mut set = attrs(50, 50, 50, 50);
        assert!(set.set_toughness(100));
        assert_eq!(set.max_hit_points(), 100);
    }

    #[rstest]
    #[case(-0.1, false)]
    #[case(0.0, true)]
    #[case(TAU, true)]
    #[case(TAU + 1e-9, false)]
    #[case(f64::NAN, false)]
    fn orientation_range(#[case] angle: f64, #[case] accepted: bool) {
        let mut set = AttributeSet::default();
        assert_eq!(set.set_orientation(angle), accepted);
        if !accepted {
            assert!((set.orientation() - DEFAULT_ORIENTATION).abs() < f64::EPSILON);
        }
    }
}
