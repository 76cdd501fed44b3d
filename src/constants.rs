//! Balancing constants shared by the unit's activities.
//!
//! Motion, combat and resting all read their rates from here; world bounds
//! may additionally be overridden through [`crate::config`].
use std::f64::consts::FRAC_PI_2;

/// Smallest value any base attribute may take.
pub const MIN_ATTRIBUTE: u32 = 1;
/// Largest value any base attribute may take.
pub const MAX_ATTRIBUTE: u32 = 200;
/// Value an attribute keeps when its construction value is rejected.
pub const DEFAULT_ATTRIBUTE: u32 = 25;
/// Orientation a unit faces when none is supplied.
pub const DEFAULT_ORIENTATION: f64 = FRAC_PI_2;

/// Default lower bound of every world axis.
pub const DEFAULT_LOWER_BOUND: f64 = 0.0;
/// Default upper bound of every world axis.
pub const DEFAULT_UPPER_BOUND: f64 = 50.0;

/// Exclusive upper limit of a single `advance_time` step, in seconds.
pub const MAX_TICK_DURATION: f64 = 0.2;

/// Scales `strength + agility` into metres per second before dividing by weight.
pub const BASE_VELOCITY_FACTOR: f64 = 0.75;
/// Speed multiplier when stepping down into a lower cube.
pub const DESCENT_MODIFIER: f64 = 1.2;
/// Speed multiplier when climbing into a higher cube.
pub const ASCENT_MODIFIER: f64 = 0.5;
/// Sprinting speed relative to walking speed.
pub const SPRINT_MULTIPLIER: f64 = 2.0;
/// Seconds of sprinting that cost one stamina point.
pub const SPRINT_STAMINA_INTERVAL: f64 = 0.1;

/// Number of fixed sub-ticks in an attack wind-up.
pub const COMBAT_SUB_TICKS: u32 = 4;
/// Length of one attack sub-tick, in seconds.
pub const COMBAT_SUB_TICK: f64 = 0.2;
/// Base dodge chance, scaled by the agility ratio.
pub const DODGE_FACTOR: f64 = 0.2;
/// Base block chance, scaled by the strength-minus-agility ratio.
pub const BLOCK_FACTOR: f64 = 0.25;
/// Attacker strength is divided by this to obtain damage.
pub const DAMAGE_DIVISOR: u32 = 10;

/// `duration * toughness / HIT_POINT_REGEN_DIVISOR` hit points per rest.
pub const HIT_POINT_REGEN_DIVISOR: f64 = 40.0;
/// `duration * toughness / STAMINA_REGEN_DIVISOR` stamina per rest.
pub const STAMINA_REGEN_DIVISOR: f64 = 20.0;

/// Slack used when comparing accumulated floating-point time and distance.
pub const TIME_EPSILON: f64 = 1e-9;

/// Total length of an attack wind-up, in seconds.
#[must_use]
pub fn attack_duration() -> f64 {
    f64::from(COMBAT_SUB_TICKS) * COMBAT_SUB_TICK
}
