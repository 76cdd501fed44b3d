//! Utility helpers for tests.
//!
//! Fixture constructors for units and a scripted [`RandomSource`].

use anyhow::{bail, Result};
use glam::IVec3;
use hillbilly::spatial::cube_centre;
use hillbilly::{BaseAttributes, RandomSource, Unit, WorldBounds};

/// Default attributes used by most fixtures: 50 across the board, giving
/// 50 hit points and a level walking speed of 1.5 m/s.
pub const BALANCED: BaseAttributes = BaseAttributes::new(50, 50, 50, 50);

/// A unit standing at the centre of `cube` in the default world.
///
/// # Panics
/// Panics if `cube` lies outside the default world or `name` is invalid.
pub fn unit_at(name: &str, cube: IVec3) -> Unit {
    unit_with(name, cube, BALANCED)
}

/// A unit with custom attributes standing at the centre of `cube`.
///
/// # Panics
/// Panics if `cube` lies outside the default world or `name` is invalid.
pub fn unit_with(name: &str, cube: IVec3, base: BaseAttributes) -> Unit {
    Unit::new(WorldBounds::default(), cube_centre(cube), name, base)
        .unwrap_or_else(|err| panic!("fixture unit {name} is invalid: {err}"))
}

/// A balanced unit whose hit points and stamina are cut down to `pool`.
///
/// The pools are clamped by lowering toughness, which is then restored.
///
/// # Panics
/// Panics unless `1 <= pool <= 50`.
pub fn wounded(name: &str, cube: IVec3, pool: u32) -> Unit {
    let mut unit = unit_at(name, cube);
    assert!(unit.set_toughness(pool), "toughness {pool} rejected");
    assert_eq!(unit.hit_points(), pool, "pool above the balanced cap");
    assert!(unit.set_toughness(BALANCED.toughness));
    unit
}

/// Advances `unit` by `tick` until `done` holds, failing after `limit` ticks.
///
/// Returns the number of ticks taken.
///
/// # Errors
/// Fails if a tick is rejected or `done` never holds.
pub fn tick_until(
    unit: &mut Unit,
    tick: f64,
    limit: usize,
    done: impl Fn(&Unit) -> bool,
) -> Result<usize> {
    for taken in 0..=limit {
        if done(unit) {
            return Ok(taken);
        }
        unit.advance_time(tick)?;
    }
    bail!("{} did not settle within {limit} ticks", unit.name())
}

/// Deterministic random source replaying `draws` in a loop.
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Creates a source that replays `draws`.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn taken(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let draw = match self.draws.len() {
            0 => 0.0,
            len => self.draws.get(self.cursor % len).copied().unwrap_or(0.0),
        };
        self.cursor += 1;
        draw
    }
}
