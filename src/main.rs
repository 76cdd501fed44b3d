//! Command line demonstration of two units walking, fighting and resting.
//!
//! Snapshots are written to stdout as one JSON document per line.
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{DVec3, IVec3};
use hillbilly::spatial::cube_centre;
use hillbilly::{init_logging, ActivityKind, BaseAttributes, RngSource, SimulationConfig, Unit};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Runs a scripted two-unit encounter
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the combat dice
    #[arg(long, default_value_t = 7)]
    seed: u64,
    /// Upper limit on ticks spent in each phase
    #[arg(long, default_value_t = 400)]
    ticks: u32,
    /// Length of one tick in seconds
    #[arg(long, default_value_t = 0.1)]
    tick: f64,
    /// Increase logging verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct Demo<W: Write> {
    out: W,
    tick: f64,
    budget: u32,
}

impl<W: Write> Demo<W> {
    fn emit(&mut self, phase: &str, units: &[&Unit]) -> Result<()> {
        let snapshots: Vec<_> = units.iter().map(|unit| unit.snapshot()).collect();
        let line = json!({ "phase": phase, "units": snapshots });
        serde_json::to_writer(&mut self.out, &line)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Ticks `unit` until it is idle or the budget runs out.
    fn run_until_idle(
        &mut self,
        unit: &mut Unit,
        mut on_tick: impl FnMut(&mut Unit, u32) -> Result<()>,
    ) -> Result<u32> {
        let mut elapsed = 0;
        while unit.activity() != ActivityKind::Idle && elapsed < self.budget {
            unit.advance_time(self.tick)
                .with_context(|| format!("advancing {} by {}s", unit.name(), self.tick))?;
            elapsed += 1;
            on_tick(unit, elapsed)?;
        }
        Ok(elapsed)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    init_logging(args.verbose.max(config.logging.verbosity));
    let world = config.world_bounds()?;

    let corner = DVec3::splat(world.lower().ceil());
    let start = |offset: IVec3| cube_centre(offset) + corner;
    let mut jed = Unit::new(
        world,
        start(IVec3::new(1, 1, 0)),
        "Jed Clampett",
        BaseAttributes::new(90, 110, 60, 70),
    )?
    .with_orientation(0.0);
    let mut jethro = Unit::new(
        world,
        start(IVec3::new(6, 4, 0)),
        "Jethro Bodine",
        BaseAttributes::new(80, 100, 40, 45),
    )?;

    let mut demo = Demo {
        out: io::stdout().lock(),
        tick: args.tick,
        budget: args.ticks,
    };
    demo.emit("start", &[&jed, &jethro])?;

    jed.move_to(jethro.cube() - IVec3::X)?;
    let walked = demo.run_until_idle(&mut jed, |unit, tick| {
        if tick == 3 && unit.activity() == ActivityKind::Moving {
            unit.start_sprinting()?;
        }
        Ok(())
    })?;
    log::info!("{} walked for {walked} ticks", jed.name());
    demo.emit("arrived", &[&jed, &jethro])?;

    let mut dice = RngSource::new(SmallRng::seed_from_u64(args.seed));
    let outcome = jed.attack(&mut jethro, &mut dice)?;
    log::info!("attack outcome: {outcome:?}");
    demo.emit("attacked", &[&jed, &jethro])?;

    if !jethro.is_defeated() {
        jethro.rest()?;
        let rested = demo.run_until_idle(&mut jethro, |_, _| Ok(()))?;
        log::info!("{} rested for {rested} ticks", jethro.name());
    }
    demo.emit("rested", &[&jed, &jethro])?;
    demo.out.flush()?;
    Ok(())
}
