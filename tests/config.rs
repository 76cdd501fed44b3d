//! Loading simulation settings from TOML files.

use std::fs;

use anyhow::Result;
use hillbilly::{ConfigError, SimulationConfig, WorldBounds};
use tempfile::TempDir;

#[test]
fn loads_world_and_logging_tables() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("hillbilly.toml");
    fs::write(
        &path,
        "[world]\nlower_bound = -10.0\nupper_bound = 10.0\n\n[logging]\nverbosity = 2\n",
    )?;
    let config = SimulationConfig::from_file(&path)?;
    assert_eq!(config.world_bounds()?, WorldBounds::new(-10.0, 10.0)?);
    assert_eq!(config.logging.verbosity, 2);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() -> Result<()> {
    let dir = TempDir::new()?;
    let result = SimulationConfig::from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
    Ok(())
}

#[test]
fn empty_file_falls_back_to_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("empty.toml");
    fs::write(&path, "")?;
    let config = SimulationConfig::from_file(&path)?;
    assert_eq!(config.world_bounds()?, WorldBounds::default());
    assert_eq!(config.logging.verbosity, 0);
    Ok(())
}

#[test]
fn unaddressable_world_fails_validation() -> Result<()> {
    let config: SimulationConfig = "[world]\nlower_bound = -3e9\nupper_bound = 3e9\n".parse()?;
    assert!(matches!(
        config.world_bounds(),
        Err(ConfigError::InvalidBounds { .. })
    ));
    Ok(())
}

#[test]
fn wrong_types_are_parse_errors() {
    let result = "[world]\nlower_bound = \"low\"\n".parse::<SimulationConfig>();
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn inverted_bounds_fail_validation() -> Result<()> {
    let config: SimulationConfig = "[world]\nlower_bound = 3.0\nupper_bound = 3.0\n".parse()?;
    assert!(matches!(
        config.world_bounds(),
        Err(ConfigError::InvalidBounds { .. })
    ));
    Ok(())
}
