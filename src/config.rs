//! Simulation settings loaded from TOML.
//!
//! ```toml
//! [world]
//! lower_bound = 0.0
//! upper_bound = 50.0
//!
//! [logging]
//! verbosity = 1
//! ```
//!
//! Every table and key is optional; missing values fall back to the
//! defaults in [`crate::constants`].

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_LOWER_BOUND, DEFAULT_UPPER_BOUND};
use crate::spatial::WorldBounds;

/// Complete simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// World geometry.
    pub world: WorldConfig,
    /// Logger settings.
    pub logging: LoggingConfig,
}

/// Extent of the cubic world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Lower bound of every axis.
    pub lower_bound: f64,
    /// Upper bound of every axis.
    pub upper_bound: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            lower_bound: DEFAULT_LOWER_BOUND,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }
}

/// Logger settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `0` logs info and above, `1` adds debug, `2` or more adds trace.
    pub verbosity: u8,
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid TOML for [`SimulationConfig`].
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// The world bounds do not describe a non-empty finite range.
    #[error("world bounds [{lower}, {upper}] must be finite with lower < upper")]
    InvalidBounds {
        /// Configured lower bound.
        lower: f64,
        /// Configured upper bound.
        upper: f64,
    },
}

impl SimulationConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Toml`] if it cannot be parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Validated world bounds.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBounds`] for inverted or non-finite
    /// bounds.
    pub fn world_bounds(&self) -> Result<WorldBounds, ConfigError> {
        WorldBounds::new(self.world.lower_bound, self.world.upper_bound)
    }
}

impl FromStr for SimulationConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: SimulationConfig = "".parse().expect("empty config is valid");
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(
            config.world_bounds().expect("default bounds are valid"),
            WorldBounds::default()
        );
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config: SimulationConfig = "[world]\nupper_bound = 20.0\n"
            .parse()
            .expect("partial config is valid");
        assert!((config.world.lower_bound - DEFAULT_LOWER_BOUND).abs() < f64::EPSILON);
        assert!((config.world.upper_bound - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.verbosity, 0);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let config: SimulationConfig = "[world]\nlower_bound = 10.0\nupper_bound = 5.0\n"
            .parse()
            .expect("syntax is valid");
        assert!(matches!(
            config.world_bounds(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_reported() {
        let result = "[world\n".parse::<SimulationConfig>();
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
