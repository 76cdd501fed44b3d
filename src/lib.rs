//! Library crate simulating a single unit in a cube world.
//!
//! A [`Unit`] walks between cubes, rests to regain hit points and stamina,
//! and fights other units. Drivers call [`Unit::advance_time`] once per
//! tick; everything else is requested through the unit's methods.
pub mod activity;
pub mod attributes;
pub mod combat;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod motion;
pub mod name;
pub mod numeric;
pub mod random;
pub mod rest;
pub mod spatial;
pub mod unit;
pub mod vector_math;

// Re-export commonly used items
pub use activity::{ActivityKind, MovementMode};
pub use attributes::{AttributeSet, BaseAttributes};
pub use combat::CombatOutcome;
pub use config::{ConfigError, SimulationConfig};
pub use error::{ActivityError, DurationError, NameError, PositionError, UnitError};
pub use logging::init as init_logging;
pub use name::UnitName;
pub use random::{RandomSource, RngSource};
pub use spatial::WorldBounds;
pub use unit::{Unit, UnitSnapshot};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use hillbilly::prelude::*;
    //! ```

    pub use crate::{
        ActivityKind, BaseAttributes, CombatOutcome, MovementMode, RandomSource, Unit,
        UnitError, WorldBounds,
    };
    pub use glam::{DVec3, IVec3};
}
