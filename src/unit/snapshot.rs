//! Serialisable views of a unit.

use serde::Serialize;

use super::Unit;
use crate::activity::{ActivityKind, MovementMode};
use crate::attributes::AttributeSet;

/// Point-in-time copy of the observable state of a [`Unit`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSnapshot {
    /// Unit name.
    pub name: String,
    /// Position as `[x, y, z]`.
    pub position: [f64; 3],
    /// Occupied cube as `[x, y, z]`.
    pub cube: [i32; 3],
    /// Attributes including orientation.
    pub attributes: AttributeSet,
    /// Whole hit points left.
    pub hit_points: u32,
    /// Whole stamina points left.
    pub stamina: u32,
    /// Shared hit point and stamina cap.
    pub max_hit_points: u32,
    /// Current activity.
    pub activity: ActivityKind,
    /// Current gait.
    pub movement_mode: MovementMode,
    /// Destination of a suspended path, if any.
    pub suspended_destination: Option<[i32; 3]>,
}

impl Unit {
    /// Captures the current state for logging or serialisation.
    #[must_use]
    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            name: self.name.to_string(),
            position: self.position.to_array(),
            cube: self.cube().to_array(),
            attributes: self.attributes.clone(),
            hit_points: self.hit_points(),
            stamina: self.stamina(),
            max_hit_points: self.max_hit_points(),
            activity: self.activity(),
            movement_mode: self.movement_mode,
            suspended_destination: self.suspended_destination.map(|cube| cube.to_array()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::attributes::BaseAttributes;
    use crate::spatial::WorldBounds;
    use crate::Unit;
    use glam::DVec3;

    #[test]
    fn snapshot_serialises_to_json() {
        let unit = Unit::new(
            WorldBounds::default(),
            DVec3::new(1.5, 2.5, 3.5),
            "Elly May",
            BaseAttributes::new(50, 50, 50, 50),
        )
        .expect("valid unit");
        let json = serde_json::to_value(unit.snapshot()).expect("snapshot serialises");
        assert_eq!(json["name"], "Elly May");
        assert_eq!(json["cube"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["activity"], "Idle");
        assert_eq!(json["attributes"]["weight"], 50);
        assert_eq!(json["hit_points"], 50);
    }
}
