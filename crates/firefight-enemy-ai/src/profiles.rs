//! Archetype-specific behavior profiles.
//!
//! Consolidates per-archetype planner parameters.

use firefight_core::constants::{AI_DETECTION_RANGE, AI_MAX_STEPS_PER_TURN};
use firefight_core::enums::HostileArchetype;

/// Behavior profile for a hostile archetype.
#[derive(Debug, Clone, Copy)]
pub struct EnemyBehavior {
    /// Fires on visible targets within this many tiles.
    pub detection_range: i32,
    /// Single-tile steps allowed per activation.
    pub max_steps: u32,
}

/// Get the behavior profile for a given archetype.
pub fn get_behavior(archetype: HostileArchetype) -> EnemyBehavior {
    match archetype {
        HostileArchetype::Grunt => EnemyBehavior {
            detection_range: AI_DETECTION_RANGE,
            max_steps: AI_MAX_STEPS_PER_TURN,
        },
        HostileArchetype::Stalker => EnemyBehavior {
            detection_range: AI_DETECTION_RANGE + 3,
            max_steps: AI_MAX_STEPS_PER_TURN + 1,
        },
        HostileArchetype::Juggernaut => EnemyBehavior {
            detection_range: AI_DETECTION_RANGE - 5,
            max_steps: AI_MAX_STEPS_PER_TURN - 1,
        },
    }
}
