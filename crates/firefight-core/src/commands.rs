//! Player commands sent from the host to the engine.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Unit actions ---
    /// Step a soldier onto an adjacent tile.
    MoveUnit { unit_id: u32, x: i32, y: i32 },
    /// Fire at a target unit.
    Attack {
        unit_id: u32,
        target_id: u32,
        shot: ShotKind,
    },
    /// Kneel a standing soldier, or stand a kneeling one.
    ToggleKneel { unit_id: u32 },

    // --- Turn control ---
    /// End the player turn and hand control to the hostiles.
    EndTurn,
}
