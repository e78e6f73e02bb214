//! Action refusal reasons.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for engine actions that can be refused.
pub type ActionResult<T> = std::result::Result<T, ActionError>;

/// Why a unit action was refused. Refused actions never mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    /// The acting unit cannot pay the TU cost.
    #[error("not enough TU: need {needed}, have {available}")]
    NotEnoughTimeUnits {
        /// TU the action would cost.
        needed: i32,
        /// TU the unit currently holds.
        available: i32,
    },

    /// The magazine is empty.
    #[error("out of ammo")]
    OutOfAmmo,

    /// A wall blocks the line of fire.
    #[error("no line of sight to target")]
    NoLineOfSight,

    /// The destination tile is not walkable or is occupied.
    #[error("destination blocked")]
    BlockedDestination,

    /// Moves cover exactly one orthogonal tile.
    #[error("destination not adjacent")]
    NotAdjacent,

    /// No living unit carries this id.
    #[error("no living unit {unit_id}")]
    InvalidUnit { unit_id: u32 },

    /// No living target carries this id.
    #[error("no living target {unit_id}")]
    InvalidTarget { unit_id: u32 },
}

impl ActionError {
    /// Refusals that produce no event and no log line.
    /// Bad destinations and stale ids are dropped quietly; resource and
    /// sight failures are reported to the player.
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            ActionError::BlockedDestination
                | ActionError::NotAdjacent
                | ActionError::InvalidUnit { .. }
                | ActionError::InvalidTarget { .. }
        )
    }
}
