//! Events emitted by the engine for host feedback and the combat log.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::errors::ActionError;

/// Everything noteworthy that happened during command processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    // --- Shots ---
    /// A shot connected.
    ShotHit {
        attacker_id: u32,
        target_id: u32,
        damage: i32,
        /// True when this was an interrupt during enemy movement.
        reaction: bool,
    },
    /// A shot went wide.
    ShotMissed {
        attacker_id: u32,
        target_id: u32,
        /// The roll that had to come in under `chance`.
        roll: i32,
        chance: i32,
        reaction: bool,
    },
    /// A unit went down. It stays in the roster, flagged not alive.
    UnitKilled { unit_id: u32, faction: Faction },

    // --- Movement and stance ---
    /// A unit stepped onto a new tile.
    UnitMoved { unit_id: u32, x: i32, y: i32 },
    /// A soldier knelt or stood up.
    UnitKnelt { unit_id: u32, kneeling: bool },

    // --- Refusals ---
    /// A command was refused. State is untouched.
    ActionRefused { unit_id: u32, reason: ActionError },

    // --- Turn flow ---
    /// A new player turn began, TU refreshed across the squad.
    PlayerTurnStarted {
        turn: u32,
        soldiers_alive: u32,
        hostiles_alive: u32,
    },
    /// All hostiles are down.
    MissionWon { turns: u32 },
    /// The whole squad is down.
    MissionLost { turns: u32 },
}

impl CombatEvent {
    /// Human-readable line for the combat log.
    pub fn log_line(&self) -> String {
        match self {
            CombatEvent::ShotHit {
                attacker_id,
                target_id,
                damage,
                reaction,
            } => {
                let kind = if *reaction { "reaction shot" } else { "shot" };
                format!("unit {attacker_id} {kind} hits unit {target_id} for {damage}")
            }
            CombatEvent::ShotMissed {
                attacker_id,
                target_id,
                roll,
                chance,
                reaction,
            } => {
                let kind = if *reaction { "reaction shot" } else { "shot" };
                format!(
                    "unit {attacker_id} {kind} misses unit {target_id} (rolled {roll} vs {chance})"
                )
            }
            CombatEvent::UnitKilled { unit_id, faction } => match faction {
                Faction::Player => format!("soldier {unit_id} is down"),
                Faction::Hostile => format!("hostile {unit_id} destroyed"),
            },
            CombatEvent::UnitMoved { unit_id, x, y } => {
                format!("unit {unit_id} moves to ({x}, {y})")
            }
            CombatEvent::UnitKnelt { unit_id, kneeling } => {
                if *kneeling {
                    format!("unit {unit_id} kneels")
                } else {
                    format!("unit {unit_id} stands")
                }
            }
            CombatEvent::ActionRefused { unit_id, reason } => {
                format!("unit {unit_id}: {reason}")
            }
            CombatEvent::PlayerTurnStarted {
                turn,
                soldiers_alive,
                hostiles_alive,
            } => {
                format!(
                    "turn {turn}: {soldiers_alive} soldiers, {hostiles_alive} hostiles remaining"
                )
            }
            CombatEvent::MissionWon { turns } => {
                format!("mission complete in {turns} turns")
            }
            CombatEvent::MissionLost { turns } => {
                format!("squad wiped out on turn {turns}")
            }
        }
    }
}
