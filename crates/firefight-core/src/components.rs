//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Combat logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, HostileArchetype, WeaponKind};

/// Stable identity for a unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitInfo {
    /// Unique id assigned at deployment, stable for the whole mission.
    pub unit_id: u32,
    pub faction: Faction,
}

/// Mutable combat statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatStats {
    /// Time units available right now.
    pub tu: i32,
    /// Time units refreshed to at turn start.
    pub max_tu: i32,
    /// Current hit points. At or below zero the unit is down.
    pub hp: i32,
    /// Hit points deployed with.
    pub max_hp: i32,
    /// Firing accuracy stat, 0-100.
    pub accuracy: i32,
    /// Reaction stat, 0-100, drives interrupt fire.
    pub reactions: i32,
    /// Flat damage reduction per hit taken.
    pub armor: i32,
}

/// Carried weapon and remaining ammunition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Loadout {
    /// Key into the weapon table.
    pub weapon: WeaponKind,
    /// Rounds remaining in the magazine.
    pub ammo: i32,
}

/// Behavior key for AI-driven units. Hostiles only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileProfile {
    pub archetype: HostileArchetype,
}

/// Liveness and stance flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnitStatus {
    /// Downed units stay in the roster but are skipped everywhere.
    pub alive: bool,
    /// Kneeling steadies aim. Soldiers only.
    pub kneeling: bool,
}

// GridPos from types.rs doubles as the position component
// (every unit entity carries one).
