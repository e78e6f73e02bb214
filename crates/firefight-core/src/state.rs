//! Mission snapshot: the complete visible state returned to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::TurnClock;

/// Complete mission state returned to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionSnapshot {
    pub clock: TurnClock,
    pub phase: MissionPhase,
    pub map: MapView,
    /// All roster units, sorted by unit id. Downed units included.
    pub units: Vec<UnitView>,
    /// Events raised since the previous tick.
    pub events: Vec<CombatEvent>,
    /// Recent combat log lines, oldest first.
    pub log: Vec<String>,
    pub tally: TallyView,
}

/// Static terrain for display. Generated once at mission start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapView {
    pub width: i32,
    pub height: i32,
    /// Row-major terrain, index `y * width + x`.
    pub tiles: Vec<TerrainKind>,
}

/// One roster unit as visible to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u32,
    pub faction: Faction,
    pub x: i32,
    pub y: i32,
    pub tu: i32,
    pub max_tu: i32,
    pub hp: i32,
    pub max_hp: i32,
    pub weapon: WeaponKind,
    pub ammo: i32,
    pub kneeling: bool,
    pub alive: bool,
}

/// Running mission counters for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyView {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub reaction_shots: u32,
    pub hostiles_killed: u32,
    pub soldiers_lost: u32,
}

/// Final outcome handed to the campaign layer when a mission ends.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MissionReport {
    pub victory: bool,
    /// Turn number the mission ended on.
    pub turns: u32,
    pub soldiers_alive: u32,
    pub soldiers_lost: u32,
    pub hostiles_killed: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub reaction_shots: u32,
}
