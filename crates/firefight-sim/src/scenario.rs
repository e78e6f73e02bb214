//! Scenario presets: named mission setups with fixed composition.
//!
//! Each preset pins the map size and both rosters. The seed stays at
//! the config default; hosts override it per playthrough.

use firefight_core::enums::{HostileArchetype, ScenarioId, SoldierRank};

use crate::engine::MissionConfig;

/// Build the mission configuration for a given scenario.
pub fn build_config(scenario: ScenarioId) -> MissionConfig {
    match scenario {
        ScenarioId::Skirmish => build_skirmish(),
        ScenarioId::CrashSite => build_crash_site(),
        ScenarioId::Stronghold => build_stronghold(),
    }
}

/// Skirmish: "First Contact"
/// Standard map, four soldiers against three hostiles.
fn build_skirmish() -> MissionConfig {
    MissionConfig::default()
}

/// Crash Site: "Downed Scout"
/// Tight map. Five soldiers sweep a short field; stalkers close fast.
fn build_crash_site() -> MissionConfig {
    MissionConfig {
        width: 16,
        height: 12,
        squad: vec![
            SoldierRank::Veteran,
            SoldierRank::Sergeant,
            SoldierRank::Rookie,
            SoldierRank::Rookie,
            SoldierRank::Rookie,
        ],
        hostiles: vec![
            HostileArchetype::Grunt,
            HostileArchetype::Grunt,
            HostileArchetype::Stalker,
            HostileArchetype::Stalker,
        ],
        ..MissionConfig::default()
    }
}

/// Stronghold: "Hold the Line"
/// Large map. A juggernaut anchors five hostiles; six soldiers attack.
fn build_stronghold() -> MissionConfig {
    MissionConfig {
        width: 24,
        height: 18,
        squad: vec![
            SoldierRank::Veteran,
            SoldierRank::Veteran,
            SoldierRank::Sergeant,
            SoldierRank::Sergeant,
            SoldierRank::Rookie,
            SoldierRank::Rookie,
        ],
        hostiles: vec![
            HostileArchetype::Juggernaut,
            HostileArchetype::Stalker,
            HostileArchetype::Stalker,
            HostileArchetype::Grunt,
            HostileArchetype::Grunt,
        ],
        ..MissionConfig::default()
    }
}
