//! Deployment: spawn factories and the initial roster layout.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use firefight_core::components::{CombatStats, HostileProfile, Loadout, UnitInfo, UnitStatus};
use firefight_core::enums::{Faction, HostileArchetype, SoldierRank, WeaponKind};
use firefight_core::types::GridPos;
use firefight_core::weapons;
use firefight_procgen::{hostile_zone, scatter_positions, squad_zone};
use firefight_terrain::MapGrid;

use crate::engine::MissionConfig;

/// Deploy the mission roster: soldiers into their corner, hostiles into
/// the opposite one. Unit ids start at 1 and follow deployment order,
/// which is also the enemy activation order.
pub fn deploy_mission(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    grid: &MapGrid,
    config: &MissionConfig,
) -> Vec<Entity> {
    let mut roster = Vec::with_capacity(config.squad.len() + config.hostiles.len());
    let mut next_unit_id = 1;

    let squad_tiles = scatter_positions(
        rng,
        &squad_zone(grid.width(), grid.height()),
        config.squad.len(),
    );
    debug_assert!(
        squad_tiles.len() == config.squad.len(),
        "squad of {} does not fit a {}-tile spawn zone",
        config.squad.len(),
        squad_tiles.len()
    );
    for (rank, pos) in config.squad.iter().zip(squad_tiles) {
        roster.push(spawn_soldier(world, *rank, pos, next_unit_id));
        next_unit_id += 1;
    }

    let hostile_tiles = scatter_positions(
        rng,
        &hostile_zone(grid.width(), grid.height()),
        config.hostiles.len(),
    );
    debug_assert!(
        hostile_tiles.len() == config.hostiles.len(),
        "hostile roster of {} does not fit a {}-tile spawn zone",
        config.hostiles.len(),
        hostile_tiles.len()
    );
    for (archetype, pos) in config.hostiles.iter().zip(hostile_tiles) {
        roster.push(spawn_hostile(world, *archetype, pos, next_unit_id));
        next_unit_id += 1;
    }

    roster
}

/// Spawn one soldier with the stat template for its rank.
pub fn spawn_soldier(world: &mut World, rank: SoldierRank, pos: GridPos, unit_id: u32) -> Entity {
    let (max_tu, max_hp, accuracy, reactions, armor, weapon) = soldier_rank_params(rank);
    world.spawn((
        UnitInfo {
            unit_id,
            faction: Faction::Player,
        },
        pos,
        CombatStats {
            tu: max_tu,
            max_tu,
            hp: max_hp,
            max_hp,
            accuracy,
            reactions,
            armor,
        },
        Loadout {
            weapon,
            ammo: weapons::spec(weapon).capacity,
        },
        UnitStatus {
            alive: true,
            kneeling: false,
        },
    ))
}

/// Spawn one hostile with the stat template for its archetype.
pub fn spawn_hostile(
    world: &mut World,
    archetype: HostileArchetype,
    pos: GridPos,
    unit_id: u32,
) -> Entity {
    let (max_tu, max_hp, accuracy, reactions, armor) = hostile_archetype_params(archetype);
    let weapon = WeaponKind::PlasmaCaster;
    world.spawn((
        UnitInfo {
            unit_id,
            faction: Faction::Hostile,
        },
        pos,
        CombatStats {
            tu: max_tu,
            max_tu,
            hp: max_hp,
            max_hp,
            accuracy,
            reactions,
            armor,
        },
        Loadout {
            weapon,
            ammo: weapons::spec(weapon).capacity,
        },
        UnitStatus {
            alive: true,
            kneeling: false,
        },
        HostileProfile { archetype },
    ))
}

/// Stat template per rank: (max_tu, max_hp, accuracy, reactions, armor, weapon).
fn soldier_rank_params(rank: SoldierRank) -> (i32, i32, i32, i32, i32, WeaponKind) {
    match rank {
        SoldierRank::Rookie => (52, 28, 55, 40, 0, WeaponKind::Carbine),
        SoldierRank::Sergeant => (58, 32, 65, 55, 1, WeaponKind::Rifle),
        SoldierRank::Veteran => (62, 35, 70, 65, 2, WeaponKind::Rifle),
    }
}

/// Stat template per archetype: (max_tu, max_hp, accuracy, reactions, armor).
/// Every archetype carries the plasma caster.
fn hostile_archetype_params(archetype: HostileArchetype) -> (i32, i32, i32, i32, i32) {
    match archetype {
        HostileArchetype::Grunt => (50, 25, 55, 45, 0),
        HostileArchetype::Stalker => (62, 30, 65, 65, 1),
        HostileArchetype::Juggernaut => (44, 60, 45, 20, 4),
    }
}
