//! Attack resolution: validation, hit chance, damage, and kills.
//!
//! `calculate_hit_chance` and `preview` are pure reads so hosts can show
//! the number the engine will roll against. `attack` is the only entry
//! point that spends TU and ammo or touches the RNG.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use firefight_core::components::{CombatStats, Loadout, UnitInfo, UnitStatus};
use firefight_core::constants::{
    DAMAGE_ROLL_MAX, DAMAGE_ROLL_MIN, HIT_CHANCE_MAX, HIT_CHANCE_MIN, KNEELING_ACCURACY_BONUS,
    MIN_DAMAGE, RANGE_PENALTY_FREE_TILES, RANGE_PENALTY_PER_TILE,
};
use firefight_core::enums::{Faction, ShotKind, WeaponKind};
use firefight_core::errors::{ActionError, ActionResult};
use firefight_core::events::CombatEvent;
use firefight_core::types::GridPos;
use firefight_core::weapons;
use firefight_terrain::{has_line_of_sight, MapGrid};

use crate::tally::MissionTally;

/// What a resolved attack did to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub hit: bool,
    pub target_killed: bool,
}

/// Flat copy of one unit's state, taken before any mutation.
pub(crate) struct UnitState {
    pub unit_id: u32,
    pub faction: Faction,
    pub pos: GridPos,
    pub tu: i32,
    pub accuracy: i32,
    pub hp: i32,
    pub armor: i32,
    pub alive: bool,
    pub kneeling: bool,
    pub weapon: WeaponKind,
    pub ammo: i32,
}

/// None when the entity is missing any unit component. Roster entities
/// always carry the full bundle.
pub(crate) fn read_unit(world: &World, entity: Entity) -> Option<UnitState> {
    let info = world.get::<&UnitInfo>(entity).ok()?;
    let pos = world.get::<&GridPos>(entity).ok()?;
    let stats = world.get::<&CombatStats>(entity).ok()?;
    let loadout = world.get::<&Loadout>(entity).ok()?;
    let status = world.get::<&UnitStatus>(entity).ok()?;
    Some(UnitState {
        unit_id: info.unit_id,
        faction: info.faction,
        pos: *pos,
        tu: stats.tu,
        accuracy: stats.accuracy,
        hp: stats.hp,
        armor: stats.armor,
        alive: status.alive,
        kneeling: status.kneeling,
        weapon: loadout.weapon,
        ammo: loadout.ammo,
    })
}

/// Hit chance for a shot, in percent.
///
/// The shot's accuracy scaled by the shooter's accuracy stat, minus the
/// cover value of the target's tile, minus a per-tile penalty past close
/// range. Kneeling multiplies the running total before the final clamp,
/// so a shot that was hopeless standing stays at the floor kneeling.
pub fn calculate_hit_chance(
    shot_accuracy: i32,
    unit_accuracy: i32,
    target_cover: i32,
    distance: i32,
    kneeling: bool,
) -> i32 {
    let mut chance = shot_accuracy * unit_accuracy / 100;
    chance -= target_cover;
    let long = distance - RANGE_PENALTY_FREE_TILES;
    if long > 0 {
        chance -= long * RANGE_PENALTY_PER_TILE;
    }
    if kneeling {
        chance = (chance as f64 * KNEELING_ACCURACY_BONUS).floor() as i32;
    }
    chance.clamp(HIT_CHANCE_MIN, HIT_CHANCE_MAX)
}

/// Validate an attack and return the hit chance it would roll against.
///
/// Spends nothing. `attack` runs exactly these checks before committing,
/// so hosts can surface the refusal or the percentage ahead of the order.
pub fn preview(
    world: &World,
    grid: &MapGrid,
    attacker: Entity,
    target: Entity,
    shot: ShotKind,
) -> ActionResult<i32> {
    let atk = read_unit(world, attacker).ok_or(ActionError::InvalidUnit { unit_id: 0 })?;
    if !atk.alive {
        return Err(ActionError::InvalidUnit {
            unit_id: atk.unit_id,
        });
    }
    let tgt = read_unit(world, target).ok_or(ActionError::InvalidTarget { unit_id: 0 })?;
    if !tgt.alive || attacker == target {
        return Err(ActionError::InvalidTarget {
            unit_id: tgt.unit_id,
        });
    }

    let shot_spec = weapons::spec(atk.weapon).shot(shot);
    if atk.tu < shot_spec.tu_cost {
        return Err(ActionError::NotEnoughTimeUnits {
            needed: shot_spec.tu_cost,
            available: atk.tu,
        });
    }
    if atk.ammo <= 0 {
        return Err(ActionError::OutOfAmmo);
    }
    if !has_line_of_sight(grid, atk.pos, tgt.pos) {
        return Err(ActionError::NoLineOfSight);
    }

    Ok(calculate_hit_chance(
        shot_spec.accuracy,
        atk.accuracy,
        grid.cover_value(tgt.pos),
        atk.pos.manhattan_to(&tgt.pos),
        atk.kneeling,
    ))
}

/// Resolve an attack.
///
/// Refusals leave all state untouched. A legal attempt always spends the
/// shot's TU and one round before the dice decide anything. Kills flip
/// the alive flag; the entity stays in the roster.
#[allow(clippy::too_many_arguments)]
pub fn attack(
    world: &mut World,
    grid: &MapGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    tally: &mut MissionTally,
    attacker: Entity,
    target: Entity,
    shot: ShotKind,
    reaction: bool,
) -> ActionResult<AttackOutcome> {
    let chance = preview(world, grid, attacker, target, shot)?;

    let atk = read_unit(world, attacker).ok_or(ActionError::InvalidUnit { unit_id: 0 })?;
    let tgt = read_unit(world, target).ok_or(ActionError::InvalidTarget { unit_id: 0 })?;
    let weapon_spec = weapons::spec(atk.weapon);
    let shot_spec = weapon_spec.shot(shot);

    // The attempt is legal: costs are committed win or lose.
    if let Ok(mut stats) = world.get::<&mut CombatStats>(attacker) {
        stats.tu -= shot_spec.tu_cost;
    }
    if let Ok(mut loadout) = world.get::<&mut Loadout>(attacker) {
        loadout.ammo -= 1;
    }
    tally.shots_fired += 1;
    if reaction {
        tally.reaction_shots += 1;
    }

    let roll = rng.gen_range(0..100);
    if roll >= chance {
        events.push(CombatEvent::ShotMissed {
            attacker_id: atk.unit_id,
            target_id: tgt.unit_id,
            roll,
            chance,
            reaction,
        });
        return Ok(AttackOutcome {
            hit: false,
            target_killed: false,
        });
    }

    let multiplier = rng.gen_range(DAMAGE_ROLL_MIN..DAMAGE_ROLL_MAX);
    let rolled = (weapon_spec.damage as f64 * multiplier).floor() as i32;
    let damage = (rolled - tgt.armor).max(MIN_DAMAGE);

    events.push(CombatEvent::ShotHit {
        attacker_id: atk.unit_id,
        target_id: tgt.unit_id,
        damage,
        reaction,
    });
    tally.shots_hit += 1;

    let remaining = tgt.hp - damage;
    if let Ok(mut stats) = world.get::<&mut CombatStats>(target) {
        stats.hp = remaining;
    }
    if remaining > 0 {
        return Ok(AttackOutcome {
            hit: true,
            target_killed: false,
        });
    }

    if let Ok(mut status) = world.get::<&mut UnitStatus>(target) {
        status.alive = false;
    }
    events.push(CombatEvent::UnitKilled {
        unit_id: tgt.unit_id,
        faction: tgt.faction,
    });
    match tgt.faction {
        Faction::Player => tally.soldiers_lost += 1,
        Faction::Hostile => tally.hostiles_killed += 1,
    }
    Ok(AttackOutcome {
        hit: true,
        target_killed: true,
    })
}
