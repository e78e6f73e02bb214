//! Movement resolution, including the reaction-fire window.
//!
//! A step is validated, then every opposing watcher gets its interrupt
//! chance, and only then does the mover pay TU and change tile. A mover
//! cut down in the window never pays for the step.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use firefight_core::components::{CombatStats, UnitInfo, UnitStatus};
use firefight_core::constants::{REACTION_CHANCE_SCALE, REACTION_TU_THRESHOLD};
use firefight_core::enums::{Faction, ShotKind};
use firefight_core::errors::{ActionError, ActionResult};
use firefight_core::events::CombatEvent;
use firefight_core::types::GridPos;
use firefight_terrain::{has_line_of_sight, MapGrid};

use crate::systems::combat;
use crate::tally::MissionTally;

/// What a legal move attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The unit paid the tile cost and stands on the destination.
    Moved,
    /// A reaction shot killed the mover before the step committed.
    /// No TU were spent and the tile did not change.
    CutDown,
}

/// Whether a unit can stand on this tile: walkable terrain with no
/// living occupant.
pub fn is_walkable(world: &World, grid: &MapGrid, pos: GridPos) -> bool {
    if !grid.walkable_terrain(pos) {
        return false;
    }
    let mut query = world.query::<(&GridPos, &UnitStatus)>();
    !query
        .iter()
        .any(|(_, (unit_pos, status))| status.alive && *unit_pos == pos)
}

/// Move a unit one orthogonal tile.
///
/// Validates adjacency, terrain, occupancy, and TU, then opens the
/// reaction window before committing the step.
pub fn move_unit(
    world: &mut World,
    grid: &MapGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    tally: &mut MissionTally,
    mover: Entity,
    dest: GridPos,
) -> ActionResult<MoveOutcome> {
    let state = combat::read_unit(world, mover).ok_or(ActionError::InvalidUnit { unit_id: 0 })?;
    if !state.alive {
        return Err(ActionError::InvalidUnit {
            unit_id: state.unit_id,
        });
    }

    if !state.pos.is_adjacent(&dest) {
        return Err(ActionError::NotAdjacent);
    }
    if !is_walkable(world, grid, dest) {
        return Err(ActionError::BlockedDestination);
    }
    let cost = grid
        .move_cost(dest)
        .ok_or(ActionError::BlockedDestination)?;
    if state.tu < cost {
        return Err(ActionError::NotEnoughTimeUnits {
            needed: cost,
            available: state.tu,
        });
    }

    // Watchers shoot at the mover's current tile, before it steps.
    if reaction_fire(world, grid, rng, events, tally, mover, state.pos, state.faction) {
        return Ok(MoveOutcome::CutDown);
    }

    if let Ok(mut stats) = world.get::<&mut CombatStats>(mover) {
        stats.tu -= cost;
    }
    if let Ok(mut pos) = world.get::<&mut GridPos>(mover) {
        *pos = dest;
    }
    // The crouch does not survive movement.
    if let Ok(mut status) = world.get::<&mut UnitStatus>(mover) {
        status.kneeling = false;
    }
    events.push(CombatEvent::UnitMoved {
        unit_id: state.unit_id,
        x: dest.x,
        y: dest.y,
    });
    Ok(MoveOutcome::Moved)
}

/// Give every living opponent with sight of the mover's tile and TU in
/// reserve an independent interrupt chance, in unit id order. True when
/// the mover died in the window.
#[allow(clippy::too_many_arguments)]
fn reaction_fire(
    world: &mut World,
    grid: &MapGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    tally: &mut MissionTally,
    mover: Entity,
    mover_pos: GridPos,
    mover_faction: Faction,
) -> bool {
    let mut watchers: Vec<(u32, Entity, i32)> = Vec::new();
    {
        let mut query = world.query::<(&UnitInfo, &GridPos, &CombatStats, &UnitStatus)>();
        for (entity, (info, pos, stats, status)) in query.iter() {
            if !status.alive || info.faction == mover_faction {
                continue;
            }
            if stats.tu < REACTION_TU_THRESHOLD {
                continue;
            }
            if !has_line_of_sight(grid, *pos, mover_pos) {
                continue;
            }
            watchers.push((info.unit_id, entity, stats.reactions));
        }
    }
    watchers.sort_by_key(|(unit_id, _, _)| *unit_id);

    for (_, watcher, reactions) in watchers {
        let trigger = f64::from(reactions) / 100.0 * REACTION_CHANCE_SCALE;
        if !rng.gen_bool(trigger.clamp(0.0, 1.0)) {
            continue;
        }
        // The snap itself can still refuse (ammo, snap cost above the
        // reserve threshold); a refused interrupt just does not fire.
        let shot = combat::attack(
            world,
            grid,
            rng,
            events,
            tally,
            watcher,
            mover,
            ShotKind::Snap,
            true,
        );
        if let Ok(outcome) = shot {
            if outcome.target_killed {
                return true;
            }
        }
    }
    false
}
