//! Scripted squad orders for headless play.
//!
//! One order per tick: each soldier in id order fires when a shot fits
//! its TU, digs in when it can see but cannot shoot, and otherwise
//! advances on the nearest hostile. The turn ends when nobody has a
//! useful order left.

use firefight_core::commands::PlayerCommand;
use firefight_core::constants::KNEEL_TU_COST;
use firefight_core::enums::{Faction, ShotKind};
use firefight_core::state::{MissionSnapshot, UnitView};
use firefight_core::types::GridPos;
use firefight_enemy_ai::planner;
use firefight_sim::systems::movement;
use firefight_sim::MissionEngine;
use firefight_terrain::has_line_of_sight;

/// Decide the squad's next order, or end the turn.
pub fn next_command(engine: &MissionEngine, snapshot: &MissionSnapshot) -> PlayerCommand {
    for soldier in living(snapshot, Faction::Player) {
        if let Some(command) = order_for(engine, snapshot, soldier) {
            return command;
        }
    }
    PlayerCommand::EndTurn
}

fn living<'a>(
    snapshot: &'a MissionSnapshot,
    faction: Faction,
) -> impl Iterator<Item = &'a UnitView> {
    snapshot
        .units
        .iter()
        .filter(move |unit| unit.faction == faction && unit.alive)
}

fn order_for(
    engine: &MissionEngine,
    snapshot: &MissionSnapshot,
    soldier: &UnitView,
) -> Option<PlayerCommand> {
    let pos = GridPos::new(soldier.x, soldier.y);

    if let Some(target) = nearest_hostile(engine, snapshot, pos, true) {
        // Aimed when it fits the budget, snap otherwise.
        for shot in [ShotKind::Aimed, ShotKind::Snap] {
            if engine
                .preview_hit_chance(soldier.unit_id, target.unit_id, shot)
                .is_ok()
            {
                return Some(PlayerCommand::Attack {
                    unit_id: soldier.unit_id,
                    target_id: target.unit_id,
                    shot,
                });
            }
        }
        // In sight but too spent to fire: settle in for next turn.
        if !soldier.kneeling && soldier.tu >= KNEEL_TU_COST {
            return Some(PlayerCommand::ToggleKneel {
                unit_id: soldier.unit_id,
            });
        }
        return None;
    }

    let target = nearest_hostile(engine, snapshot, pos, false)?;
    let step = planner::advance_step(pos, GridPos::new(target.x, target.y), |p| {
        movement::is_walkable(engine.world(), engine.grid(), p)
    })?;
    let cost = engine.grid().move_cost(step)?;
    if soldier.tu < cost {
        return None;
    }
    Some(PlayerCommand::MoveUnit {
        unit_id: soldier.unit_id,
        x: step.x,
        y: step.y,
    })
}

/// Closest living hostile by walking distance, lowest id on ties.
/// With `visible_only` set, hostiles out of sight are skipped.
fn nearest_hostile<'a>(
    engine: &MissionEngine,
    snapshot: &'a MissionSnapshot,
    from: GridPos,
    visible_only: bool,
) -> Option<&'a UnitView> {
    living(snapshot, Faction::Hostile)
        .filter(|hostile| {
            !visible_only
                || has_line_of_sight(engine.grid(), from, GridPos::new(hostile.x, hostile.y))
        })
        .min_by_key(|hostile| {
            (
                from.manhattan_to(&GridPos::new(hostile.x, hostile.y)),
                hostile.unit_id,
            )
        })
}
