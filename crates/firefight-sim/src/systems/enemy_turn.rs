//! Enemy turn driver. Activates each living hostile in roster order and
//! applies its decisions through the same combat and movement paths the
//! player uses, so reaction fire and refusals behave identically for
//! both sides.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use firefight_core::components::{CombatStats, HostileProfile, UnitInfo, UnitStatus};
use firefight_core::enums::{Faction, HostileArchetype, ShotKind};
use firefight_core::events::CombatEvent;
use firefight_core::types::GridPos;
use firefight_core::weapons;
use firefight_enemy_ai::planner::{self, EnemyContext, TargetView};
use firefight_enemy_ai::profiles::get_behavior;
use firefight_terrain::{has_line_of_sight, MapGrid};

use crate::systems::combat;
use crate::systems::movement::{self, MoveOutcome};
use crate::tally::MissionTally;

/// Run the whole enemy turn over the deployment roster.
pub fn run(
    world: &mut World,
    grid: &MapGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    tally: &mut MissionTally,
    roster: &[Entity],
) {
    for &entity in roster {
        let Some(archetype) = living_hostile(world, entity) else {
            continue;
        };
        activate(world, grid, rng, events, tally, entity, archetype);
    }
}

/// The unit's archetype if it is a living hostile, None otherwise.
/// Soldiers carry no profile component and fall out here.
fn living_hostile(world: &World, entity: Entity) -> Option<HostileArchetype> {
    let status = world.get::<&UnitStatus>(entity).ok()?;
    if !status.alive {
        return None;
    }
    let profile = world.get::<&HostileProfile>(entity).ok()?;
    Some(profile.archetype)
}

/// One hostile activation: refresh TU, then either engage the nearest
/// opponent or march toward it. The choice is made once per activation.
fn activate(
    world: &mut World,
    grid: &MapGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    tally: &mut MissionTally,
    entity: Entity,
    archetype: HostileArchetype,
) {
    // Hostiles refresh at activation, not at a shared turn boundary.
    if let Ok(mut stats) = world.get::<&mut CombatStats>(entity) {
        stats.tu = stats.max_tu;
    }

    let behavior = get_behavior(archetype);
    let Some(ctx) = build_context(world, grid, entity, behavior.detection_range) else {
        return;
    };
    let Some(target) = planner::acquire_target(&ctx).cloned() else {
        return;
    };

    if planner::can_engage(&ctx, &target) {
        fire_while_able(world, grid, rng, events, tally, entity, behavior.detection_range);
    } else {
        approach(world, grid, rng, events, tally, entity, target.pos, behavior.max_steps);
    }
}

/// Snap-fire loop. Re-acquires the nearest surviving target after every
/// shot and stops when TU, ammo, targets, or sight run out.
fn fire_while_able(
    world: &mut World,
    grid: &MapGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    tally: &mut MissionTally,
    entity: Entity,
    detection_range: i32,
) {
    loop {
        let Some(ctx) = build_context(world, grid, entity, detection_range) else {
            return;
        };
        let Some(target) = planner::acquire_target(&ctx).cloned() else {
            return;
        };
        if !planner::can_engage(&ctx, &target) {
            return;
        }
        let Some(target_entity) = find_unit(world, target.unit_id) else {
            return;
        };
        let shot = combat::attack(
            world,
            grid,
            rng,
            events,
            tally,
            entity,
            target_entity,
            ShotKind::Snap,
            false,
        );
        if shot.is_err() {
            return;
        }
    }
}

/// March toward the chosen position, one greedy step at a time. Each
/// step runs through the normal movement path and can draw reaction
/// fire from the squad.
fn approach(
    world: &mut World,
    grid: &MapGrid,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    tally: &mut MissionTally,
    entity: Entity,
    toward: GridPos,
    max_steps: u32,
) {
    for _ in 0..max_steps {
        let Ok(from) = world.get::<&GridPos>(entity).map(|pos| *pos) else {
            return;
        };
        let Some(step) =
            planner::advance_step(from, toward, |pos| movement::is_walkable(world, grid, pos))
        else {
            return;
        };
        match movement::move_unit(world, grid, rng, events, tally, entity, step) {
            Ok(MoveOutcome::Moved) => {}
            Ok(MoveOutcome::CutDown) => return,
            Err(_) => return,
        }
    }
}

/// Assemble the planner's view for one hostile: its own resources plus
/// every living soldier with visibility from its tile. None once the
/// hostile is dead (reaction fire can kill mid-turn).
fn build_context(
    world: &World,
    grid: &MapGrid,
    entity: Entity,
    detection_range: i32,
) -> Option<EnemyContext> {
    let me = combat::read_unit(world, entity)?;
    if !me.alive {
        return None;
    }
    let snap_tu_cost = weapons::spec(me.weapon).snap.tu_cost;

    let mut targets: Vec<TargetView> = Vec::new();
    {
        let mut query = world.query::<(&UnitInfo, &GridPos, &UnitStatus)>();
        for (_, (info, pos, status)) in query.iter() {
            if info.faction != Faction::Player || !status.alive {
                continue;
            }
            targets.push(TargetView {
                unit_id: info.unit_id,
                pos: *pos,
                visible: has_line_of_sight(grid, me.pos, *pos),
            });
        }
    }
    targets.sort_by_key(|target| target.unit_id);

    Some(EnemyContext {
        me: me.pos,
        tu: me.tu,
        ammo: me.ammo,
        snap_tu_cost,
        detection_range,
        targets,
    })
}

fn find_unit(world: &World, unit_id: u32) -> Option<Entity> {
    let mut query = world.query::<&UnitInfo>();
    let found = query.iter().find(|(_, info)| info.unit_id == unit_id);
    found.map(|(entity, _)| entity)
}
