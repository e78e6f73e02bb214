//! Snapshot system: queries the world and builds a complete
//! [`MissionSnapshot`] for the host.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use firefight_core::components::{CombatStats, Loadout, UnitInfo, UnitStatus};
use firefight_core::enums::MissionPhase;
use firefight_core::events::CombatEvent;
use firefight_core::state::{MapView, MissionSnapshot, UnitView};
use firefight_core::types::{GridPos, TurnClock};
use firefight_terrain::MapGrid;

use crate::tally::MissionTally;

/// Build a complete snapshot of the current mission state.
pub fn build_snapshot(
    world: &World,
    grid: &MapGrid,
    clock: TurnClock,
    phase: MissionPhase,
    events: Vec<CombatEvent>,
    log: Vec<String>,
    tally: &MissionTally,
) -> MissionSnapshot {
    MissionSnapshot {
        clock,
        phase,
        map: build_map(grid),
        units: build_units(world),
        events,
        log,
        tally: tally.view(),
    }
}

fn build_map(grid: &MapGrid) -> MapView {
    MapView {
        width: grid.width(),
        height: grid.height(),
        tiles: grid.tiles().to_vec(),
    }
}

/// Views for the whole roster, downed units included, sorted by unit id.
fn build_units(world: &World) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&UnitInfo, &GridPos, &CombatStats, &Loadout, &UnitStatus)>()
        .iter()
        .map(|(_, (info, pos, stats, loadout, status))| UnitView {
            unit_id: info.unit_id,
            faction: info.faction,
            x: pos.x,
            y: pos.y,
            tu: stats.tu,
            max_tu: stats.max_tu,
            hp: stats.hp,
            max_hp: stats.max_hp,
            weapon: loadout.weapon,
            ammo: loadout.ammo,
            kneeling: status.kneeling,
            alive: status.alive,
        })
        .collect();

    units.sort_by_key(|unit| unit.unit_id);
    units
}
