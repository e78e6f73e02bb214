//! Mission engine: the command-driven core of the tactical layer.
//!
//! Owns the hecs world, the generated map, the seeded RNG, and the turn
//! state machine. Hosts queue [`PlayerCommand`]s, call
//! [`MissionEngine::tick`], and render the returned snapshot.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use firefight_core::commands::PlayerCommand;
use firefight_core::components::{CombatStats, UnitInfo, UnitStatus};
use firefight_core::constants::{COMBAT_LOG_CAPACITY, GRID_HEIGHT, GRID_WIDTH, KNEEL_TU_COST};
use firefight_core::enums::{Faction, HostileArchetype, MissionPhase, ShotKind, SoldierRank};
use firefight_core::errors::{ActionError, ActionResult};
use firefight_core::events::CombatEvent;
use firefight_core::state::{MissionReport, MissionSnapshot};
use firefight_core::types::{GridPos, TurnClock};
use firefight_procgen::generate_map;
use firefight_terrain::MapGrid;

use crate::systems;
use crate::tally::MissionTally;
use crate::world_setup;

/// Mission setup. Identical configs and command streams replay
/// identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionConfig {
    /// RNG seed for map generation, deployment, and combat rolls.
    pub seed: u64,
    /// Map width in tiles.
    pub width: i32,
    /// Map height in tiles.
    pub height: i32,
    /// Squad composition, deployed in order. Each roster is capped by its
    /// spawn zone, 12 tiles at the default map size; oversized rosters
    /// trip a debug assertion during deployment.
    pub squad: Vec<SoldierRank>,
    /// Hostile composition, deployed in order. Deployment order is also
    /// enemy activation order. Same spawn-zone cap as the squad.
    pub hostiles: Vec<HostileArchetype>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            squad: vec![
                SoldierRank::Sergeant,
                SoldierRank::Rookie,
                SoldierRank::Rookie,
                SoldierRank::Rookie,
            ],
            hostiles: vec![
                HostileArchetype::Grunt,
                HostileArchetype::Grunt,
                HostileArchetype::Stalker,
            ],
        }
    }
}

/// The tactical mission engine.
pub struct MissionEngine {
    world: World,
    grid: MapGrid,
    roster: Vec<Entity>,
    clock: TurnClock,
    phase: MissionPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<CombatEvent>,
    log: VecDeque<String>,
    tally: MissionTally,
}

impl MissionEngine {
    /// Create a new mission: generate the map, deploy both sides, and
    /// open the first player turn.
    pub fn new(config: MissionConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let grid = generate_map(&mut rng, config.width, config.height);
        let mut world = World::new();
        let roster = world_setup::deploy_mission(&mut world, &mut rng, &grid, &config);

        let mut engine = Self {
            world,
            grid,
            roster,
            clock: TurnClock::default(),
            phase: MissionPhase::PlayerTurn,
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            log: VecDeque::new(),
            tally: MissionTally::default(),
        };
        let (soldiers_alive, hostiles_alive) = engine.living_counts();
        engine.events.push(CombatEvent::PlayerTurnStarted {
            turn: engine.clock.turn,
            soldiers_alive,
            hostiles_alive,
        });
        engine
    }

    /// Queue a command for the next tick.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue a batch of commands in order.
    pub fn queue_commands(&mut self, commands: Vec<PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, then build a snapshot. The snapshot's
    /// `events` hold only what this tick produced; `log` is the rolling
    /// window.
    pub fn tick(&mut self) -> MissionSnapshot {
        self.process_commands();

        let events = std::mem::take(&mut self.events);
        for event in &events {
            self.log.push_back(event.log_line());
            if self.log.len() > COMBAT_LOG_CAPACITY {
                self.log.pop_front();
            }
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.grid,
            self.clock,
            self.phase,
            events,
            self.log.iter().cloned().collect(),
            &self.tally,
        )
    }

    /// Hit chance the engine would roll against, or the refusal the
    /// order would get. Spends nothing.
    pub fn preview_hit_chance(
        &self,
        unit_id: u32,
        target_id: u32,
        shot: ShotKind,
    ) -> ActionResult<i32> {
        let attacker = self.living_soldier(unit_id)?;
        let target = self.living_target(target_id)?;
        systems::combat::preview(&self.world, &self.grid, attacker, target, shot)
    }

    /// Final report once the mission has reached a terminal phase.
    pub fn mission_report(&self) -> Option<MissionReport> {
        let victory = match self.phase {
            MissionPhase::MissionComplete => true,
            MissionPhase::MissionFailed => false,
            MissionPhase::PlayerTurn | MissionPhase::EnemyTurn => return None,
        };
        let (soldiers_alive, _) = self.living_counts();
        Some(self.tally.report(victory, self.clock.turn, soldiers_alive))
    }

    /// Current phase.
    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    /// Current turn number.
    pub fn turn(&self) -> u32 {
        self.clock.turn
    }

    /// Read access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read access to the mission map.
    pub fn grid(&self) -> &MapGrid {
        &self.grid
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut MapGrid {
        &mut self.grid
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        // Orders only mean something during the player turn; anything
        // queued after the mission ends is dropped.
        if self.phase != MissionPhase::PlayerTurn {
            return;
        }
        match command {
            PlayerCommand::MoveUnit { unit_id, x, y } => {
                self.handle_move(unit_id, GridPos::new(x, y));
            }
            PlayerCommand::Attack {
                unit_id,
                target_id,
                shot,
            } => {
                self.handle_attack(unit_id, target_id, shot);
            }
            PlayerCommand::ToggleKneel { unit_id } => {
                self.handle_kneel(unit_id);
            }
            PlayerCommand::EndTurn => {
                self.end_player_turn();
            }
        }
    }

    fn handle_move(&mut self, unit_id: u32, dest: GridPos) {
        let result = self.living_soldier(unit_id).and_then(|mover| {
            systems::movement::move_unit(
                &mut self.world,
                &self.grid,
                &mut self.rng,
                &mut self.events,
                &mut self.tally,
                mover,
                dest,
            )
        });
        if let Err(reason) = result {
            self.push_refusal(unit_id, reason);
        }
    }

    fn handle_attack(&mut self, unit_id: u32, target_id: u32, shot: ShotKind) {
        let result = match (self.living_soldier(unit_id), self.living_target(target_id)) {
            (Ok(attacker), Ok(target)) => systems::combat::attack(
                &mut self.world,
                &self.grid,
                &mut self.rng,
                &mut self.events,
                &mut self.tally,
                attacker,
                target,
                shot,
                false,
            )
            .map(|_| ()),
            (Err(reason), _) | (_, Err(reason)) => Err(reason),
        };
        if let Err(reason) = result {
            self.push_refusal(unit_id, reason);
        }
    }

    fn handle_kneel(&mut self, unit_id: u32) {
        let result = self
            .living_soldier(unit_id)
            .and_then(|soldier| self.toggle_kneel(soldier, unit_id));
        if let Err(reason) = result {
            self.push_refusal(unit_id, reason);
        }
    }

    /// Flip the stance flag for the kneel cost. Standing back up costs
    /// the same as going down.
    fn toggle_kneel(&mut self, soldier: Entity, unit_id: u32) -> ActionResult<()> {
        let available = self
            .world
            .get::<&CombatStats>(soldier)
            .map(|stats| stats.tu)
            .map_err(|_| ActionError::InvalidUnit { unit_id })?;
        if available < KNEEL_TU_COST {
            return Err(ActionError::NotEnoughTimeUnits {
                needed: KNEEL_TU_COST,
                available,
            });
        }

        if let Ok(mut stats) = self.world.get::<&mut CombatStats>(soldier) {
            stats.tu -= KNEEL_TU_COST;
        }
        let mut kneeling = false;
        if let Ok(mut status) = self.world.get::<&mut UnitStatus>(soldier) {
            status.kneeling = !status.kneeling;
            kneeling = status.kneeling;
        }
        self.events
            .push(CombatEvent::UnitKnelt { unit_id, kneeling });
        Ok(())
    }

    /// Hand the initiative to the hostiles, then open the next player
    /// turn. Terminal checks run at both boundaries.
    fn end_player_turn(&mut self) {
        self.phase = MissionPhase::EnemyTurn;
        if self.check_mission_end() {
            return;
        }

        systems::enemy_turn::run(
            &mut self.world,
            &self.grid,
            &mut self.rng,
            &mut self.events,
            &mut self.tally,
            &self.roster,
        );
        if self.check_mission_end() {
            return;
        }

        self.begin_player_turn();
    }

    /// True when the mission just ended. Losses check before wins, so a
    /// mutual wipe reads as a failure.
    fn check_mission_end(&mut self) -> bool {
        let (soldiers, hostiles) = self.living_counts();
        if soldiers == 0 {
            self.phase = MissionPhase::MissionFailed;
            self.events.push(CombatEvent::MissionLost {
                turns: self.clock.turn,
            });
            true
        } else if hostiles == 0 {
            self.phase = MissionPhase::MissionComplete;
            self.events.push(CombatEvent::MissionWon {
                turns: self.clock.turn,
            });
            true
        } else {
            false
        }
    }

    /// Advance the clock, refresh squad TU, and announce the new turn.
    fn begin_player_turn(&mut self) {
        self.phase = MissionPhase::PlayerTurn;
        self.clock.advance();
        for (_, (info, stats, status)) in self
            .world
            .query_mut::<(&UnitInfo, &mut CombatStats, &UnitStatus)>()
        {
            if info.faction == Faction::Player && status.alive {
                stats.tu = stats.max_tu;
            }
        }
        let (soldiers_alive, hostiles_alive) = self.living_counts();
        self.events.push(CombatEvent::PlayerTurnStarted {
            turn: self.clock.turn,
            soldiers_alive,
            hostiles_alive,
        });
    }

    fn living_counts(&self) -> (u32, u32) {
        let mut soldiers = 0;
        let mut hostiles = 0;
        let mut query = self.world.query::<(&UnitInfo, &UnitStatus)>();
        for (_, (info, status)) in query.iter() {
            if !status.alive {
                continue;
            }
            match info.faction {
                Faction::Player => soldiers += 1,
                Faction::Hostile => hostiles += 1,
            }
        }
        (soldiers, hostiles)
    }

    /// Resolve a host-supplied id to a living soldier.
    fn living_soldier(&self, unit_id: u32) -> ActionResult<Entity> {
        let mut query = self.world.query::<(&UnitInfo, &UnitStatus)>();
        query
            .iter()
            .find(|(_, (info, status))| {
                info.unit_id == unit_id && info.faction == Faction::Player && status.alive
            })
            .map(|(entity, _)| entity)
            .ok_or(ActionError::InvalidUnit { unit_id })
    }

    /// Resolve a target id to any living unit. Friendly fire is legal.
    fn living_target(&self, unit_id: u32) -> ActionResult<Entity> {
        let mut query = self.world.query::<(&UnitInfo, &UnitStatus)>();
        query
            .iter()
            .find(|(_, (info, status))| info.unit_id == unit_id && status.alive)
            .map(|(entity, _)| entity)
            .ok_or(ActionError::InvalidTarget { unit_id })
    }

    fn push_refusal(&mut self, unit_id: u32, reason: ActionError) {
        if reason.is_silent() {
            return;
        }
        self.events
            .push(CombatEvent::ActionRefused { unit_id, reason });
    }
}
