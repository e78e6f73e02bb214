//! Running mission counters, kept on the engine rather than in the world.

use firefight_core::state::{MissionReport, TallyView};

/// Counters accumulated while a mission runs. Reaction shots count into
/// `shots_fired` as well as their own bucket.
#[derive(Debug, Clone, Default)]
pub struct MissionTally {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub reaction_shots: u32,
    pub hostiles_killed: u32,
    pub soldiers_lost: u32,
}

impl MissionTally {
    /// Snapshot view of the counters.
    pub fn view(&self) -> TallyView {
        TallyView {
            shots_fired: self.shots_fired,
            shots_hit: self.shots_hit,
            reaction_shots: self.reaction_shots,
            hostiles_killed: self.hostiles_killed,
            soldiers_lost: self.soldiers_lost,
        }
    }

    /// Final report handed to the campaign layer once the mission ends.
    pub fn report(&self, victory: bool, turns: u32, soldiers_alive: u32) -> MissionReport {
        MissionReport {
            victory,
            turns,
            soldiers_alive,
            soldiers_lost: self.soldiers_lost,
            hostiles_killed: self.hostiles_killed,
            shots_fired: self.shots_fired,
            shots_hit: self.shots_hit,
            reaction_shots: self.reaction_shots,
        }
    }
}
