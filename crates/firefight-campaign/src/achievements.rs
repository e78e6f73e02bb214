//! Achievement definitions and the rules for earning them.

use firefight_core::state::MissionReport;
use serde::{Deserialize, Serialize};

/// Hit percentage a mission must reach for [`Achievement::Marksman`].
pub const MARKSMAN_ACCURACY_PCT: u32 = 75;
/// Victories required for [`Achievement::Veteran`].
pub const VETERAN_WINS: u32 = 5;

/// Campaign milestones. All of them require a victorious mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    /// Win a mission.
    FirstVictory,
    /// Win five missions.
    Veteran,
    /// Win without losing a soldier.
    Untouchable,
    /// Win with at least three of every four shots connecting.
    Marksman,
    /// Win with a single soldier left standing.
    LastStand,
}

impl Achievement {
    pub const ALL: [Achievement; 5] = [
        Achievement::FirstVictory,
        Achievement::Veteran,
        Achievement::Untouchable,
        Achievement::Marksman,
        Achievement::LastStand,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstVictory => "First Victory",
            Achievement::Veteran => "Veteran",
            Achievement::Untouchable => "Untouchable",
            Achievement::Marksman => "Marksman",
            Achievement::LastStand => "Last Stand",
        }
    }

    /// Whether a finished mission earns this badge. `victories` already
    /// counts the mission under evaluation.
    pub fn earned(self, victories: u32, report: &MissionReport) -> bool {
        if !report.victory {
            return false;
        }
        match self {
            Achievement::FirstVictory => victories >= 1,
            Achievement::Veteran => victories >= VETERAN_WINS,
            Achievement::Untouchable => report.soldiers_lost == 0,
            Achievement::Marksman => {
                report.shots_fired > 0
                    && report.shots_hit * 100 >= MARKSMAN_ACCURACY_PCT * report.shots_fired
            }
            Achievement::LastStand => report.soldiers_alive == 1,
        }
    }
}
