use std::collections::BTreeMap;

use firefight_core::state::MissionReport;
use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;

/// Persistent record that survives across missions. One of these per
/// save file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignState {
    pub missions_played: u32,
    pub missions_won: u32,
    /// Unlock flag per achievement. Unlocks never revert.
    pub achievements: BTreeMap<Achievement, bool>,
}

impl Default for CampaignState {
    fn default() -> Self {
        Self {
            missions_played: 0,
            missions_won: 0,
            achievements: Achievement::ALL.iter().map(|a| (*a, false)).collect(),
        }
    }
}

impl CampaignState {
    /// Fold a finished mission into the record and report any
    /// achievements it newly unlocked, in display order.
    pub fn record_mission(&mut self, report: &MissionReport) -> Vec<Achievement> {
        self.missions_played += 1;
        if report.victory {
            self.missions_won += 1;
        }

        let mut fresh = Vec::new();
        for achievement in Achievement::ALL {
            let already = self.achievements.get(&achievement) == Some(&true);
            if !already && achievement.earned(self.missions_won, report) {
                self.achievements.insert(achievement, true);
                fresh.push(achievement);
            }
        }
        fresh
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.values().filter(|earned| **earned).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn victory(lost: u32, alive: u32) -> MissionReport {
        MissionReport {
            victory: true,
            turns: 5,
            soldiers_alive: alive,
            soldiers_lost: lost,
            hostiles_killed: 3,
            shots_fired: 10,
            shots_hit: 4,
            reaction_shots: 0,
        }
    }

    #[test]
    fn fresh_campaign_has_everything_locked() {
        let state = CampaignState::default();
        assert_eq!(state.missions_played, 0);
        assert_eq!(state.achievements.len(), Achievement::ALL.len());
        assert_eq!(state.unlocked_count(), 0);
    }

    #[test]
    fn recording_a_win_unlocks_first_victory() {
        let mut state = CampaignState::default();
        let fresh = state.record_mission(&victory(0, 4));
        assert_eq!(state.missions_played, 1);
        assert_eq!(state.missions_won, 1);
        assert!(fresh.contains(&Achievement::FirstVictory));
        assert!(fresh.contains(&Achievement::Untouchable));
    }

    #[test]
    fn recording_a_loss_counts_the_mission_only() {
        let mut state = CampaignState::default();
        let report = MissionReport {
            victory: false,
            ..victory(4, 0)
        };
        let fresh = state.record_mission(&report);
        assert_eq!(state.missions_played, 1);
        assert_eq!(state.missions_won, 0);
        assert!(fresh.is_empty());
    }

    #[test]
    fn achievements_unlock_once() {
        let mut state = CampaignState::default();
        let first = state.record_mission(&victory(0, 4));
        assert!(first.contains(&Achievement::FirstVictory));
        let second = state.record_mission(&victory(0, 4));
        assert!(
            !second.contains(&Achievement::FirstVictory),
            "repeat wins report nothing new"
        );
    }

    #[test]
    fn unlocks_survive_a_sloppy_followup() {
        let mut state = CampaignState::default();
        state.record_mission(&victory(0, 4));
        state.record_mission(&victory(2, 2));
        assert_eq!(
            state.achievements.get(&Achievement::Untouchable),
            Some(&true),
            "a lossy win never revokes the badge"
        );
    }

    #[test]
    fn veteran_lands_on_the_fifth_win() {
        let mut state = CampaignState::default();
        for _ in 0..4 {
            let fresh = state.record_mission(&victory(1, 3));
            assert!(!fresh.contains(&Achievement::Veteran));
        }
        let fifth = state.record_mission(&victory(1, 3));
        assert!(fifth.contains(&Achievement::Veteran));
    }

    #[test]
    fn last_stand_on_a_sole_survivor() {
        let mut state = CampaignState::default();
        let fresh = state.record_mission(&victory(3, 1));
        assert!(fresh.contains(&Achievement::LastStand));
    }
}
