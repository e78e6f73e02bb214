//! Campaign JSON persistence. A missing or unreadable save reads as a
//! fresh campaign, never as an error.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::state::CampaignState;

/// File name of the campaign record inside the save directory.
pub const SAVE_FILE: &str = "campaign.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to access save file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode campaign state: {0}")]
    Json(#[from] serde_json::Error),
}

fn save_path(dir: &Path) -> PathBuf {
    dir.join(SAVE_FILE)
}

/// Write the campaign record, creating the directory if needed.
pub fn save(dir: &Path, state: &CampaignState) -> Result<(), SaveError> {
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(state)?;
    fs::write(save_path(dir), json)?;
    Ok(())
}

/// Read the campaign record, failing loudly. Most callers want
/// [`load_or_default`].
pub fn try_load(dir: &Path) -> Result<CampaignState, SaveError> {
    let json = fs::read_to_string(save_path(dir))?;
    Ok(serde_json::from_str(&json)?)
}

/// Read the campaign record; a missing or corrupt file starts fresh.
pub fn load_or_default(dir: &Path) -> CampaignState {
    try_load(dir).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::Achievement;
    use firefight_core::state::MissionReport;

    fn won_mission() -> MissionReport {
        MissionReport {
            victory: true,
            turns: 4,
            soldiers_alive: 4,
            soldiers_lost: 0,
            hostiles_killed: 3,
            shots_fired: 6,
            shots_hit: 5,
            reaction_shots: 2,
        }
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join("firefight_test_save_load");
        let _ = fs::remove_dir_all(&dir);

        let mut state = CampaignState::default();
        state.record_mission(&won_mission());
        save(&dir, &state).unwrap();

        let loaded = try_load(&dir).unwrap();
        assert_eq!(loaded.missions_played, 1);
        assert_eq!(loaded.missions_won, 1);
        assert_eq!(
            loaded.achievements.get(&Achievement::FirstVictory),
            Some(&true)
        );

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_save_starts_fresh() {
        let dir = std::env::temp_dir().join("firefight_test_missing_save");
        let _ = fs::remove_dir_all(&dir);

        assert!(try_load(&dir).is_err());
        let state = load_or_default(&dir);
        assert_eq!(state.missions_played, 0);
        assert_eq!(state.unlocked_count(), 0);
    }

    #[test]
    fn corrupt_save_starts_fresh() {
        let dir = std::env::temp_dir().join("firefight_test_corrupt_save");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SAVE_FILE), "not json {").unwrap();

        let state = load_or_default(&dir);
        assert_eq!(state.missions_played, 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn save_creates_nested_directories() {
        let dir = std::env::temp_dir()
            .join("firefight_test_nested")
            .join("saves");
        let _ = fs::remove_dir_all(dir.parent().unwrap());

        save(&dir, &CampaignState::default()).unwrap();
        assert!(dir.join(SAVE_FILE).exists());

        let _ = fs::remove_dir_all(dir.parent().unwrap());
    }
}
