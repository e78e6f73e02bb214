//! Campaign layer: progress that survives across missions.
//!
//! Mission reports feed [`CampaignState::record_mission`], which updates
//! the running record and evaluates achievements. The whole state
//! round-trips through one JSON file via [`save_load`].

pub mod achievements;
pub mod save_load;
pub mod state;

pub use achievements::Achievement;
pub use state::CampaignState;
