//! firefight-sim: deterministic turn-based tactical mission engine.
//!
//! Owns the ECS world (hecs), the map, the seeded RNG (ChaCha8), and the
//! turn state machine. Hosts queue [`core::commands::PlayerCommand`]s,
//! call [`MissionEngine::tick`], and render the returned snapshot.

pub mod engine;
pub mod scenario;
pub mod systems;
pub mod tally;
pub mod world_setup;

pub use firefight_core as core;

pub use engine::{MissionConfig, MissionEngine};
