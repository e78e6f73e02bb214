//! Procedural mission generation for FIREFIGHT.
//!
//! Rolls battle maps from weighted terrain and picks deployment
//! tiles inside the cleared spawn zones.

pub use firefight_core as core;

pub mod deploy;
pub mod mapgen;

// Re-export key functions for convenience.
pub use deploy::scatter_positions;
pub use mapgen::{generate_map, hostile_zone, squad_zone, ZoneRect};
