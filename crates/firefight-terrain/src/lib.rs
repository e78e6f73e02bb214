//! Terrain system for FIREFIGHT.
//!
//! Battle grid storage, per-tile movement and cover queries,
//! and tile-to-tile line of sight.

pub use firefight_core as core;

pub mod grid;
pub mod los;

// Re-export key types for convenience.
pub use grid::MapGrid;
pub use los::has_line_of_sight;
