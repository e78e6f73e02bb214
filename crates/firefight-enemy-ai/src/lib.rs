//! Hostile AI for FIREFIGHT.
//!
//! Implements target acquisition, engage checks, and greedy approach
//! steps for hostile activations, plus archetype behavior profiles.

pub mod planner;
pub mod profiles;

pub use firefight_core as core;
