//! Battle simulation engine for COUNTERFIRE.
//!
//! Owns the hecs world for one battle, resolves turns from player orders,
//! and reports through snapshots and structured events. Completely headless,
//! enabling deterministic testing.

pub mod ballistics;
pub mod engine;
pub mod pairing;
pub mod systems;
pub mod world_setup;

pub use counterfire_core as core;
pub use engine::{BattleEngine, RoundSetup};
