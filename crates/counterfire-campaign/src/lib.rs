//! War-level bookkeeping for COUNTERFIRE.
//!
//! Tracks both sides' resource pools across battles, reserves and reclaims
//! per-round resources, shifts territory, and ends the war when a pool runs
//! dry. Orchestrates battle setup through procgen and the sim engine.

pub mod resources;
pub mod verdict;
pub mod war;
pub mod weather;

pub use counterfire_core as core;
pub use war::{War, WarSummary};
