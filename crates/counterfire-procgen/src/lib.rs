//! Battlefield generation for COUNTERFIRE.
//!
//! Places both sides' artillery and ammo trucks on the field with
//! rejection-sampled spacing, and assigns equipment designations.

pub mod generation;
pub mod names;
pub mod placement;

pub use counterfire_core as core;
pub use generation::generate_units;
