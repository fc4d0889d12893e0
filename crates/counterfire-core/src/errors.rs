//! Error taxonomy for the battle engine.
//!
//! Validation errors are recoverable: they are reported back to the input
//! collaborator and no state mutates. Invariant violations abort the battle.
//! Generation errors fail round setup.

use thiserror::Error;

use crate::enums::Side;

/// Player-submitted shot parameters out of range, or orders that do not
/// address an active player gun.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("azimuth {value} for unit {unit} is outside -360..=360")]
    AzimuthOutOfRange { unit: u32, value: f64 },
    #[error("elevation {value} for unit {unit} is outside 15..=75")]
    ElevationOutOfRange { unit: u32, value: f64 },
    #[error("charge {value} for unit {unit} is outside 1..=5")]
    ChargeOutOfRange { unit: u32, value: u8 },
    #[error("unit {unit} is not an active player gun")]
    NoSuchGun { unit: u32 },
    #[error("no firing solution confirmed for unit {unit}")]
    MissingSolution { unit: u32 },
}

/// Gun/ammo pairing or active-unit parity broken: a bug in generation or
/// resolution, never user-recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{side:?} unit {unit} has {found} active paired ammo trucks, expected exactly 1")]
    PairCount { side: Side, unit: u32, found: usize },
    #[error("{side:?} has an odd number of active units ({count})")]
    OddParity { side: Side, count: usize },
}

/// Rejection-sampled placement could not find a valid position within the
/// bounded retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("placement sampling exhausted after {attempts} attempts")]
    PlacementExhausted { attempts: u32 },
}

/// Umbrella error for turn resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
