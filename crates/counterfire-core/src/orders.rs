//! Player firing orders and their validation.
//!
//! Orders come from a validated-input collaborator (a console, a test);
//! the engine range-checks them again and resolves no turn on failure.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ValidationError;

/// Ballistic parameters for one gun's shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotSolution {
    /// Degrees; any value in -360..=360 is accepted and wrapped when fired.
    pub azimuth: f64,
    /// Degrees above horizontal, 15..=75.
    pub elevation: f64,
    /// Propellant charge, 1..=5.
    pub charge: u8,
}

impl ShotSolution {
    pub fn new(azimuth: f64, elevation: f64, charge: u8) -> Self {
        Self {
            azimuth,
            elevation,
            charge,
        }
    }

    /// Range-check the solution for the given unit.
    pub fn validate(&self, unit: u32) -> Result<(), ValidationError> {
        if !(AZIMUTH_MIN..=AZIMUTH_MAX).contains(&self.azimuth) || !self.azimuth.is_finite() {
            return Err(ValidationError::AzimuthOutOfRange {
                unit,
                value: self.azimuth,
            });
        }
        if !(ELEVATION_MIN..=ELEVATION_MAX).contains(&self.elevation) {
            return Err(ValidationError::ElevationOutOfRange {
                unit,
                value: self.elevation,
            });
        }
        if !(CHARGE_MIN..=CHARGE_MAX).contains(&self.charge) {
            return Err(ValidationError::ChargeOutOfRange {
                unit,
                value: self.charge,
            });
        }
        Ok(())
    }
}

/// A confirmed order assigning a solution to one player gun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireOrder {
    pub unit: u32,
    pub solution: ShotSolution,
}
