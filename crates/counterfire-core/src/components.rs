//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond constructors.
//! Turn logic lives in the sim crate's systems, not here.

use serde::{Deserialize, Serialize};

use crate::constants::INITIAL_TRUCK_AMMO;
use crate::enums::Facing;
use crate::orders::ShotSolution;

/// Sequence number shared by a gun and its paired ammo truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Equipment designation for reports ("M777", "KAMAZ", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Designation(pub String);

/// Sprite orientation. Presentation only; never read by turn logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub facing: Facing,
    /// Rotation of a truck sprite toward its gun, in sprite units.
    pub rotation: f64,
}

/// Artillery piece state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gun {
    /// Accumulated damage, 0..=100. At 50 the gun is knocked out.
    pub damage: i32,
    pub active: bool,
    /// Firing solution last confirmed by the operator, if any.
    pub solution: Option<ShotSolution>,
}

impl Gun {
    /// An undamaged gun awaiting its first solution.
    pub fn fresh() -> Self {
        Self {
            damage: 0,
            active: true,
            solution: None,
        }
    }
}

/// Ammo truck state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoTruck {
    /// Shells remaining in stock.
    pub ammo: i32,
    pub active: bool,
}

impl AmmoTruck {
    /// A fully stocked truck.
    pub fn fresh() -> Self {
        Self {
            ammo: INITIAL_TRUCK_AMMO,
            active: true,
        }
    }
}

// `Side` and `FieldPoint` are used directly as components as well;
// they are defined in enums.rs and types.rs.
