//! War configuration and difficulty tables.
//!
//! There is no ambient settings global: a `WarConfig` is built once at game
//! start and threaded through every component call.

use serde::{Deserialize, Serialize};

use crate::enums::{Deployment, Difficulty, Side};
use crate::types::FieldSize;

/// Per-side resource amounts: units, shells, damage budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAmounts {
    pub units: i32,
    pub ammo: i32,
    pub damage: i32,
}

/// Amounts for both sides of the war. The intruder fields a larger force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideAmounts {
    pub defender: ResourceAmounts,
    pub intruder: ResourceAmounts,
}

impl SideAmounts {
    pub fn side(&self, side: Side) -> ResourceAmounts {
        match side {
            Side::Defender => self.defender,
            Side::Intruder => self.intruder,
        }
    }
}

const fn amounts(units: i32, ammo: i32, damage: i32) -> ResourceAmounts {
    ResourceAmounts {
        units,
        ammo,
        damage,
    }
}

/// Total resources committed to the whole war, per difficulty.
pub fn war_totals(difficulty: Difficulty) -> SideAmounts {
    match difficulty {
        Difficulty::Easy => SideAmounts {
            defender: amounts(10, 100, 500),
            intruder: amounts(30, 300, 1_500),
        },
        Difficulty::Medium => SideAmounts {
            defender: amounts(20, 200, 1_000),
            intruder: amounts(60, 600, 3_000),
        },
        Difficulty::Hard => SideAmounts {
            defender: amounts(30, 300, 1_500),
            intruder: amounts(90, 900, 4_500),
        },
    }
}

/// Resource caps for a single battle, per difficulty.
pub fn round_caps(difficulty: Difficulty) -> SideAmounts {
    match difficulty {
        Difficulty::Easy => SideAmounts {
            defender: amounts(1, 10, 50),
            intruder: amounts(3, 30, 150),
        },
        Difficulty::Medium => SideAmounts {
            defender: amounts(2, 20, 100),
            intruder: amounts(6, 60, 300),
        },
        Difficulty::Hard => SideAmounts {
            defender: amounts(3, 30, 150),
            intruder: amounts(9, 90, 450),
        },
    }
}

/// Immutable configuration for one whole war.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarConfig {
    pub difficulty: Difficulty,
    /// Which side the human commands. The player always holds the bottom
    /// half of the field.
    pub player_side: Side,
    /// Intruder deployment doctrine for this war.
    pub deployment: Deployment,
    /// Field image dimensions, supplied by the round-setup collaborator.
    pub field: FieldSize,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            player_side: Side::Defender,
            deployment: Deployment::Inline,
            field: FieldSize::default(),
        }
    }
}
