//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The two opposing factions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Defender,
    Intruder,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Defender => Side::Intruder,
            Side::Intruder => Side::Defender,
        }
    }
}

/// What a unit is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Artillery,
    Ammo,
}

/// Intruder group deployment doctrine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deployment {
    /// Three guns along a randomly rotated line, fixed spacing.
    #[default]
    Inline,
    /// Three guns scattered within a box around the group center.
    Random,
}

/// Difficulty preset selecting the war's resource tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Cardinal sprite orientation (presentation only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    North,
    South,
}

/// Battle resolution state, from the player's point of view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    #[default]
    Ongoing,
    PlayerWon,
    PlayerLost,
    Tied,
}

impl BattleOutcome {
    /// Whether the battle has been decided.
    pub fn is_terminal(self) -> bool {
        self != BattleOutcome::Ongoing
    }
}

/// Structured end-of-war verdict, derived from the final occupied territory
/// relative to the 20% held at the start of the war. The presentation layer
/// turns this into prose for whichever side the player commanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarVerdict {
    /// Territory at or below zero: the invaders are driven out entirely.
    IntruderExpelled,
    /// Part of the initially occupied territory was reclaimed.
    IntruderPushedBack { percent: i32 },
    /// The front ended where it began.
    Stalemate,
    /// The intruder gained ground beyond the initial occupation.
    IntruderAdvanced { percent: i32 },
}
