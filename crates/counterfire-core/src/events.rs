//! Structured narrative events emitted by the battle engine.
//!
//! The presentation layer formats, displays, and voices these; it never
//! mutates engine state in response.

use serde::{Deserialize, Serialize};

use crate::enums::{BattleOutcome, Side};

/// One narrative beat of a resolved turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// A gun fired a shell.
    GunFired { side: Side, unit: u32 },
    /// An intruder gun broke down before it could fire.
    GunMisfired { side: Side, unit: u32 },
    /// A shell landed without exploding.
    ShellDud { side: Side },
    /// Enemy shells that detonated this turn.
    IncomingBlasts { count: u32 },
    /// A gun took blast damage.
    GunDamaged { side: Side, unit: u32, damage: i32 },
    /// A gun crossed the knockout threshold.
    GunDestroyed { side: Side, unit: u32 },
    /// A truck lost stock to a nearby blast.
    TruckHit { side: Side, unit: u32, loss: i32 },
    /// A truck ran out of shells.
    TruckEmpty { side: Side, unit: u32 },
    /// A gun fell silent because its paired truck is out of shells.
    GunSilenced { side: Side, unit: u32 },
    /// The player withdrew all remaining units from the field.
    PlayerWithdrew { side: Side },
    /// One side has no active units left; the battle is decided.
    BattleOver { outcome: BattleOutcome },
}
