//! Snapshot views — the complete visible state returned to the presentation
//! layer after every resolved turn, plus the post-battle remainder ledger.

use serde::{Deserialize, Serialize};

use crate::components::Heading;
use crate::enums::{BattleOutcome, Side, UnitKind};
use crate::events::BattleEvent;
use crate::types::FieldPoint;
use crate::weather::WeatherReport;

/// One unit as visible to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitView {
    pub id: u32,
    pub kind: UnitKind,
    pub side: Side,
    pub designation: String,
    pub position: FieldPoint,
    pub heading: Heading,
    pub active: bool,
    /// Accumulated damage (guns only).
    pub damage: Option<i32>,
    /// Remaining stock (trucks only).
    pub ammo: Option<i32>,
}

/// Battle state after a resolved turn, with the turn's events drained into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub turn: u32,
    pub player_side: Side,
    pub outcome: BattleOutcome,
    pub weather: WeatherReport,
    pub map_heading_deg: f64,
    pub units: Vec<UnitView>,
    pub events: Vec<BattleEvent>,
}

/// A side's remaining war-level pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolView {
    pub units: i32,
    pub ammo: i32,
    pub damage: i32,
}

/// War statistics across battles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarView {
    pub battle_index: u32,
    pub battles_won: u32,
    pub battles_lost: u32,
    pub battles_tied: u32,
    pub territory_occupied: i32,
    pub defender_pool: PoolView,
    pub intruder_pool: PoolView,
}

/// Post-battle facts one side reports for remainder reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideRemainder {
    /// Guns that finished the battle with damage below the knockout threshold.
    pub low_damage_guns: i32,
    /// Units of either kind still active at battle end.
    pub active_units: i32,
    /// Stock left on all trucks, active or not.
    pub truck_ammo: i32,
    /// Stock left on active trucks only.
    pub active_truck_ammo: i32,
    /// Gross damage accumulated by this side's guns.
    pub damage_taken: i32,
}

/// Remainder facts for both sides, produced by the engine at battle end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainderLedger {
    pub defender: SideRemainder,
    pub intruder: SideRemainder,
}

impl RemainderLedger {
    pub fn side(&self, side: Side) -> &SideRemainder {
        match side {
            Side::Defender => &self.defender,
            Side::Intruder => &self.intruder,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideRemainder {
        match side {
            Side::Defender => &mut self.defender,
            Side::Intruder => &mut self.intruder,
        }
    }
}
