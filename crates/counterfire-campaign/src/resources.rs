//! War-level resource pools and the round reservation/reconciliation rules.
//!
//! The reconciliation is deliberately asymmetric: the defender recovers
//! every survivor and every shell, the intruder writes half its surviving
//! strength off to attrition and abandoned logistics.

use serde::{Deserialize, Serialize};

use counterfire_core::config::{round_caps, war_totals};
use counterfire_core::constants::{
    END_AMMO_THRESHOLD, END_DAMAGE_THRESHOLD, END_UNITS_THRESHOLD, INTRUDER_THRESHOLD_FACTOR,
};
use counterfire_core::enums::Difficulty;
use counterfire_core::state::{PoolView, RemainderLedger};

/// One side's remaining war resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub units: i32,
    pub ammo: i32,
    /// Damage the side can still absorb before its front gives way.
    pub damage: i32,
}

impl ResourcePool {
    pub fn view(&self) -> PoolView {
        PoolView {
            units: self.units,
            ammo: self.ammo,
            damage: self.damage,
        }
    }
}

/// Both sides' pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePools {
    pub defender: ResourcePool,
    pub intruder: ResourcePool,
}

impl SidePools {
    /// Pools at war start, from the difficulty table.
    pub fn initial(difficulty: Difficulty) -> Self {
        let totals = war_totals(difficulty);
        Self {
            defender: ResourcePool {
                units: totals.defender.units,
                ammo: totals.defender.ammo,
                damage: totals.defender.damage,
            },
            intruder: ResourcePool {
                units: totals.intruder.units,
                ammo: totals.intruder.ammo,
                damage: totals.intruder.damage,
            },
        }
    }

    /// Gun counts both sides can field this round: bounded by the round
    /// caps, the pools, and the 10-shell truck every gun needs.
    pub fn round_strengths(&self, difficulty: Difficulty) -> (u32, u32) {
        let caps = round_caps(difficulty);
        let defender = caps
            .defender
            .units
            .min(self.defender.units)
            .min(caps.defender.ammo / 10)
            .min(self.defender.ammo / 10);
        let intruder = caps
            .intruder
            .units
            .min(self.intruder.units)
            .min(caps.intruder.ammo / 10)
            .min(self.intruder.ammo / 10);
        (defender.max(0) as u32, intruder.max(0) as u32)
    }

    /// Reserve the round's resources out of the pools.
    pub fn reserve(&mut self, difficulty: Difficulty, defender_guns: u32, intruder_guns: u32) {
        let caps = round_caps(difficulty);
        let dg = defender_guns as i32;
        let ig = intruder_guns as i32;
        self.defender.units -= dg.min(self.defender.units).min(caps.defender.units);
        self.defender.ammo -= (dg * 10).min(self.defender.ammo).min(caps.defender.ammo);
        self.intruder.units -= (ig * 3).min(self.intruder.units).min(caps.intruder.units);
        self.intruder.ammo -= (ig * 30).min(self.intruder.ammo).min(caps.intruder.ammo);
    }

    /// Return what survived the battle. The defender recovers every
    /// low-damage gun and every shell; the intruder recovers half its
    /// surviving strength and only the stock on trucks still running.
    /// Damage taken comes out of both damage budgets in full.
    pub fn reclaim(&mut self, ledger: &RemainderLedger) {
        self.defender.units += ledger.defender.low_damage_guns;
        self.defender.ammo += ledger.defender.truck_ammo;
        self.defender.damage -= ledger.defender.damage_taken;

        self.intruder.units += ledger.intruder.active_units / 2;
        self.intruder.ammo += ledger.intruder.active_truck_ammo;
        self.intruder.damage -= ledger.intruder.damage_taken;
    }

    /// Whether either side's pool has fallen below its floor. The intruder
    /// started with triple the resources and folds at triple the floor.
    pub fn exhausted(&self) -> bool {
        if self.defender.units < END_UNITS_THRESHOLD
            || self.defender.ammo < END_AMMO_THRESHOLD
            || self.defender.damage < END_DAMAGE_THRESHOLD
        {
            return true;
        }
        self.intruder.units < END_UNITS_THRESHOLD * INTRUDER_THRESHOLD_FACTOR
            || self.intruder.ammo < END_AMMO_THRESHOLD * INTRUDER_THRESHOLD_FACTOR
            || self.intruder.damage < END_DAMAGE_THRESHOLD * INTRUDER_THRESHOLD_FACTOR
    }
}
