//! End-of-war territory adjustment and verdict.

use counterfire_core::constants::{
    END_DAMAGE_THRESHOLD, FRONT_COLLAPSE_SHIFT, INITIAL_TERRITORY_OCCUPIED,
    INTRUDER_THRESHOLD_FACTOR,
};
use counterfire_core::enums::{Side, WarVerdict};

/// Which front collapsed, judged from the remaining damage budgets: a side
/// that absorbed nearly its whole budget while the other stayed healthy
/// routs and gives up ten points of territory.
pub fn front_collapse(defender_damage_left: i32, intruder_damage_left: i32) -> Option<Side> {
    let intruder_floor = END_DAMAGE_THRESHOLD * INTRUDER_THRESHOLD_FACTOR;
    if intruder_damage_left < intruder_floor && defender_damage_left >= END_DAMAGE_THRESHOLD {
        Some(Side::Intruder)
    } else if defender_damage_left < END_DAMAGE_THRESHOLD && intruder_damage_left >= intruder_floor
    {
        Some(Side::Defender)
    } else {
        None
    }
}

/// Territory shift implied by a collapse: an intruder rout hands territory
/// back, a defender rout gives more up.
pub fn collapse_shift(collapse: Option<Side>) -> i32 {
    match collapse {
        Some(Side::Intruder) => -FRONT_COLLAPSE_SHIFT,
        Some(Side::Defender) => FRONT_COLLAPSE_SHIFT,
        None => 0,
    }
}

/// Verdict from the final occupied territory, measured against the 20%
/// held at the start of the war.
pub fn verdict(territory_occupied: i32) -> WarVerdict {
    if territory_occupied <= 0 {
        WarVerdict::IntruderExpelled
    } else if territory_occupied < INITIAL_TERRITORY_OCCUPIED {
        WarVerdict::IntruderPushedBack {
            percent: INITIAL_TERRITORY_OCCUPIED - territory_occupied,
        }
    } else if territory_occupied == INITIAL_TERRITORY_OCCUPIED {
        WarVerdict::Stalemate
    } else {
        WarVerdict::IntruderAdvanced {
            percent: territory_occupied - INITIAL_TERRITORY_OCCUPIED,
        }
    }
}
