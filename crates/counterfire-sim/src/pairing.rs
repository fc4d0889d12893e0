//! Gun/truck pairing lookups.
//!
//! A gun and its truck share a `UnitId` and `Side`; pairing is resolved by
//! query against the world, never through stored cross-references.

use hecs::World;

use counterfire_core::components::{AmmoTruck, Gun, UnitId};
use counterfire_core::enums::Side;
use counterfire_core::errors::InvariantViolation;

/// Deduct one shell from the gun's paired active truck.
/// Exactly one active paired truck must exist for a firing gun.
pub fn expend_shell(world: &mut World, side: Side, unit: u32) -> Result<(), InvariantViolation> {
    let mut found = 0;
    for (_entity, (id, s, truck)) in world.query_mut::<(&UnitId, &Side, &mut AmmoTruck)>() {
        if id.0 == unit && *s == side && truck.active {
            truck.ammo -= 1;
            found += 1;
        }
    }
    if found != 1 {
        return Err(InvariantViolation::PairCount { side, unit, found });
    }
    Ok(())
}

/// Cascade-disable the truck paired with a knocked-out or broken gun.
pub fn disable_paired_truck(world: &mut World, side: Side, unit: u32) {
    for (_entity, (id, s, truck)) in world.query_mut::<(&UnitId, &Side, &mut AmmoTruck)>() {
        if id.0 == unit && *s == side {
            truck.active = false;
        }
    }
}

/// Cascade-disable the gun paired with an emptied truck.
/// Returns whether a still-active gun was silenced.
pub fn disable_paired_gun(world: &mut World, side: Side, unit: u32) -> bool {
    let mut silenced = false;
    for (_entity, (id, s, gun)) in world.query_mut::<(&UnitId, &Side, &mut Gun)>() {
        if id.0 == unit && *s == side && gun.active {
            gun.active = false;
            silenced = true;
        }
    }
    silenced
}
