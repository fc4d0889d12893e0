//! End-of-turn bookkeeping: depletion sweep, outcome, parity check.

use hecs::World;

use counterfire_core::components::{AmmoTruck, UnitId};
use counterfire_core::enums::{BattleOutcome, Side};
use counterfire_core::errors::InvariantViolation;
use counterfire_core::events::BattleEvent;

use crate::{pairing, world_setup};

/// Trucks emptied purely by firing go silent at the end of the turn, even
/// when no shell landed near them.
pub fn sweep_depleted(world: &mut World, events: &mut Vec<BattleEvent>) {
    let mut emptied: Vec<(Side, u32)> = Vec::new();
    for (_entity, (id, side, truck)) in world.query_mut::<(&UnitId, &Side, &mut AmmoTruck)>() {
        if truck.ammo <= 0 && truck.active {
            truck.active = false;
            emptied.push((*side, id.0));
            events.push(BattleEvent::TruckEmpty {
                side: *side,
                unit: id.0,
            });
        }
    }
    for (side, unit) in emptied {
        if pairing::disable_paired_gun(world, side, unit) {
            events.push(BattleEvent::GunSilenced { side, unit });
        }
    }
}

/// The battle is decided as soon as either side has no active units.
pub fn decide(world: &World, player_side: Side) -> BattleOutcome {
    let player = world_setup::active_units(world, player_side);
    let computer = world_setup::active_units(world, player_side.opponent());
    match (player, computer) {
        (0, 0) => BattleOutcome::Tied,
        (_, 0) => BattleOutcome::PlayerWon,
        (0, _) => BattleOutcome::PlayerLost,
        _ => BattleOutcome::Ongoing,
    }
}

/// An odd active count means a unit lost its pair without the cascade —
/// a bug in generation or resolution, fatal for the battle.
pub fn check_parity(world: &World) -> Result<(), InvariantViolation> {
    for side in [Side::Defender, Side::Intruder] {
        let count = world_setup::active_units(world, side);
        if count % 2 != 0 {
            return Err(InvariantViolation::OddParity { side, count });
        }
    }
    Ok(())
}
