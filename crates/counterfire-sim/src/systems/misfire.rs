//! Start-of-turn breakdown check for intruder artillery.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::components::{Gun, UnitId};
use counterfire_core::constants::MISFIRE_ODDS;
use counterfire_core::enums::Side;
use counterfire_core::events::BattleEvent;

use crate::pairing;

/// Roll the 1-in-30 breakdown for every active intruder gun, whichever side
/// the player commands. A broken gun goes silent and takes its paired truck
/// with it.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, events: &mut Vec<BattleEvent>) {
    let mut broken: Vec<u32> = Vec::new();
    for (_entity, (id, side, gun)) in world.query_mut::<(&UnitId, &Side, &mut Gun)>() {
        if *side == Side::Intruder && gun.active && rng.gen_range(1..=MISFIRE_ODDS) == 7 {
            gun.active = false;
            broken.push(id.0);
            events.push(BattleEvent::GunMisfired {
                side: Side::Intruder,
                unit: id.0,
            });
        }
    }
    for unit in broken {
        pairing::disable_paired_truck(world, Side::Intruder, unit);
    }
}
