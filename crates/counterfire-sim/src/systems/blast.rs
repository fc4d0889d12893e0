//! Blast application: damage guns, destroy truck stock, cascade knockouts.
//!
//! Every blast is applied against every unit on the field, friendly fire
//! included. Activity is not a shield: inactive units keep accumulating
//! damage and losing stock, they just cannot transition twice.

use hecs::World;

use counterfire_core::components::{AmmoTruck, Gun, UnitId};
use counterfire_core::constants::{GUN_DAMAGE_CAP, GUN_KNOCKOUT_DAMAGE};
use counterfire_core::enums::Side;
use counterfire_core::events::BattleEvent;
use counterfire_core::types::FieldPoint;

use crate::{ballistics, pairing};

/// Apply all of the turn's blasts to all units.
pub fn run(world: &mut World, blasts: &[FieldPoint], events: &mut Vec<BattleEvent>) {
    // Guns take damage.
    let mut destroyed: Vec<(Side, u32)> = Vec::new();
    for (_entity, (id, side, pos, gun)) in
        world.query_mut::<(&UnitId, &Side, &FieldPoint, &mut Gun)>()
    {
        for blast in blasts {
            let damage = ballistics::blast_damage(pos.distance_to(blast));
            if damage > 0 {
                gun.damage = (gun.damage + damage).min(GUN_DAMAGE_CAP);
                events.push(BattleEvent::GunDamaged {
                    side: *side,
                    unit: id.0,
                    damage,
                });
            }
            if gun.damage >= GUN_KNOCKOUT_DAMAGE && gun.active {
                gun.active = false;
                destroyed.push((*side, id.0));
                events.push(BattleEvent::GunDestroyed {
                    side: *side,
                    unit: id.0,
                });
            }
        }
    }
    for (side, unit) in destroyed {
        pairing::disable_paired_truck(world, side, unit);
    }

    // Trucks lose stock.
    let mut emptied: Vec<(Side, u32)> = Vec::new();
    for (_entity, (id, side, pos, truck)) in
        world.query_mut::<(&UnitId, &Side, &FieldPoint, &mut AmmoTruck)>()
    {
        for blast in blasts {
            let loss = ballistics::ammo_loss(pos.distance_to(blast));
            if loss > 0 {
                truck.ammo = (truck.ammo - loss).max(0);
                events.push(BattleEvent::TruckHit {
                    side: *side,
                    unit: id.0,
                    loss,
                });
            }
            if truck.ammo <= 0 && truck.active {
                truck.active = false;
                emptied.push((*side, id.0));
                events.push(BattleEvent::TruckEmpty {
                    side: *side,
                    unit: id.0,
                });
            }
        }
    }
    for (side, unit) in emptied {
        if pairing::disable_paired_gun(world, side, unit) {
            events.push(BattleEvent::GunSilenced { side, unit });
        }
    }
}
