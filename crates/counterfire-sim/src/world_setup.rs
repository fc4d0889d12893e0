//! Spawning generated units into the battle world.

use hecs::World;

use counterfire_core::blueprint::UnitBlueprint;
use counterfire_core::components::{AmmoTruck, Designation, Gun, UnitId};
use counterfire_core::enums::{Side, UnitKind};

/// Spawn every blueprint. Guns and trucks carry distinct component bundles;
/// the shared `UnitId` + `Side` is the pairing key.
pub fn spawn_units(world: &mut World, blueprints: &[UnitBlueprint]) {
    for bp in blueprints {
        match bp.kind {
            UnitKind::Artillery => {
                world.spawn((
                    UnitId(bp.id),
                    bp.side,
                    bp.position,
                    bp.heading,
                    Designation(bp.designation.clone()),
                    Gun::fresh(),
                ));
            }
            UnitKind::Ammo => {
                world.spawn((
                    UnitId(bp.id),
                    bp.side,
                    bp.position,
                    bp.heading,
                    Designation(bp.designation.clone()),
                    AmmoTruck::fresh(),
                ));
            }
        }
    }
}

/// Units of a side still active, guns and trucks combined.
pub fn active_units(world: &World, side: Side) -> usize {
    let mut count = 0;
    for (_entity, (s, gun)) in world.query::<(&Side, &Gun)>().iter() {
        if *s == side && gun.active {
            count += 1;
        }
    }
    for (_entity, (s, truck)) in world.query::<(&Side, &AmmoTruck)>().iter() {
        if *s == side && truck.active {
            count += 1;
        }
    }
    count
}
