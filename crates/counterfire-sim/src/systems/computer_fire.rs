//! Computer counter-battery fire.
//!
//! Target selection persists across turns in the engine; it is re-rolled
//! whenever a pick has gone inactive. Shots cycle round-robin over the
//! current targets with the side's accuracy profile.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::components::{AmmoTruck, Gun, UnitId};
use counterfire_core::constants::DUD_ODDS;
use counterfire_core::enums::{Side, UnitKind};
use counterfire_core::errors::InvariantViolation;
use counterfire_core::events::BattleEvent;
use counterfire_core::types::FieldPoint;

use counterfire_ai::accuracy;
use counterfire_ai::targeting::{self, TargetCandidate, TargetingContext};

use crate::pairing;

/// Fire every active computer gun at the current target list.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_side: Side,
    turn: u32,
    targets: &mut Vec<TargetCandidate>,
    blasts: &mut Vec<FieldPoint>,
    events: &mut Vec<BattleEvent>,
) -> Result<(), InvariantViolation> {
    let computer_side = player_side.opponent();

    // Refresh the target list when empty or when any pick has gone inactive.
    if targets.is_empty() || targets.iter().any(|t| !is_active(world, player_side, t)) {
        *targets = reselect(world, computer_side, player_side, rng);
    }

    let mut shooters: Vec<u32> = Vec::new();
    for (_entity, (id, side, gun)) in world.query::<(&UnitId, &Side, &Gun)>().iter() {
        if *side == computer_side && gun.active {
            shooters.push(id.0);
        }
    }
    shooters.sort_unstable();

    let mut blast_count = 0;
    let mut target_index = 0;
    for shooter in shooters {
        // Skip dead picks; re-roll when the cycle runs dry.
        while !targets.is_empty()
            && !is_active(world, player_side, &targets[target_index % targets.len()])
        {
            *targets = reselect(world, computer_side, player_side, rng);
            target_index = 0;
        }
        if targets.is_empty() {
            break;
        }

        let target = targets[target_index % targets.len()];
        let aim = accuracy::aim_at(target.position, computer_side, turn, rng);
        if computer_side == Side::Intruder && rng.gen_range(1..=DUD_ODDS) == 7 {
            events.push(BattleEvent::ShellDud {
                side: computer_side,
            });
        } else {
            blast_count += 1;
            blasts.push(aim);
        }
        if targets.len() > 1 {
            target_index = (target_index + 1) % targets.len();
        }
        pairing::expend_shell(world, computer_side, shooter)?;
    }
    events.push(BattleEvent::IncomingBlasts { count: blast_count });
    Ok(())
}

/// Whether a previously selected target is still active.
fn is_active(world: &World, player_side: Side, target: &TargetCandidate) -> bool {
    match target.kind {
        UnitKind::Artillery => world
            .query::<(&UnitId, &Side, &Gun)>()
            .iter()
            .any(|(_e, (id, s, gun))| id.0 == target.unit && *s == player_side && gun.active),
        UnitKind::Ammo => world
            .query::<(&UnitId, &Side, &AmmoTruck)>()
            .iter()
            .any(|(_e, (id, s, truck))| id.0 == target.unit && *s == player_side && truck.active),
    }
}

/// Gather the player's active units and pick a fresh target list.
fn reselect(
    world: &World,
    computer_side: Side,
    player_side: Side,
    rng: &mut ChaCha8Rng,
) -> Vec<TargetCandidate> {
    let mut candidates: Vec<TargetCandidate> = Vec::new();
    for (_entity, (id, side, pos, gun)) in world
        .query::<(&UnitId, &Side, &FieldPoint, &Gun)>()
        .iter()
    {
        if *side == player_side && gun.active {
            candidates.push(TargetCandidate {
                unit: id.0,
                kind: UnitKind::Artillery,
                position: *pos,
            });
        }
    }
    for (_entity, (id, side, pos, truck)) in world
        .query::<(&UnitId, &Side, &FieldPoint, &AmmoTruck)>()
        .iter()
    {
        if *side == player_side && truck.active {
            candidates.push(TargetCandidate {
                unit: id.0,
                kind: UnitKind::Ammo,
                position: *pos,
            });
        }
    }
    // Stable candidate order keeps same-seed battles identical.
    candidates.sort_by_key(|c| (c.unit, c.kind == UnitKind::Ammo));

    let mut active_guns = 0;
    for (_entity, (side, gun)) in world.query::<(&Side, &Gun)>().iter() {
        if *side == computer_side && gun.active {
            active_guns += 1;
        }
    }

    let ctx = TargetingContext {
        computer_side,
        active_guns,
        candidates: &candidates,
    };
    targeting::select_targets(&ctx, rng)
}
