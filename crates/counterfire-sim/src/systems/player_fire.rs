//! Player salvo: every active player gun fires its confirmed solution.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::components::{Gun, UnitId};
use counterfire_core::constants::{DUD_ODDS, INTRUDER_SCATTER_PX};
use counterfire_core::enums::Side;
use counterfire_core::errors::InvariantViolation;
use counterfire_core::events::BattleEvent;
use counterfire_core::orders::ShotSolution;
use counterfire_core::types::{FieldPoint, FieldSize};
use counterfire_core::weather::WeatherReport;

use crate::{ballistics, pairing};

/// Fire the player's guns in unit order, collecting blast coordinates and
/// expending one shell per shot from each gun's paired truck.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_side: Side,
    map_heading_deg: f64,
    weather: &WeatherReport,
    field: FieldSize,
    blasts: &mut Vec<FieldPoint>,
    events: &mut Vec<BattleEvent>,
) -> Result<(), InvariantViolation> {
    // Collect the salvo first; the ammo bookkeeping needs the world back.
    let mut salvo: Vec<(u32, FieldPoint, ShotSolution)> = Vec::new();
    for (_entity, (id, side, pos, gun)) in world
        .query::<(&UnitId, &Side, &FieldPoint, &Gun)>()
        .iter()
    {
        if *side == player_side && gun.active {
            if let Some(solution) = gun.solution {
                salvo.push((id.0, *pos, solution));
            }
        }
    }
    salvo.sort_by_key(|(id, _, _)| *id);

    for (unit, origin, solution) in salvo {
        let mut impact =
            ballistics::impact_point(origin, &solution, map_heading_deg, weather, field);
        // Uncorrected intruder gunnery scatters around the computed point.
        if player_side == Side::Intruder {
            impact = impact.offset(
                rng.gen_range(-INTRUDER_SCATTER_PX..=INTRUDER_SCATTER_PX),
                rng.gen_range(-INTRUDER_SCATTER_PX..=INTRUDER_SCATTER_PX),
            );
        }
        events.push(BattleEvent::GunFired {
            side: player_side,
            unit,
        });
        if player_side == Side::Intruder && rng.gen_range(1..=DUD_ODDS) == 7 {
            events.push(BattleEvent::ShellDud { side: player_side });
        } else {
            blasts.push(impact);
        }
        pairing::expend_shell(world, player_side, unit)?;
    }
    Ok(())
}
