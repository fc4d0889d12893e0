//! Computer aim degradation.
//!
//! The defender computer corrects fire tightly from the first salvo; the
//! intruder computer shoots looser and blind-fires its opening turns with a
//! large extra penalty that decays over the first three turns.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::constants::{
    DEFENDER_AI_AIM_ERROR_PX, FIRST_TURN_AIM_PENALTY_PX, INTRUDER_AI_AIM_ERROR_PX,
};
use counterfire_core::enums::Side;
use counterfire_core::types::FieldPoint;

/// Extra intruder inaccuracy for the battle's opening turns (1-based).
pub fn first_turn_penalty(turn: u32) -> i32 {
    match turn {
        1..=3 => FIRST_TURN_AIM_PENALTY_PX[(turn - 1) as usize],
        _ => 0,
    }
}

/// Aim error, ± per axis in pixels, for the computer side on the given turn.
pub fn aim_error_radius(computer_side: Side, turn: u32) -> i32 {
    match computer_side {
        Side::Defender => DEFENDER_AI_AIM_ERROR_PX,
        Side::Intruder => INTRUDER_AI_AIM_ERROR_PX + first_turn_penalty(turn),
    }
}

/// Aim point for a shot at `target`: uniform scatter within the side's
/// error square.
pub fn aim_at(
    target: FieldPoint,
    computer_side: Side,
    turn: u32,
    rng: &mut ChaCha8Rng,
) -> FieldPoint {
    let radius = aim_error_radius(computer_side, turn);
    target.offset(
        rng.gen_range(-radius..=radius),
        rng.gen_range(-radius..=radius),
    )
}
