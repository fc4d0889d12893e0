//! Equipment designations used in unit reports.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::enums::Side;

const DEFENDER_TRUCKS: [&str; 3] = ["TATRA", "MAN", "SISU"];
const INTRUDER_TRUCKS: [&str; 4] = ["KAMAZ", "URAL", "GAZ", "ZIL"];

/// Artillery designation for a side.
pub fn gun_designation(side: Side) -> &'static str {
    match side {
        Side::Defender => "M777",
        Side::Intruder => "2A65",
    }
}

/// A truck designation drawn from the side's motor pool.
pub fn truck_designation(side: Side, rng: &mut ChaCha8Rng) -> &'static str {
    let pool: &[&str] = match side {
        Side::Defender => &DEFENDER_TRUCKS,
        Side::Intruder => &INTRUDER_TRUCKS,
    };
    pool[rng.gen_range(0..pool.len())]
}
