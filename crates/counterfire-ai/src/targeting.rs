//! Computer target selection.

use rand::seq::index;
use rand_chacha::ChaCha8Rng;

use counterfire_core::enums::{Side, UnitKind};
use counterfire_core::types::FieldPoint;

/// An enemy unit as offered to the computer's sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCandidate {
    pub unit: u32,
    pub kind: UnitKind,
    pub position: FieldPoint,
}

/// What the computer knows when picking targets.
#[derive(Debug)]
pub struct TargetingContext<'a> {
    /// Side the computer commands.
    pub computer_side: Side,
    /// The computer's active gun count.
    pub active_guns: usize,
    /// Active enemy units before the visibility filter.
    pub candidates: &'a [TargetCandidate],
}

/// Apply the computer's sensor coverage: the intruder fields no drones and
/// never sees ammo trucks, the defender sees everything.
pub fn visible_candidates(ctx: &TargetingContext<'_>) -> Vec<TargetCandidate> {
    ctx.candidates
        .iter()
        .filter(|c| ctx.computer_side == Side::Defender || c.kind == UnitKind::Artillery)
        .copied()
        .collect()
}

/// Select `min(active guns, visible enemies)` distinct targets uniformly at
/// random. Empty when either count is zero.
pub fn select_targets(ctx: &TargetingContext<'_>, rng: &mut ChaCha8Rng) -> Vec<TargetCandidate> {
    let visible = visible_candidates(ctx);
    if ctx.active_guns == 0 || visible.is_empty() {
        return Vec::new();
    }
    let count = ctx.active_guns.min(visible.len());
    index::sample(rng, visible.len(), count)
        .into_iter()
        .map(|i| visible[i])
        .collect()
}
