//! Rejection-sampled placement helpers.
//!
//! Every sampling loop is bounded by `PLACEMENT_RETRY_BUDGET`; generation
//! fails with `GenerationError::PlacementExhausted` rather than spinning on
//! an overcrowded field.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::constants::PLACEMENT_RETRY_BUDGET;
use counterfire_core::errors::GenerationError;
use counterfire_core::types::FieldPoint;

/// Whether a candidate keeps the minimum spacing to every occupied position.
pub fn clears(candidate: FieldPoint, occupied: &[FieldPoint], min_spacing: f64) -> bool {
    occupied
        .iter()
        .all(|p| candidate.distance_to(p) >= min_spacing)
}

/// Sample a point uniformly inside the given x/y bands (inclusive) until it
/// clears the spacing requirement against all occupied positions.
pub fn sample_spaced(
    rng: &mut ChaCha8Rng,
    x_band: (i32, i32),
    y_band: (i32, i32),
    occupied: &[FieldPoint],
    min_spacing: f64,
) -> Result<FieldPoint, GenerationError> {
    for _ in 0..PLACEMENT_RETRY_BUDGET {
        let candidate = FieldPoint::new(
            rng.gen_range(x_band.0..=x_band.1),
            rng.gen_range(y_band.0..=y_band.1),
        );
        if clears(candidate, occupied, min_spacing) {
            return Ok(candidate);
        }
    }
    Err(GenerationError::PlacementExhausted {
        attempts: PLACEMENT_RETRY_BUDGET,
    })
}

/// Sample a point uniformly inside a square box around `center` until it
/// clears the spacing requirement against all occupied positions.
pub fn sample_spaced_box(
    rng: &mut ChaCha8Rng,
    center: FieldPoint,
    half_extent: i32,
    occupied: &[FieldPoint],
    min_spacing: f64,
) -> Result<FieldPoint, GenerationError> {
    for _ in 0..PLACEMENT_RETRY_BUDGET {
        let candidate = center.offset(
            rng.gen_range(-half_extent..=half_extent),
            rng.gen_range(-half_extent..=half_extent),
        );
        if clears(candidate, occupied, min_spacing) {
            return Ok(candidate);
        }
    }
    Err(GenerationError::PlacementExhausted {
        attempts: PLACEMENT_RETRY_BUDGET,
    })
}
