//! Tests for target selection and aim degradation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::enums::{Side, UnitKind};
use counterfire_core::types::FieldPoint;

use crate::accuracy::{aim_at, aim_error_radius, first_turn_penalty};
use crate::targeting::{select_targets, visible_candidates, TargetCandidate, TargetingContext};

fn candidates() -> Vec<TargetCandidate> {
    vec![
        TargetCandidate {
            unit: 1,
            kind: UnitKind::Artillery,
            position: FieldPoint::new(1_000, 6_000),
        },
        TargetCandidate {
            unit: 1,
            kind: UnitKind::Ammo,
            position: FieldPoint::new(1_050, 6_180),
        },
        TargetCandidate {
            unit: 2,
            kind: UnitKind::Artillery,
            position: FieldPoint::new(2_000, 6_500),
        },
        TargetCandidate {
            unit: 2,
            kind: UnitKind::Ammo,
            position: FieldPoint::new(1_900, 6_700),
        },
    ]
}

// ---- Visibility ----

#[test]
fn test_intruder_computer_sees_only_artillery() {
    let list = candidates();
    let ctx = TargetingContext {
        computer_side: Side::Intruder,
        active_guns: 3,
        candidates: &list,
    };
    let visible = visible_candidates(&ctx);
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|c| c.kind == UnitKind::Artillery));
}

#[test]
fn test_defender_computer_sees_everything() {
    let list = candidates();
    let ctx = TargetingContext {
        computer_side: Side::Defender,
        active_guns: 3,
        candidates: &list,
    };
    assert_eq!(visible_candidates(&ctx).len(), 4);
}

// ---- Selection ----

#[test]
fn test_target_count_is_min_of_guns_and_visible() {
    let list = candidates();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    // More guns than visible targets: every visible target gets picked.
    let ctx = TargetingContext {
        computer_side: Side::Intruder,
        active_guns: 5,
        candidates: &list,
    };
    assert_eq!(select_targets(&ctx, &mut rng).len(), 2);

    // Fewer guns than visible targets.
    let ctx = TargetingContext {
        computer_side: Side::Defender,
        active_guns: 1,
        candidates: &list,
    };
    assert_eq!(select_targets(&ctx, &mut rng).len(), 1);
}

#[test]
fn test_targets_are_distinct() {
    let list = candidates();
    let ctx = TargetingContext {
        computer_side: Side::Defender,
        active_guns: 4,
        candidates: &list,
    };
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let targets = select_targets(&ctx, &mut rng);
        assert_eq!(targets.len(), 4);
        for (i, a) in targets.iter().enumerate() {
            for b in targets.iter().skip(i + 1) {
                assert!(a != b, "duplicate target selected (seed {seed})");
            }
        }
    }
}

#[test]
fn test_no_guns_or_no_candidates_selects_nothing() {
    let list = candidates();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let ctx = TargetingContext {
        computer_side: Side::Defender,
        active_guns: 0,
        candidates: &list,
    };
    assert!(select_targets(&ctx, &mut rng).is_empty());

    let ctx = TargetingContext {
        computer_side: Side::Defender,
        active_guns: 2,
        candidates: &[],
    };
    assert!(select_targets(&ctx, &mut rng).is_empty());
}

// ---- Accuracy ----

#[test]
fn test_first_turn_penalty_table() {
    assert_eq!(first_turn_penalty(1), 600);
    assert_eq!(first_turn_penalty(2), 400);
    assert_eq!(first_turn_penalty(3), 200);
    assert_eq!(first_turn_penalty(4), 0);
    assert_eq!(first_turn_penalty(100), 0);
}

#[test]
fn test_aim_error_radii() {
    assert_eq!(aim_error_radius(Side::Intruder, 1), 900);
    assert_eq!(aim_error_radius(Side::Intruder, 2), 700);
    assert_eq!(aim_error_radius(Side::Intruder, 3), 500);
    assert_eq!(aim_error_radius(Side::Intruder, 4), 300);
    // The defender computer never degrades.
    for turn in 1..6 {
        assert_eq!(aim_error_radius(Side::Defender, turn), 150);
    }
}

#[test]
fn test_aim_stays_within_error_square() {
    let target = FieldPoint::new(2_000, 7_000);
    let mut rng = ChaCha8Rng::seed_from_u64(12);
    for turn in 1..=5 {
        for side in [Side::Defender, Side::Intruder] {
            let radius = aim_error_radius(side, turn);
            for _ in 0..200 {
                let aim = aim_at(target, side, turn, &mut rng);
                assert!((aim.x - target.x).abs() <= radius);
                assert!((aim.y - target.y).abs() <= radius);
            }
        }
    }
}
