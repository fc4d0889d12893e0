#[cfg(test)]
mod tests {
    use crate::components::{AmmoTruck, Gun};
    use crate::config::{round_caps, war_totals, WarConfig};
    use crate::enums::*;
    use crate::events::BattleEvent;
    use crate::orders::{FireOrder, ShotSolution};
    use crate::state::{BattleSnapshot, RemainderLedger};
    use crate::types::{FieldPoint, FieldSize};

    /// Verify the flat enums round-trip through serde_json.
    #[test]
    fn test_enum_serde() {
        for side in [Side::Defender, Side::Intruder] {
            let json = serde_json::to_string(&side).unwrap();
            let back: Side = serde_json::from_str(&json).unwrap();
            assert_eq!(side, back);
        }
        for kind in [UnitKind::Artillery, UnitKind::Ammo] {
            let json = serde_json::to_string(&kind).unwrap();
            let back: UnitKind = serde_json::from_str(&json).unwrap();
            assert_eq!(kind, back);
        }
        for outcome in [
            BattleOutcome::Ongoing,
            BattleOutcome::PlayerWon,
            BattleOutcome::PlayerLost,
            BattleOutcome::Tied,
        ] {
            let json = serde_json::to_string(&outcome).unwrap();
            let back: BattleOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(outcome, back);
        }
    }

    #[test]
    fn test_verdict_serde() {
        let verdicts = vec![
            WarVerdict::IntruderExpelled,
            WarVerdict::IntruderPushedBack { percent: 6 },
            WarVerdict::Stalemate,
            WarVerdict::IntruderAdvanced { percent: 4 },
        ];
        for v in verdicts {
            let json = serde_json::to_string(&v).unwrap();
            let back: WarVerdict = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify BattleEvent round-trips through serde (tagged union).
    #[test]
    fn test_battle_event_serde() {
        let events = vec![
            BattleEvent::GunFired {
                side: Side::Defender,
                unit: 1,
            },
            BattleEvent::ShellDud {
                side: Side::Intruder,
            },
            BattleEvent::IncomingBlasts { count: 3 },
            BattleEvent::GunDamaged {
                side: Side::Intruder,
                unit: 2,
                damage: 73,
            },
            BattleEvent::GunSilenced {
                side: Side::Defender,
                unit: 1,
            },
            BattleEvent::BattleOver {
                outcome: BattleOutcome::PlayerWon,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: BattleEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_fire_order_serde() {
        let order = FireOrder {
            unit: 2,
            solution: ShotSolution::new(-45.5, 60.0, 3),
        };
        let json = serde_json::to_string(&order).unwrap();
        let back: FireOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }

    /// Verify FieldPoint geometry.
    #[test]
    fn test_field_point_distance() {
        let a = FieldPoint::new(0, 0);
        let b = FieldPoint::new(300, 400);
        assert!((a.distance_to(&b) - 500.0).abs() < 1e-10);
        assert_eq!(a.offset(300, 400), b);
    }

    /// The default 8192 px map covers 25 km: 3.052 m per pixel after
    /// three-decimal rounding.
    #[test]
    fn test_field_scale() {
        let field = FieldSize::default();
        assert_eq!(field.height, 8192);
        assert!((field.meters_per_pixel() - 3.052).abs() < 1e-12);

        // A 25000 px map would be exactly 1 m per pixel.
        let unit_field = FieldSize::new(10_000, 25_000);
        assert!((unit_field.meters_per_pixel() - 1.0).abs() < 1e-12);
    }

    /// Shot parameter validation accepts the full legal range and rejects
    /// everything outside it.
    #[test]
    fn test_solution_validation() {
        assert!(ShotSolution::new(0.0, 45.0, 1).validate(1).is_ok());
        assert!(ShotSolution::new(-360.0, 15.0, 1).validate(1).is_ok());
        assert!(ShotSolution::new(360.0, 75.0, 5).validate(1).is_ok());

        assert!(ShotSolution::new(360.1, 45.0, 1).validate(1).is_err());
        assert!(ShotSolution::new(-361.0, 45.0, 1).validate(1).is_err());
        assert!(ShotSolution::new(0.0, 14.9, 1).validate(1).is_err());
        assert!(ShotSolution::new(0.0, 75.1, 1).validate(1).is_err());
        assert!(ShotSolution::new(0.0, 45.0, 0).validate(1).is_err());
        assert!(ShotSolution::new(0.0, 45.0, 6).validate(1).is_err());
        assert!(ShotSolution::new(f64::NAN, 45.0, 1).validate(1).is_err());
    }

    /// The difficulty tables hold the published per-side amounts.
    #[test]
    fn test_difficulty_tables() {
        let easy = war_totals(Difficulty::Easy);
        assert_eq!(easy.defender.units, 10);
        assert_eq!(easy.intruder.units, 30);
        assert_eq!(easy.defender.ammo, 100);
        assert_eq!(easy.intruder.damage, 1_500);
        assert_eq!(easy.side(Side::Intruder), easy.intruder);

        let hard = war_totals(Difficulty::Hard);
        assert_eq!(hard.defender.damage, 1_500);
        assert_eq!(hard.intruder.ammo, 900);

        let caps = round_caps(Difficulty::Easy);
        assert_eq!(caps.defender.units, 1);
        assert_eq!(caps.intruder.units, 3);
        assert_eq!(caps.defender.ammo, 10);
        assert_eq!(caps.intruder.ammo, 30);

        let medium_caps = round_caps(Difficulty::Medium);
        assert_eq!(medium_caps.intruder.units, 6);
    }

    #[test]
    fn test_fresh_components() {
        let gun = Gun::fresh();
        assert_eq!(gun.damage, 0);
        assert!(gun.active);
        assert!(gun.solution.is_none());

        let truck = AmmoTruck::fresh();
        assert_eq!(truck.ammo, 10);
        assert!(truck.active);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Defender.opponent(), Side::Intruder);
        assert_eq!(Side::Intruder.opponent(), Side::Defender);
    }

    /// Verify the snapshot and ledger types serialize.
    #[test]
    fn test_views_serde() {
        let snapshot = BattleSnapshot {
            turn: 0,
            player_side: Side::Defender,
            outcome: BattleOutcome::Ongoing,
            weather: crate::weather::WeatherReport::calm(),
            map_heading_deg: 0.0,
            units: vec![],
            events: vec![],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BattleSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);

        let ledger = RemainderLedger::default();
        let json = serde_json::to_string(&ledger).unwrap();
        let back: RemainderLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, back);
    }

    #[test]
    fn test_default_config() {
        let config = WarConfig::default();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.player_side, Side::Defender);
        assert_eq!(config.field.width, 4_407);
    }
}
