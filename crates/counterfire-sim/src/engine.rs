//! The battle engine — one battle from setup through resolution.
//!
//! `BattleEngine` owns the hecs world and a seeded RNG, consumes validated
//! player orders, runs the turn systems in fixed order, and produces a
//! `BattleSnapshot` with the turn's events after every call. Same seed and
//! same orders give the same battle.

use std::mem;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::blueprint::UnitBlueprint;
use counterfire_core::components::{AmmoTruck, Designation, Gun, Heading, UnitId};
use counterfire_core::constants::GUN_KNOCKOUT_DAMAGE;
use counterfire_core::enums::{BattleOutcome, Side, UnitKind};
use counterfire_core::errors::{EngineError, ValidationError};
use counterfire_core::events::BattleEvent;
use counterfire_core::orders::FireOrder;
use counterfire_core::state::{BattleSnapshot, RemainderLedger, UnitView};
use counterfire_core::types::{FieldPoint, FieldSize};
use counterfire_core::weather::WeatherReport;

use counterfire_ai::targeting::TargetCandidate;

use crate::systems;
use crate::world_setup;

/// Everything needed to start one battle.
#[derive(Debug, Clone)]
pub struct RoundSetup {
    /// RNG seed for determinism. Same seed = same battle.
    pub seed: u64,
    pub player_side: Side,
    pub field: FieldSize,
    pub map_heading_deg: f64,
    pub weather: WeatherReport,
    pub units: Vec<UnitBlueprint>,
}

/// The battle engine. Owns the world and all per-battle state.
pub struct BattleEngine {
    world: World,
    rng: ChaCha8Rng,
    player_side: Side,
    field: FieldSize,
    map_heading_deg: f64,
    weather: WeatherReport,
    turn: u32,
    /// Computer target list, persisted across turns.
    targets: Vec<TargetCandidate>,
    events: Vec<BattleEvent>,
    outcome: BattleOutcome,
}

impl BattleEngine {
    pub fn new(setup: RoundSetup) -> Self {
        let mut world = World::new();
        world_setup::spawn_units(&mut world, &setup.units);
        Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(setup.seed),
            player_side: setup.player_side,
            field: setup.field,
            map_heading_deg: setup.map_heading_deg,
            weather: setup.weather,
            turn: 0,
            targets: Vec::new(),
            events: Vec::new(),
            outcome: BattleOutcome::Ongoing,
        }
    }

    /// Resolve one turn of simultaneous fire.
    ///
    /// Orders update the addressed guns' stored solutions; every active
    /// player gun then fires its current solution. Validation happens in
    /// full before any state mutates: on error the turn is not advanced.
    pub fn resolve_turn(&mut self, orders: &[FireOrder]) -> Result<BattleSnapshot, EngineError> {
        if self.outcome.is_terminal() {
            return Ok(self.snapshot());
        }

        self.validate_orders(orders)?;
        self.apply_orders(orders);
        self.turn += 1;
        tracing::debug!(turn = self.turn, "resolving turn");

        let mut blasts: Vec<FieldPoint> = Vec::new();

        systems::misfire::run(&mut self.world, &mut self.rng, &mut self.events);
        systems::player_fire::run(
            &mut self.world,
            &mut self.rng,
            self.player_side,
            self.map_heading_deg,
            &self.weather,
            self.field,
            &mut blasts,
            &mut self.events,
        )?;
        systems::computer_fire::run(
            &mut self.world,
            &mut self.rng,
            self.player_side,
            self.turn,
            &mut self.targets,
            &mut blasts,
            &mut self.events,
        )?;
        systems::blast::run(&mut self.world, &blasts, &mut self.events);
        systems::resolution::sweep_depleted(&mut self.world, &mut self.events);

        self.outcome = systems::resolution::decide(&self.world, self.player_side);
        if self.outcome.is_terminal() {
            tracing::debug!(outcome = ?self.outcome, "battle decided");
            self.events.push(BattleEvent::BattleOver {
                outcome: self.outcome,
            });
        }
        systems::resolution::check_parity(&self.world)?;

        let events = mem::take(&mut self.events);
        Ok(self.build_snapshot(events))
    }

    /// Withdraw from the battle: all player units stand down and the battle
    /// resolves immediately. An explicit transition, not an interrupt.
    pub fn withdraw(&mut self) -> BattleSnapshot {
        for (_entity, (side, gun)) in self.world.query_mut::<(&Side, &mut Gun)>() {
            if *side == self.player_side {
                gun.active = false;
            }
        }
        for (_entity, (side, truck)) in self.world.query_mut::<(&Side, &mut AmmoTruck)>() {
            if *side == self.player_side {
                truck.active = false;
            }
        }
        self.events.push(BattleEvent::PlayerWithdrew {
            side: self.player_side,
        });
        self.outcome = systems::resolution::decide(&self.world, self.player_side);
        self.events.push(BattleEvent::BattleOver {
            outcome: self.outcome,
        });
        let events = mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Current state without resolving anything; carries no events.
    pub fn snapshot(&self) -> BattleSnapshot {
        self.build_snapshot(Vec::new())
    }

    /// Post-battle facts for the campaign's remainder reconciliation.
    pub fn remainder(&self) -> RemainderLedger {
        let mut ledger = RemainderLedger::default();
        for (_entity, (side, gun)) in self.world.query::<(&Side, &Gun)>().iter() {
            let entry = ledger.side_mut(*side);
            if gun.damage < GUN_KNOCKOUT_DAMAGE {
                entry.low_damage_guns += 1;
            }
            if gun.active {
                entry.active_units += 1;
            }
            entry.damage_taken += gun.damage;
        }
        for (_entity, (side, truck)) in self.world.query::<(&Side, &AmmoTruck)>().iter() {
            let entry = ledger.side_mut(*side);
            entry.truck_ammo += truck.ammo;
            if truck.active {
                entry.active_units += 1;
                entry.active_truck_ammo += truck.ammo;
            }
        }
        ledger
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn player_side(&self) -> Side {
        self.player_side
    }

    pub fn weather(&self) -> &WeatherReport {
        &self.weather
    }

    /// Read-only access to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for test scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn validate_orders(&self, orders: &[FireOrder]) -> Result<(), ValidationError> {
        for order in orders {
            order.solution.validate(order.unit)?;
            if !self.is_active_player_gun(order.unit) {
                return Err(ValidationError::NoSuchGun { unit: order.unit });
            }
        }
        // Every active player gun must hold a solution once orders apply.
        for (_entity, (id, side, gun)) in self.world.query::<(&UnitId, &Side, &Gun)>().iter() {
            if *side == self.player_side
                && gun.active
                && gun.solution.is_none()
                && !orders.iter().any(|o| o.unit == id.0)
            {
                return Err(ValidationError::MissingSolution { unit: id.0 });
            }
        }
        Ok(())
    }

    fn is_active_player_gun(&self, unit: u32) -> bool {
        self.world
            .query::<(&UnitId, &Side, &Gun)>()
            .iter()
            .any(|(_e, (id, side, gun))| {
                id.0 == unit && *side == self.player_side && gun.active
            })
    }

    fn apply_orders(&mut self, orders: &[FireOrder]) {
        for order in orders {
            for (_entity, (id, side, gun)) in self.world.query_mut::<(&UnitId, &Side, &mut Gun)>()
            {
                if id.0 == order.unit && *side == self.player_side {
                    gun.solution = Some(order.solution);
                }
            }
        }
    }

    fn build_snapshot(&self, events: Vec<BattleEvent>) -> BattleSnapshot {
        let mut units: Vec<UnitView> = Vec::new();
        for (_entity, (id, side, pos, heading, designation, gun)) in self
            .world
            .query::<(&UnitId, &Side, &FieldPoint, &Heading, &Designation, &Gun)>()
            .iter()
        {
            units.push(UnitView {
                id: id.0,
                kind: UnitKind::Artillery,
                side: *side,
                designation: designation.0.clone(),
                position: *pos,
                heading: *heading,
                active: gun.active,
                damage: Some(gun.damage),
                ammo: None,
            });
        }
        for (_entity, (id, side, pos, heading, designation, truck)) in self
            .world
            .query::<(&UnitId, &Side, &FieldPoint, &Heading, &Designation, &AmmoTruck)>()
            .iter()
        {
            units.push(UnitView {
                id: id.0,
                kind: UnitKind::Ammo,
                side: *side,
                designation: designation.0.clone(),
                position: *pos,
                heading: *heading,
                active: truck.active,
                damage: None,
                ammo: Some(truck.ammo),
            });
        }
        // Defender pairs first, gun before truck.
        units.sort_by_key(|u| (u.side == Side::Intruder, u.id, u.kind == UnitKind::Ammo));

        BattleSnapshot {
            turn: self.turn,
            player_side: self.player_side,
            outcome: self.outcome,
            weather: self.weather,
            map_heading_deg: self.map_heading_deg,
            units,
            events,
        }
    }
}
