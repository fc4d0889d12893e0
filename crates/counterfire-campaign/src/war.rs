//! The war: a sequence of battles over shared resource pools and territory.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use counterfire_core::config::WarConfig;
use counterfire_core::constants::{INITIAL_TERRITORY_OCCUPIED, TERRITORY_SHIFT_PER_BATTLE};
use counterfire_core::enums::{BattleOutcome, Side, WarVerdict};
use counterfire_core::errors::GenerationError;
use counterfire_core::state::WarView;
use counterfire_procgen::generate_units;
use counterfire_sim::{BattleEngine, RoundSetup};

use crate::resources::SidePools;
use crate::verdict;
use crate::weather;

/// Final accounting when the war ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarSummary {
    pub verdict: WarVerdict,
    /// The side whose front collapsed under accumulated damage, if any.
    pub front_collapse: Option<Side>,
    pub territory_occupied: i32,
    pub view: WarView,
}

/// A whole war: configuration, pools, statistics, and the RNG every battle
/// setup draws from. Same config and seed replay the same war.
pub struct War {
    config: WarConfig,
    pools: SidePools,
    rng: ChaCha8Rng,
    battle_index: u32,
    battles_won: u32,
    battles_lost: u32,
    battles_tied: u32,
    territory_occupied: i32,
}

impl War {
    pub fn new(config: WarConfig, seed: u64) -> Self {
        Self {
            pools: SidePools::initial(config.difficulty),
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            battle_index: 0,
            battles_won: 0,
            battles_lost: 0,
            battles_tied: 0,
            territory_occupied: INITIAL_TERRITORY_OCCUPIED,
        }
    }

    pub fn config(&self) -> &WarConfig {
        &self.config
    }

    /// Whether a pool has run dry and the war is over.
    pub fn should_end(&self) -> bool {
        self.pools.exhausted()
    }

    /// Reserve resources, roll the map heading and weather, generate the
    /// battlefield, and hand back a ready engine.
    pub fn begin_battle(&mut self) -> Result<BattleEngine, GenerationError> {
        self.battle_index += 1;
        let (defender_guns, intruder_guns) = self.pools.round_strengths(self.config.difficulty);
        self.pools
            .reserve(self.config.difficulty, defender_guns, intruder_guns);

        let map_heading_deg = f64::from(self.rng.gen_range(0..=360));
        let weather = weather::generate(&mut self.rng);
        let units = generate_units(
            self.config.player_side,
            self.config.field,
            self.config.deployment,
            defender_guns,
            intruder_guns,
            &mut self.rng,
        )?;
        tracing::debug!(
            battle = self.battle_index,
            defender_guns,
            intruder_guns,
            "battle set up"
        );

        Ok(BattleEngine::new(RoundSetup {
            seed: self.rng.gen(),
            player_side: self.config.player_side,
            field: self.config.field,
            map_heading_deg,
            weather,
            units,
        }))
    }

    /// Fold a decided battle back into the war: tallies, territory, and
    /// the remainder of both sides' resources.
    pub fn conclude_battle(&mut self, engine: &BattleEngine) -> WarView {
        match engine.outcome() {
            BattleOutcome::Ongoing => {
                tracing::warn!("conclude_battle called on an undecided battle");
                return self.view();
            }
            BattleOutcome::Tied => self.battles_tied += 1,
            BattleOutcome::PlayerWon => {
                self.battles_won += 1;
                self.shift_territory(self.config.player_side);
            }
            BattleOutcome::PlayerLost => {
                self.battles_lost += 1;
                self.shift_territory(self.config.player_side.opponent());
            }
        }
        self.pools.reclaim(&engine.remainder());
        self.view()
    }

    /// Close out the war: apply any front collapse, derive the verdict.
    pub fn conclude_war(&mut self) -> WarSummary {
        let collapse =
            verdict::front_collapse(self.pools.defender.damage, self.pools.intruder.damage);
        self.territory_occupied += verdict::collapse_shift(collapse);
        WarSummary {
            verdict: verdict::verdict(self.territory_occupied),
            front_collapse: collapse,
            territory_occupied: self.territory_occupied,
            view: self.view(),
        }
    }

    pub fn view(&self) -> WarView {
        WarView {
            battle_index: self.battle_index,
            battles_won: self.battles_won,
            battles_lost: self.battles_lost,
            battles_tied: self.battles_tied,
            territory_occupied: self.territory_occupied,
            defender_pool: self.pools.defender.view(),
            intruder_pool: self.pools.intruder.view(),
        }
    }

    /// A winning defender reclaims territory; a winning intruder takes more.
    fn shift_territory(&mut self, winner: Side) {
        match winner {
            Side::Defender => self.territory_occupied -= TERRITORY_SHIFT_PER_BATTLE,
            Side::Intruder => self.territory_occupied += TERRITORY_SHIFT_PER_BATTLE,
        }
    }

    /// Pool access for test scenarios.
    #[cfg(test)]
    pub fn pools_mut(&mut self) -> &mut SidePools {
        &mut self.pools
    }

    #[cfg(test)]
    pub fn set_territory(&mut self, territory: i32) {
        self.territory_occupied = territory;
    }
}
