//! Unit generation for one battle.
//!
//! The player always holds the bottom half of the field; the computer holds
//! the top. Defender guns are spread out individually, intruder guns deploy
//! in groups of three around rejection-sampled group centers. Every gun gets
//! a paired ammo truck placed behind it, sharing its sequence number.
//!
//! Placement margins assume the field comfortably exceeds the band offsets
//! (the default 4407x8192 map does); an overcrowded request fails with
//! `PlacementExhausted` once the retry budget runs out.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::blueprint::UnitBlueprint;
use counterfire_core::components::Heading;
use counterfire_core::constants::*;
use counterfire_core::enums::{Deployment, Facing, Side, UnitKind};
use counterfire_core::errors::GenerationError;
use counterfire_core::types::{FieldPoint, FieldSize};

use crate::names::{gun_designation, truck_designation};
use crate::placement::{sample_spaced, sample_spaced_box};

/// Generate both sides' units for a battle.
///
/// `intruder_guns` is generated in full groups of three; the difficulty
/// tables only ever request multiples of three. Returns blueprints in spawn
/// order: defender gun/truck pairs, then intruder pairs group by group.
pub fn generate_units(
    player_side: Side,
    field: FieldSize,
    deployment: Deployment,
    defender_guns: u32,
    intruder_guns: u32,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<UnitBlueprint>, GenerationError> {
    let width = field.width as i32;
    let height = field.height as i32;
    let half = height / 2;

    // Vertical bands per side: the player's units sit in the bottom half.
    let (defender_band, intruder_band) = match player_side {
        Side::Defender => ((half + 1_000, height - 250), (350, half - 1_000)),
        Side::Intruder => ((250, half - 1_000), (half + 1_000, height - 350)),
    };
    let (defender_truck_dy, intruder_truck_dy) = match player_side {
        Side::Defender => ((150, 200), (-150, -50)),
        Side::Intruder => ((-200, -150), (50, 150)),
    };
    let (defender_facing, intruder_facing) = match player_side {
        Side::Defender => (Facing::North, Facing::South),
        Side::Intruder => (Facing::South, Facing::North),
    };

    let mut units = Vec::with_capacity(2 * (defender_guns + intruder_guns) as usize);

    // Defender guns: individually spaced against every prior defender
    // position, trucks included.
    let mut defender_positions: Vec<FieldPoint> = Vec::new();
    for number in 1..=defender_guns {
        let gun_pos = sample_spaced(
            rng,
            (250, width - 250),
            defender_band,
            &defender_positions,
            DEFENDER_MIN_SPACING_PX,
        )?;
        defender_positions.push(gun_pos);
        units.push(gun_blueprint(number, Side::Defender, gun_pos, defender_facing));

        let truck_pos = gun_pos.offset(
            rng.gen_range(-200..=200),
            rng.gen_range(defender_truck_dy.0..=defender_truck_dy.1),
        );
        defender_positions.push(truck_pos);
        units.push(truck_blueprint(
            number,
            Side::Defender,
            truck_pos,
            defender_facing,
            gun_pos,
            rng,
        ));
    }

    // Intruder guns: group centers spaced apart, members per doctrine.
    let mut group_centers: Vec<FieldPoint> = Vec::new();
    let mut scattered_positions: Vec<FieldPoint> = Vec::new();
    let mut number = 0;
    for _ in 0..intruder_guns / INTRUDER_GROUP_SIZE {
        let center = sample_spaced(
            rng,
            (350, width - 350),
            intruder_band,
            &group_centers,
            GROUP_MIN_SPACING_PX,
        )?;
        group_centers.push(center);

        match deployment {
            Deployment::Inline => {
                let line_slope = rng.gen_range(-50..=50);
                let line_length = rng.gen_range(150..=200);
                for slot in [-1, 0, 1] {
                    let gun_pos = center.offset(line_length * slot, line_slope * slot);
                    number += 1;
                    units.push(gun_blueprint(number, Side::Intruder, gun_pos, intruder_facing));

                    let truck_pos = gun_pos.offset(
                        rng.gen_range(-100..=100),
                        rng.gen_range(intruder_truck_dy.0..=intruder_truck_dy.1),
                    );
                    units.push(truck_blueprint(
                        number,
                        Side::Intruder,
                        truck_pos,
                        intruder_facing,
                        gun_pos,
                        rng,
                    ));
                }
            }
            Deployment::Random => {
                for _ in 0..INTRUDER_GROUP_SIZE {
                    let gun_pos = sample_spaced_box(
                        rng,
                        center,
                        300,
                        &scattered_positions,
                        GROUP_MEMBER_MIN_SPACING_PX,
                    )?;
                    number += 1;
                    scattered_positions.push(gun_pos);
                    units.push(gun_blueprint(number, Side::Intruder, gun_pos, intruder_facing));

                    let truck_pos = gun_pos.offset(
                        rng.gen_range(-150..=150),
                        rng.gen_range(intruder_truck_dy.0..=intruder_truck_dy.1),
                    );
                    scattered_positions.push(truck_pos);
                    units.push(truck_blueprint(
                        number,
                        Side::Intruder,
                        truck_pos,
                        intruder_facing,
                        gun_pos,
                        rng,
                    ));
                }
            }
        }
    }

    Ok(units)
}

fn gun_blueprint(id: u32, side: Side, position: FieldPoint, facing: Facing) -> UnitBlueprint {
    UnitBlueprint {
        id,
        kind: UnitKind::Artillery,
        side,
        position,
        heading: Heading {
            facing,
            rotation: 0.0,
        },
        designation: gun_designation(side).to_string(),
    }
}

fn truck_blueprint(
    id: u32,
    side: Side,
    position: FieldPoint,
    facing: Facing,
    gun_pos: FieldPoint,
    rng: &mut ChaCha8Rng,
) -> UnitBlueprint {
    // Trucks are drawn angled toward their gun.
    let rotation = match side {
        Side::Defender => f64::from(gun_pos.x - position.x) / -3.0,
        Side::Intruder => f64::from(gun_pos.x - position.x) / 2.0,
    };
    UnitBlueprint {
        id,
        kind: UnitKind::Ammo,
        side,
        position,
        heading: Heading { facing, rotation },
        designation: truck_designation(side, rng).to_string(),
    }
}
