//! Shot trajectory and blast effect formulas.
//!
//! Pure functions over plain data; the engine supplies every input,
//! including the per-round weather and map heading.

use glam::DVec2;

use counterfire_core::constants::{BLAST_RADIUS_PX, GRAVITY, REFERENCE_RANGE_M};
use counterfire_core::orders::ShotSolution;
use counterfire_core::types::{FieldPoint, FieldSize};
use counterfire_core::weather::WeatherReport;

/// Muzzle velocity for a charge (m/s), anchored so that charge 1 at 45°
/// elevation flies the 5 km reference range. Velocity scales with √charge.
pub fn muzzle_velocity(charge: u8) -> f64 {
    let reference = (REFERENCE_RANGE_M * GRAVITY / (2.0 * 45f64.to_radians()).sin()).sqrt();
    reference * f64::from(charge).sqrt()
}

/// Where a shell lands.
///
/// Azimuth and wind direction are rotated into the map frame, wind speed is
/// averaged with its gust, and the no-wind range from the projectile range
/// equation is stretched or shortened by the wind component along the line
/// of fire. The polar result converts to pixels with the field scale; y is
/// inverted because image coordinates grow downward.
pub fn impact_point(
    origin: FieldPoint,
    solution: &ShotSolution,
    map_heading_deg: f64,
    weather: &WeatherReport,
    field: FieldSize,
) -> FieldPoint {
    let azimuth_deg = (map_heading_deg + solution.azimuth).rem_euclid(360.0);
    let wind_direction_deg = (map_heading_deg + weather.wind_direction_deg).rem_euclid(360.0);
    let wind_speed = weather.wind_speed_ms + (weather.wind_gust_ms - weather.wind_speed_ms) / 2.0;

    let azimuth = azimuth_deg.to_radians();
    let wind_direction = wind_direction_deg.to_radians();
    let elevation = solution.elevation.to_radians();

    let velocity = muzzle_velocity(solution.charge);
    let range = velocity * velocity / GRAVITY * (2.0 * elevation).sin();

    let wind_along = wind_speed * (wind_direction - azimuth).cos();
    let adjusted_range = range + wind_along * range / velocity;

    let scale = field.meters_per_pixel();
    let delta = DVec2::new(azimuth.sin(), azimuth.cos()) * (adjusted_range / scale);

    FieldPoint::new(
        origin.x + delta.x.round() as i32,
        origin.y - delta.y.round() as i32,
    )
}

/// Damage a blast deals to a gun at the given distance (px).
/// 100 at ground zero, tapering to 0 at the blast radius.
pub fn blast_damage(distance: f64) -> i32 {
    if distance <= BLAST_RADIUS_PX {
        (BLAST_RADIUS_PX - distance).round() as i32
    } else {
        0
    }
}

/// Shells a blast destroys in a truck's stock at the given distance (px).
/// 10 at ground zero, tapering to 0 at the blast radius.
pub fn ammo_loss(distance: f64) -> i32 {
    if distance <= BLAST_RADIUS_PX {
        (10.0 - distance / 10.0).round() as i32
    } else {
        0
    }
}
