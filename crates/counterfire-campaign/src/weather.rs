//! Per-round weather generation.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use counterfire_core::weather::WeatherReport;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Draw the round's conditions: a temperate random day, with gusts always
/// above the mean wind.
pub fn generate(rng: &mut ChaCha8Rng) -> WeatherReport {
    let wind_speed = round1(rng.gen_range(2.0..30.0));
    let gust_margin = (wind_speed / 2.0).floor().max(1.0);
    let wind_gust = round1(wind_speed + rng.gen_range(1.0..=gust_margin));
    WeatherReport {
        pressure_hpa: round1(rng.gen_range(990.0..1030.0)),
        humidity_pct: round1(rng.gen_range(20.0..100.0)),
        temperature_c: round1(rng.gen_range(-5.0..35.0)),
        wind_speed_ms: wind_speed,
        wind_gust_ms: wind_gust,
        wind_direction_deg: round1(rng.gen_range(0.0..360.0)),
    }
}
