//! Per-battle weather snapshot consumed by ballistics.

use serde::{Deserialize, Serialize};

/// Immutable weather conditions drawn once at round setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub pressure_hpa: f64,
    pub humidity_pct: f64,
    pub temperature_c: f64,
    pub wind_speed_ms: f64,
    pub wind_gust_ms: f64,
    pub wind_direction_deg: f64,
}

impl WeatherReport {
    /// Still air at standard pressure; the reference condition for tests.
    pub fn calm() -> Self {
        Self {
            pressure_hpa: 1013.2,
            humidity_pct: 50.0,
            temperature_c: 15.0,
            wind_speed_ms: 0.0,
            wind_gust_ms: 0.0,
            wind_direction_deg: 0.0,
        }
    }
}
