//! Fundamental geometric types for the battlefield.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, REFERENCE_MAP_HEIGHT_M};

/// A point on the battlefield in field-pixel coordinates.
/// x grows eastward, y grows downward (image convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPoint {
    pub x: i32,
    pub y: i32,
}

impl FieldPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point in pixels.
    pub fn distance_to(&self, other: &FieldPoint) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// This point shifted by a pixel delta.
    pub fn offset(&self, dx: i32, dy: i32) -> FieldPoint {
        FieldPoint::new(self.x + dx, self.y + dy)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(f64::from(self.x), f64::from(self.y))
    }
}

/// Battlefield dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSize {
    pub width: u32,
    pub height: u32,
}

impl FieldSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map scale in meters per pixel, assuming the field image covers the
    /// reference 25 km height. Rounded to three decimals.
    pub fn meters_per_pixel(&self) -> f64 {
        (REFERENCE_MAP_HEIGHT_M / f64::from(self.height) * 1000.0).round() / 1000.0
    }
}

impl Default for FieldSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}
