//! UI pass-through types.
//!
//! These fields belong to the presentation layer (window placement, row
//! colors) but live in the persisted configuration alongside the filter
//! settings, so they are defined here where both core and consumers can
//! reach them without depending on a renderer.

use serde::{Deserialize, Serialize};

/// RGBA color with float components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Default row color for newcomers (green).
    pub const NEWCOMER: Self = Self::new(0.0, 0.8, 0.0, 1.0);

    /// Default row color for returning players (blue).
    pub const RETURNER: Self = Self::new(0.0, 0.5, 1.0, 1.0);

    /// Default section header color (gold).
    pub const HEADER: Self = Self::new(1.0, 0.8, 0.0, 1.0);
}

/// Persisted window placement. The core never interprets these values;
/// they round-trip through the config file for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub locked: bool,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            position: [100.0, 100.0],
            size: [400.0, 300.0],
            locked: false,
        }
    }
}
