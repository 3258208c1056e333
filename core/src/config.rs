//! Persisted overlay configuration.
//!
//! One flat struct covering both the filter settings the pipeline reads
//! every refresh and the UI fields (window placement, colors) that pass
//! through untouched for the presentation layer. Stored as TOML via
//! confy; unknown or missing fields load as defaults so older files keep
//! working, and numeric fields are clamped to their UI slider ranges
//! after load.

use serde::{Deserialize, Serialize};
use sproutwatch_types::{Color, WindowGeometry};
use thiserror::Error;

const APP_NAME: &str = "sproutwatch";
const CONFIG_NAME: &str = "config";

pub const NEARBY_RADIUS_RANGE: std::ops::RangeInclusive<f32> = 5.0..=100.0;
pub const MAX_NEARBY_RANGE: std::ops::RangeInclusive<usize> = 5..=50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub version: u32,

    // ─── Filter settings (read by the pipeline each refresh) ────────────────
    pub show_party: bool,
    pub show_nearby: bool,
    pub show_newcomers: bool,
    pub show_returners: bool,
    pub show_job_icons: bool,
    pub auto_hide_in_combat: bool,
    /// Nearby scan radius in yalms. Clamped to [`NEARBY_RADIUS_RANGE`].
    pub nearby_radius: f32,
    /// Row cap for the nearby view. Clamped to [`MAX_NEARBY_RANGE`].
    pub max_nearby: usize,

    // ─── UI pass-through (never interpreted by the pipeline) ────────────────
    pub show_welcome_message: bool,
    pub config_window_movable: bool,
    pub main_window: WindowGeometry,
    pub newcomer_color: Color,
    pub returner_color: Color,
    pub header_color: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            show_party: true,
            show_nearby: true,
            show_newcomers: true,
            show_returners: true,
            show_job_icons: true,
            auto_hide_in_combat: false,
            nearby_radius: 30.0,
            max_nearby: 20,
            show_welcome_message: true,
            config_window_movable: true,
            main_window: WindowGeometry::default(),
            newcomer_color: Color::NEWCOMER,
            returner_color: Color::RETURNER,
            header_color: Color::HEADER,
        }
    }
}

impl OverlayConfig {
    /// Clamp numeric settings into their slider ranges. Hand-edited
    /// config files can carry arbitrary values; the pipeline only ever
    /// sees sanitized ones.
    pub fn sanitize(&mut self) {
        self.nearby_radius = self
            .nearby_radius
            .clamp(*NEARBY_RADIUS_RANGE.start(), *NEARBY_RADIUS_RANGE.end());
        self.max_nearby = self
            .max_nearby
            .clamp(*MAX_NEARBY_RANGE.start(), *MAX_NEARBY_RANGE.end());
    }

    /// Load from the per-user config file.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config: Self =
            confy::load(APP_NAME, CONFIG_NAME).map_err(ConfigError::Load)?;
        config.sanitize();
        Ok(config)
    }

    /// Load, falling back to defaults if the file is missing or corrupt.
    /// A broken config file must never take the overlay down with it.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("[CONFIG] {err}, using defaults");
                Self::default()
            }
        }
    }

    /// Persist to the per-user config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[source] confy::ConfyError),
    #[error("failed to save configuration: {0}")]
    Save(#[source] confy::ConfyError),
}
