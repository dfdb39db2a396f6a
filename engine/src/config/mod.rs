//! Config Module
//!
//! Centralized tuning for the island simulation. Every section implements
//! `Default` with the values the scene was authored against, so an empty JSON
//! object (or no file at all) yields a playable configuration.
//!
//! # Example
//!
//! ```
//! use island_flight_engine::config::SimConfig;
//!
//! let config = SimConfig::from_json_str(r#"{ "flight": { "crash_speed": 0.25 } }"#).unwrap();
//! assert_eq!(config.flight.crash_speed, 0.25);
//! assert_eq!(config.flight.takeoff_speed, 0.15);
//! ```

pub mod tuning;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::CommandKeys;

pub use tuning::{
    BoundsConfig, EffectTuning, FlightTuning, LookTuning, ScriptedTuning, WalkingTuning,
};

/// Errors raised while loading a [`SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Complete simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub look: LookTuning,
    pub walking: WalkingTuning,
    pub flight: FlightTuning,
    pub bounds: BoundsConfig,
    pub scripted: ScriptedTuning,
    pub effects: EffectTuning,
    /// Keys for the one-shot commands
    pub bindings: CommandKeys,
    /// Fixed tick period the host loop should drive `tick` at
    pub tick_interval_ms: u64,
    /// Size of the per-light on/off table
    pub light_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            look: LookTuning::default(),
            walking: WalkingTuning::default(),
            flight: FlightTuning::default(),
            bounds: BoundsConfig::default(),
            scripted: ScriptedTuning::default(),
            effects: EffectTuning::default(),
            bindings: CommandKeys::default(),
            tick_interval_ms: 33,
            light_count: crate::world::layout::LIGHT_COUNT,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON, suitable for writing a starter config file.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the motion code cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("look.sensitivity", self.look.sensitivity),
            ("look.max_pitch", self.look.max_pitch),
            ("look.angle_increment", self.look.angle_increment),
            ("walking.grounded_speed", self.walking.grounded_speed),
            ("walking.free_speed", self.walking.free_speed),
            ("flight.crash_speed", self.flight.crash_speed),
            ("flight.max_altitude", self.flight.max_altitude),
            ("bounds.island_width", self.bounds.island_width),
            ("bounds.island_depth", self.bounds.island_depth),
            ("bounds.scene_width", self.bounds.scene_width),
            ("bounds.scene_depth", self.bounds.scene_depth),
            ("effects.explosion_frame_duration", self.effects.explosion_frame_duration),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        let non_negative = [
            ("flight.takeoff_speed", self.flight.takeoff_speed),
            ("flight.climb_rate", self.flight.climb_rate),
            ("flight.sink_rate", self.flight.sink_rate),
            ("bounds.crash_margin", self.bounds.crash_margin),
            ("scripted.tour_speed", self.scripted.tour_speed),
            ("scripted.helicopter_speed", self.scripted.helicopter_speed),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")));
            }
        }

        if self.look.max_pitch >= 90.0 {
            return Err(ConfigError::invalid(
                "look.max_pitch",
                "must stay below 90 degrees",
            ));
        }
        if self.bounds.scene_width < self.bounds.island_width {
            return Err(ConfigError::invalid(
                "bounds.scene_width",
                "must not be smaller than the island width",
            ));
        }
        if self.bounds.scene_depth < self.bounds.island_depth {
            return Err(ConfigError::invalid(
                "bounds.scene_depth",
                "must not be smaller than the island depth",
            ));
        }
        if let Some((key, reason)) = self.bindings.conflict() {
            return Err(ConfigError::invalid("bindings", format!("{key:?} {reason}")));
        }
        if self.effects.explosion_frames == 0 {
            return Err(ConfigError::invalid("effects.explosion_frames", "must be at least 1"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::invalid("tick_interval_ms", "must be at least 1"));
        }
        if self.light_count < crate::world::layout::LIGHT_COUNT {
            return Err(ConfigError::invalid(
                "light_count",
                format!(
                    "scene has {} pickable lights, got {}",
                    crate::world::layout::LIGHT_COUNT,
                    self.light_count
                ),
            ));
        }
        Ok(())
    }
}
