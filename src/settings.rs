//! Game configuration
//!
//! Screen dimensions are passed in explicitly so the simulation can run
//! headless. Loaded from JSON; every field falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tuning and screen configuration for one game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Entities ===
    pub player_initial_size: f32,
    pub collectible_size: f32,
    pub hazard_size: f32,

    // === Scoring / timing ===
    /// Starting time in whole seconds
    pub initial_time: u32,
    pub collectible_time_bonus: u32,
    pub hazard_time_penalty: u32,
    /// Seconds between countdown ticks
    pub countdown_period: f32,
    /// Seconds between hazard relocations
    pub hazard_relocation_period: f32,
    /// Seconds an explosion stays visible
    pub explosion_duration: f32,

    // === Motion ===
    pub tilt_speed: f32,
    pub tilt_threshold: f32,
    /// Fraction of the raw delta applied per sample, in (0, 1]
    pub tilt_smoothing: f32,
    pub sample_interval_ms: u32,

    // === Spawning ===
    pub spawn_margin: f32,
    pub spawn_max_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_initial_size: PLAYER_INITIAL_SIZE,
            collectible_size: COLLECTIBLE_SIZE,
            hazard_size: HAZARD_SIZE,

            initial_time: INITIAL_TIME,
            collectible_time_bonus: COLLECTIBLE_TIME_BONUS,
            hazard_time_penalty: HAZARD_TIME_PENALTY,
            countdown_period: COUNTDOWN_PERIOD,
            hazard_relocation_period: HAZARD_RELOCATION_PERIOD,
            explosion_duration: EXPLOSION_DURATION,

            tilt_speed: TILT_SPEED,
            tilt_threshold: TILT_THRESHOLD,
            tilt_smoothing: TILT_SMOOTHING,
            sample_interval_ms: SAMPLE_INTERVAL_MS,

            spawn_margin: SPAWN_MARGIN,
            spawn_max_attempts: SPAWN_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Screen size as a vector
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Minimum center distance between collectible and hazard on spawn
    pub fn min_spawn_distance(&self) -> f32 {
        self.hazard_size / 2.0 + self.collectible_size / 2.0 + self.spawn_margin
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_initial_size", self.player_initial_size),
            ("collectible_size", self.collectible_size),
            ("hazard_size", self.hazard_size),
            ("countdown_period", self.countdown_period),
            ("hazard_relocation_period", self.hazard_relocation_period),
            ("explosion_duration", self.explosion_duration),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a positive number, got {value}"),
                ));
            }
        }

        if !(self.tilt_smoothing > 0.0 && self.tilt_smoothing <= 1.0) {
            return Err(ConfigError::invalid(
                "tilt_smoothing",
                format!("must be in (0, 1], got {}", self.tilt_smoothing),
            ));
        }
        if !(self.tilt_threshold.is_finite() && self.tilt_threshold >= 0.0) {
            return Err(ConfigError::invalid("tilt_threshold", "must be >= 0"));
        }
        if !self.tilt_speed.is_finite() {
            return Err(ConfigError::invalid("tilt_speed", "must be finite"));
        }
        if !(self.spawn_margin.is_finite() && self.spawn_margin >= 0.0) {
            return Err(ConfigError::invalid("spawn_margin", "must be >= 0"));
        }
        if self.spawn_max_attempts == 0 {
            return Err(ConfigError::invalid("spawn_max_attempts", "must be at least 1"));
        }
        if self.initial_time == 0 {
            return Err(ConfigError::invalid("initial_time", "must be at least 1"));
        }
        Ok(())
    }
}
