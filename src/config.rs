//! Game tuning
//!
//! Loaded from an optional JSON file; every field falls back to the constants
//! in [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Static tuning values read by the simulation stages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Play area width (pixels)
    pub canvas_width: f32,
    /// Play area height (pixels)
    pub canvas_height: f32,
    /// Player box (w, h)
    pub player_size: Vec2,
    /// Horizontal player speed (px/s)
    pub player_speed: f32,
    /// Edge length of a falling block
    pub block_size: f32,
    /// Base fall speed of new blocks (px/s)
    pub fall_speed: f32,
    /// Probability in [0, 1] that a spawned block is bad
    pub bad_chance: f64,
    /// Seconds between spawns at level 0
    pub spawn_base_interval: f32,
    /// Floor for the spawn interval
    pub spawn_min_interval: f32,
    /// Seconds per difficulty level
    pub difficulty_step: f32,
    /// Speed multiplier per level (> 1)
    pub difficulty_factor: f32,
    /// RNG seed for the spawner
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            player_speed: PLAYER_SPEED,
            block_size: BLOCK_SIZE,
            fall_speed: FALL_SPEED,
            bad_chance: BAD_CHANCE,
            spawn_base_interval: SPAWN_BASE_INTERVAL,
            spawn_min_interval: SPAWN_MIN_INTERVAL,
            difficulty_step: DIFFICULTY_STEP,
            difficulty_factor: DIFFICULTY_FACTOR,
            seed: DEFAULT_SEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same tuning, different spawner seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, logging and falling back to defaults on failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    /// Reject tuning the stages cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("player_size.x", self.player_size.x),
            ("player_size.y", self.player_size.y),
            ("player_speed", self.player_speed),
            ("block_size", self.block_size),
            ("fall_speed", self.fall_speed),
            ("spawn_base_interval", self.spawn_base_interval),
            ("spawn_min_interval", self.spawn_min_interval),
            ("difficulty_step", self.difficulty_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.difficulty_factor > 1.0) {
            return Err(ConfigError::Invalid(format!(
                "difficulty_factor must be > 1, got {}",
                self.difficulty_factor
            )));
        }
        if self.spawn_min_interval > self.spawn_base_interval {
            return Err(ConfigError::Invalid(
                "spawn_min_interval exceeds spawn_base_interval".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.bad_chance) {
            return Err(ConfigError::Invalid(format!(
                "bad_chance must be in [0, 1], got {}",
                self.bad_chance
            )));
        }
        Ok(())
    }

    /// Right-most x the player may occupy
    #[inline]
    pub fn player_max_x(&self) -> f32 {
        (self.canvas_width - self.player_size.x).max(0.0)
    }

    /// Right-most x a new block may spawn at
    #[inline]
    pub fn block_max_x(&self) -> f32 {
        (self.canvas_width - self.block_size).max(0.0)
    }
}
