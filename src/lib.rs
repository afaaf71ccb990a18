//! Block Catch - A falling-block arcade game
//!
//! Core modules:
//! - `sim`: Pure simulation (world snapshots, stages, pipeline)
//! - `platform`: Input cell and tick driver for native hosts
//! - `renderer`: Draw-list description of a world for any host renderer
//! - `config`: Data-driven game tuning

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Config, ConfigError};
pub use sim::{Pipeline, World};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player sprite box
    pub const PLAYER_WIDTH: f32 = 150.0;
    pub const PLAYER_HEIGHT: f32 = 150.0;
    /// Gap between the player's feet and the bottom of the canvas
    pub const PLAYER_FLOOR_GAP: f32 = 10.0;
    /// Horizontal player speed (px/s)
    pub const PLAYER_SPEED: f32 = 350.0;
    /// Reserved id of the single player entity
    pub const PLAYER_ID: &str = "player";

    /// Falling blocks are square
    pub const BLOCK_SIZE: f32 = 60.0;
    /// Initial fall speed (px/s)
    pub const FALL_SPEED: f32 = 160.0;
    /// Probability that a spawned block is bad
    pub const BAD_CHANCE: f64 = 0.7;

    /// Spawn cadence (seconds)
    pub const SPAWN_BASE_INTERVAL: f32 = 0.9;
    pub const SPAWN_MIN_INTERVAL: f32 = 0.3;

    /// Seconds per difficulty level
    pub const DIFFICULTY_STEP: f32 = 10.0;
    /// Multiplicative speed-up per level
    pub const DIFFICULTY_FACTOR: f32 = 1.12;

    /// Fixed timestep used by headless runs (60 Hz)
    pub const HEADLESS_DT: f32 = 1.0 / 60.0;
    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 12345;
}
