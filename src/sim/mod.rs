//! Pure simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Stages borrow a world and return a new one
//! - Seeded RNG carried inside the world
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod factory;
pub mod geometry;
pub mod pipeline;
pub mod stages;
pub mod world;

pub use autopilot::steer;
pub use factory::{block_id, create_block, create_player};
pub use geometry::{Margins, Rect, block_hitbox, hitbox, player_hitbox};
pub use pipeline::{Pipeline, STANDARD_ORDER, StageFn, compose};
pub use stages::InputSource;
pub use world::{
    Components, Difficulty, Entity, Falling, GameStatus, InputSnapshot, Kind, Spawn, Tag, World,
};
