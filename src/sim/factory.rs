//! Entity constructors

use glam::Vec2;

use super::world::{Entity, Falling, Kind};
use crate::config::Config;
use crate::consts::{PLAYER_FLOOR_GAP, PLAYER_ID};

/// The player, centred horizontally and resting near the bottom edge
pub fn create_player(config: &Config) -> Entity {
    let size = config.player_size;
    let x = config.player_max_x() / 2.0;
    let y = (config.canvas_height - size.y - PLAYER_FLOOR_GAP).max(0.0);
    Entity::new(PLAYER_ID)
        .with_position(Vec2::new(x, y))
        .with_size(size)
}

/// Id for a block spawned at `time` seconds.
///
/// Two spawns within the same millisecond share an id; the spawn interval
/// floor keeps that from happening in play.
pub fn block_id(kind: Kind, time: f32) -> String {
    let millis = (f64::from(time) * 1000.0).round() as i64;
    format!("{}-{}", kind.as_str(), millis)
}

/// A block entering from just above the top edge
pub fn create_block(config: &Config, kind: Kind, x: f32, time: f32) -> Entity {
    let size = config.block_size;
    Entity::new(block_id(kind, time))
        .with_position(Vec2::new(x, -size))
        .with_size(Vec2::splat(size))
        .with_falling(Falling::new(config.fall_speed))
        .with_tag(kind)
}
