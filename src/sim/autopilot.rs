//! Demo autopilot
//!
//! Chooses held keys for the player: dodge bad blocks that are about to land
//! on it, otherwise chase the lowest good block.

use super::geometry::{Rect, block_hitbox, player_hitbox};
use super::world::{InputSnapshot, Kind, World};

/// Seconds of fall within which a bad block overhead counts as a threat
const THREAT_HORIZON: f32 = 0.6;
/// Dead zone around the target so the player does not jitter
const SETTLE_DISTANCE: f32 = 6.0;

fn steer_toward(from: f32, to: f32) -> InputSnapshot {
    let delta = to - from;
    InputSnapshot {
        left: delta < -SETTLE_DISTANCE,
        right: delta > SETTLE_DISTANCE,
    }
}

/// Pick the keys the player should hold this tick
pub fn steer(world: &World) -> InputSnapshot {
    let Some(player_box) = world.player().and_then(player_hitbox) else {
        return InputSnapshot::default();
    };
    let player_x = player_box.center().x;

    // Bad blocks whose hitbox spans our column and will reach us soon
    let threat = world
        .blocks()
        .filter(|b| b.kind() == Some(Kind::Bad))
        .filter_map(|b| {
            let rect = block_hitbox(b)?;
            let speed = b.components.falling.map_or(0.0, |f| f.speed);
            let gap = player_box.min.y - rect.max.y;
            let overlaps_column = rect.min.x < player_box.max.x && player_box.min.x < rect.max.x;
            let above_feet = rect.min.y < player_box.max.y;
            (overlaps_column && above_feet && gap < speed * THREAT_HORIZON).then_some(rect)
        })
        .max_by(|a, b| a.max.y.total_cmp(&b.max.y));

    if let Some(rect) = threat {
        let x = world
            .player()
            .and_then(|p| p.components.position)
            .map_or(0.0, |p| p.x);
        let at_left = x <= 0.0;
        let at_right = x >= world.config.player_max_x();
        // Never step toward the threat; pinned against a wall, stand still
        let away_left = rect.center().x >= player_x;
        return InputSnapshot {
            left: away_left && !at_left,
            right: !away_left && !at_right,
        };
    }

    world
        .blocks()
        .filter(|b| b.kind() == Some(Kind::Good))
        .filter_map(block_hitbox)
        .filter(|rect| rect.max.y <= player_box.max.y)
        .max_by(|a, b| a.max.y.total_cmp(&b.max.y))
        .map_or_else(InputSnapshot::default, |rect: Rect| {
            steer_toward(player_x, rect.center().x)
        })
}
