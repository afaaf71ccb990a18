use std::sync::Arc;

use glam::Vec2;

use crate::sim::World;

/// Slide the player horizontally from the held keys, clamped to the canvas
pub fn move_player(world: &World, dt: f32) -> World {
    let Some(index) = world.player_index() else {
        return world.clone();
    };
    let player = &world.entities[index];
    let Some(pos) = player.components.position else {
        return world.clone();
    };
    let width = player
        .components
        .size
        .map_or(world.config.player_size.x, |s| s.x);

    let input = world.input.unwrap_or_default();
    let velocity = input.axis() * world.config.player_speed;
    let max_x = (world.config.canvas_width - width).max(0.0);
    let x = (pos.x + velocity * dt).clamp(0.0, max_x);

    if x == pos.x {
        return world.clone();
    }
    let mut next = world.clone();
    Arc::make_mut(&mut next.entities[index]).components.position = Some(Vec2::new(x, pos.y));
    next
}
