use std::sync::Arc;

use crate::sim::World;

/// Rescale fall speeds and spawn interval for the level reached at `world.time`.
///
/// Everything is recomputed from base values, so re-running at the same time
/// is a no-op.
pub fn scale_difficulty(world: &World, _dt: f32) -> World {
    let level = world.level();
    let speed_mult = world.difficulty.factor.powi(level);
    let interval_mult = (1.0 / world.difficulty.factor).powi(level);

    let mut next = world.clone();
    for entity in &mut next.entities {
        let Some(falling) = entity.components.falling else {
            continue;
        };
        let speed = falling.base_speed * speed_mult;
        if speed != falling.speed {
            if let Some(falling) = Arc::make_mut(entity).components.falling.as_mut() {
                falling.speed = speed;
            }
        }
    }
    next.spawn.interval =
        (next.spawn.base_interval * interval_mult).max(next.spawn.min_interval);
    next
}
