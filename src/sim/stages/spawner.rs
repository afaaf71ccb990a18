use std::sync::Arc;

use rand::Rng;

use crate::sim::World;
use crate::sim::factory::create_block;
use crate::sim::world::Kind;

/// Drop a new block once `spawn.interval` has elapsed since the last spawn
pub fn spawn_blocks(world: &World, _dt: f32) -> World {
    if world.time - world.spawn.last < world.spawn.interval {
        return world.clone();
    }

    let mut next = world.clone();
    let x = next.rng.random_range(0.0..=world.config.block_max_x());
    let kind = if next.rng.random::<f64>() < world.config.bad_chance {
        Kind::Bad
    } else {
        Kind::Good
    };

    let block = create_block(&world.config, kind, x, world.time);
    log::debug!("Spawned {} at x={:.1} (t={:.2})", block.id, x, world.time);
    next.entities.push(Arc::new(block));
    next.spawn.last = world.time;
    next
}
