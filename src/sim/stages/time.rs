use crate::sim::World;

/// Advance the world clock by `dt` seconds. `dt` is trusted to be non-negative.
pub fn advance_time(world: &World, dt: f32) -> World {
    World {
        time: world.time + dt,
        ..world.clone()
    }
}
