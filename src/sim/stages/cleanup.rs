use crate::sim::World;
use crate::sim::world::Entity;

/// Drop blocks that have fallen past the bottom edge
pub fn cleanup(world: &World, _dt: f32) -> World {
    let floor = world.config.canvas_height;
    let entities = world
        .entities
        .iter()
        .filter(|entity| !(entity.has_tag() && is_below(entity, floor)))
        .cloned()
        .collect();
    world.with_entities(entities)
}

fn is_below(entity: &Entity, floor: f32) -> bool {
    match (entity.components.position, entity.components.size) {
        (Some(pos), Some(size)) => pos.y >= floor + size.y,
        _ => false,
    }
}
