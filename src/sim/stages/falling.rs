use std::sync::Arc;

use crate::sim::World;

/// Move every falling entity down by its current speed
pub fn fall(world: &World, dt: f32) -> World {
    let mut next = world.clone();
    for entity in &mut next.entities {
        if entity.has_falling() && entity.components.position.is_some() {
            let components = &mut Arc::make_mut(entity).components;
            if let (Some(falling), Some(pos)) = (components.falling, components.position.as_mut()) {
                pos.y += falling.speed * dt;
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::factory::create_block;
    use crate::sim::world::Kind;

    #[test]
    fn test_blocks_fall_player_stays() {
        let config = Config::default();
        let mut world = World::new(config);
        world
            .entities
            .push(Arc::new(create_block(&config, Kind::Good, 10.0, 0.0)));

        let next = fall(&world, 0.5);
        let block = next.entity("good-0").unwrap().components.position.unwrap();
        assert_eq!(block.x, 10.0);
        assert_eq!(block.y, -config.block_size + config.fall_speed * 0.5);
        assert_eq!(next.player(), world.player());
        assert_eq!(
            world.entity("good-0").unwrap().components.position.unwrap().y,
            -config.block_size
        );
    }

    #[test]
    fn test_player_shared_with_input() {
        let config = Config::default();
        let mut world = World::new(config);
        world
            .entities
            .push(Arc::new(create_block(&config, Kind::Bad, 10.0, 0.0)));
        let next = fall(&world, 0.016);
        assert!(Arc::ptr_eq(&world.entities[0], &next.entities[0]));
        assert!(!Arc::ptr_eq(&world.entities[1], &next.entities[1]));
    }

    #[test]
    fn test_uses_scaled_speed() {
        let config = Config::default();
        let mut world = World::new(config);
        let mut block = create_block(&config, Kind::Bad, 0.0, 0.0);
        block.components.falling.as_mut().unwrap().speed = 400.0;
        world.entities.push(Arc::new(block));

        let next = fall(&world, 0.25);
        let y = next.entity("bad-0").unwrap().components.position.unwrap().y;
        assert_eq!(y, -config.block_size + 100.0);
    }
}
