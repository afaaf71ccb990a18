use crate::sim::World;
use crate::sim::geometry::{block_hitbox, player_hitbox};
use crate::sim::world::{GameStatus, Kind};

/// Catch good blocks and end the run on a bad one.
///
/// Good blocks touched this tick are removed and scored even if a bad block is
/// touched in the same tick. Bad blocks stay in place.
pub fn resolve_collisions(world: &World, _dt: f32) -> World {
    if world.game.over {
        return world.clone();
    }
    let Some(player_box) = world.player().and_then(player_hitbox) else {
        return world.clone();
    };

    let mut earned = 0;
    let mut hit_bad = false;
    let entities = world
        .entities
        .iter()
        .filter(|entity| {
            let Some(kind) = entity.kind() else {
                return true;
            };
            let hit = block_hitbox(entity).is_some_and(|rect| rect.overlaps(&player_box));
            match (kind, hit) {
                (Kind::Good, true) => {
                    log::debug!("Caught {}", entity.id);
                    earned += 1;
                    false
                }
                (Kind::Bad, true) => {
                    hit_bad = true;
                    true
                }
                _ => true,
            }
        })
        .cloned()
        .collect();

    if hit_bad {
        log::info!(
            "Game over at t={:.2} with score {}",
            world.time,
            world.score + earned
        );
    }

    World {
        score: world.score + earned,
        game: GameStatus { over: hit_bad },
        ..world.with_entities(entities)
    }
}
