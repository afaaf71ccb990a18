//! Frame description for host renderers
//!
//! Turns a world into a flat draw list: one sprite per drawable entity, the
//! score, and the game-over banner. Hosts map `SpriteKind` to their own images.

use std::fmt;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Entity, Kind, World};

/// Banner text shown once the run has ended
pub const GAME_OVER_BANNER: &str = "GAME OVER";

/// Which image to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteKind {
    Player,
    Good,
    Bad,
}

impl SpriteKind {
    /// Player by id, otherwise by tag; `None` for entities with neither
    pub fn for_entity(entity: &Entity) -> Option<Self> {
        if entity.is_player() {
            return Some(SpriteKind::Player);
        }
        match entity.kind()? {
            Kind::Good => Some(SpriteKind::Good),
            Kind::Bad => Some(SpriteKind::Bad),
        }
    }
}

/// A single sprite placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything a host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub sprites: Vec<Sprite>,
    pub score: u32,
    pub time: f32,
    pub banner: Option<&'static str>,
}

impl Frame {
    pub fn from_world(world: &World) -> Self {
        let sprites = world
            .entities
            .iter()
            .filter_map(|entity| {
                Some(Sprite {
                    kind: SpriteKind::for_entity(entity)?,
                    pos: entity.components.position?,
                    size: entity.components.size?,
                })
            })
            .collect();

        Self {
            sprites,
            score: world.score,
            time: world.time,
            banner: world.game.over.then_some(GAME_OVER_BANNER),
        }
    }

    pub fn count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.kind == kind).count()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:>6.2}s  score={:<4} good={:<2} bad={:<2}",
            self.time,
            self.score,
            self.count(SpriteKind::Good),
            self.count(SpriteKind::Bad)
        )?;
        if let Some(banner) = self.banner {
            write!(f, "  {banner}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::create_block;
    use std::sync::Arc;

    #[test]
    fn test_sprite_selection() {
        let config = Config::default();
        let mut world = World::new(config);
        for entity in [
            create_block(&config, Kind::Good, 10.0, 0.0),
            create_block(&config, Kind::Bad, 20.0, 1.0),
            Entity::new("decor"),
        ] {
            world.entities.push(Arc::new(entity));
        }

        let frame = Frame::from_world(&world);
        let kinds: Vec<_> = frame.sprites.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [SpriteKind::Player, SpriteKind::Good, SpriteKind::Bad]);
        assert_eq!(frame.sprites[1].pos, Vec2::new(10.0, -config.block_size));
        assert_eq!(frame.sprites[1].size, Vec2::splat(config.block_size));
        assert!(frame.banner.is_none());
    }

    #[test]
    fn test_banner_when_over() {
        let mut world = World::new(Config::default());
        world.score = 7;
        world.game.over = true;
        let frame = Frame::from_world(&world);
        assert_eq!(frame.banner, Some(GAME_OVER_BANNER));
        let hud = frame.to_string();
        assert!(hud.contains("score=7"));
        assert!(hud.ends_with(GAME_OVER_BANNER));
    }
}
