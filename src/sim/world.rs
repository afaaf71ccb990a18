//! World snapshot and entity components
//!
//! A `World` is the complete state of one frame. Stages never mutate a world
//! they are handed; they return a successor that shares every entity they did
//! not touch. Entities sit behind `Arc`, so cloning a world copies pointers and
//! a stage rewrites an entity with `Arc::make_mut`.

use std::sync::Arc;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::factory::create_player;
use crate::config::Config;
use crate::consts::PLAYER_ID;

/// Block flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Caught for a point
    Good,
    /// Ends the run on contact
    Bad,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Good => "good",
            Kind::Bad => "bad",
        }
    }
}

/// Tag component, present on blocks only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: Kind,
}

/// Falling component (px/s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Falling {
    /// Level-0 speed, never changed after spawn
    pub base_speed: f32,
    /// Current difficulty-scaled speed
    pub speed: f32,
}

impl Falling {
    pub fn new(base_speed: f32) -> Self {
        Self {
            base_speed,
            speed: base_speed,
        }
    }
}

/// Sparse component set. `None` means the entity lacks that component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Top-left anchor in screen pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec2>,
    /// Bounding box (x = width, y = height)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub falling: Option<Falling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
}

/// An identified bundle of components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub components: Components,
}

impl Entity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            components: Components::default(),
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.components.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.components.size = Some(size);
        self
    }

    pub fn with_falling(mut self, falling: Falling) -> Self {
        self.components.falling = Some(falling);
        self
    }

    pub fn with_tag(mut self, kind: Kind) -> Self {
        self.components.tag = Some(Tag { kind });
        self
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.id == PLAYER_ID
    }

    #[inline]
    pub fn kind(&self) -> Option<Kind> {
        self.components.tag.map(|t| t.kind)
    }

    #[inline]
    pub fn has_tag(&self) -> bool {
        self.components.tag.is_some()
    }

    #[inline]
    pub fn has_falling(&self) -> bool {
        self.components.falling.is_some()
    }
}

/// Spawner timing (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    /// World time of the most recent spawn
    pub last: f32,
    pub base_interval: f32,
    /// Difficulty-adjusted interval, never below `min_interval`
    pub interval: f32,
    pub min_interval: f32,
}

/// Terminal flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub over: bool,
}

/// Difficulty curve parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// Seconds per level
    pub step: f32,
    /// Multiplicative step (> 1)
    pub factor: f32,
}

impl Difficulty {
    /// Discrete level reached at `time`
    #[inline]
    pub fn level_at(&self, time: f32) -> i32 {
        (time / self.step).floor() as i32
    }
}

/// Held movement keys, as seen by the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
}

impl InputSnapshot {
    /// Net horizontal direction: -1, 0 or 1
    pub fn axis(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Complete game state for one frame (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Entities in stable insertion order, shared between snapshots
    pub entities: Vec<Arc<Entity>>,
    /// Elapsed game time in seconds
    pub time: f32,
    pub spawn: Spawn,
    /// Good blocks collected
    pub score: u32,
    pub game: GameStatus,
    pub difficulty: Difficulty,
    /// Written by the input stage, read by movement
    #[serde(default)]
    pub input: Option<InputSnapshot>,
    /// Static tuning read by the stages
    pub config: Config,
    /// Spawner RNG state
    pub rng: Pcg32,
}

impl World {
    /// Fresh world with only the player, seeded from `config.seed`.
    ///
    /// `config` must pass [`Config::validate`].
    pub fn new(config: Config) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid config: {:?}",
            config.validate()
        );
        Self {
            entities: vec![Arc::new(create_player(&config))],
            time: 0.0,
            spawn: Spawn {
                last: 0.0,
                base_interval: config.spawn_base_interval,
                interval: config.spawn_base_interval,
                min_interval: config.spawn_min_interval,
            },
            score: 0,
            game: GameStatus::default(),
            difficulty: Difficulty {
                step: config.difficulty_step,
                factor: config.difficulty_factor,
            },
            input: None,
            config,
            rng: Pcg32::seed_from_u64(config.seed),
        }
    }

    /// Successor with a new entity list and every other field copied
    pub fn with_entities(&self, entities: Vec<Arc<Entity>>) -> Self {
        Self {
            entities,
            time: self.time,
            spawn: self.spawn,
            score: self.score,
            game: self.game,
            difficulty: self.difficulty,
            input: self.input,
            config: self.config,
            rng: self.rng.clone(),
        }
    }

    /// The player entity, if present
    pub fn player(&self) -> Option<&Entity> {
        self.entity(PLAYER_ID)
    }

    /// Index of the player entity, if present
    pub fn player_index(&self) -> Option<usize> {
        self.entities.iter().position(|e| e.is_player())
    }

    /// Look up an entity by id
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().map(|e| &**e).find(|e| e.id == id)
    }

    /// Tagged (block) entities
    pub fn blocks(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().map(|e| &**e).filter(|e| e.has_tag())
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.game.over
    }

    /// Current difficulty level
    pub fn level(&self) -> i32 {
        self.difficulty.level_at(self.time)
    }
}
