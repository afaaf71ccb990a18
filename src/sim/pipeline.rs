//! Ordered stage composition
//!
//! A pipeline is a left fold of its stages over the input world: each stage
//! borrows the previous stage's output and returns the next world.

use std::fmt;

use super::stages::*;
use super::world::World;

/// A boxed `(&World, dt) -> World` stage
pub type StageFn = Box<dyn Fn(&World, f32) -> World>;

/// Names of the standard stages, in execution order
pub const STANDARD_ORDER: [&str; 8] = [
    "time",
    "input",
    "movement",
    "spawner",
    "falling",
    "difficulty",
    "collision",
    "cleanup",
];

/// Left fold of `stages` seeded with the borrowed `world`.
///
/// The first stage reads `world` directly; only an empty list clones it.
fn fold_stages<'a>(
    mut stages: impl Iterator<Item = &'a StageFn>,
    world: &World,
    dt: f32,
) -> World {
    let Some(first) = stages.next() else {
        return world.clone();
    };
    stages.fold(first(world, dt), |acc, stage| stage(&acc, dt))
}

/// Compose stages into one function applying them left to right
pub fn compose(stages: Vec<StageFn>) -> impl Fn(&World, f32) -> World {
    move |world: &World, dt: f32| fold_stages(stages.iter(), world, dt)
}

/// Named, ordered stage list
#[derive(Default)]
pub struct Pipeline {
    names: Vec<&'static str>,
    stages: Vec<StageFn>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage
    pub fn stage(
        mut self,
        name: &'static str,
        stage: impl Fn(&World, f32) -> World + 'static,
    ) -> Self {
        self.names.push(name);
        self.stages.push(Box::new(move |world: &World, dt: f32| {
            log::trace!("stage {name} (t={:.3}, dt={dt:.4})", world.time);
            stage(world, dt)
        }));
        self
    }

    /// The game's stage order, reading keys from `input`
    pub fn standard(input: impl InputSource + 'static) -> Self {
        Self::new()
            .stage("time", advance_time)
            .stage("input", apply_input(input))
            .stage("movement", move_player)
            .stage("spawner", spawn_blocks)
            .stage("falling", fall)
            .stage("difficulty", scale_difficulty)
            .stage("collision", resolve_collisions)
            .stage("cleanup", cleanup)
    }

    /// Run one tick
    pub fn run(&self, world: &World, dt: f32) -> World {
        fold_stages(self.stages.iter(), world, dt)
    }

    /// Consume the pipeline into a plain composed function
    pub fn into_fn(self) -> impl Fn(&World, f32) -> World {
        compose(self.stages)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
