//! Tick driver
//!
//! Owns the only live world. Each tick it measures elapsed time, runs the
//! pipeline once and keeps the result. Once the game is over the pipeline is
//! never invoked again.

use std::time::Instant;

use crate::sim::{Pipeline, World};

/// State after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    GameOver,
}

pub struct TickDriver {
    world: World,
    pipeline: Pipeline,
    last_instant: Option<Instant>,
    ticks: u64,
    level: i32,
}

impl TickDriver {
    pub fn new(world: World, pipeline: Pipeline) -> Self {
        let level = world.level();
        Self {
            world,
            pipeline,
            last_instant: None,
            ticks: 0,
            level,
        }
    }

    /// Latest snapshot (what a renderer should draw)
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn into_world(self) -> World {
        self.world
    }

    /// Pipeline passes run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_running(&self) -> bool {
        !self.world.game.over
    }

    fn outcome(&self) -> TickOutcome {
        if self.world.game.over {
            TickOutcome::GameOver
        } else {
            TickOutcome::Running
        }
    }

    /// Run one pipeline pass with `dt` seconds, clamped to be non-negative
    pub fn step(&mut self, dt: f32) -> TickOutcome {
        if self.world.game.over {
            return TickOutcome::GameOver;
        }

        let dt = dt.max(0.0);
        self.world = self.pipeline.run(&self.world, dt);
        self.ticks += 1;

        let level = self.world.level();
        if level != self.level {
            log::info!(
                "Difficulty level {} (spawn every {:.2}s)",
                level,
                self.world.spawn.interval
            );
            self.level = level;
        }
        if self.world.game.over {
            log::info!(
                "Run ended after {} ticks ({:.1}s), score {}",
                self.ticks,
                self.world.time,
                self.world.score
            );
        }
        self.outcome()
    }

    /// Step with the wall-clock time since the previous call (zero on the first)
    pub fn tick_at(&mut self, now: Instant) -> TickOutcome {
        let dt = self
            .last_instant
            .map_or(0.0, |last| now.saturating_duration_since(last).as_secs_f32());
        self.last_instant = Some(now);
        self.step(dt)
    }

    /// Step at the current wall-clock time
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_at(Instant::now())
    }

    /// Step with a fixed `dt` until game over or `max_ticks` passes.
    ///
    /// `before_tick` sees the current world before every pass; hosts use it to
    /// feed input.
    pub fn run_fixed(
        &mut self,
        dt: f32,
        max_ticks: u64,
        mut before_tick: impl FnMut(&World),
    ) -> TickOutcome {
        for _ in 0..max_ticks {
            if self.world.game.over {
                break;
            }
            before_tick(&self.world);
            self.step(dt);
        }
        self.outcome()
    }
}
