//! Movement key state
//!
//! Press/release events arrive from the host at any time; the simulation reads
//! a snapshot once per tick through [`InputSource`]. Only the two movement keys
//! change state, every other key is ignored.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::sim::{InputSnapshot, InputSource};

/// Keys a host may report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
    Other(u32),
}

impl Key {
    /// Map a DOM-style key name
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            " " | "Space" => Key::Space,
            "Escape" => Key::Escape,
            _ => Key::Other(0),
        }
    }
}

/// Held state of the movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    left: bool,
    right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            _ => {}
        }
    }

    /// Overwrite both keys at once (autopilot, replays)
    pub fn set_snapshot(&mut self, snapshot: InputSnapshot) {
        self.left = snapshot.left;
        self.right = snapshot.right;
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.left,
            right: self.right,
        }
    }
}

/// Input state shared between the event side and the pipeline
#[derive(Debug, Clone, Default)]
pub struct SharedInput(Arc<Mutex<InputState>>);

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&self, key: Key) {
        self.0.lock().key_down(key);
    }

    pub fn key_up(&self, key: Key) {
        self.0.lock().key_up(key);
    }

    pub fn set_snapshot(&self, snapshot: InputSnapshot) {
        self.0.lock().set_snapshot(snapshot);
    }
}

impl InputSource for SharedInput {
    fn snapshot(&self) -> InputSnapshot {
        self.0.lock().snapshot()
    }
}
