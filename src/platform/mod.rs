//! Platform abstraction layer
//!
//! Native implementations of the collaborators the simulation talks to:
//! - Input: shared key-state cell fed by press/release events
//! - Time: wall-clock tick driver that owns the current world

pub mod driver;
pub mod input;

pub use driver::{TickDriver, TickOutcome};
pub use input::{InputState, Key, SharedInput};
