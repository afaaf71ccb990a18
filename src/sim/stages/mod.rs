//! Update stages
//!
//! Every stage is a pure `(&World, dt) -> World` transformation. They are run
//! in a fixed order by [`crate::sim::Pipeline`]:
//! time → input → movement → spawner → falling → difficulty → collision → cleanup.

pub mod cleanup;
pub mod collision;
pub mod difficulty;
pub mod falling;
pub mod input;
pub mod movement;
pub mod spawner;
pub mod time;

pub use cleanup::*;
pub use collision::*;
pub use difficulty::*;
pub use falling::*;
pub use input::*;
pub use movement::*;
pub use spawner::*;
pub use time::*;
