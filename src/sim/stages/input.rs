use crate::sim::world::{InputSnapshot, World};

/// Read side of the external input collaborator.
///
/// Implementations return a consistent copy of the held movement keys; the
/// input stage calls this exactly once per tick.
pub trait InputSource {
    fn snapshot(&self) -> InputSnapshot;
}

impl InputSource for InputSnapshot {
    fn snapshot(&self) -> InputSnapshot {
        *self
    }
}

impl<F: Fn() -> InputSnapshot> InputSource for F {
    fn snapshot(&self) -> InputSnapshot {
        self()
    }
}

/// Copy an input snapshot into the world
pub fn with_input(world: &World, input: InputSnapshot) -> World {
    World {
        input: Some(input),
        ..world.clone()
    }
}

/// Input stage bound to a source
pub fn apply_input<S: InputSource>(source: S) -> impl Fn(&World, f32) -> World {
    move |world: &World, _dt: f32| with_input(world, source.snapshot())
}
