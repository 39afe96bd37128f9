//! Per-tick evaluation context.

/// Transient binding of one actor to the shared world for a single tick.
///
/// Built fresh by the driver for every `Brain::tick` call and dropped right
/// after; nodes receive it by reference and must never store it.
pub struct Context<'a, A, W> {
    /// The actor being ticked. Leaves read and write its fields; composites
    /// only touch its behavior tree memory.
    pub agent: &'a mut A,
    /// Shared, mutable simulation state. Opaque to the engine.
    pub world: &'a mut W,
}

impl<'a, A, W> Context<'a, A, W> {
    pub fn new(agent: &'a mut A, world: &'a mut W) -> Self {
        Self { agent, world }
    }
}
