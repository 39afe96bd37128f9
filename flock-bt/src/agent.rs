//! Actor-side contract.

use crate::BtMemory;

/// What the engine requires of an actor.
///
/// The engine is otherwise oblivious to the actor's fields; leaves access
/// them directly through the context. The one thing composites need is the
/// actor-owned slot array that [`MemorySequence`] resumes from.
///
/// [`MemorySequence`]: crate::MemorySequence
pub trait Agent {
    /// The actor's behavior tree memory, mutated only while this actor is
    /// being ticked.
    fn bt_memory(&mut self) -> &mut BtMemory;
}
