//! Core node trait.

use std::sync::Arc;

use crate::{Context, Status};

/// Shared handle to an assembled node.
///
/// Trees are built once and never mutated, so nodes are held behind `Arc` and
/// may be referenced from several parents (the graph must stay acyclic) and
/// from any number of brains.
pub type NodeRef<A, W> = Arc<dyn Node<A, W>>;

/// A behavior tree node, generic over the actor type `A` and the shared world
/// type `W`.
///
/// Nodes carry no per-actor state: `tick` takes `&self`, and anything that
/// must persist across frames lives in the actor (plain fields or its
/// [`BtMemory`]). This is what lets one tree drive an arbitrary number of
/// actors, including actors ticked on different threads, as long as no two
/// threads tick the same actor concurrently.
///
/// [`BtMemory`]: crate::BtMemory
pub trait Node<A, W>: Send + Sync {
    /// Evaluate this node against the given context.
    ///
    /// `dt` is the non-negative elapsed time since the previous frame.
    fn tick(&self, ctx: &mut Context<'_, A, W>, dt: f32) -> Status;

    /// The largest memory slot id used anywhere in this subtree, or `None`
    /// if the subtree never touches actor memory.
    ///
    /// Used at assembly time to size and validate actor memory, so that an
    /// out-of-range slot id is caught when the actor is created rather than
    /// mid-traversal.
    fn max_memory_slot(&self) -> Option<usize> {
        None
    }
}

/// Forwarding impl so `NodeRef` children can be passed where a generic node
/// is expected.
impl<A, W> Node<A, W> for NodeRef<A, W> {
    #[inline]
    fn tick(&self, ctx: &mut Context<'_, A, W>, dt: f32) -> Status {
        (**self).tick(ctx, dt)
    }

    fn max_memory_slot(&self) -> Option<usize> {
        (**self).max_memory_slot()
    }
}
