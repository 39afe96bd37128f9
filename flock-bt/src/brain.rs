//! The per-actor entry point.

use crate::{BtMemory, Context, Node, NodeRef, Status};

/// Holds the root of an assembled tree and exposes the single entry point the
/// driver calls once per actor per frame.
///
/// A brain always has a root, so there is no unassigned state to guard
/// against at tick time. Cloning a brain shares the same tree; per-actor state lives
/// entirely in the actor's [`BtMemory`] and fields, so one brain (or clones
/// of it) can drive any number of actors.
pub struct Brain<A, W> {
    root: NodeRef<A, W>,
    required_slots: usize,
}

impl<A, W> Brain<A, W> {
    pub fn new(root: NodeRef<A, W>) -> Self {
        let required_slots = root.max_memory_slot().map_or(0, |deepest| deepest + 1);
        Self {
            root,
            required_slots,
        }
    }

    /// Number of memory slots an actor must own to be ticked by this brain:
    /// the deepest slot id in the tree plus one, or 0 if the tree never
    /// touches actor memory.
    pub fn required_slots(&self) -> usize {
        self.required_slots
    }

    /// Creates a correctly sized memory array for a new actor.
    pub fn memory(&self) -> BtMemory {
        BtMemory::with_slots(self.required_slots)
    }

    /// Checks an actor's memory against this tree at actor-creation time.
    ///
    /// # Panics
    ///
    /// Panics if `memory` has fewer slots than the tree addresses. This is a
    /// configuration error; catching it here keeps traversal free of
    /// per-tick validation.
    pub fn validate_memory(&self, memory: &BtMemory) {
        assert!(
            memory.len() >= self.required_slots,
            "actor memory has {} slots but the tree addresses {}",
            memory.len(),
            self.required_slots
        );
    }

    /// Evaluates the tree for one actor and one frame.
    ///
    /// Returns the root's [`Status`]; the driver is expected to discard it,
    /// since resumption is self-managed through the actor's memory slots.
    pub fn tick(&self, ctx: &mut Context<'_, A, W>, dt: f32) -> Status {
        self.root.tick(ctx, dt)
    }
}

impl<A, W> Clone for Brain<A, W> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            required_slots: self.required_slots,
        }
    }
}
