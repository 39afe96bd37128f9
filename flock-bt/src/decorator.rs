//! Decorator behavior nodes.

use crate::{Context, Node, NodeRef, Status};

/// Ticks its child once per frame, discards the result, and always returns
/// `Running`.
///
/// Never completes, which turns a terminating subtree into a permanently
/// available low-priority fallback inside a [`Selector`]; the child restarts
/// on its own terms each time it finishes.
///
/// [`Selector`]: crate::Selector
pub struct RepeatForever<A, W> {
    child: NodeRef<A, W>,
}

impl<A, W> RepeatForever<A, W> {
    pub fn new(child: NodeRef<A, W>) -> Self {
        Self { child }
    }
}

impl<A, W> Node<A, W> for RepeatForever<A, W> {
    fn tick(&self, ctx: &mut Context<'_, A, W>, dt: f32) -> Status {
        let _ = self.child.tick(ctx, dt);
        Status::Running
    }

    fn max_memory_slot(&self) -> Option<usize> {
        self.child.max_memory_slot()
    }
}
