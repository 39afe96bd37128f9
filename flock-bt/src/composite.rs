//! Composite behavior nodes.
//!
//! Composites aggregate an ordered child list under a control-flow rule.
//! Child order is semantically significant: children are always evaluated
//! left-to-right with short-circuiting, and for [`Selector`] the order *is*
//! the priority order.

use crate::{Agent, Context, Node, NodeRef, Status};

/// Runs children left-to-right, restarting at index 0 every tick.
///
/// - A child returning `Failure` fails the sequence immediately.
/// - A child returning `Running` makes the sequence return `Running`; next
///   tick starts over at index 0, so every earlier child is re-validated
///   while a later child is mid-flight.
/// - All children succeeding in one pass yields `Success`.
///
/// The restart-at-0 rule means an in-progress later child is abandoned (with
/// no cleanup hook) the moment an earlier condition flips to `Failure`. When
/// that is not what you want, use [`MemorySequence`].
pub struct Sequence<A, W> {
    children: Vec<NodeRef<A, W>>,
}

impl<A, W> Sequence<A, W> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<NodeRef<A, W>>) -> Self {
        assert!(!children.is_empty(), "Sequence must have at least one child");
        Self { children }
    }
}

impl<A, W> Node<A, W> for Sequence<A, W> {
    fn tick(&self, ctx: &mut Context<'_, A, W>, dt: f32) -> Status {
        for child in &self.children {
            match child.tick(ctx, dt) {
                Status::Success => continue,
                Status::Failure => return Status::Failure,
                Status::Running => return Status::Running,
            }
        }
        Status::Success
    }

    fn max_memory_slot(&self) -> Option<usize> {
        self.children.iter().filter_map(|c| c.max_memory_slot()).max()
    }
}

/// Runs children left-to-right until one succeeds or runs.
///
/// - First child returning `Success` succeeds the selector immediately.
/// - First child returning `Running` makes the selector return `Running`.
/// - Only if every child fails does the selector return `Failure`.
///
/// Because the full priority order is re-evaluated every tick, a
/// higher-priority branch can preempt a lower-priority `Running` branch at
/// any time.
pub struct Selector<A, W> {
    children: Vec<NodeRef<A, W>>,
}

impl<A, W> Selector<A, W> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<NodeRef<A, W>>) -> Self {
        assert!(!children.is_empty(), "Selector must have at least one child");
        Self { children }
    }
}

impl<A, W> Node<A, W> for Selector<A, W> {
    fn tick(&self, ctx: &mut Context<'_, A, W>, dt: f32) -> Status {
        for child in &self.children {
            match child.tick(ctx, dt) {
                Status::Success => return Status::Success,
                Status::Running => return Status::Running,
                Status::Failure => continue,
            }
        }
        Status::Failure
    }

    fn max_memory_slot(&self) -> Option<usize> {
        self.children.iter().filter_map(|c| c.max_memory_slot()).max()
    }
}

/// A sequence that resumes where it left off instead of restarting at 0.
///
/// The resumption index lives in the *actor's* [`BtMemory`], in the slot
/// named at construction; the node itself stays immutable and shareable.
/// Per tick, starting from the stored index `i`:
///
/// - child `i` returns `Running`: return `Running` with `i` unchanged, so the
///   next tick resumes at the same child without re-checking earlier ones.
///   This is the defining difference from [`Sequence`].
/// - child `i` returns `Failure`: reset `i` to 0, return `Failure`.
/// - child `i` returns `Success`: advance `i` and keep going within the same
///   tick; several children can complete in one call.
///
/// Exhausting the child list resets `i` to 0 and returns `Success`, so every
/// full pass starts clean.
///
/// Two mutually exclusive branches may reuse the same slot id, since only one
/// of them can be mid-resumption at a time; concurrently reachable branches
/// sharing a slot is a configuration error the engine does not detect.
///
/// [`BtMemory`]: crate::BtMemory
pub struct MemorySequence<A, W> {
    slot: usize,
    children: Vec<NodeRef<A, W>>,
}

impl<A, W> MemorySequence<A, W> {
    /// # Panics
    ///
    /// Panics if `children` is empty or its length does not fit the slot
    /// width.
    pub fn new(slot: usize, children: Vec<NodeRef<A, W>>) -> Self {
        assert!(
            !children.is_empty(),
            "MemorySequence must have at least one child"
        );
        assert!(
            children.len() <= usize::from(u16::MAX),
            "MemorySequence child count exceeds slot width"
        );
        Self { slot, children }
    }

    /// The actor memory slot this sequence resumes from.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl<A: Agent, W> Node<A, W> for MemorySequence<A, W> {
    fn tick(&self, ctx: &mut Context<'_, A, W>, dt: f32) -> Status {
        let count = self.children.len();
        loop {
            // Re-read every iteration: a child subtree may alias the slot.
            let i = usize::from(ctx.agent.bt_memory().get(self.slot));
            if i >= count {
                ctx.agent.bt_memory().set(self.slot, 0);
                return Status::Success;
            }
            match self.children[i].tick(ctx, dt) {
                Status::Running => return Status::Running,
                Status::Failure => {
                    ctx.agent.bt_memory().set(self.slot, 0);
                    return Status::Failure;
                }
                Status::Success => ctx.agent.bt_memory().set(self.slot, (i + 1) as u16),
            }
        }
    }

    fn max_memory_slot(&self) -> Option<usize> {
        let deepest = self
            .children
            .iter()
            .filter_map(|c| c.max_memory_slot())
            .max();
        Some(deepest.map_or(self.slot, |d| d.max(self.slot)))
    }
}
