//! Leaf nodes: stateless conditions and actions.

use crate::{Context, Node, Status};

/// Signature of a leaf condition or action.
///
/// A plain `fn` pointer rather than a boxed closure, on purpose: leaves must
/// be stateless, and a fn pointer cannot capture anything. Whatever needs to
/// persist across ticks belongs in the actor (ordinary fields, or a
/// composite's memory slot), never in the leaf.
pub type LeafFn<A, W> = fn(&mut Context<'_, A, W>, f32) -> Status;

/// Adapts one [`LeafFn`] to the [`Node`] contract by direct delegation.
pub struct Leaf<A, W> {
    f: LeafFn<A, W>,
}

impl<A, W> Leaf<A, W> {
    pub fn new(f: LeafFn<A, W>) -> Self {
        Self { f }
    }
}

impl<A, W> Node<A, W> for Leaf<A, W> {
    #[inline]
    fn tick(&self, ctx: &mut Context<'_, A, W>, dt: f32) -> Status {
        (self.f)(ctx, dt)
    }
}
