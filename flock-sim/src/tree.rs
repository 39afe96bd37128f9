//! Assembly of the sheep behavior tree.

use std::sync::Arc;

use flock_bt::{Brain, Leaf, LeafFn, MemorySequence, NodeRef, RepeatForever, Selector, Sequence};

use crate::behaviors;
use crate::entity::Entity;
use crate::world::World;

/// Memory slot holding the patrol sequence's resumption index.
pub const PATROL_SLOT: usize = 0;

fn leaf(f: LeafFn<Entity, World>) -> NodeRef<Entity, World> {
    Arc::new(Leaf::new(f))
}

/// Builds the demo brain: flee the wolf, else eat when hungry, else patrol
/// the corners forever.
///
/// Branch order is priority order. The patrol loop sits last behind a
/// [`RepeatForever`] so it can never complete and is always available as the
/// fallback; its inner [`MemorySequence`] lets a sheep resume the leg it was
/// on after a flee or feeding interruption.
pub fn sheep_brain() -> Brain<Entity, World> {
    let flee = Arc::new(Sequence::new(vec![
        leaf(behaviors::threat_nearby),
        leaf(behaviors::do_flee),
    ]));

    let feed = Arc::new(Sequence::new(vec![
        leaf(behaviors::check_hunger),
        leaf(behaviors::seek_food),
    ]));

    let patrol = Arc::new(RepeatForever::new(Arc::new(MemorySequence::new(
        PATROL_SLOT,
        vec![
            leaf(behaviors::move_to_corner),
            leaf(behaviors::advance_corner),
        ],
    ))));

    Brain::new(Arc::new(Selector::new(vec![flee, feed, patrol])))
}
