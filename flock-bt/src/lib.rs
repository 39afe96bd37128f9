//! Tick-driven behavior tree engine with per-actor resumption memory.
//!
//! A tree is assembled once at startup, is immutable afterwards, and is shared
//! (via [`NodeRef`]) across every actor that uses it. The only state that
//! survives between ticks is a small per-actor slot array ([`BtMemory`]) that
//! [`MemorySequence`] nodes use to resume mid-sequence; everything else is
//! reconstructed each frame by re-descending from the root.
//!
//! - [`Status`]: three-valued tick outcome (Success / Failure / Running)
//! - [`Node`]: evaluation contract, generic over the actor and world types
//! - Composite nodes: [`Sequence`], [`Selector`], [`MemorySequence`]
//! - Decorator nodes: [`RepeatForever`]
//! - [`Leaf`]: adapts a stateless `fn` pointer to the node contract
//! - [`Brain`]: owns the root and is the driver's single entry point

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod brain;
pub mod composite;
pub mod context;
pub mod decorator;
pub mod leaf;
pub mod memory;
pub mod node;
pub mod status;

pub use agent::Agent;
pub use brain::Brain;
pub use composite::{MemorySequence, Selector, Sequence};
pub use context::Context;
pub use decorator::RepeatForever;
pub use leaf::{Leaf, LeafFn};
pub use memory::BtMemory;
pub use node::{Node, NodeRef};
pub use status::Status;
