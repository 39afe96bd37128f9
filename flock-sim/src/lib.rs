//! Herding simulation built on `flock-bt`.
//!
//! Sheep wander a toroidal stage, patrolling its corners, fleeing an
//! oscillating wolf and seeking food when hungry. All decision making goes
//! through one shared behavior tree ([`sheep_brain`]); per-sheep state lives
//! in [`Entity`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod behaviors;
pub mod entity;
pub mod math;
pub mod rng;
pub mod steering;
pub mod tree;
pub mod world;

pub use entity::{Entity, Mode};
pub use math::Vec2;
pub use rng::SplitMix64;
pub use tree::{sheep_brain, PATROL_SLOT};
pub use world::World;
