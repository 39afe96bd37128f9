//! Steering forces for navigating the stage.

use crate::entity::Entity;
use crate::math::Vec2;

const FALLBACK_DIR: Vec2 = Vec2::new(1.0, 0.0);

/// Force steering toward `target` at `max_speed`.
pub fn seek(e: &Entity, target: Vec2, max_speed: f32) -> Vec2 {
    let toward = (target - e.position).normalized_or(FALLBACK_DIR);
    (toward * max_speed - e.velocity) * Entity::SEEK_WEIGHT
}

/// Force steering directly away from `threat` at `max_speed`.
pub fn flee(e: &Entity, threat: Vec2, max_speed: f32) -> Vec2 {
    let away = (e.position - threat).normalized_or(FALLBACK_DIR);
    (away * max_speed - e.velocity) * Entity::FLEE_WEIGHT
}

/// Velocity-proportional damping.
pub fn drag(e: &Entity) -> Vec2 {
    e.velocity * -Entity::DRAG
}
