//! Shared simulation state: the stage, the wolf, the food, the waypoints.

use crate::math::Vec2;

pub const STAGE_WIDTH: f32 = 1280.0;
pub const STAGE_HEIGHT: f32 = 720.0;
pub const WAYPOINT_COUNT: usize = 4;

const WAYPOINT_MARGIN: f32 = 100.0;

/// Everything the sheep perceive besides each other.
///
/// Opaque to the behavior tree engine; leaf behaviors read and write it
/// through the tick context.
#[derive(Debug, Clone)]
pub struct World {
    pub food_pos: Vec2,
    pub wolf_pos: Vec2,
    pub wolf_active: bool,
    /// Patrol corners, visited in index order.
    pub waypoints: [Vec2; WAYPOINT_COUNT],
    elapsed: f32,
}

impl World {
    pub fn new() -> Self {
        Self {
            food_pos: Vec2::new(STAGE_WIDTH * 0.25, STAGE_HEIGHT * 0.5),
            wolf_pos: Vec2::new(STAGE_WIDTH * 0.75, STAGE_HEIGHT * 0.5),
            wolf_active: true,
            waypoints: [
                Vec2::new(WAYPOINT_MARGIN, WAYPOINT_MARGIN),
                Vec2::new(STAGE_WIDTH - WAYPOINT_MARGIN, WAYPOINT_MARGIN),
                Vec2::new(STAGE_WIDTH - WAYPOINT_MARGIN, STAGE_HEIGHT - WAYPOINT_MARGIN),
                Vec2::new(WAYPOINT_MARGIN, STAGE_HEIGHT - WAYPOINT_MARGIN),
            ],
            elapsed: 0.0,
        }
    }

    /// Advances the environment by one frame: the wolf sweeps the stage on a
    /// Lissajous path around the center.
    pub fn update(&mut self, dt: f32) {
        const CENTER: Vec2 = Vec2::new(STAGE_WIDTH * 0.5, STAGE_HEIGHT * 0.5);
        const SPEED: Vec2 = Vec2::new(0.7, 1.1);
        const RANGE: Vec2 = Vec2::new(STAGE_WIDTH * 0.28, STAGE_HEIGHT * 0.22);

        self.elapsed += dt;
        self.wolf_pos.x = CENTER.x + (self.elapsed * SPEED.x).cos() * RANGE.x;
        self.wolf_pos.y = CENTER.y + (self.elapsed * SPEED.y).sin() * RANGE.y;
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Toroidal stage: positions leaving one edge re-enter at the opposite one.
pub fn wrap(p: Vec2) -> Vec2 {
    let mut p = p;
    if p.x < 0.0 {
        p.x += STAGE_WIDTH;
    }
    if p.x >= STAGE_WIDTH {
        p.x -= STAGE_WIDTH;
    }
    if p.y < 0.0 {
        p.y += STAGE_HEIGHT;
    }
    if p.y >= STAGE_HEIGHT {
        p.y -= STAGE_HEIGHT;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_reenters_on_opposite_edge() {
        assert_eq!(wrap(Vec2::new(-5.0, 100.0)).x, STAGE_WIDTH - 5.0);
        assert_eq!(wrap(Vec2::new(STAGE_WIDTH + 5.0, 100.0)).x, 5.0);
        assert_eq!(wrap(Vec2::new(100.0, -5.0)).y, STAGE_HEIGHT - 5.0);
        assert_eq!(wrap(Vec2::new(100.0, STAGE_HEIGHT + 5.0)).y, 5.0);

        let inside = Vec2::new(640.0, 360.0);
        assert_eq!(wrap(inside), inside);
    }

    #[test]
    fn wolf_stays_within_its_sweep_range() {
        let mut world = World::new();
        for _ in 0..600 {
            world.update(1.0 / 60.0);
            assert!(world.wolf_pos.x >= STAGE_WIDTH * 0.5 - STAGE_WIDTH * 0.28 - 1e-3);
            assert!(world.wolf_pos.x <= STAGE_WIDTH * 0.5 + STAGE_WIDTH * 0.28 + 1e-3);
            assert!(world.wolf_pos.y >= STAGE_HEIGHT * 0.5 - STAGE_HEIGHT * 0.22 - 1e-3);
            assert!(world.wolf_pos.y <= STAGE_HEIGHT * 0.5 + STAGE_HEIGHT * 0.22 + 1e-3);
        }
    }
}
