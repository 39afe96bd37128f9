//! Per-sheep state and frame integration.

use std::fmt;

use flock_bt::{Agent, BtMemory};

use crate::math::Vec2;
use crate::rng::SplitMix64;
use crate::world;

/// What a sheep was last doing, as reported by the behavior leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Idle,
    Patrol,
    Flee,
    SeekFood,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Idle => "IDLE",
            Mode::Patrol => "PATROL",
            Mode::Flee => "FLEE",
            Mode::SeekFood => "SEEK FOOD",
        };
        f.write_str(label)
    }
}

/// One sheep.
///
/// Movement state is boids-style (steering forces accumulate into
/// `acceleration` each tick); decision state is the hunger pair, the patrol
/// waypoint, and the behavior tree memory that lets the patrol sequence
/// resume across frames.
#[derive(Debug, Clone)]
pub struct Entity {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Steering accumulator; cleared after every integration step so leaves
    /// must actively steer each tick.
    pub acceleration: Vec2,
    /// Grows over time, 0 (full) to 1 (starving).
    pub hunger: f32,
    pub is_hungry: bool,
    pub waypoint_index: usize,
    pub mode: Mode,
    memory: BtMemory,
}

impl Entity {
    pub const MIN_SPEED: f32 = 24.0;
    pub const MAX_SPEED: f32 = 200.0;
    pub const HUNGER_PER_SECOND: f32 = 0.04;
    pub const DRAG: f32 = 0.01;
    pub const SEEK_WEIGHT: f32 = 1.0;
    pub const FLEE_WEIGHT: f32 = 1.2;

    /// Spawns a sheep somewhere on the stage with a random heading, appetite
    /// and starting corner. `slots` is the owning brain's
    /// `required_slots()`.
    pub fn spawn(rng: &mut SplitMix64, slots: usize) -> Self {
        Self {
            position: Vec2::new(
                rng.next_range(0.0, world::STAGE_WIDTH),
                rng.next_range(0.0, world::STAGE_HEIGHT),
            ),
            velocity: Vec2::from_angle(
                rng.next_range(0.0, std::f32::consts::TAU),
                Self::MIN_SPEED,
            ),
            acceleration: Vec2::ZERO,
            hunger: rng.next_range(0.0, 1.0),
            is_hungry: false,
            waypoint_index: rng.next_index(world::WAYPOINT_COUNT),
            mode: Mode::Idle,
            memory: BtMemory::with_slots(slots),
        }
    }

    /// Integrates one frame: steering into velocity, velocity (clamped to
    /// the speed band) into position, wrap around the stage, then accumulate
    /// hunger.
    pub fn update(&mut self, dt: f32) {
        self.velocity += self.acceleration * dt;
        self.velocity = self.velocity.clamp_length(Self::MIN_SPEED, Self::MAX_SPEED);
        self.position += self.velocity * dt;
        self.position = world::wrap(self.position);
        self.acceleration = Vec2::ZERO;

        self.hunger = (self.hunger + Self::HUNGER_PER_SECOND * dt).clamp(0.0, 1.0);
    }
}

impl Agent for Entity {
    fn bt_memory(&mut self) -> &mut BtMemory {
        &mut self.memory
    }
}
