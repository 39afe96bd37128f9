//! Leaf condition/action library for the sheep tree.
//!
//! Every function here is a stateless `LeafFn`: anything that must persist
//! across ticks lives in the [`Entity`] or, for the patrol sequence, in its
//! behavior tree memory.

use flock_bt::{Context, Status};

use crate::entity::{Entity, Mode};
use crate::steering;
use crate::world::World;

/// Context type all sheep leaves share.
pub type SheepContext<'a> = Context<'a, Entity, World>;

/// Wolf proximity that counts as a threat.
pub const THREAT_RADIUS: f32 = 180.0;
/// Arrival distance for patrol corners.
pub const WAYPOINT_RADIUS: f32 = 12.0;
/// Eating distance from the food.
pub const FOOD_RADIUS: f32 = 16.0;

const HUNGER_ENTER: f32 = 0.65;
const HUNGER_EXIT: f32 = 0.45;

/// Condition: is the wolf active and close?
pub fn threat_nearby(ctx: &mut SheepContext<'_>, _dt: f32) -> Status {
    if !ctx.world.wolf_active {
        return Status::Failure;
    }
    if ctx.agent.position.distance(ctx.world.wolf_pos) < THREAT_RADIUS {
        Status::Success
    } else {
        Status::Failure
    }
}

/// Condition: is the sheep hungry? Hysteresis keeps it from flapping at the
/// threshold: enter hungry above 0.65, exit below 0.45.
pub fn check_hunger(ctx: &mut SheepContext<'_>, _dt: f32) -> Status {
    let sheep = &mut *ctx.agent;
    if !sheep.is_hungry && sheep.hunger > HUNGER_ENTER {
        sheep.is_hungry = true;
    }
    if sheep.is_hungry && sheep.hunger < HUNGER_EXIT {
        sheep.is_hungry = false;
    }
    if sheep.is_hungry {
        Status::Success
    } else {
        Status::Failure
    }
}

/// Action: run from the wolf. Never completes; the guarding condition ends
/// it by failing once the wolf is gone.
pub fn do_flee(ctx: &mut SheepContext<'_>, _dt: f32) -> Status {
    ctx.agent.mode = Mode::Flee;
    let push = steering::flee(ctx.agent, ctx.world.wolf_pos, Entity::MAX_SPEED)
        + steering::drag(ctx.agent);
    ctx.agent.acceleration += push;
    Status::Running
}

/// Action: head for the current patrol corner; succeeds on arrival.
pub fn move_to_corner(ctx: &mut SheepContext<'_>, _dt: f32) -> Status {
    ctx.agent.mode = Mode::Patrol;
    let target = ctx.world.waypoints[ctx.agent.waypoint_index];
    let dist = ctx.agent.position.distance(target);

    let accel = steering::seek(ctx.agent, target, Entity::MAX_SPEED * 0.65)
        + steering::drag(ctx.agent);
    ctx.agent.acceleration = accel;

    if dist <= WAYPOINT_RADIUS {
        Status::Success
    } else {
        Status::Running
    }
}

/// Action: rotate to the next patrol corner. Completes instantly.
pub fn advance_corner(ctx: &mut SheepContext<'_>, _dt: f32) -> Status {
    ctx.agent.waypoint_index = (ctx.agent.waypoint_index + 1) % ctx.world.waypoints.len();
    Status::Success
}

/// Action: head for the food; eating resets hunger and succeeds.
pub fn seek_food(ctx: &mut SheepContext<'_>, _dt: f32) -> Status {
    ctx.agent.mode = Mode::SeekFood;
    let accel = steering::seek(ctx.agent, ctx.world.food_pos, Entity::MAX_SPEED * 0.7)
        + steering::drag(ctx.agent);
    ctx.agent.acceleration = accel;

    if ctx.agent.position.distance(ctx.world.food_pos) < FOOD_RADIUS {
        ctx.agent.hunger = 0.0;
        ctx.agent.is_hungry = false;
        Status::Success
    } else {
        Status::Running
    }
}
