//! Whole-tree behavior: priority order, interruptions, and patrol resumption.

use flock_bt::{Agent, Context, Status};
use flock_sim::{behaviors, sheep_brain, world, Entity, Mode, SplitMix64, Vec2, World,
    PATROL_SLOT};

fn calm_world() -> World {
    let mut w = World::new();
    w.wolf_active = false;
    w
}

fn test_sheep(slots: usize) -> Entity {
    let mut rng = SplitMix64::new(7);
    let mut sheep = Entity::spawn(&mut rng, slots);
    // Park it mid-stage, fed and slow, so each test perturbs one thing.
    sheep.position = Vec2::new(world::STAGE_WIDTH * 0.5, world::STAGE_HEIGHT * 0.5);
    sheep.velocity = Vec2::new(Entity::MIN_SPEED, 0.0);
    sheep.hunger = 0.0;
    sheep.is_hungry = false;
    sheep.waypoint_index = 0;
    sheep
}

fn tick(brain: &flock_bt::Brain<Entity, World>, sheep: &mut Entity, world: &mut World) -> Status {
    let mut ctx = Context::new(sheep, world);
    brain.tick(&mut ctx, 1.0 / 60.0)
}

#[test]
fn calm_fed_sheep_patrols() {
    let brain = sheep_brain();
    let mut world = calm_world();
    let mut sheep = test_sheep(brain.required_slots());

    let status = tick(&brain, &mut sheep, &mut world);
    // The patrol loop never completes, so the root always reports Running.
    assert_eq!(status, Status::Running);
    assert_eq!(sheep.mode, Mode::Patrol);
    assert!(sheep.acceleration.length() > 0.0);
}

#[test]
fn nearby_wolf_preempts_everything() {
    let brain = sheep_brain();
    let mut world = World::new();
    let mut sheep = test_sheep(brain.required_slots());
    sheep.hunger = 1.0; // hungry too, but the threat branch outranks food
    world.wolf_pos = sheep.position + Vec2::new(50.0, 0.0);

    assert_eq!(tick(&brain, &mut sheep, &mut world), Status::Running);
    assert_eq!(sheep.mode, Mode::Flee);
    // Steering pushes away from the wolf.
    assert!(sheep.acceleration.x < 0.0);
}

#[test]
fn inactive_wolf_is_no_threat() {
    let brain = sheep_brain();
    let mut world = calm_world();
    let mut sheep = test_sheep(brain.required_slots());
    world.wolf_pos = sheep.position; // right on top, but toggled off

    let _ = tick(&brain, &mut sheep, &mut world);
    assert_ne!(sheep.mode, Mode::Flee);
}

#[test]
fn hungry_sheep_seeks_food_until_it_eats() {
    let brain = sheep_brain();
    let mut world = calm_world();
    let mut sheep = test_sheep(brain.required_slots());
    sheep.hunger = 0.9;

    assert_eq!(tick(&brain, &mut sheep, &mut world), Status::Running);
    assert_eq!(sheep.mode, Mode::SeekFood);
    assert!(sheep.is_hungry);

    // Arrive at the food: the feed branch completes and hunger resets.
    sheep.position = world.food_pos;
    let status = tick(&brain, &mut sheep, &mut world);
    assert_eq!(status, Status::Success);
    assert_eq!(sheep.hunger, 0.0);
    assert!(!sheep.is_hungry);
}

#[test]
fn hunger_hysteresis_keeps_moderately_full_sheep_grazing() {
    let brain = sheep_brain();
    let mut world = calm_world();
    let mut sheep = test_sheep(brain.required_slots());
    // Above the exit threshold but below the enter threshold: not hungry
    // unless it already was.
    sheep.hunger = 0.55;

    let _ = tick(&brain, &mut sheep, &mut world);
    assert_eq!(sheep.mode, Mode::Patrol);

    sheep.is_hungry = true;
    let _ = tick(&brain, &mut sheep, &mut world);
    assert_eq!(sheep.mode, Mode::SeekFood);
}

#[test]
fn arrival_advances_to_the_next_corner() {
    let brain = sheep_brain();
    let mut world = calm_world();
    let mut sheep = test_sheep(brain.required_slots());
    sheep.position = world.waypoints[0];

    let _ = tick(&brain, &mut sheep, &mut world);
    // move_to_corner and advance_corner both complete in this tick, so the
    // memory sequence wraps and its slot resets.
    assert_eq!(sheep.waypoint_index, 1);
    assert_eq!(sheep.bt_memory().get(PATROL_SLOT), 0);
}

#[test]
fn patrol_target_survives_a_flee_interruption() {
    let brain = sheep_brain();
    let mut world = calm_world();
    let mut sheep = test_sheep(brain.required_slots());
    sheep.waypoint_index = 2;

    let _ = tick(&brain, &mut sheep, &mut world);
    assert_eq!(sheep.mode, Mode::Patrol);

    // Wolf shows up: flee for a few frames.
    world.wolf_active = true;
    world.wolf_pos = sheep.position + Vec2::new(10.0, 0.0);
    for _ in 0..3 {
        let _ = tick(&brain, &mut sheep, &mut world);
        assert_eq!(sheep.mode, Mode::Flee);
    }

    // Wolf leaves: back to the same corner, not a restarted mission.
    world.wolf_active = false;
    let _ = tick(&brain, &mut sheep, &mut world);
    assert_eq!(sheep.mode, Mode::Patrol);
    assert_eq!(sheep.waypoint_index, 2);
}

#[test]
fn threat_radius_is_a_hard_edge() {
    let brain = sheep_brain();
    let mut world = World::new();
    let mut sheep = test_sheep(brain.required_slots());

    world.wolf_pos = sheep.position + Vec2::new(behaviors::THREAT_RADIUS + 1.0, 0.0);
    let _ = tick(&brain, &mut sheep, &mut world);
    assert_ne!(sheep.mode, Mode::Flee);

    world.wolf_pos = sheep.position + Vec2::new(behaviors::THREAT_RADIUS - 1.0, 0.0);
    let _ = tick(&brain, &mut sheep, &mut world);
    assert_eq!(sheep.mode, Mode::Flee);
}

#[test]
fn one_brain_drives_a_whole_flock() {
    let brain = sheep_brain();
    let mut world = calm_world();
    let mut rng = SplitMix64::new(3);
    let mut flock: Vec<Entity> = (0..8)
        .map(|_| Entity::spawn(&mut rng, brain.required_slots()))
        .collect();
    for sheep in &mut flock {
        brain.validate_memory(sheep.bt_memory());
        sheep.hunger = 0.0;
        sheep.is_hungry = false;
    }

    // A short headless run: every sheep keeps making decisions and stays on
    // the stage.
    for _ in 0..120 {
        world.update(1.0 / 60.0);
        for sheep in &mut flock {
            let _ = tick(&brain, sheep, &mut world);
            sheep.update(1.0 / 60.0);
        }
    }
    for sheep in &flock {
        assert_ne!(sheep.mode, Mode::Idle);
        assert!(sheep.position.x >= 0.0 && sheep.position.x < world::STAGE_WIDTH);
        assert!(sheep.position.y >= 0.0 && sheep.position.y < world::STAGE_HEIGHT);
    }
}
