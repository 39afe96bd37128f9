//! Headless driver for the herding demo.
//!
//! Runs the simulation at a fixed timestep with no window: one shared brain,
//! any number of sheep, periodic mode summaries on the log. There is no
//! interactive input; the wolf can only be disabled up front with
//! `--no-wolf`.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use flock_bt::Context;
use flock_sim::{sheep_brain, Entity, Mode, SplitMix64, World};

#[derive(Parser)]
#[command(name = "flock", about = "Headless behavior tree herding demo", version)]
struct Cli {
    /// Number of sheep to simulate
    #[arg(long, default_value_t = 3)]
    sheep: usize,

    /// Number of frames to run
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Fixed timestep in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Seed for sheep spawning
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Start with the wolf disabled
    #[arg(long)]
    no_wolf: bool,

    /// Log a flock summary every N frames
    #[arg(long, default_value_t = 60)]
    log_every: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    fmt().with_env_filter(filter).with_target(false).init();

    if !(cli.dt > 0.0) {
        anyhow::bail!("--dt must be positive");
    }
    if cli.sheep == 0 {
        anyhow::bail!("--sheep must be at least 1");
    }

    let brain = sheep_brain();
    let mut world = World::new();
    world.wolf_active = !cli.no_wolf;

    let mut rng = SplitMix64::new(cli.seed);
    let mut flock: Vec<Entity> = (0..cli.sheep)
        .map(|_| Entity::spawn(&mut rng, brain.required_slots()))
        .collect();

    tracing::info!(
        sheep = flock.len(),
        frames = cli.frames,
        seed = cli.seed,
        wolf = world.wolf_active,
        "starting simulation"
    );

    for frame in 0..cli.frames {
        world.update(cli.dt);
        for sheep in flock.iter_mut() {
            let mut ctx = Context::new(sheep, &mut world);
            let _ = brain.tick(&mut ctx, cli.dt);
            sheep.update(cli.dt);
        }

        if frame % cli.log_every == 0 {
            log_summary(frame, &flock);
            for (i, sheep) in flock.iter().enumerate() {
                tracing::debug!(
                    sheep = i,
                    mode = %sheep.mode,
                    x = sheep.position.x,
                    y = sheep.position.y,
                    hunger = sheep.hunger,
                    waypoint = sheep.waypoint_index,
                    "sheep state"
                );
            }
        }
    }

    log_summary(cli.frames, &flock);
    tracing::info!("simulation finished");
    Ok(())
}

fn log_summary(frame: u64, flock: &[Entity]) {
    let count = |mode: Mode| flock.iter().filter(|s| s.mode == mode).count();
    tracing::info!(
        frame,
        patrol = count(Mode::Patrol),
        flee = count(Mode::Flee),
        seeking = count(Mode::SeekFood),
        "flock status"
    );
}
