//! # river_ride
//!
//! Headless raft ride. Loads a scene, registers the patron node module, then
//! advances the raft along its rail and evaluates `check_delicious_cycle` and
//! one `patron_upright` per patron every tick, the way a level graph would.

mod scene;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use engine_component::{WorldHandle, shared};
use engine_graph::{EventSystem, NodeInstance, Value};
use patron::{
    CHECK_DELICIOUS_CYCLE, EntityEvent, PATRON_UPRIGHT, Patron, PatronFedEvent,
    PatronModuleConfig, PatronState, RailDenizen, initialize_patron_module_with,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use scene::{DEFAULT_SCENE, SceneFile};

#[derive(Parser)]
#[command(name = "river_ride", about = "Ride the raft and watch the patron nodes")]
struct Args {
    /// Scene file (JSON). Uses the built-in first-lap scene when omitted.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Stop once the raft reaches this lap.
    #[arg(long, default_value_t = 3.0)]
    laps: f32,

    /// Laps travelled per tick.
    #[arg(long, default_value_t = 0.05)]
    step: f32,

    /// Width of the feeding window in laps.
    #[arg(long, default_value_t = patron::LAP_DURATION)]
    lap_duration: f32,
}

impl Args {
    /// Reject values that would keep the ride from ever finishing.
    fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            bail!("--step must be a positive number, got {}", self.step);
        }
        if !self.laps.is_finite() {
            bail!("--laps must be finite, got {}", self.laps);
        }
        if !(self.lap_duration.is_finite() && self.lap_duration >= 0.0) {
            bail!(
                "--lap-duration must be a non-negative number, got {}",
                self.lap_duration
            );
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    args.validate()?;

    let scene = match &args.scene {
        Some(path) => SceneFile::load(path)?,
        None => SceneFile::parse(DEFAULT_SCENE)?,
    };

    let world = shared(Default::default());
    let (raft, patrons) = scene.spawn(&mut world.borrow_mut())?;
    info!(%raft, patrons = patrons.len(), "scene loaded");

    let mut events = EventSystem::new();
    let config = PatronModuleConfig::new().with_lap_duration(args.lap_duration);
    initialize_patron_module_with(&mut events, &WorldHandle::new(&world), &config)?;

    let mut cycle = events.instantiate(&config.module_name, CHECK_DELICIOUS_CYCLE)?;
    cycle.set_input(1, Some(raft.into()))?;
    cycle.initialize()?;

    let mut upright: Vec<NodeInstance> = Vec::with_capacity(patrons.len());
    for placed in &patrons {
        let mut node = events.instantiate(&config.module_name, PATRON_UPRIGHT)?;
        node.set_input(0, Some(placed.entity.into()))?;
        node.initialize()?;
        upright.push(node);
    }

    let mut last_cycle = None;
    let mut tick: u64 = 0;
    loop {
        let to = {
            let mut w = world.borrow_mut();
            let Some(rail) = w.get_mut::<RailDenizen>(raft) else {
                bail!("raft lost its rail");
            };
            let from = rail.lap;
            rail.advance(args.step);
            let to = rail.lap;
            if to <= from {
                bail!("--step {} is too small to move the raft past lap {from}", args.step);
            }

            for placed in &patrons {
                for &lap in placed.fed_on_laps.iter().filter(|&&lap| from < lap && lap <= to) {
                    if PatronFedEvent::new(EntityEvent::new(placed.entity), lap).apply(&mut w) {
                        info!(tick, patron = placed.name, lap, "patron fed");
                    }
                }
                if placed.falls_on_lap.is_some_and(|lap| from < lap && lap <= to)
                    && let Some(record) = w.get_mut::<Patron>(placed.entity)
                {
                    record.state = PatronState::LayingDown;
                    info!(tick, patron = placed.name, "patron knocked over");
                }
            }
            to
        };

        cycle.set_input(0, Some(Value::Pulse))?;
        if let Err(err) = cycle.execute() {
            warn!(tick, error = %err, "cycle check skipped");
        }
        let all_fed = cycle.output(0);
        if all_fed != last_cycle {
            info!(tick, lap = to, ?all_fed, "delicious cycle changed");
            last_cycle = all_fed;
        }

        for (placed, node) in patrons.iter().zip(upright.iter_mut()) {
            if node.execute().is_ok() && node.output(0) == Some(Value::Bool(false)) {
                debug!(tick, patron = placed.name, "patron not upright");
            }
        }

        tick += 1;
        if to >= args.laps {
            break;
        }
    }

    info!(
        ticks = tick,
        final_cycle = ?last_cycle,
        "ride finished"
    );
    Ok(())
}
