//! Scene files: a raft and the patrons along its route.

use std::path::Path;

use anyhow::{Context, Result};
use engine_component::{Entity, World, WorldError};
use patron::{Patron, RailDenizen};
use serde::Deserialize;

/// Scene used when no `--scene` is given.
pub const DEFAULT_SCENE: &str = include_str!("../scenes/first_lap.json");

/// A raft start position and the patrons along the route.
#[derive(Debug, Deserialize)]
pub struct SceneFile {
    /// Lap the raft starts at.
    #[serde(default)]
    pub raft_lap: f32,
    /// Patrons to spawn, in order.
    pub patrons: Vec<PatronSpec>,
}

/// One patron entry of a scene file.
#[derive(Debug, Deserialize)]
pub struct PatronSpec {
    /// Label used in log records.
    pub name: String,
    /// Starting component record.
    #[serde(default)]
    pub patron: Patron,
    /// Raft laps at which the player lands food on this patron.
    #[serde(default)]
    pub fed_on_laps: Vec<f32>,
    /// Raft lap at which this patron gets knocked over.
    #[serde(default)]
    pub falls_on_lap: Option<f32>,
}

/// A patron placed in the world, with its scripted interactions.
#[derive(Debug)]
pub struct PlacedPatron {
    pub name: String,
    pub entity: Entity,
    pub fed_on_laps: Vec<f32>,
    pub falls_on_lap: Option<f32>,
}

impl SceneFile {
    /// Read and parse a scene file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing scene {}", path.display()))
    }

    /// Parse scene JSON.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Spawn the raft and every patron. Returns the raft.
    pub fn spawn(self, world: &mut World) -> Result<(Entity, Vec<PlacedPatron>), WorldError> {
        let raft = world.spawn();
        world.insert(raft, RailDenizen::at_lap(self.raft_lap))?;

        let mut placed = Vec::with_capacity(self.patrons.len());
        for spec in self.patrons {
            let entity = world.spawn();
            world.insert(entity, spec.patron)?;
            placed.push(PlacedPatron {
                name: spec.name,
                entity,
                fed_on_laps: spec.fed_on_laps,
                falls_on_lap: spec.falls_on_lap,
            });
        }
        Ok((raft, placed))
    }
}
