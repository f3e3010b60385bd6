//! Events raised against patrons.

use engine_component::World;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entity::{EntityEvent, TargetedEvent};
use crate::components::Patron;

/// The player landed food on a patron.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatronFedEvent {
    /// Addressed patron.
    #[serde(flatten)]
    pub event: EntityEvent,
    /// Raft lap at the moment of feeding.
    pub lap: f32,
}

impl PatronFedEvent {
    /// `event.target` was fed at raft lap `lap`.
    #[must_use]
    pub fn new(event: EntityEvent, lap: f32) -> Self {
        Self { event, lap }
    }

    /// Record the feeding on the target's [`Patron`] record.
    ///
    /// Returns `false` without touching the world if the target is gone or
    /// is not a patron.
    pub fn apply(&self, world: &mut World) -> bool {
        let Some(target) = self.resolve_target(world) else {
            debug!(target = %self.target(), "fed event for dead entity dropped");
            return false;
        };
        match world.get_mut::<Patron>(target) {
            Some(patron) => {
                patron.feed(self.lap);
                true
            }
            None => false,
        }
    }
}

impl TargetedEvent for PatronFedEvent {
    fn entity_event(&self) -> &EntityEvent {
        &self.event
    }
}

#[cfg(test)]
mod tests {
    use engine_component::Entity;

    use super::*;

    #[test]
    fn test_apply_feeds_patron() {
        let mut world = World::new();
        let p = world.spawn();
        world.insert(p, Patron::new()).unwrap();

        assert!(PatronFedEvent::new(EntityEvent::new(p), 1.4).apply(&mut world));
        assert_eq!(world.get::<Patron>(p).map(|p| p.last_lap_fed), Some(1.4));
    }

    #[test]
    fn test_apply_ignores_non_patron() {
        let mut world = World::new();
        let rock = world.spawn();
        assert!(!PatronFedEvent::new(EntityEvent::new(rock), 1.0).apply(&mut world));
    }

    #[test]
    fn test_apply_ignores_stale_target() {
        let mut world = World::new();
        let p = world.spawn();
        world.insert(p, Patron::new()).unwrap();
        world.despawn(p).unwrap();
        assert!(!PatronFedEvent::new(EntityEvent::new(p), 1.0).apply(&mut world));
        assert!(!PatronFedEvent::new(EntityEvent::new(Entity::NULL), 1.0).apply(&mut world));
    }

    #[test]
    fn test_flattened_json_shape() {
        let event = PatronFedEvent::new(EntityEvent::new(Entity::from_raw(3)), 2.0);
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json, serde_json::json!({ "target": 3, "lap": 2.0 }));
    }
}
