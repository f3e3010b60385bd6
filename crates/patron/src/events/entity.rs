//! The entity-addressing part of an event.
//!
//! Concrete events embed an [`EntityEvent`] field instead of repeating the
//! target plumbing, and get [`TargetedEvent::resolve_target`] for free.

use engine_component::{Entity, World};
use serde::{Deserialize, Serialize};

/// The addressee of an event.
///
/// This carries no payload of its own. Events meant for one specific entity
/// embed it and implement [`TargetedEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityEvent {
    /// The addressed entity, as it was when the event was raised.
    pub target: Entity,
}

impl EntityEvent {
    /// An event addressed to `target`.
    #[must_use]
    pub fn new(target: Entity) -> Self {
        Self { target }
    }
}

/// An event addressed to a single entity.
pub trait TargetedEvent {
    /// The embedded addressing field.
    fn entity_event(&self) -> &EntityEvent;

    /// The raw target handle. May be null or stale.
    fn target(&self) -> Entity {
        self.entity_event().target
    }

    /// The target, if it is still alive in `world`.
    fn resolve_target(&self, world: &World) -> Option<Entity> {
        let target = self.target();
        world.is_alive(target).then_some(target)
    }
}

impl TargetedEvent for EntityEvent {
    fn entity_event(&self) -> &EntityEvent {
        self
    }
}
