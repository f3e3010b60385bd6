//! World-level error types.

use crate::entity::Entity;

/// Errors raised by [`World`](crate::World) and [`WorldHandle`](crate::WorldHandle).
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The entity is null, was never spawned, or has been despawned.
    #[error("entity {0} is not alive")]
    EntityNotFound(Entity),

    /// The world a handle points at has been dropped.
    #[error("world has been dropped")]
    Dropped,

    /// The world is currently borrowed mutably by the simulation.
    #[error("world is mutably borrowed")]
    Busy,

    /// Two component types share a name, so they map to the same store.
    #[error("component name '{name}' is already used by another type")]
    ComponentTypeConflict { name: &'static str },
}
