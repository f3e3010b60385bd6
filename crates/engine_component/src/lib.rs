//! # engine_component
//!
//! The in-process ECS: entities, the component contract, and the storage the
//! simulation writes and script nodes read.
//!
//! - [`Entity`] — opaque `u64` handles, [`EntityAllocator`].
//! - [`Component`] — the trait every record type implements.
//! - [`ComponentStore`] — dense per-type storage with lookup and forward
//!   iteration.
//! - [`World`] — entity liveness and one store per component type.
//! - [`SharedWorld`] / [`WorldHandle`] — owning and non-owning access.

pub mod component;
pub mod entity;
pub mod error;
pub mod handle;
pub mod store;
pub mod world;

pub use component::{Component, ComponentTypeId};
pub use entity::{Entity, EntityAllocator};
pub use error::WorldError;
pub use handle::{SharedWorld, WorldHandle, shared};
pub use store::ComponentStore;
pub use world::World;
