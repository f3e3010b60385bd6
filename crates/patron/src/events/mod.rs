//! Events addressed to specific entities.

pub mod entity;
pub mod patron;

pub use entity::{EntityEvent, TargetedEvent};
pub use patron::PatronFedEvent;
