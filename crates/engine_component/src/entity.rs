//! Entity handles.
//!
//! Handles are numbers, nothing more. Whether a handle still names something
//! is the [`World`](crate::World)'s business; see
//! [`World::is_alive`](crate::World::is_alive).

use serde::{Deserialize, Serialize};

/// Handle to a patron, a raft, or anything else the world tracks.
///
/// Copies are free and may outlive the entity. Values arriving from outside
/// the simulation (node input ports, event targets) must be checked against
/// the world before component data is read through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl Entity {
    /// Handle `0`. No world ever hands it out.
    pub const NULL: Entity = Entity(0);

    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// `true` for [`Entity::NULL`]. A non-null handle may still be dead.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == Self::NULL.0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            f.write_str("Entity(null)")
        } else {
            write!(f, "Entity({})", self.0)
        }
    }
}

/// Issues handles `1, 2, 3, ...` and never repeats one.
///
/// No recycling: a despawned patron's handle held by a graph node keeps
/// resolving to nothing rather than to whoever spawned next.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    issued: u64,
}

impl EntityAllocator {
    /// Nothing issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> Entity {
        self.issued += 1;
        Entity(self.issued)
    }

    /// How many handles [`allocate`](Self::allocate) has returned.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_entity() {
        assert!(Entity::NULL.is_null());
        assert!(!Entity::from_raw(7).is_null());
    }

    #[test]
    fn test_allocator_never_yields_null() {
        let mut alloc = EntityAllocator::new();
        let first = alloc.allocate();
        assert!(!first.is_null());
        assert_eq!(first.id(), 1);
    }

    #[test]
    fn test_allocator_ids_are_sequential() {
        let mut alloc = EntityAllocator::new();
        let ids: Vec<u64> = (0..3).map(|_| alloc.allocate().id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(alloc.allocated(), 3);
    }

    #[test]
    fn test_entity_display() {
        assert_eq!(Entity::from_raw(12).to_string(), "Entity(12)");
        assert_eq!(Entity::NULL.to_string(), "Entity(null)");
    }
}
