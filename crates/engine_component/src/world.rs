//! The [`World`]: entity liveness plus one [`ComponentStore`] per component
//! type.
//!
//! The world is the single owner of all component records. The simulation
//! mutates it; everything else (script nodes, event consumers) reads it
//! through a [`WorldHandle`](crate::WorldHandle).

use std::any::Any;
use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::component::{Component, ComponentTypeId};
use crate::entity::{Entity, EntityAllocator};
use crate::error::WorldError;
use crate::store::ComponentStore;

/// Type-erased view of a [`ComponentStore`], so the world can drop an
/// entity's records without knowing their types.
trait ErasedStore {
    fn remove_entity(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ErasedStore for ComponentStore<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Entity and component storage.
pub struct World {
    allocator: EntityAllocator,
    alive: HashSet<Entity>,
    stores: HashMap<ComponentTypeId, Box<dyn ErasedStore>>,
}

impl World {
    /// A world with no entities and no component stores.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            alive: HashSet::new(),
            stores: HashMap::new(),
        }
    }

    /// Create a new entity with no components.
    pub fn spawn(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        self.alive.insert(entity);
        entity
    }

    /// Destroy `entity` and every component record attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EntityNotFound`] if the entity is not alive.
    pub fn despawn(&mut self, entity: Entity) -> Result<(), WorldError> {
        if !self.alive.remove(&entity) {
            return Err(WorldError::EntityNotFound(entity));
        }
        for store in self.stores.values_mut() {
            store.remove_entity(entity);
        }
        debug!(%entity, "despawned");
        Ok(())
    }

    /// Returns `true` if `entity` is non-null and has not been despawned.
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.contains(&entity)
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.alive.len()
    }

    /// Attach a component record to a live entity, returning the previous
    /// record of the same type if there was one.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::EntityNotFound`] if the entity is not alive, or
    /// [`WorldError::ComponentTypeConflict`] if another component type already
    /// claimed `T`'s name.
    pub fn insert<T: Component>(
        &mut self,
        entity: Entity,
        record: T,
    ) -> Result<Option<T>, WorldError> {
        if !self.is_alive(entity) {
            return Err(WorldError::EntityNotFound(entity));
        }
        Ok(self.store_mut::<T>()?.insert(entity, record))
    }

    /// Detach the `T` record from `entity`.
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.stores
            .get_mut(&T::component_type_id())
            .and_then(|store| store.as_any_mut().downcast_mut::<ComponentStore<T>>())
            .and_then(|store| store.remove(entity))
    }

    /// Look up the `T` record of `entity`.
    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.store::<T>().and_then(|store| store.get(entity))
    }

    /// Mutable lookup of the `T` record of `entity`.
    #[must_use]
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.stores
            .get_mut(&T::component_type_id())
            .and_then(|store| store.as_any_mut().downcast_mut::<ComponentStore<T>>())
            .and_then(|store| store.get_mut(entity))
    }

    /// Forward iteration over every entity holding a `T`, in store order.
    pub fn iter<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.store::<T>().into_iter().flat_map(|store| store.iter())
    }

    /// Number of entities holding a `T`.
    #[must_use]
    pub fn count<T: Component>(&self) -> usize {
        self.store::<T>().map_or(0, ComponentStore::len)
    }

    /// The store for `T`, if any record of that type was ever inserted.
    #[must_use]
    pub fn store<T: Component>(&self) -> Option<&ComponentStore<T>> {
        self.stores
            .get(&T::component_type_id())
            .and_then(|store| store.as_any().downcast_ref::<ComponentStore<T>>())
    }

    fn store_mut<T: Component>(&mut self) -> Result<&mut ComponentStore<T>, WorldError> {
        self.stores
            .entry(T::component_type_id())
            .or_insert_with(|| Box::new(ComponentStore::<T>::new()))
            .as_any_mut()
            .downcast_mut::<ComponentStore<T>>()
            .ok_or(WorldError::ComponentTypeConflict {
                name: T::type_name(),
            })
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.alive.len())
            .field("component_types", &self.stores.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Mood(i32);

    impl Component for Mood {
        fn type_name() -> &'static str {
            "Mood"
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Seat(u8);

    impl Component for Seat {
        fn type_name() -> &'static str {
            "Seat"
        }
    }

    #[test]
    fn test_spawn_is_alive() {
        let mut world = World::new();
        let e = world.spawn();
        assert!(world.is_alive(e));
        assert!(!world.is_alive(Entity::NULL));
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn test_insert_requires_live_entity() {
        let mut world = World::new();
        let result = world.insert(Entity::from_raw(42), Mood(1));
        assert!(matches!(result, Err(WorldError::EntityNotFound(_))));
    }

    #[test]
    fn test_get_per_type() {
        let mut world = World::new();
        let e = world.spawn();
        world.insert(e, Mood(3)).unwrap();
        assert_eq!(world.get::<Mood>(e), Some(&Mood(3)));
        assert!(world.get::<Seat>(e).is_none());
    }

    #[test]
    fn test_despawn_drops_records() {
        let mut world = World::new();
        let e = world.spawn();
        world.insert(e, Mood(1)).unwrap();
        world.insert(e, Seat(2)).unwrap();

        world.despawn(e).unwrap();
        assert!(!world.is_alive(e));
        assert_eq!(world.count::<Mood>(), 0);
        assert_eq!(world.count::<Seat>(), 0);
        assert!(matches!(world.despawn(e), Err(WorldError::EntityNotFound(_))));
    }

    #[test]
    fn test_iter_only_holders() {
        let mut world = World::new();
        let a = world.spawn();
        let b = world.spawn();
        let _c = world.spawn();
        world.insert(a, Mood(1)).unwrap();
        world.insert(b, Mood(2)).unwrap();

        let holders: Vec<Entity> = world.iter::<Mood>().map(|(e, _)| e).collect();
        assert_eq!(holders, vec![a, b]);
        assert_eq!(world.iter::<Seat>().count(), 0);
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct OtherMood(i32);

    impl Component for OtherMood {
        fn type_name() -> &'static str {
            "Mood"
        }
    }

    #[test]
    fn test_name_clash_is_an_error() {
        let mut world = World::new();
        let e = world.spawn();
        world.insert(e, Mood(1)).unwrap();

        let err = world.insert(e, OtherMood(2)).unwrap_err();
        assert!(matches!(
            err,
            WorldError::ComponentTypeConflict { name: "Mood" }
        ));
        assert!(world.get::<OtherMood>(e).is_none());
        assert_eq!(world.get::<Mood>(e), Some(&Mood(1)));
    }

    #[test]
    fn test_remove_and_get_mut() {
        let mut world = World::new();
        let e = world.spawn();
        world.insert(e, Mood(1)).unwrap();
        if let Some(mood) = world.get_mut::<Mood>(e) {
            mood.0 = 9;
        }
        assert_eq!(world.remove::<Mood>(e), Some(Mood(9)));
        assert!(world.get::<Mood>(e).is_none());
        assert!(world.is_alive(e));
    }
}
