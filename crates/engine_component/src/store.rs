//! Dense storage for a single component type.

use std::collections::HashMap;

use crate::component::Component;
use crate::entity::Entity;

/// Densely packed records of one component type.
///
/// Records live in a contiguous vector in insertion order; an index map gives
/// O(1) lookup by entity. Removal swaps the last record into the hole, so
/// iteration order is stable only between removals.
#[derive(Debug)]
pub struct ComponentStore<T> {
    entities: Vec<Entity>,
    records: Vec<T>,
    index: HashMap<Entity, usize>,
}

impl<T: Component> ComponentStore<T> {
    /// A store holding no records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Attach `record` to `entity`, returning the record it replaced.
    pub fn insert(&mut self, entity: Entity, record: T) -> Option<T> {
        if let Some(&row) = self.index.get(&entity) {
            return Some(std::mem::replace(&mut self.records[row], record));
        }
        self.index.insert(entity, self.records.len());
        self.entities.push(entity);
        self.records.push(record);
        None
    }

    /// Detach and return the record held by `entity`.
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let row = self.index.remove(&entity)?;
        self.entities.swap_remove(row);
        let record = self.records.swap_remove(row);
        // Re-point the record that was moved into `row`.
        if let Some(&moved) = self.entities.get(row) {
            self.index.insert(moved, row);
        }
        Some(record)
    }

    /// The record held by `entity`.
    #[must_use]
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.index.get(&entity).map(|&row| &self.records[row])
    }

    /// Mutable access to the record held by `entity`.
    #[must_use]
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let row = *self.index.get(&entity)?;
        Some(&mut self.records[row])
    }

    /// Forward iteration over every `(entity, record)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.records.iter())
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when no entity holds a record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Component> Default for ComponentStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
