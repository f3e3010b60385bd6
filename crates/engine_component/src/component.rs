//! The [`Component`] trait and component type identity.
//!
//! Component types are identified by a [`ComponentTypeId`] computed from the
//! component's name with FNV-1a 64, so the same name always maps to the same
//! id regardless of build or platform.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Identifier of a component type, the FNV-1a 64 hash of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentTypeId(pub u64);

impl ComponentTypeId {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Hash a component name into its id.
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325
    /// for each byte in name:
    ///     hash = (hash ^ byte) * 0x100000001b3
    /// ```
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// The id of component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self::from_name(T::type_name())
    }
}

/// Per-entity data stored in a [`World`](crate::World).
///
/// Components are plain serialisable records so that scenes can be loaded
/// from data files.
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use engine_component::Component;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Hunger {
///     level: f32,
/// }
///
/// impl Component for Hunger {
///     fn type_name() -> &'static str { "Hunger" }
/// }
/// ```
pub trait Component: 'static + Serialize + DeserializeOwned {
    /// Stable, human-readable name of the component type.
    fn type_name() -> &'static str;

    /// The [`ComponentTypeId`] derived from [`Component::type_name`].
    fn component_type_id() -> ComponentTypeId {
        ComponentTypeId::from_name(Self::type_name())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Hunger {
        level: f32,
    }

    impl Component for Hunger {
        fn type_name() -> &'static str {
            "Hunger"
        }
    }

    #[test]
    fn test_type_id_matches_name_hash() {
        assert_eq!(
            Hunger::component_type_id(),
            ComponentTypeId::from_name("Hunger")
        );
        assert_eq!(ComponentTypeId::of::<Hunger>(), Hunger::component_type_id());
    }

    #[test]
    fn test_empty_name_is_offset_basis() {
        assert_eq!(
            ComponentTypeId::from_name(""),
            ComponentTypeId(0xcbf2_9ce4_8422_2325)
        );
    }

    #[test]
    fn test_distinct_names_distinct_ids() {
        assert_ne!(
            ComponentTypeId::from_name("Patron"),
            ComponentTypeId::from_name("RailDenizen")
        );
    }
}
