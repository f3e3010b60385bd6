//! Shared ownership of the [`World`] and read-only handles to it.
//!
//! The simulation owns the world as a [`SharedWorld`]. Anything that only
//! needs to look at component data (script nodes in particular) is given a
//! [`WorldHandle`], which does not keep the world alive and can only borrow
//! it immutably.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use crate::error::WorldError;
use crate::world::World;

/// Owning, single-threaded handle to the world.
pub type SharedWorld = Rc<RefCell<World>>;

/// Wrap a world for sharing.
#[must_use]
pub fn shared(world: World) -> SharedWorld {
    Rc::new(RefCell::new(world))
}

/// Non-owning, read-only handle to a [`SharedWorld`].
#[derive(Debug, Clone)]
pub struct WorldHandle {
    world: Weak<RefCell<World>>,
}

impl WorldHandle {
    /// A handle that reads `world` without keeping it alive.
    #[must_use]
    pub fn new(world: &SharedWorld) -> Self {
        Self {
            world: Rc::downgrade(world),
        }
    }

    /// Run `f` with an immutable borrow of the world.
    ///
    /// # Errors
    ///
    /// [`WorldError::Dropped`] if the owner is gone, [`WorldError::Busy`] if
    /// the world is mutably borrowed right now.
    pub fn read<R>(&self, f: impl FnOnce(&World) -> R) -> Result<R, WorldError> {
        let world = self.world.upgrade().ok_or(WorldError::Dropped)?;
        let guard: Ref<'_, World> = world.try_borrow().map_err(|_| WorldError::Busy)?;
        Ok(f(&guard))
    }
}
