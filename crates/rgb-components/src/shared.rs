//! Shared containers - serialized access from several threads.
//!
//! Containers are single-threaded values. When a surrounding application
//! needs one container on several threads, wrap it in a `SharedContainer`:
//! every operation runs under the lock, and references handed out by `get`
//! never outlive it.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::container::Container;

/// Cloneable handle to a container behind `Arc<RwLock>`.
///
/// Readers share the lock; `add`, `remove` and `get_mut` take it exclusively.
///
/// ```
/// use rgb_components::{ComponentContainer, Container, SharedContainer};
///
/// let shared = SharedContainer::new(ComponentContainer::<(u32,)>::new());
/// let handle = shared.clone();
///
/// std::thread::spawn(move || {
///     handle.with_mut(|c| *c.get_mut::<u32>().unwrap() += 1);
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(shared.with(|c| *c.get::<u32>().unwrap()), 1);
/// ```
pub struct SharedContainer<C: Container> {
    inner: Arc<RwLock<C>>,
}

impl<C: Container> Clone for SharedContainer<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Container + Default> Default for SharedContainer<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Container> SharedContainer<C> {
    /// Wrap a container.
    #[must_use]
    pub fn new(container: C) -> Self {
        Self {
            inner: Arc::new(RwLock::new(container)),
        }
    }

    /// Run `f` with shared access for the whole call.
    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` with exclusive access for the whole call.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Acquire shared access.
    pub fn read(&self) -> RwLockReadGuard<'_, C> {
        self.inner.read()
    }

    /// Acquire exclusive access.
    pub fn write(&self) -> RwLockWriteGuard<'_, C> {
        self.inner.write()
    }

    /// Recover the container if this is the last handle.
    ///
    /// Returns the handle back otherwise.
    pub fn try_unwrap(self) -> Result<C, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<C: Container + std::fmt::Debug> std::fmt::Debug for SharedContainer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedContainer")
            .field("container", &*self.inner.read())
            .finish()
    }
}
