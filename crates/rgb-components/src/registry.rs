//! Dynamic components - values attached and detached at runtime.
//!
//! The registry maps a type's `ComponentKey` to one owned, type-erased
//! value. The key is derived from the exact stored type, so a lookup
//! always recovers the original type through a checked downcast.

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{
    component::{Component, ComponentKey},
    error::{ContainerError, ContainerResult},
};

/// Type-erased storage for a dynamic component value.
struct DynamicEntry {
    /// Key of the stored type.
    key: ComponentKey,
    /// The component value.
    value: Box<dyn Any + Send + Sync>,
}

impl DynamicEntry {
    fn new<T: Component>(value: T) -> Self {
        Self {
            key: ComponentKey::of::<T>(),
            value: Box::new(value),
        }
    }

    fn mismatch<T: Component>(&self) -> ContainerError {
        ContainerError::TypeMismatch {
            expected: ComponentKey::of::<T>(),
            found: self.key,
        }
    }

    fn get<T: Component>(&self) -> ContainerResult<&T> {
        self.value
            .downcast_ref()
            .ok_or_else(|| self.mismatch::<T>())
    }

    fn get_mut<T: Component>(&mut self) -> ContainerResult<&mut T> {
        let found = self.key;
        self.value
            .downcast_mut()
            .ok_or_else(move || ContainerError::TypeMismatch {
                expected: ComponentKey::of::<T>(),
                found,
            })
    }

    fn into_inner<T: Component>(self) -> Option<T> {
        self.value.downcast().ok().map(|b| *b)
    }
}

/// Storage for dynamic components.
///
/// Holds at most one value per component type. Adding a type that is
/// already present replaces the stored value.
#[derive(Default)]
pub struct DynamicRegistry {
    /// Map from TypeId to component value.
    entries: FxHashMap<TypeId, DynamicEntry>,
}

impl DynamicRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with room for `capacity` components.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Add a component, replacing any existing value of the same type.
    ///
    /// Returns the replaced value.
    pub fn add<T: Component>(&mut self, value: T) -> Option<T> {
        let old = self
            .entries
            .insert(TypeId::of::<T>(), DynamicEntry::new(value));

        match old {
            Some(entry) => {
                trace!(component = entry.key.name(), "replaced dynamic component");
                entry.into_inner()
            }
            None => {
                trace!(
                    component = std::any::type_name::<T>(),
                    "added dynamic component"
                );
                None
            }
        }
    }

    /// Add a default-constructed component.
    pub fn add_default<T: Component + Default>(&mut self) -> Option<T> {
        self.add(T::default())
    }

    /// Add a component built from constructor arguments.
    pub fn add_from<T: Component + From<A>, A>(&mut self, args: A) -> Option<T> {
        self.add(T::from(args))
    }

    /// Add a component built by a closure.
    pub fn add_with<T: Component, F: FnOnce() -> T>(&mut self, f: F) -> Option<T> {
        self.add(f())
    }

    /// Remove a component, returning it if it existed.
    ///
    /// Removing an absent type is a no-op.
    pub fn remove<T: Component>(&mut self) -> Option<T> {
        let entry = self.entries.remove(&TypeId::of::<T>())?;
        trace!(component = entry.key.name(), "removed dynamic component");
        entry.into_inner()
    }

    /// Get a reference to a component.
    pub fn get<T: Component>(&self) -> ContainerResult<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .ok_or_else(|| ContainerError::NotFound(ComponentKey::of::<T>()))?
            .get()
    }

    /// Get a mutable reference to a component.
    pub fn get_mut<T: Component>(&mut self) -> ContainerResult<&mut T> {
        self.entries
            .get_mut(&TypeId::of::<T>())
            .ok_or_else(|| ContainerError::NotFound(ComponentKey::of::<T>()))?
            .get_mut()
    }

    /// Check if a component exists.
    #[must_use]
    pub fn contains<T: Component>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Iterate over the keys of all stored components.
    pub fn keys(&self) -> impl Iterator<Item = ComponentKey> + '_ {
        self.entries.values().map(|entry| entry.key)
    }

    /// Get the number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all components.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl std::fmt::Debug for DynamicRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.keys().map(|key| key.name()).collect();
        names.sort_unstable();

        f.debug_struct("DynamicRegistry")
            .field("count", &self.entries.len())
            .field("components", &names)
            .finish()
    }
}
