//! Entities - identified component containers.
//!
//! An `Entity<S>` is a [`ComponentContainer`] with the static component set
//! `S` and a process-unique id, so log output and errors can tell two
//! entities with the same layout apart.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    container::{ComponentContainer, Container},
    slots::StaticSlots,
};

/// Unique identifier of an entity within the process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    fn next() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Global counter for generating unique entity IDs.
static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(0);

/// A component container with an identity.
///
/// ```
/// use rgb_components::{Container, Entity};
///
/// #[derive(Default)]
/// struct IntComponent(i32);
///
/// let mut entity = Entity::<(IntComponent,)>::new();
/// entity.get_mut::<IntComponent>().unwrap().0 = 100;
///
/// entity.add(String::from("Hello, World!")).unwrap();
/// entity.remove::<String>().unwrap();
///
/// assert_eq!(entity.get::<IntComponent>().unwrap().0, 100);
/// assert!(entity.get::<String>().is_err());
/// ```
pub struct Entity<S: StaticSlots = ()> {
    id: EntityId,
    components: ComponentContainer<S>,
}

impl<S: StaticSlots> Default for Entity<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StaticSlots> Entity<S> {
    /// Create an entity with a fresh id and default static components.
    #[must_use]
    pub fn new() -> Self {
        Self::from_components(ComponentContainer::new())
    }

    /// Create an entity with room for `capacity` dynamic components.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_components(ComponentContainer::with_capacity(capacity))
    }

    /// Wrap an existing container, assigning a fresh id.
    #[must_use]
    pub fn from_components(components: ComponentContainer<S>) -> Self {
        Self {
            id: EntityId::next(),
            components,
        }
    }

    /// Get the entity's id.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Take the container out of the entity.
    #[must_use]
    pub fn into_components(self) -> ComponentContainer<S> {
        self.components
    }
}

impl<S: StaticSlots> Container for Entity<S> {
    type Slots = S;

    fn components(&self) -> &ComponentContainer<S> {
        &self.components
    }

    fn components_mut(&mut self) -> &mut ComponentContainer<S> {
        &mut self.components
    }
}

impl<S: StaticSlots> fmt::Debug for Entity<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("components", &self.components)
            .finish()
    }
}

impl<S: StaticSlots> fmt::Display for Entity<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.id)
    }
}
