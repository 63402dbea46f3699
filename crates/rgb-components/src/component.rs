//! Component marker trait and runtime type identity.
//!
//! Components are plain Rust values attached to a container. The dynamic
//! registry needs a key that tells component types apart without knowing
//! every type up front; `ComponentKey` is that key.

use std::{
    any::TypeId,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// Marker trait for types that can be stored in a container.
///
/// # Example
///
/// ```
/// use rgb_components::Component;
///
/// #[derive(Default)]
/// struct Health(u32);
///
/// fn assert_component<T: Component>() {}
/// assert_component::<Health>();
/// ```
pub trait Component: Send + Sync + 'static {}

// Blanket implementation for all suitable types
impl<T: Send + Sync + 'static> Component for T {}

/// Runtime identity of a component type.
///
/// Equality, ordering and hashing only look at the `TypeId`; the name is
/// carried along for error messages and `Debug` output.
#[derive(Clone, Copy)]
pub struct ComponentKey {
    /// Rust TypeId for type checking.
    type_id: TypeId,
    /// Type name for debugging.
    name: &'static str,
}

impl ComponentKey {
    /// Key for a concrete component type.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Get the underlying `TypeId`.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Get the component type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Check if this key identifies the given type.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl PartialEq for ComponentKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ComponentKey {}

impl Hash for ComponentKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl PartialOrd for ComponentKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComponentKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_id.cmp(&other.type_id)
    }
}

impl fmt::Debug for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKey({})", self.name)
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
