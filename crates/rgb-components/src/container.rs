//! Component containers - static slots and dynamic components behind one API.
//!
//! A `ComponentContainer<S>` owns the static slot tuple `S` and a
//! `DynamicRegistry`. Every typed request is routed by a single rule: if the
//! type is declared in `S` it is served from its slot, otherwise from the
//! registry. Containers can hold other containers, which is what the path
//! lookups in [`crate::path`] walk through.

use std::{any::TypeId, fmt};

use crate::{
    component::{Component, ComponentKey},
    error::{ComponentOperation, ContainerError, ContainerResult},
    path::ComponentPath,
    registry::DynamicRegistry,
    slots::{Has, StaticSlots},
};

/// Owner of one static slot set and one dynamic registry.
pub struct ComponentContainer<S: StaticSlots = ()> {
    /// Components fixed by the container type.
    slots: S,
    /// Components attached at runtime.
    dynamic: DynamicRegistry,
}

impl<S: StaticSlots> Default for ComponentContainer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StaticSlots> ComponentContainer<S> {
    /// Create a container with default-constructed static slots and no
    /// dynamic components.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(S::default(), DynamicRegistry::new())
    }

    /// Create a container with room for `capacity` dynamic components.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(S::default(), DynamicRegistry::with_capacity(capacity))
    }

    fn from_parts(slots: S, dynamic: DynamicRegistry) -> Self {
        debug_assert!(
            S::has_unique_types(),
            "static component declared twice in {}",
            std::any::type_name::<S>()
        );
        Self { slots, dynamic }
    }

    /// Get the static slot tuple.
    #[must_use]
    pub const fn slots(&self) -> &S {
        &self.slots
    }

    /// Get the static slot tuple mutably.
    ///
    /// Slots can be mutated in place but never added or removed.
    #[must_use]
    pub fn slots_mut(&mut self) -> &mut S {
        &mut self.slots
    }

    /// Get the dynamic registry.
    ///
    /// Read-only: mutations go through [`Container`] so the static-type
    /// check cannot be bypassed.
    #[must_use]
    pub const fn registry(&self) -> &DynamicRegistry {
        &self.dynamic
    }

    /// Keys of the declared static components.
    #[must_use]
    pub fn static_keys(&self) -> smallvec::SmallVec<[ComponentKey; 8]> {
        S::keys()
    }
}

impl<S: StaticSlots> fmt::Debug for ComponentContainer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let statics: Vec<&str> = S::keys().iter().map(ComponentKey::name).collect();

        f.debug_struct("ComponentContainer")
            .field("static", &statics)
            .field("dynamic", &self.dynamic)
            .finish()
    }
}

/// Reject add/remove of a type the container declares statically.
///
/// Runs before anything is touched so a rejected call leaves no trace.
fn ensure_dynamic<S: StaticSlots, T: Component>(
    operation: ComponentOperation,
) -> ContainerResult<()> {
    if S::declares(TypeId::of::<T>()) {
        return Err(ContainerError::StaticComponent {
            operation,
            component: ComponentKey::of::<T>(),
        });
    }
    Ok(())
}

/// A value that owns a [`ComponentContainer`].
///
/// Implement by hand, or with `#[derive(Container)]` on a struct wrapping a
/// `ComponentContainer` (or another container).
///
/// # Example
///
/// ```
/// use rgb_components::{ComponentContainer, Container, ContainerError};
///
/// #[derive(Default)]
/// struct Health(u32);
///
/// #[derive(Default, Container)]
/// struct Player {
///     components: ComponentContainer<(Health,)>,
/// }
///
/// let mut player = Player::default();
/// player.get_mut::<Health>().unwrap().0 = 20;
/// player.add(String::from("steve")).unwrap();
///
/// assert_eq!(player.get::<Health>().unwrap().0, 20);
/// assert_eq!(player.get::<String>().unwrap(), "steve");
/// assert!(matches!(
///     player.add(Health(5)),
///     Err(ContainerError::StaticComponent { .. })
/// ));
/// ```
///
/// Compile-time slot access only accepts declared types:
///
/// ```compile_fail,E0277
/// use rgb_components::{ComponentContainer, Container};
///
/// let container = ComponentContainer::<(u32,)>::new();
/// let _ = container.get_static::<String, _>();
/// ```
pub trait Container: Component + Sized {
    /// The static slot tuple.
    type Slots: StaticSlots;

    /// Get the owned container.
    fn components(&self) -> &ComponentContainer<Self::Slots>;

    /// Get the owned container mutably.
    fn components_mut(&mut self) -> &mut ComponentContainer<Self::Slots>;

    /// Check whether `T` is declared static for this container.
    #[must_use]
    fn is_static<T: Component>(&self) -> bool {
        Self::Slots::declares(TypeId::of::<T>())
    }

    /// Check whether a `T` can currently be retrieved.
    ///
    /// Always true for static components.
    #[must_use]
    fn contains<T: Component>(&self) -> bool {
        self.is_static::<T>() || self.components().dynamic.contains::<T>()
    }

    /// Get a component.
    ///
    /// Static components never fail. Dynamic components fail with
    /// [`ContainerError::NotFound`] while absent.
    fn get<T: Component>(&self) -> ContainerResult<&T> {
        let components = self.components();
        // A declared slot always holds a value, and the registry never holds
        // a declared type, so only undeclared types reach the registry.
        if let Some(slot) = components.slots.slot::<T>() {
            return Ok(slot);
        }
        components.dynamic.get::<T>()
    }

    /// Get a component mutably.
    ///
    /// Mutations are made in place and seen by the next lookup.
    fn get_mut<T: Component>(&mut self) -> ContainerResult<&mut T> {
        let components = self.components_mut();
        if let Some(slot) = components.slots.slot_mut::<T>() {
            return Ok(slot);
        }
        components.dynamic.get_mut::<T>()
    }

    /// Get a static component, resolved at compile time.
    ///
    /// `I` is inferred; pass `_`.
    #[must_use]
    fn get_static<T, I>(&self) -> &T
    where
        Self::Slots: Has<T, I>,
    {
        Has::<T, I>::get(&self.components().slots)
    }

    /// Get a static component mutably, resolved at compile time.
    #[must_use]
    fn get_static_mut<T, I>(&mut self) -> &mut T
    where
        Self::Slots: Has<T, I>,
    {
        Has::<T, I>::get_mut(&mut self.components_mut().slots)
    }

    /// Attach a dynamic component, replacing and returning any previous
    /// value of the same type.
    ///
    /// Fails with [`ContainerError::StaticComponent`] if `T` is declared
    /// static; nothing is modified in that case.
    fn add<T: Component>(&mut self, value: T) -> ContainerResult<Option<T>> {
        ensure_dynamic::<Self::Slots, T>(ComponentOperation::Add)?;
        Ok(self.components_mut().dynamic.add(value))
    }

    /// Attach a default-constructed dynamic component.
    fn add_default<T: Component + Default>(&mut self) -> ContainerResult<Option<T>> {
        ensure_dynamic::<Self::Slots, T>(ComponentOperation::Add)?;
        Ok(self.components_mut().dynamic.add_default())
    }

    /// Attach a dynamic component built from constructor arguments.
    fn add_from<T: Component + From<A>, A>(&mut self, args: A) -> ContainerResult<Option<T>> {
        ensure_dynamic::<Self::Slots, T>(ComponentOperation::Add)?;
        Ok(self.components_mut().dynamic.add_from(args))
    }

    /// Attach a dynamic component built by `f`.
    ///
    /// `f` is not called when the add is rejected.
    fn add_with<T: Component, F: FnOnce() -> T>(&mut self, f: F) -> ContainerResult<Option<T>> {
        ensure_dynamic::<Self::Slots, T>(ComponentOperation::Add)?;
        Ok(self.components_mut().dynamic.add_with(f))
    }

    /// Detach a dynamic component, returning it if it was present.
    ///
    /// Removing an absent component is not an error.
    fn remove<T: Component>(&mut self) -> ContainerResult<Option<T>> {
        ensure_dynamic::<Self::Slots, T>(ComponentOperation::Remove)?;
        Ok(self.components_mut().dynamic.remove())
    }

    /// Get a component through nested containers.
    ///
    /// `get_path::<(B, T)>()` is `get::<B>()?.get::<T>()`.
    fn get_path<P: ComponentPath>(&self) -> ContainerResult<&P::Target> {
        P::resolve(self)
    }

    /// Get a component through nested containers mutably.
    fn get_path_mut<P: ComponentPath>(&mut self) -> ContainerResult<&mut P::Target> {
        P::resolve_mut(self)
    }
}

impl<S: StaticSlots> Container for ComponentContainer<S> {
    type Slots = S;

    fn components(&self) -> &ComponentContainer<S> {
        self
    }

    fn components_mut(&mut self) -> &mut ComponentContainer<S> {
        self
    }
}
