//! Multi-hop lookups through nested containers.
//!
//! A path is a tuple of component types. Every element except the last must
//! itself be a [`Container`]; each hop is an ordinary single-type `get`, so
//! every container along the way applies its own static/dynamic routing.
//! The first failing hop ends the lookup and its error is returned as-is.

use crate::{
    component::Component,
    container::Container,
    error::ContainerResult,
};

/// A sequence of component types resolved one hop at a time.
///
/// ```
/// use rgb_components::{ComponentContainer, Container};
///
/// type Inner = ComponentContainer<(i32,)>;
/// type Outer = ComponentContainer<(Inner,)>;
///
/// let mut outer = Outer::new();
/// *outer.get_path_mut::<(Inner, i32)>().unwrap() = 3;
///
/// assert_eq!(outer.get::<Inner>().unwrap().get::<i32>(), Ok(&3));
/// ```
///
/// Intermediate hops must be containers:
///
/// ```compile_fail,E0277
/// use rgb_components::{ComponentContainer, Container};
///
/// let outer = ComponentContainer::<(i32,)>::new();
/// let _ = outer.get_path::<(i32, u8)>();
/// ```
pub trait ComponentPath {
    /// Type found at the end of the path.
    type Target: Component;

    /// Resolve the path starting at `container`.
    fn resolve<Root: Container>(container: &Root) -> ContainerResult<&Self::Target>;

    /// Resolve the path mutably starting at `container`.
    fn resolve_mut<Root: Container>(container: &mut Root) -> ContainerResult<&mut Self::Target>;
}

macro_rules! impl_component_path {
    ($($hop:ident),* => $last:ident) => {
        impl<$($hop: Container,)* $last: Component> ComponentPath for ($($hop,)* $last,) {
            type Target = $last;

            #[inline]
            fn resolve<Root: Container>(container: &Root) -> ContainerResult<&$last> {
                $( let container = container.get::<$hop>()?; )*
                container.get::<$last>()
            }

            #[inline]
            fn resolve_mut<Root: Container>(container: &mut Root) -> ContainerResult<&mut $last> {
                $( let container = container.get_mut::<$hop>()?; )*
                container.get_mut::<$last>()
            }
        }
    };
}

impl_component_path!(=> A);
impl_component_path!(A => B);
impl_component_path!(A, B => C);
impl_component_path!(A, B, C => D);
impl_component_path!(A, B, C, D => E);
impl_component_path!(A, B, C, D, E => F);
impl_component_path!(A, B, C, D, E, F => G);
impl_component_path!(A, B, C, D, E, F, G => H);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ComponentContainer, ComponentKey, ContainerError};

    #[derive(Debug, Default, PartialEq)]
    struct Marker(u8);

    type Leaf = ComponentContainer<(i32,)>;
    type Branch = ComponentContainer<(Leaf,)>;
    type Root = ComponentContainer<(i32, String, Leaf, Branch)>;

    #[test]
    fn test_single_hop_path() {
        let mut root = Root::new();
        *root.get_path_mut::<(i32,)>().unwrap() = 1;

        assert_eq!(root.get_path::<(i32,)>(), Ok(&1));
        assert_eq!(root.get::<i32>(), Ok(&1));
    }

    #[test]
    fn test_nested_static_paths() {
        let mut root = Root::new();

        *root.get_mut::<i32>().unwrap() = 1;
        *root.get_mut::<Leaf>().unwrap().get_mut::<i32>().unwrap() = 2;
        *root.get_path_mut::<(Branch, Leaf, i32)>().unwrap() = 3;
        root.get_mut::<String>().unwrap().push_str("Hello, World!");

        assert_eq!(root.get::<i32>(), Ok(&1));
        assert_eq!(root.get_path::<(Leaf, i32)>(), Ok(&2));
        assert_eq!(root.get_path::<(Branch, Leaf, i32)>(), Ok(&3));
        assert_eq!(root.get::<String>().unwrap(), "Hello, World!");
    }

    #[test]
    fn test_path_equals_chained_get() {
        let mut root = Root::new();
        root.get_mut::<Leaf>()
            .unwrap()
            .add(Marker(9))
            .unwrap();

        let chained: *const Marker = root.get::<Leaf>().unwrap().get::<Marker>().unwrap();
        let path: *const Marker = root.get_path::<(Leaf, Marker)>().unwrap();

        assert_eq!(chained, path);
    }

    #[test]
    fn test_path_through_dynamic_hop() {
        let mut root = Root::new();

        assert_eq!(
            root.get_path::<(Leaf, Marker)>(),
            Err(ContainerError::NotFound(ComponentKey::of::<Marker>()))
        );

        // Dynamic container hanging off a static one
        root.get_mut::<Branch>().unwrap().add(Branch::new()).unwrap();
        *root
            .get_path_mut::<(Branch, Branch, Leaf, i32)>()
            .unwrap() = 42;

        assert_eq!(root.get_path::<(Branch, Branch, Leaf, i32)>(), Ok(&42));
        assert_eq!(root.get_path::<(Branch, Leaf, i32)>(), Ok(&0));
    }

    #[test]
    fn test_longest_path() {
        type L0 = ComponentContainer<(u8,)>;
        type L1 = ComponentContainer<(L0,)>;
        type L2 = ComponentContainer<(L1,)>;
        type L3 = ComponentContainer<(L2,)>;
        type L4 = ComponentContainer<(L3,)>;
        type L5 = ComponentContainer<(L4,)>;
        type L6 = ComponentContainer<(L5,)>;
        type Top = ComponentContainer<(L6,)>;

        let mut top = Top::new();
        *top.get_path_mut::<(L6, L5, L4, L3, L2, L1, L0, u8)>().unwrap() = 8;

        assert_eq!(top.get_path::<(L6, L5, L4, L3, L2, L1, L0, u8)>(), Ok(&8));
        assert_eq!(
            top.get_path::<(L6, L5, L4, L3, L2, L1, L0)>()
                .unwrap()
                .get::<u8>(),
            Ok(&8)
        );
        assert_eq!(
            top.get_path::<(L6, L5, L4, L3, L2, L1, L0, Marker)>(),
            Err(ContainerError::NotFound(ComponentKey::of::<Marker>()))
        );
    }

    #[test]
    fn test_first_failing_hop_is_reported() {
        let mut root = Root::new();

        // Missing intermediate hop: its key is reported, not the target's
        let err = root.get_path::<(Branch, Branch, Leaf, i32)>().unwrap_err();
        assert_eq!(err, ContainerError::NotFound(ComponentKey::of::<Branch>()));

        // No side effects: the failed lookup created nothing
        assert!(!root.get::<Branch>().unwrap().contains::<Branch>());
        assert!(root.get_path_mut::<(Branch, Branch)>().is_err());
        assert!(root.get::<Branch>().unwrap().registry().is_empty());
    }
}
