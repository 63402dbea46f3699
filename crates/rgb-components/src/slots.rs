//! Static slots - components fixed by the container type.
//!
//! A container declares its static components as a tuple type, e.g.
//! `(Health, Name)`. Every slot is default-constructed with the container
//! and lives exactly as long as it. There is no runtime map behind a slot:
//! membership tests compare constant `TypeId`s and fold away once the
//! requested type is known.

use std::any::{Any, TypeId};

use smallvec::{SmallVec, smallvec};

use crate::component::{Component, ComponentKey};

/// A fixed set of component slots.
///
/// Implemented for `()` and for tuples of up to eight components.
pub trait StaticSlots: Default + Send + Sync + 'static {
    /// Number of declared slots.
    const LEN: usize;

    /// Check whether a type is declared in this set.
    fn declares(type_id: TypeId) -> bool;

    /// Keys of the declared types, in declaration order.
    fn keys() -> SmallVec<[ComponentKey; 8]>;

    /// Get the slot holding a `T`, if `T` is declared.
    fn slot<T: Component>(&self) -> Option<&T>;

    /// Get the mutable slot holding a `T`, if `T` is declared.
    fn slot_mut<T: Component>(&mut self) -> Option<&mut T>;

    /// Check that no type is declared twice.
    fn has_unique_types() -> bool {
        let mut keys = Self::keys();
        keys.sort_unstable();
        keys.windows(2).all(|pair| pair[0] != pair[1])
    }
}

impl StaticSlots for () {
    const LEN: usize = 0;

    fn declares(_type_id: TypeId) -> bool {
        false
    }

    fn keys() -> SmallVec<[ComponentKey; 8]> {
        SmallVec::new()
    }

    fn slot<T: Component>(&self) -> Option<&T> {
        None
    }

    fn slot_mut<T: Component>(&mut self) -> Option<&mut T> {
        None
    }
}

/// Compile-time access to the slot of type `T`.
///
/// `Index` is one of the `SlotN` markers and is always inferred; it only
/// exists so that each position of a tuple gets its own impl.
pub trait Has<T, Index> {
    fn get(&self) -> &T;
    fn get_mut(&mut self) -> &mut T;
}

macro_rules! slot_markers {
    ($($marker:ident),+) => {
        $(
            /// Position marker for [`Has`].
            #[derive(Debug)]
            pub enum $marker {}
        )+
    };
}

slot_markers!(Slot0, Slot1, Slot2, Slot3, Slot4, Slot5, Slot6, Slot7);

macro_rules! impl_static_slots {
    (@has $T:ident $idx:tt $marker:ident; [$($All:ident),+]) => {
        impl<$($All: Component + Default),+> Has<$T, $marker> for ($($All,)+) {
            #[inline]
            fn get(&self) -> &$T {
                &self.$idx
            }

            #[inline]
            fn get_mut(&mut self) -> &mut $T {
                &mut self.$idx
            }
        }
    };
    (@has_each $all:tt $($T:ident $idx:tt $marker:ident),+) => {
        $( impl_static_slots!(@has $T $idx $marker; $all); )+
    };
    (@tuple $($T:ident $idx:tt $marker:ident),+) => {
        impl<$($T: Component + Default),+> StaticSlots for ($($T,)+) {
            const LEN: usize = [$($idx),+].len();

            #[inline]
            fn declares(type_id: TypeId) -> bool {
                $( type_id == TypeId::of::<$T>() )||+
            }

            fn keys() -> SmallVec<[ComponentKey; 8]> {
                smallvec![$(ComponentKey::of::<$T>()),+]
            }

            #[inline]
            fn slot<Q: Component>(&self) -> Option<&Q> {
                $(
                    if let Some(slot) = (&self.$idx as &dyn Any).downcast_ref::<Q>() {
                        return Some(slot);
                    }
                )+
                None
            }

            #[inline]
            fn slot_mut<Q: Component>(&mut self) -> Option<&mut Q> {
                $(
                    if let Some(slot) = (&mut self.$idx as &mut dyn Any).downcast_mut::<Q>() {
                        return Some(slot);
                    }
                )+
                None
            }
        }

        impl_static_slots!(@has_each [$($T),+] $($T $idx $marker),+);
    };
    ($( ($($T:ident $idx:tt $marker:ident),+) );+ $(;)?) => {
        $( impl_static_slots!(@tuple $($T $idx $marker),+); )+
    };
}

impl_static_slots! {
    (A 0 Slot0);
    (A 0 Slot0, B 1 Slot1);
    (A 0 Slot0, B 1 Slot1, C 2 Slot2);
    (A 0 Slot0, B 1 Slot1, C 2 Slot2, D 3 Slot3);
    (A 0 Slot0, B 1 Slot1, C 2 Slot2, D 3 Slot3, E 4 Slot4);
    (A 0 Slot0, B 1 Slot1, C 2 Slot2, D 3 Slot3, E 4 Slot4, F 5 Slot5);
    (A 0 Slot0, B 1 Slot1, C 2 Slot2, D 3 Slot3, E 4 Slot4, F 5 Slot5, G 6 Slot6);
    (A 0 Slot0, B 1 Slot1, C 2 Slot2, D 3 Slot3, E 4 Slot4, F 5 Slot5, G 6 Slot6, H 7 Slot7);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Health(u32);

    #[derive(Debug, Default, PartialEq)]
    struct Name(String);

    type Slots = (Health, Name, i32);

    #[test]
    fn test_declares() {
        assert!(Slots::declares(TypeId::of::<Health>()));
        assert!(Slots::declares(TypeId::of::<i32>()));
        assert!(!Slots::declares(TypeId::of::<u32>()));
        assert!(!<()>::declares(TypeId::of::<Health>()));
        assert_eq!(Slots::LEN, 3);
        assert_eq!(<()>::LEN, 0);
    }

    #[test]
    fn test_keys_in_order() {
        let keys = Slots::keys();

        assert_eq!(
            keys.as_slice(),
            &[
                ComponentKey::of::<Health>(),
                ComponentKey::of::<Name>(),
                ComponentKey::of::<i32>(),
            ]
        );
    }

    #[test]
    fn test_slots_default_constructed() {
        let slots = Slots::default();

        assert_eq!(slots.slot::<Health>(), Some(&Health(0)));
        assert_eq!(slots.slot::<Name>(), Some(&Name(String::new())));
        assert_eq!(slots.slot::<i32>(), Some(&0));
        assert_eq!(slots.slot::<u64>(), None);
    }

    #[test]
    fn test_slot_mut_identity() {
        let mut slots = Slots::default();

        slots.slot_mut::<Health>().unwrap().0 = 20;
        *slots.slot_mut::<i32>().unwrap() = 100;

        assert_eq!(slots.0, Health(20));
        assert_eq!(slots.2, 100);
        assert!(std::ptr::eq(slots.slot::<i32>().unwrap(), &slots.2));
    }

    #[test]
    fn test_has_compile_time_access() {
        let mut slots = Slots::default();

        Has::<Name, _>::get_mut(&mut slots).0.push_str("steve");

        assert_eq!(Has::<Name, _>::get(&slots).0, "steve");
        assert_eq!(*Has::<i32, _>::get(&slots), 0);
    }

    #[test]
    fn test_largest_slot_set() {
        type Wide = (u8, u16, u32, u64, i8, i16, Health, Name);

        let mut slots = Wide::default();
        assert_eq!(Wide::LEN, 8);
        assert!(Wide::has_unique_types());
        assert!(Wide::declares(TypeId::of::<Name>()));
        assert!(!Wide::declares(TypeId::of::<i32>()));
        assert_eq!(Wide::keys().last(), Some(&ComponentKey::of::<Name>()));

        *slots.slot_mut::<u32>().unwrap() = 3;
        slots.slot_mut::<Name>().unwrap().0.push_str("last");
        Has::<Health, Slot6>::get_mut(&mut slots).0 = 6;

        assert_eq!(slots.2, 3);
        assert_eq!(slots.slot::<Health>(), Some(&Health(6)));
        assert_eq!(Has::<Name, Slot7>::get(&slots).0, "last");
        assert_eq!(slots.slot::<i32>(), None);
    }

    #[test]
    fn test_unique_types() {
        assert!(Slots::has_unique_types());
        assert!(<()>::has_unique_types());
        assert!(!<(i32, Health, i32)>::has_unique_types());
    }
}
