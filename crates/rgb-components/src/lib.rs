#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

//! RGB Components - typed component containers
//!
//! Attach strongly-typed components to an entity and look them up by type,
//! including through containers nested inside containers.
//!
//! # Key Concepts
//!
//! - **Static component**: declared in the container type as a tuple, e.g.
//!   `ComponentContainer<(Health, Name)>`. Always present, default-constructed,
//!   never added or removed.
//! - **Dynamic component**: attached and detached at runtime, keyed by type.
//! - **Container**: anything owning a `ComponentContainer`; one `get::<T>()`
//!   serves both kinds.
//! - **Path**: `get_path::<(A, B, T)>()` walks nested containers one hop at a
//!   time.
//!
//! # Access Patterns
//!
//! - `get<T>()` / `get_mut<T>()` - Borrow a component in place
//! - `get_static<T, _>()` - Compile-time access to a declared slot
//! - `add<T>()` - Attach a dynamic component (replaces an existing one)
//! - `remove<T>()` - Detach and return a dynamic component
//! - `get_path<(A, .., T)>()` - Multi-hop lookup
//!
//! ```
//! use rgb_components::prelude::*;
//!
//! #[derive(Default, Container)]
//! struct SubComponent(ComponentContainer<(i32,)>);
//!
//! #[derive(Default, Container)]
//! struct SubSubComponent(ComponentContainer<(SubComponent,)>);
//!
//! let mut entity = Entity::<(i32, String, SubComponent, SubSubComponent)>::new();
//!
//! *entity.get_mut::<i32>()? = 1;
//! *entity.get_path_mut::<(SubComponent, i32)>()? = 2;
//! *entity.get_path_mut::<(SubSubComponent, SubComponent, i32)>()? = 3;
//!
//! assert_eq!(entity.get::<i32>(), Ok(&1));
//! assert_eq!(entity.get_path::<(SubComponent, i32)>(), Ok(&2));
//! assert_eq!(entity.get_path::<(SubSubComponent, SubComponent, i32)>(), Ok(&3));
//! # Ok::<(), ContainerError>(())
//! ```
//!
//! `#[derive(Container)]` only accepts structs:
//!
//! ```compile_fail
//! use rgb_components::Container;
//!
//! #[derive(Container)]
//! enum Slot {
//!     Empty,
//! }
//! ```
//!
//! and must know which field owns the components:
//!
//! ```compile_fail
//! use rgb_components::{ComponentContainer, Container};
//!
//! #[derive(Default, Container)]
//! struct Ambiguous {
//!     first: ComponentContainer<(u8,)>,
//!     second: ComponentContainer<(u16,)>,
//! }
//! ```

mod component;
mod container;
mod entity;
mod error;
mod path;
mod registry;
mod shared;
mod slots;

pub use component::{Component, ComponentKey};
pub use container::{ComponentContainer, Container};
pub use entity::{Entity, EntityId};
pub use error::{ComponentOperation, ContainerError, ContainerResult};
pub use path::ComponentPath;
pub use registry::DynamicRegistry;
pub use rgb_components_derive::Container;
pub use shared::SharedContainer;
pub use slots::{Has, Slot0, Slot1, Slot2, Slot3, Slot4, Slot5, Slot6, Slot7, StaticSlots};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Component, ComponentContainer, Container, ContainerError, ContainerResult, Entity,
        SharedContainer,
    };
}
