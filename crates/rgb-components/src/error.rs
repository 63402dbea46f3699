//! Container error types.

use std::fmt;

use thiserror::Error;

use crate::component::ComponentKey;

/// Mutation attempted on a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentOperation {
    Add,
    Remove,
}

impl fmt::Display for ComponentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => f.write_str("add"),
            Self::Remove => f.write_str("remove"),
        }
    }
}

/// Container error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Static components are fixed by the container type and cannot be
    /// added or removed at runtime.
    #[error("cannot {operation} static component `{component}`")]
    StaticComponent {
        operation: ComponentOperation,
        component: ComponentKey,
    },

    /// No dynamic component of this type is attached.
    #[error("component not found: {0}")]
    NotFound(ComponentKey),

    /// A stored value did not downcast to the type it was keyed by.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: ComponentKey,
        found: ComponentKey,
    },
}

impl ContainerError {
    /// Key of the component the failed operation targeted.
    #[must_use]
    pub const fn component(&self) -> ComponentKey {
        match self {
            Self::StaticComponent { component, .. } => *component,
            Self::NotFound(component) => *component,
            Self::TypeMismatch { expected, .. } => *expected,
        }
    }
}

/// Result type for container operations.
pub type ContainerResult<T> = Result<T, ContainerError>;
