//! Decoration values and their kind identity.
//!
//! A [`Decoration`] is a pure data record attached to a program element or
//! parameter slot. It carries no behavior; the payload is any Rust value and
//! the payload's concrete type is the decoration's *kind*, used for filtered
//! lookup.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

/// The kind identity of a decoration: the `TypeId` of its payload type.
///
/// Two decorations have the same kind exactly when their payloads have the
/// same concrete Rust type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationKind {
    id: TypeId,
    name: &'static str,
}

impl DecorationKind {
    /// The kind of decorations whose payload type is `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Full Rust type path of the payload type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the payload type, for compact diagnostics.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl fmt::Debug for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecorationKind({})", self.short_name())
    }
}

impl fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A typed, immutable data record attached to one program element or one
/// parameter slot.
///
/// Cloning is cheap; the payload is shared. The payload is read-only for the
/// decoration's whole lifetime.
#[derive(Clone)]
pub struct Decoration {
    kind: DecorationKind,
    value: Arc<dyn Any + Send + Sync>,
}

impl Decoration {
    /// Wrap `value` as a decoration of kind `T`.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            kind: DecorationKind::of::<T>(),
            value: Arc::new(value),
        }
    }

    /// Kind identity of this decoration.
    pub fn kind(&self) -> DecorationKind {
        self.kind
    }

    /// Whether this decoration's kind is `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.kind == DecorationKind::of::<T>()
    }

    /// Recover the typed payload, or `None` when the kind is not `T`.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.value.clone().downcast::<T>().ok()
    }
}

impl fmt::Debug for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decoration({})", self.kind.short_name())
    }
}
