//! Non-throwing existence probes.
//!
//! Every other operation in the query surface propagates failure
//! immediately; the [`Probe`] family is the single place failures are
//! caught and converted to `false` instead. The probes are implemented for
//! both [`Cursor`] and `Result<Cursor, QueryError>`, so a chain can end in
//! a probe without unwrapping intermediate steps:
//!
//! ```
//! # use annoquery::model::{FieldBuilder, PackageHandle, TypeHandle};
//! # use annoquery::query::{Probe, query};
//! # struct Required;
//! # let package = PackageHandle::new("demo");
//! # let person = TypeHandle::builder("Person", &package)
//! #     .field(FieldBuilder::new("name", "String").decoration(Required))
//! #     .build();
//! assert!(query(&person).field("name").has::<Required>());
//! assert!(!query(&person).field("missing").has::<Required>());
//! ```

use std::any::Any;

use super::cursor::Cursor;
use super::error::QueryError;

/// Non-throwing existence probes over a cursor or a cursor result.
pub trait Probe {
    /// Whether a live selection is present. On a `Result`, a failed chain
    /// counts as absent.
    fn is_present(&self) -> bool;

    /// Whether a decoration of kind `T` can be found at the current
    /// position. Suppresses *every* failure kind — an illegal selection is
    /// `false` here, not an error.
    fn has<T: Any>(&self) -> bool;
}

impl Probe for Cursor {
    fn is_present(&self) -> bool {
        // A constructed cursor always holds a selection; absence lives at
        // the Result boundary.
        true
    }

    fn has<T: Any>(&self) -> bool {
        self.annotation::<T>().is_ok()
    }
}

impl Probe for Result<Cursor, QueryError> {
    fn is_present(&self) -> bool {
        self.is_ok()
    }

    fn has<T: Any>(&self) -> bool {
        self.as_ref().map(|cursor| cursor.has::<T>()).unwrap_or(false)
    }
}
