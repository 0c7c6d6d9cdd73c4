//! # annoquery
//!
//! Fluent query library for decorations attached to program-element models.
//!
//! A *decoration* is a typed, immutable data record attached to a program
//! element — a type, field, method, constructor, parameter slot, or package.
//! This crate provides an in-memory element model plus a chainable, immutable
//! [`Cursor`] for navigating from a type down to a member or parameter and
//! querying the decorations found there.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! query     → Cursor navigation and decoration queries
//!   ↓
//! model     → Element handles, decorations, model builders
//! ```
//!
//! ## Usage
//!
//! ```
//! use annoquery::model::{CallableBuilder, FieldBuilder, PackageHandle, ParamBuilder, TypeHandle};
//! use annoquery::query::{Probe, query};
//!
//! #[derive(Debug)]
//! struct Required;
//! #[derive(Debug)]
//! struct Max {
//!     value: i64,
//! }
//!
//! let package = PackageHandle::new("demo::people");
//! let person = TypeHandle::builder("Person", &package)
//!     .field(FieldBuilder::new("name", "String").decoration(Required))
//!     .constructor(
//!         CallableBuilder::constructor()
//!             .param(ParamBuilder::named("name", "String").decoration(Required))
//!             .param(ParamBuilder::named("age", "Integer").decoration(Max { value: 20 })),
//!     )
//!     .build();
//!
//! assert!(query(&person).field("name").has::<Required>());
//!
//! let max = query(&person)
//!     .constructor(&["String", "Integer"])
//!     .and_then(|c| c.param("age"))
//!     .and_then(|c| c.instance::<Max>())
//!     .unwrap();
//! assert_eq!(max.value, 20);
//! ```
//!
//! ## Concurrency
//!
//! Everything is immutable after construction: handles, decorations, and
//! cursors are `Send + Sync` values shared via `Arc`. Independent query
//! chains may run over one model from any number of threads with no locks.

/// Element model: handles, decorations, visibility, builders
pub mod model;

/// Query core: cursor navigation, decoration queries, errors, probes
pub mod query;

// Re-export the everyday surface at the crate root
pub use model::{
    CallableHandle, CallableKind, Decoration, DecorationKind, ElementRef, FieldHandle,
    PackageHandle, Parameter, TypeHandle, Visibility,
};
pub use query::{Cursor, DecorationMap, Probe, QueryError, SelectionKind, query};
