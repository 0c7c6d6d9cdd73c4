//! In-memory model of program elements and their decorations.
//!
//! This module plays the part a reflective runtime plays elsewhere: it is
//! the element catalog ("declared field by name", "declared method by
//! name+signature", "accessible constructor by signature", "enclosing
//! package"), the decoration store ("declared decorations of element",
//! per-parameter decoration sets), and the parameter-name resolver (the
//! best-effort name table). The query core consumes only the handle surface
//! defined here.
//!
//! ## Key Types
//!
//! - [`Decoration`], [`DecorationKind`] — typed data records and their kind
//!   identity
//! - [`TypeHandle`], [`FieldHandle`], [`CallableHandle`], [`PackageHandle`] —
//!   opaque element handles
//! - [`Parameter`] — one parameter slot with its decoration set
//! - [`ElementRef`] — the union of elements a query chain can start from
//! - [`TypeBuilder`] and friends — fluent model declaration
//!
//! All model data is immutable once built and shared via `Arc`; handles are
//! cheap to clone and safe to share across threads.

mod build;
mod decoration;
mod element;

pub use build::{CallableBuilder, FieldBuilder, PackageBuilder, ParamBuilder, TypeBuilder};
pub use decoration::{Decoration, DecorationKind};
pub use element::{
    CallableHandle, CallableKind, ElementRef, FieldHandle, PackageHandle, Parameter, TypeHandle,
    Visibility,
};
