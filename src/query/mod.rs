//! Query core — fluent, immutable navigation over decorated elements.
//!
//! A chain starts at [`query`] with any element handle, navigates down
//! through members and parameters, and ends with a terminal query:
//! materialize one decoration ([`Cursor::get`] / [`Cursor::instance`]), list
//! them all ([`Cursor::list`]), unwrap a parameter mapping
//! ([`Cursor::map`]), or probe presence ([`Probe`]).
//!
//! ## Key Types
//!
//! - [`Cursor`] — immutable per-step selection holder
//! - [`SelectionKind`] — the public tag of a cursor's selection
//! - [`QueryError`] — the failure taxonomy; every operation propagates
//!   failures immediately except the [`Probe`] family
//! - [`Probe`] — the non-throwing `is_present`/`has` probes

mod cursor;
mod error;
mod probe;


pub use cursor::{Cursor, DecorationMap, SelectionKind, query};
pub use error::QueryError;
pub use probe::Probe;
