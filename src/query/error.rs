//! Error types for query navigation and terminal unwraps.

use thiserror::Error;

use super::cursor::SelectionKind;

/// Failures surfaced by cursor navigation and terminal unwraps.
///
/// Every failure surfaces immediately to the caller; there is no retry and
/// no fallback value, and a failed step never yields a partially valid
/// cursor. The only place failures are converted rather than propagated is
/// the [`Probe`](super::Probe) family, which maps them to `false`.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Navigation operation invoked on a selection kind that does not
    /// support it.
    #[error("cannot navigate via `{operation}` from a {selection} selection")]
    InvalidNavigation {
        operation: &'static str,
        selection: SelectionKind,
    },

    /// A named or signature-matched child element does not exist on the
    /// selected type.
    #[error("no declared {kind} `{name}` on `{owner}`")]
    ElementNotFound {
        kind: &'static str,
        name: String,
        owner: String,
    },

    /// Positional parameter access outside the declared parameter count.
    #[error("parameter index {index} out of range for `{owner}` ({count} declared)")]
    IndexOutOfRange {
        index: isize,
        count: usize,
        owner: String,
    },

    /// A decoration search (single-kind or all-kinds) yielded nothing.
    #[error(
        "no decoration{} declared on {}",
        .kind.map(|k| format!(" of kind `{k}`")).unwrap_or_else(|| "s".to_string()),
        .target
    )]
    DecorationNotFound {
        /// The searched kind; `None` for the all-kinds search.
        kind: Option<&'static str>,
        target: String,
    },

    /// A terminal unwrap or decoration search invoked on an incompatible
    /// selection kind.
    #[error("`{operation}` is not valid for a {selection} selection")]
    InvalidSelection {
        operation: &'static str,
        selection: SelectionKind,
    },

    /// The parameter-name table is unavailable for this callable; by-name
    /// parameter lookup cannot succeed, by-index lookup still can.
    #[error("parameter names are unavailable for `{owner}`")]
    NameResolutionUnavailable { owner: String },
}

impl QueryError {
    pub fn invalid_navigation(operation: &'static str, selection: SelectionKind) -> Self {
        Self::InvalidNavigation {
            operation,
            selection,
        }
    }

    pub fn element_not_found(
        kind: &'static str,
        name: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self::ElementNotFound {
            kind,
            name: name.into(),
            owner: owner.into(),
        }
    }

    pub fn index_out_of_range(index: isize, count: usize, owner: impl Into<String>) -> Self {
        Self::IndexOutOfRange {
            index,
            count,
            owner: owner.into(),
        }
    }

    pub fn decoration_not_found(kind: Option<&'static str>, target: impl Into<String>) -> Self {
        Self::DecorationNotFound {
            kind,
            target: target.into(),
        }
    }

    pub fn invalid_selection(operation: &'static str, selection: SelectionKind) -> Self {
        Self::InvalidSelection {
            operation,
            selection,
        }
    }

    pub fn name_resolution_unavailable(owner: impl Into<String>) -> Self {
        Self::NameResolutionUnavailable {
            owner: owner.into(),
        }
    }
}
