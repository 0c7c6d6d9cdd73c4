//! The cursor: an immutable, chainable selection over decorated elements.
//!
//! A [`Cursor`] wraps whatever is currently selected — an element handle, a
//! single decoration, a decoration sequence, one parameter slot's decoration
//! set, or a name→decoration-set mapping. Every operation takes `&self` and
//! returns a fresh cursor (inside `Result`) or a terminal value; nothing is
//! mutated in place, so cursors and their inputs can be shared freely.
//!
//! Navigation is capability-gated: each operation is legal only for certain
//! selection kinds, and an illegal step is a hard
//! [`QueryError::InvalidNavigation`] / [`QueryError::InvalidSelection`],
//! never a silent no-op. A failed step never yields a partially valid
//! cursor to continue from.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::model::{
    CallableHandle, Decoration, DecorationKind, ElementRef, FieldHandle, PackageHandle, TypeHandle,
};

use super::error::QueryError;

/// Mapping from parameter name (or stringified index) to that parameter
/// slot's decoration set, in declaration order.
pub type DecorationMap = IndexMap<SmolStr, Arc<[Decoration]>>;

/// Start a query chain at `element`.
///
/// Accepts any element handle (or a reference to one). Always succeeds; all
/// validation happens on the navigation steps that follow.
pub fn query(element: impl Into<ElementRef>) -> Cursor {
    Cursor::new(element.into())
}

/// What a cursor currently selects.
#[derive(Clone)]
enum Selection {
    Type(TypeHandle),
    Field(FieldHandle),
    Method(CallableHandle),
    Constructor(CallableHandle),
    Package(PackageHandle),
    /// A single decoration, from `annotation`.
    Decoration(Decoration),
    /// The full ordered sequence of an element's decorations, from
    /// `annotations`. Terminal: only `list` applies.
    Sequence(Arc<[Decoration]>),
    /// One parameter slot's decoration set, from `arg`/`param`. Decoration
    /// searches apply to it.
    Slot(Arc<[Decoration]>),
    /// Name (or stringified index) → decoration set, from `params`/`args`.
    Mapping(Arc<DecorationMap>),
}

/// The tag of a cursor's current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Type,
    Field,
    Method,
    Constructor,
    Package,
    Decoration,
    Sequence,
    Slot,
    Mapping,
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SelectionKind::Type => "type",
            SelectionKind::Field => "field",
            SelectionKind::Method => "method",
            SelectionKind::Constructor => "constructor",
            SelectionKind::Package => "package",
            SelectionKind::Decoration => "decoration",
            SelectionKind::Sequence => "decoration sequence",
            SelectionKind::Slot => "parameter slot",
            SelectionKind::Mapping => "mapping",
        };
        f.write_str(label)
    }
}

/// An immutable navigation/query value wrapping a current selection.
///
/// Created by [`query`] or by any navigation operation. Cursors are values:
/// cheap to clone, safe to keep around, and never invalidated by later
/// operations on them.
#[derive(Clone)]
pub struct Cursor {
    selection: Selection,
}

impl Cursor {
    fn new(element: ElementRef) -> Self {
        let selection = match element {
            ElementRef::Type(handle) => Selection::Type(handle),
            ElementRef::Field(handle) => Selection::Field(handle),
            ElementRef::Method(handle) => Selection::Method(handle),
            ElementRef::Constructor(handle) => Selection::Constructor(handle),
            ElementRef::Package(handle) => Selection::Package(handle),
        };
        Self { selection }
    }

    fn select(selection: Selection) -> Self {
        Self { selection }
    }

    /// The tag of the current selection.
    pub fn selection_kind(&self) -> SelectionKind {
        match &self.selection {
            Selection::Type(_) => SelectionKind::Type,
            Selection::Field(_) => SelectionKind::Field,
            Selection::Method(_) => SelectionKind::Method,
            Selection::Constructor(_) => SelectionKind::Constructor,
            Selection::Package(_) => SelectionKind::Package,
            Selection::Decoration(_) => SelectionKind::Decoration,
            Selection::Sequence(_) => SelectionKind::Sequence,
            Selection::Slot(_) => SelectionKind::Slot,
            Selection::Mapping(_) => SelectionKind::Mapping,
        }
    }

    /// Human-readable description of the current selection, as used in
    /// error messages.
    pub fn describe(&self) -> String {
        match &self.selection {
            Selection::Type(t) => format!("type `{}`", t.qualified_name()),
            Selection::Field(f) => format!("field `{}`", f.qualified_name()),
            Selection::Method(m) => format!("method `{}`", m.qualified_signature()),
            Selection::Constructor(c) => format!("constructor `{}`", c.qualified_signature()),
            Selection::Package(p) => format!("package `{}`", p.name()),
            Selection::Decoration(d) => format!("decoration `{}`", d.kind().short_name()),
            Selection::Sequence(s) => format!("sequence of {} decorations", s.len()),
            Selection::Slot(s) => format!("parameter slot carrying {} decorations", s.len()),
            Selection::Mapping(m) => format!("mapping over {} parameters", m.len()),
        }
    }

    // ------------------------------------------------------------------
    // Element navigation (legal on a type selection)
    // ------------------------------------------------------------------

    /// Select the declared field `name` of the selected type.
    ///
    /// Declared means exactly that: inherited fields are not visible.
    pub fn field(&self, name: &str) -> Result<Cursor, QueryError> {
        match &self.selection {
            Selection::Type(ty) => {
                trace!(owner = ty.qualified_name(), field = name, "resolving declared field");
                ty.declared_field(name)
                    .map(|f| Cursor::select(Selection::Field(f.clone())))
                    .ok_or_else(|| {
                        QueryError::element_not_found("field", name, ty.qualified_name())
                    })
            }
            _ => Err(QueryError::invalid_navigation(
                "field",
                self.selection_kind(),
            )),
        }
    }

    /// Select the declared zero-parameter method `name` of the selected
    /// type.
    pub fn method(&self, name: &str) -> Result<Cursor, QueryError> {
        self.method_with(name, &[])
    }

    /// Select the declared method matching `name` and the exact
    /// parameter-type signature. Lookup sees every visibility and performs
    /// no widening: type names must match verbatim.
    pub fn method_with(&self, name: &str, signature: &[&str]) -> Result<Cursor, QueryError> {
        match &self.selection {
            Selection::Type(ty) => {
                trace!(
                    owner = ty.qualified_name(),
                    method = name,
                    arity = signature.len(),
                    "resolving declared method"
                );
                ty.declared_method(name, signature)
                    .map(|m| Cursor::select(Selection::Method(m.clone())))
                    .ok_or_else(|| {
                        QueryError::element_not_found(
                            "method",
                            member_signature(name, signature),
                            ty.qualified_name(),
                        )
                    })
            }
            _ => Err(QueryError::invalid_navigation(
                "method",
                self.selection_kind(),
            )),
        }
    }

    /// Select the accessible constructor with the exact parameter-type
    /// signature. Unlike field/method lookup, only public constructors are
    /// visible here.
    pub fn constructor(&self, signature: &[&str]) -> Result<Cursor, QueryError> {
        match &self.selection {
            Selection::Type(ty) => {
                trace!(
                    owner = ty.qualified_name(),
                    arity = signature.len(),
                    "resolving accessible constructor"
                );
                ty.accessible_constructor(signature)
                    .map(|c| Cursor::select(Selection::Constructor(c.clone())))
                    .ok_or_else(|| {
                        QueryError::element_not_found(
                            "constructor",
                            member_signature(ty.name(), signature),
                            ty.qualified_name(),
                        )
                    })
            }
            _ => Err(QueryError::invalid_navigation(
                "constructor",
                self.selection_kind(),
            )),
        }
    }

    /// Select the enclosing package of the selected type.
    pub fn package(&self) -> Result<Cursor, QueryError> {
        match &self.selection {
            Selection::Type(ty) => Ok(Cursor::select(Selection::Package(ty.package().clone()))),
            _ => Err(QueryError::invalid_navigation(
                "package",
                self.selection_kind(),
            )),
        }
    }

    /// All declared fields of the selected type, each re-wrapped as its own
    /// cursor, in declaration order.
    pub fn fields(&self) -> Result<Vec<Cursor>, QueryError> {
        self.fields_where(|_| true)
    }

    /// Declared fields whose per-field cursor satisfies `filter`, in
    /// declaration order.
    pub fn fields_where(&self, filter: impl Fn(&Cursor) -> bool) -> Result<Vec<Cursor>, QueryError> {
        match &self.selection {
            Selection::Type(ty) => Ok(ty
                .declared_fields()
                .map(|f| Cursor::select(Selection::Field(f.clone())))
                .filter(|cursor| filter(cursor))
                .collect()),
            _ => Err(QueryError::invalid_navigation(
                "fields",
                self.selection_kind(),
            )),
        }
    }

    // ------------------------------------------------------------------
    // Parameter access (legal on a method/constructor selection)
    // ------------------------------------------------------------------

    fn callable(&self, operation: &'static str) -> Result<&CallableHandle, QueryError> {
        match &self.selection {
            Selection::Method(c) | Selection::Constructor(c) => Ok(c),
            _ => Err(QueryError::invalid_navigation(
                operation,
                self.selection_kind(),
            )),
        }
    }

    /// Select the decoration set of the parameter named `name`.
    ///
    /// Requires the parameter-name table; a model built without names yields
    /// [`QueryError::NameResolutionUnavailable`]. A name the table does not
    /// contain resolves to index −1 and surfaces as the indexed lookup's
    /// out-of-range failure.
    pub fn param(&self, name: &str) -> Result<Cursor, QueryError> {
        let callable = self.callable("param")?;
        let names = callable.parameter_names().ok_or_else(|| {
            QueryError::name_resolution_unavailable(callable.qualified_signature())
        })?;
        let index = names
            .iter()
            .position(|n| n == name)
            .map(|i| i as isize)
            .unwrap_or(-1);
        trace!(
            owner = callable.name(),
            param = name,
            index = index as i64,
            "resolved parameter name"
        );
        self.slot_at(callable, index)
    }

    /// Select the decoration set of the parameter slot at `index`.
    ///
    /// `index` must be within `[0, parameter_count)`; anything else is an
    /// explicit [`QueryError::IndexOutOfRange`], never a panic.
    pub fn arg(&self, index: usize) -> Result<Cursor, QueryError> {
        let callable = self.callable("arg")?;
        self.slot_at(callable, index as isize)
    }

    fn slot_at(&self, callable: &CallableHandle, index: isize) -> Result<Cursor, QueryError> {
        let count = callable.parameter_count();
        if index < 0 || index as usize >= count {
            return Err(QueryError::index_out_of_range(
                index,
                count,
                callable.qualified_signature(),
            ));
        }
        let slot = &callable.parameters()[index as usize];
        Ok(Cursor::select(Selection::Slot(slot.decorations_arc().clone())))
    }

    /// Select the mapping from each declared parameter name to its
    /// decoration set, positionally aligned with [`Cursor::arg`].
    pub fn params(&self) -> Result<Cursor, QueryError> {
        let callable = self.callable("params")?;
        let names = callable.parameter_names().ok_or_else(|| {
            QueryError::name_resolution_unavailable(callable.qualified_signature())
        })?;
        let map: DecorationMap = names
            .into_iter()
            .zip(callable.parameters())
            .map(|(name, param)| (name, param.decorations_arc().clone()))
            .collect();
        Ok(Cursor::select(Selection::Mapping(Arc::new(map))))
    }

    /// Select the mapping from each parameter's stringified index ("0",
    /// "1", …) to its decoration set. Needs no name resolution.
    pub fn args(&self) -> Result<Cursor, QueryError> {
        let callable = self.callable("args")?;
        let map: DecorationMap = callable
            .parameters()
            .iter()
            .enumerate()
            .map(|(i, param)| (SmolStr::new(i.to_string()), param.decorations_arc().clone()))
            .collect();
        Ok(Cursor::select(Selection::Mapping(Arc::new(map))))
    }

    /// Terminal unwrap of a mapping selection.
    ///
    /// Other selection kinds are never reinterpreted: anything but a
    /// mapping is [`QueryError::InvalidSelection`].
    pub fn map(&self) -> Result<Arc<DecorationMap>, QueryError> {
        match &self.selection {
            Selection::Mapping(map) => Ok(map.clone()),
            _ => Err(QueryError::invalid_selection("map", self.selection_kind())),
        }
    }

    // ------------------------------------------------------------------
    // Decoration queries
    // ------------------------------------------------------------------

    /// The decorations the current selection carries, when it carries any
    /// at all: an element's declared decorations, or a parameter slot's set.
    fn searchable_decorations(&self) -> Option<&Arc<[Decoration]>> {
        match &self.selection {
            Selection::Type(t) => Some(t.decorations_arc()),
            Selection::Field(f) => Some(f.decorations_arc()),
            Selection::Method(c) | Selection::Constructor(c) => Some(c.decorations_arc()),
            Selection::Package(p) => Some(p.decorations_arc()),
            Selection::Slot(set) => Some(set),
            Selection::Decoration(_) | Selection::Sequence(_) | Selection::Mapping(_) => None,
        }
    }

    /// Select the first declared decoration of kind `T` on the current
    /// element or parameter slot.
    pub fn annotation<T: Any>(&self) -> Result<Cursor, QueryError> {
        let kind = DecorationKind::of::<T>();
        let source = self
            .searchable_decorations()
            .ok_or_else(|| QueryError::invalid_selection("annotation", self.selection_kind()))?;
        trace!(
            kind = kind.short_name(),
            selection = %self.describe(),
            "searching decoration"
        );
        source
            .iter()
            .find(|d| d.kind() == kind)
            .cloned()
            .map(|d| Cursor::select(Selection::Decoration(d)))
            .ok_or_else(|| {
                QueryError::decoration_not_found(Some(kind.short_name()), self.describe())
            })
    }

    /// Select the ordered sequence of all declared decorations on the
    /// current element or parameter slot.
    ///
    /// An element that exists but carries no decorations is a
    /// [`QueryError::DecorationNotFound`], not an empty success.
    pub fn annotations(&self) -> Result<Cursor, QueryError> {
        let source = self
            .searchable_decorations()
            .ok_or_else(|| QueryError::invalid_selection("annotations", self.selection_kind()))?;
        if source.is_empty() {
            return Err(QueryError::decoration_not_found(None, self.describe()));
        }
        Ok(Cursor::select(Selection::Sequence(source.clone())))
    }

    /// Terminal unwrap of a single-decoration selection, typed by the
    /// caller.
    ///
    /// The caller asserts the decoration's kind; asserting the wrong `T` is
    /// reported as [`QueryError::InvalidSelection`].
    pub fn get<T: Any + Send + Sync>(&self) -> Result<Arc<T>, QueryError> {
        match &self.selection {
            Selection::Decoration(decoration) => decoration
                .downcast::<T>()
                .ok_or_else(|| QueryError::invalid_selection("get", self.selection_kind())),
            _ => Err(QueryError::invalid_selection("get", self.selection_kind())),
        }
    }

    /// Terminal unwrap of a decoration-sequence selection.
    pub fn list(&self) -> Result<Vec<Decoration>, QueryError> {
        match &self.selection {
            Selection::Sequence(seq) => Ok(seq.to_vec()),
            _ => Err(QueryError::invalid_selection("list", self.selection_kind())),
        }
    }

    /// Combined convenience: search for a decoration of kind `T` and return
    /// its typed payload directly, short-circuiting
    /// `annotation::<T>()?.get::<T>()`.
    pub fn instance<T: Any + Send + Sync>(&self) -> Result<Arc<T>, QueryError> {
        self.annotation::<T>()?.get::<T>()
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor({})", self.describe())
    }
}

/// `name(TypeA, TypeB)`, for not-found diagnostics.
fn member_signature(name: &str, signature: &[&str]) -> String {
    format!("{}({})", name, signature.join(", "))
}
