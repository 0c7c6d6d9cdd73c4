//! Element handles: the in-memory catalog of program elements.
//!
//! Handles are opaque, cheaply cloneable references to immutable model data.
//! All lookups see *declared* members only — nothing is inherited or merged
//! from other types — and member order is declaration order.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::decoration::Decoration;

// ============================================================================
// VISIBILITY
// ============================================================================

/// Declared visibility of a member.
///
/// Field and method lookups see every visibility; constructor lookup sees
/// only [`Visibility::Public`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Whether a callable is a method or a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallableKind {
    Method,
    Constructor,
}

// ============================================================================
// PACKAGE
// ============================================================================

pub(crate) struct PackageData {
    pub(crate) name: SmolStr,
    pub(crate) decorations: Arc<[Decoration]>,
}

/// Handle to a package: a qualified name plus its declared decorations
/// (possibly none).
#[derive(Clone)]
pub struct PackageHandle(Arc<PackageData>);

impl PackageHandle {
    /// An undecorated package.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self::from_data(PackageData {
            name: name.into(),
            decorations: Arc::from(Vec::new()),
        })
    }

    pub(crate) fn from_data(data: PackageData) -> Self {
        Self(Arc::new(data))
    }

    /// Qualified package name, e.g. `demo::people`.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Decorations declared on the package itself.
    pub fn decorations(&self) -> &[Decoration] {
        &self.0.decorations
    }

    pub(crate) fn decorations_arc(&self) -> &Arc<[Decoration]> {
        &self.0.decorations
    }
}

impl fmt::Debug for PackageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackageHandle({})", self.0.name)
    }
}

// ============================================================================
// FIELD
// ============================================================================

pub(crate) struct FieldData {
    pub(crate) name: SmolStr,
    pub(crate) type_name: SmolStr,
    pub(crate) visibility: Visibility,
    pub(crate) declared_in: SmolStr,
    pub(crate) decorations: Arc<[Decoration]>,
}

/// Handle to a declared field.
#[derive(Clone)]
pub struct FieldHandle(Arc<FieldData>);

impl FieldHandle {
    pub(crate) fn from_data(data: FieldData) -> Self {
        Self(Arc::new(data))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Name of the field's declared type.
    pub fn type_name(&self) -> &str {
        &self.0.type_name
    }

    pub fn visibility(&self) -> Visibility {
        self.0.visibility
    }

    /// Qualified name of the declaring type.
    pub fn declared_in(&self) -> &str {
        &self.0.declared_in
    }

    /// `DeclaringType::field_name`, for diagnostics.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.0.declared_in, self.0.name)
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.0.decorations
    }

    pub(crate) fn decorations_arc(&self) -> &Arc<[Decoration]> {
        &self.0.decorations
    }
}

impl fmt::Debug for FieldHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldHandle({})", self.qualified_name())
    }
}

// ============================================================================
// PARAMETER
// ============================================================================

/// One parameter slot of a method or constructor.
///
/// The declared name is best-effort: a model may be built without parameter
/// names, in which case only positional access works.
#[derive(Clone)]
pub struct Parameter {
    pub(crate) name: Option<SmolStr>,
    pub(crate) type_name: SmolStr,
    pub(crate) decorations: Arc<[Decoration]>,
}

impl Parameter {
    /// Declared parameter name, when available.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Decorations attached to this parameter slot.
    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    pub(crate) fn decorations_arc(&self) -> &Arc<[Decoration]> {
        &self.decorations
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Parameter({name}: {})", self.type_name),
            None => write!(f, "Parameter(_: {})", self.type_name),
        }
    }
}

// ============================================================================
// CALLABLE (method / constructor)
// ============================================================================

pub(crate) struct CallableData {
    pub(crate) kind: CallableKind,
    pub(crate) name: SmolStr,
    pub(crate) visibility: Visibility,
    pub(crate) declared_in: SmolStr,
    pub(crate) decorations: Arc<[Decoration]>,
    pub(crate) params: Box<[Parameter]>,
}

/// Handle to a declared method or constructor.
///
/// Methods and constructors share one representation; [`CallableKind`] tells
/// them apart. A constructor's `name()` is the simple name of its type.
#[derive(Clone)]
pub struct CallableHandle(Arc<CallableData>);

impl CallableHandle {
    pub(crate) fn from_data(data: CallableData) -> Self {
        Self(Arc::new(data))
    }

    pub fn kind(&self) -> CallableKind {
        self.0.kind
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn visibility(&self) -> Visibility {
        self.0.visibility
    }

    /// Qualified name of the declaring type.
    pub fn declared_in(&self) -> &str {
        &self.0.declared_in
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.0.decorations
    }

    pub(crate) fn decorations_arc(&self) -> &Arc<[Decoration]> {
        &self.0.decorations
    }

    /// Parameter slots in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.0.params
    }

    pub fn parameter_count(&self) -> usize {
        self.0.params.len()
    }

    /// Declared parameter names, index-aligned with [`Self::parameters`].
    ///
    /// `None` when any slot was declared without a name — the model was
    /// built without parameter names, so by-name lookup cannot work.
    pub fn parameter_names(&self) -> Option<Vec<SmolStr>> {
        self.0
            .params
            .iter()
            .map(|p| p.name.clone())
            .collect::<Option<Vec<_>>>()
    }

    /// `name(TypeA, TypeB)`, for diagnostics.
    pub fn signature(&self) -> String {
        let types: Vec<&str> = self.0.params.iter().map(|p| p.type_name.as_str()).collect();
        format!("{}({})", self.0.name, types.join(", "))
    }

    /// `DeclaringType::name(TypeA, TypeB)`, for diagnostics.
    pub fn qualified_signature(&self) -> String {
        format!("{}::{}", self.0.declared_in, self.signature())
    }

    pub(crate) fn matches_signature(&self, signature: &[&str]) -> bool {
        self.0.params.len() == signature.len()
            && self
                .0
                .params
                .iter()
                .zip(signature)
                .all(|(param, ty)| param.type_name == *ty)
    }
}

impl fmt::Debug for CallableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.kind {
            CallableKind::Method => write!(f, "MethodHandle({})", self.qualified_signature()),
            CallableKind::Constructor => {
                write!(f, "ConstructorHandle({})", self.qualified_signature())
            }
        }
    }
}

// ============================================================================
// TYPE
// ============================================================================

pub(crate) struct TypeData {
    pub(crate) name: SmolStr,
    pub(crate) qualified: SmolStr,
    pub(crate) package: PackageHandle,
    pub(crate) decorations: Arc<[Decoration]>,
    /// Declared fields, keyed by name, in declaration order.
    pub(crate) fields: IndexMap<SmolStr, FieldHandle>,
    pub(crate) methods: Box<[CallableHandle]>,
    /// Method name → indices into `methods`, for O(1) overload lookup.
    pub(crate) method_index: FxHashMap<SmolStr, Vec<usize>>,
    pub(crate) constructors: Box<[CallableHandle]>,
}

/// Handle to a type: the root of most query chains.
#[derive(Clone)]
pub struct TypeHandle(Arc<TypeData>);

impl TypeHandle {
    pub(crate) fn from_data(data: TypeData) -> Self {
        Self(Arc::new(data))
    }

    /// Simple type name.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// `package::TypeName`.
    pub fn qualified_name(&self) -> &str {
        &self.0.qualified
    }

    /// Enclosing package.
    pub fn package(&self) -> &PackageHandle {
        &self.0.package
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.0.decorations
    }

    pub(crate) fn decorations_arc(&self) -> &Arc<[Decoration]> {
        &self.0.decorations
    }

    /// Declared field of exactly this name, any visibility.
    pub fn declared_field(&self, name: &str) -> Option<&FieldHandle> {
        self.0.fields.get(name)
    }

    /// All declared fields in declaration order.
    pub fn declared_fields(&self) -> impl Iterator<Item = &FieldHandle> {
        self.0.fields.values()
    }

    /// Declared method matching name and exact parameter-type signature,
    /// any visibility. No widening: type names must match verbatim.
    pub fn declared_method(&self, name: &str, signature: &[&str]) -> Option<&CallableHandle> {
        let overloads = self.0.method_index.get(name)?;
        overloads
            .iter()
            .map(|&i| &self.0.methods[i])
            .find(|m| m.matches_signature(signature))
    }

    /// Public constructor with the exact parameter-type signature.
    ///
    /// Unlike field/method lookup, non-public constructors are invisible
    /// here.
    pub fn accessible_constructor(&self, signature: &[&str]) -> Option<&CallableHandle> {
        self.0
            .constructors
            .iter()
            .filter(|c| c.visibility() == Visibility::Public)
            .find(|c| c.matches_signature(signature))
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHandle({})", self.0.qualified)
    }
}

// ============================================================================
// ELEMENT REF (inbound boundary)
// ============================================================================

/// Any program element a query chain can start from.
#[derive(Clone, Debug)]
pub enum ElementRef {
    Type(TypeHandle),
    Field(FieldHandle),
    Method(CallableHandle),
    Constructor(CallableHandle),
    Package(PackageHandle),
}

impl From<TypeHandle> for ElementRef {
    fn from(handle: TypeHandle) -> Self {
        ElementRef::Type(handle)
    }
}

impl From<&TypeHandle> for ElementRef {
    fn from(handle: &TypeHandle) -> Self {
        ElementRef::Type(handle.clone())
    }
}

impl From<FieldHandle> for ElementRef {
    fn from(handle: FieldHandle) -> Self {
        ElementRef::Field(handle)
    }
}

impl From<&FieldHandle> for ElementRef {
    fn from(handle: &FieldHandle) -> Self {
        ElementRef::Field(handle.clone())
    }
}

impl From<CallableHandle> for ElementRef {
    fn from(handle: CallableHandle) -> Self {
        match handle.kind() {
            CallableKind::Method => ElementRef::Method(handle),
            CallableKind::Constructor => ElementRef::Constructor(handle),
        }
    }
}

impl From<&CallableHandle> for ElementRef {
    fn from(handle: &CallableHandle) -> Self {
        handle.clone().into()
    }
}

impl From<PackageHandle> for ElementRef {
    fn from(handle: PackageHandle) -> Self {
        ElementRef::Package(handle)
    }
}

impl From<&PackageHandle> for ElementRef {
    fn from(handle: &PackageHandle) -> Self {
        ElementRef::Package(handle.clone())
    }
}
