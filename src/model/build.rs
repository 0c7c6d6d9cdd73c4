//! Builders for declaring model elements.
//!
//! A model is declared fluently and frozen at `build()`; handles produced
//! here never change afterwards.

use std::any::Any;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::decoration::Decoration;
use super::element::{
    CallableData, CallableHandle, CallableKind, FieldData, FieldHandle, PackageData,
    PackageHandle, Parameter, TypeData, TypeHandle, Visibility,
};

// ============================================================================
// PACKAGE
// ============================================================================

/// Builder for a decorated package.
pub struct PackageBuilder {
    name: SmolStr,
    decorations: Vec<Decoration>,
}

impl PackageHandle {
    /// Start declaring a package that carries decorations.
    /// For an undecorated package, [`PackageHandle::new`] is shorter.
    pub fn builder(name: impl Into<SmolStr>) -> PackageBuilder {
        PackageBuilder {
            name: name.into(),
            decorations: Vec::new(),
        }
    }
}

impl PackageBuilder {
    /// Attach a decoration to the package.
    pub fn decoration<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.decorations.push(Decoration::new(value));
        self
    }

    pub fn build(self) -> PackageHandle {
        PackageHandle::from_data(PackageData {
            name: self.name,
            decorations: self.decorations.into(),
        })
    }
}

// ============================================================================
// FIELD
// ============================================================================

/// Builder for a declared field.
pub struct FieldBuilder {
    name: SmolStr,
    type_name: SmolStr,
    visibility: Visibility,
    decorations: Vec<Decoration>,
}

impl FieldBuilder {
    pub fn new(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            visibility: Visibility::default(),
            decorations: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach a decoration to the field.
    pub fn decoration<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.decorations.push(Decoration::new(value));
        self
    }

    fn build(self, declared_in: SmolStr) -> FieldHandle {
        FieldHandle::from_data(FieldData {
            name: self.name,
            type_name: self.type_name,
            visibility: self.visibility,
            declared_in,
            decorations: self.decorations.into(),
        })
    }
}

// ============================================================================
// PARAMETER
// ============================================================================

/// Builder for one parameter slot.
pub struct ParamBuilder {
    name: Option<SmolStr>,
    type_name: SmolStr,
    decorations: Vec<Decoration>,
}

impl ParamBuilder {
    /// A parameter with a declared name.
    pub fn named(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: type_name.into(),
            decorations: Vec::new(),
        }
    }

    /// A parameter declared without a name. A callable containing one
    /// has no parameter-name table: only positional access works on it.
    pub fn positional(type_name: impl Into<SmolStr>) -> Self {
        Self {
            name: None,
            type_name: type_name.into(),
            decorations: Vec::new(),
        }
    }

    /// Attach a decoration to the parameter slot.
    pub fn decoration<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.decorations.push(Decoration::new(value));
        self
    }

    fn build(self) -> Parameter {
        Parameter {
            name: self.name,
            type_name: self.type_name,
            decorations: self.decorations.into(),
        }
    }
}

// ============================================================================
// CALLABLE (method / constructor)
// ============================================================================

/// Builder for a declared method or constructor.
pub struct CallableBuilder {
    kind: CallableKind,
    name: SmolStr,
    visibility: Visibility,
    decorations: Vec<Decoration>,
    params: Vec<ParamBuilder>,
}

impl CallableBuilder {
    /// A method with the given name.
    pub fn method(name: impl Into<SmolStr>) -> Self {
        Self {
            kind: CallableKind::Method,
            name: name.into(),
            visibility: Visibility::default(),
            decorations: Vec::new(),
            params: Vec::new(),
        }
    }

    /// A constructor. Its name is filled in from the declaring type at
    /// `TypeBuilder::build`.
    pub fn constructor() -> Self {
        Self {
            kind: CallableKind::Constructor,
            name: SmolStr::default(),
            visibility: Visibility::default(),
            decorations: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Attach a decoration to the callable itself.
    pub fn decoration<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.decorations.push(Decoration::new(value));
        self
    }

    /// Append a parameter slot, in declaration order.
    pub fn param(mut self, param: ParamBuilder) -> Self {
        self.params.push(param);
        self
    }

    fn build(self, type_name: &SmolStr, declared_in: SmolStr) -> CallableHandle {
        let name = match self.kind {
            CallableKind::Method => self.name,
            CallableKind::Constructor => type_name.clone(),
        };
        let params: Vec<Parameter> = self.params.into_iter().map(ParamBuilder::build).collect();
        CallableHandle::from_data(CallableData {
            kind: self.kind,
            name,
            visibility: self.visibility,
            declared_in,
            decorations: self.decorations.into(),
            params: params.into(),
        })
    }
}

// ============================================================================
// TYPE
// ============================================================================

/// Builder for a type and its declared members.
pub struct TypeBuilder {
    name: SmolStr,
    package: PackageHandle,
    decorations: Vec<Decoration>,
    fields: Vec<FieldBuilder>,
    methods: Vec<CallableBuilder>,
    constructors: Vec<CallableBuilder>,
}

impl TypeHandle {
    /// Start declaring a type inside `package`.
    pub fn builder(name: impl Into<SmolStr>, package: &PackageHandle) -> TypeBuilder {
        TypeBuilder {
            name: name.into(),
            package: package.clone(),
            decorations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }
}

impl TypeBuilder {
    /// Attach a decoration to the type itself.
    pub fn decoration<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.decorations.push(Decoration::new(value));
        self
    }

    /// Declare a field. A later field with the same name replaces the
    /// earlier declaration.
    pub fn field(mut self, field: FieldBuilder) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare a method. Overloads are distinguished by signature.
    pub fn method(mut self, method: CallableBuilder) -> Self {
        self.methods.push(method);
        self
    }

    /// Declare a constructor.
    pub fn constructor(mut self, constructor: CallableBuilder) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn build(self) -> TypeHandle {
        let qualified: SmolStr = if self.package.name().is_empty() {
            self.name.clone()
        } else {
            SmolStr::new(format!("{}::{}", self.package.name(), self.name))
        };

        let mut fields = IndexMap::new();
        for field in self.fields {
            let handle = field.build(qualified.clone());
            fields.insert(SmolStr::new(handle.name()), handle);
        }

        let methods: Vec<CallableHandle> = self
            .methods
            .into_iter()
            .map(|m| m.build(&self.name, qualified.clone()))
            .collect();
        let mut method_index: FxHashMap<SmolStr, Vec<usize>> = FxHashMap::default();
        for (i, method) in methods.iter().enumerate() {
            method_index
                .entry(SmolStr::new(method.name()))
                .or_default()
                .push(i);
        }

        let constructors: Vec<CallableHandle> = self
            .constructors
            .into_iter()
            .map(|c| c.build(&self.name, qualified.clone()))
            .collect();

        TypeHandle::from_data(TypeData {
            name: self.name,
            qualified,
            package: self.package,
            decorations: self.decorations.into(),
            fields,
            methods: methods.into(),
            method_index,
            constructors: constructors.into(),
        })
    }
}
