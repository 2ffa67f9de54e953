//! Type interning.
//!
//! Every type is a [`TypeId`] handle into a [`TypeRegistry`]. The registry
//! hands out exactly one handle per distinct type, so handle equality is type
//! equality and overload matching never compares types structurally.

use std::fmt;

use rustc_hash::FxHashMap;

/// Handle to an interned type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    /// `int`
    pub const INT: TypeId = TypeId(0);
    /// `bool`
    pub const BOOL: TypeId = TypeId(1);
    /// `float`
    pub const FLOAT: TypeId = TypeId(2);
    /// `string`
    pub const STRING: TypeId = TypeId(3);
    /// `unit`
    pub const UNIT: TypeId = TypeId(4);

    /// Position in the registry.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Built-in scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// 32-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit float
    Float,
    /// Immutable string
    String,
    /// The type with one value
    Unit,
}

impl Primitive {
    /// All primitives, in handle order.
    pub const ALL: [Primitive; 5] = [
        Primitive::Int,
        Primitive::Bool,
        Primitive::Float,
        Primitive::String,
        Primitive::Unit,
    ];

    /// Source spelling of the type name.
    pub const fn name(&self) -> &'static str {
        match self {
            Primitive::Int => "int",
            Primitive::Bool => "bool",
            Primitive::Float => "float",
            Primitive::String => "string",
            Primitive::Unit => "unit",
        }
    }

    /// Look up a primitive by its source spelling.
    pub fn from_name(name: &str) -> Option<Primitive> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The interned handle for this primitive.
    pub const fn id(&self) -> TypeId {
        match self {
            Primitive::Int => TypeId::INT,
            Primitive::Bool => TypeId::BOOL,
            Primitive::Float => TypeId::FLOAT,
            Primitive::String => TypeId::STRING,
            Primitive::Unit => TypeId::UNIT,
        }
    }
}

/// Parameter and return types of a function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    /// Parameter types, in order
    pub params: Vec<TypeId>,
    /// Return type
    pub ret: TypeId,
}

impl FunctionType {
    /// Whether the parameters are exactly `args`, by handle identity.
    pub fn accepts(&self, args: &[TypeId]) -> bool {
        self.params.as_slice() == args
    }
}

/// What an interned handle denotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// A built-in scalar
    Primitive(Primitive),
    /// A function signature
    Function(FunctionType),
}

/// Interns types and hands out identity-comparable handles.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    kinds: Vec<TypeKind>,
    functions: FxHashMap<FunctionType, TypeId>,
}

impl TypeRegistry {
    /// Create a registry holding the primitives.
    pub fn new() -> Self {
        Self {
            kinds: Primitive::ALL.into_iter().map(TypeKind::Primitive).collect(),
            functions: FxHashMap::default(),
        }
    }

    /// Intern a type, returning its canonical handle.
    pub fn intern(&mut self, kind: TypeKind) -> TypeId {
        match kind {
            TypeKind::Primitive(p) => p.id(),
            TypeKind::Function(sig) => self.function(sig.params, sig.ret),
        }
    }

    /// Intern a function type by its parameter and return types.
    pub fn function(&mut self, params: Vec<TypeId>, ret: TypeId) -> TypeId {
        let sig = FunctionType { params, ret };
        if let Some(&id) = self.functions.get(&sig) {
            return id;
        }

        let id = TypeId(self.kinds.len() as u32);
        self.kinds.push(TypeKind::Function(sig.clone()));
        self.functions.insert(sig, id);
        id
    }

    /// What a handle denotes.
    pub fn kind(&self, id: TypeId) -> Option<&TypeKind> {
        self.kinds.get(id.index())
    }

    /// The signature behind a function-type handle.
    pub fn as_function(&self, id: TypeId) -> Option<&FunctionType> {
        match self.kind(id) {
            Some(TypeKind::Function(sig)) => Some(sig),
            _ => None,
        }
    }

    /// Resolve a type name. Only primitives have names.
    pub fn lookup_named(&self, name: &str) -> Option<TypeId> {
        Primitive::from_name(name).map(|p| p.id())
    }

    /// Number of interned types.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Always false; primitives are interned on construction.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Render a type for diagnostics.
    pub fn display(&self, id: TypeId) -> TypeDisplay<'_> {
        TypeDisplay { registry: self, id }
    }

    /// Render a list of types, comma separated.
    pub fn display_list(&self, ids: &[TypeId]) -> String {
        ids.iter()
            .map(|&id| self.display(id).to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// [`fmt::Display`] adapter returned by [`TypeRegistry::display`].
pub struct TypeDisplay<'a> {
    registry: &'a TypeRegistry,
    id: TypeId,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.registry.kind(self.id) {
            Some(TypeKind::Primitive(p)) => f.write_str(p.name()),
            Some(TypeKind::Function(sig)) => {
                write!(
                    f,
                    "({}) -> {}",
                    self.registry.display_list(&sig.params),
                    self.registry.display(sig.ret)
                )
            }
            None => write!(f, "<type #{}>", self.id.index()),
        }
    }
}
