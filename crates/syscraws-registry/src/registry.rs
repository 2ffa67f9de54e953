//! SymbolRegistry - types, operators, and global symbols.
//!
//! # Lifecycle
//!
//! The registry is populated once, then only read. Every `register_*`
//! method takes `&mut self`, and translation borrows the registry
//! immutably, so nothing can be registered while a translation is running.
//! Independent compilations each own their own registry.
//!
//! # Example
//!
//! ```
//! use syscraws_core::OperatorTag;
//! use syscraws_registry::{SymbolRegistry, TypeId};
//!
//! let registry = SymbolRegistry::with_builtins();
//!
//! let adds = registry.operator_candidates(OperatorTag::Add);
//! assert_eq!(adds.len(), 2);
//!
//! let sig = registry.types().as_function(adds[0].signature).unwrap();
//! assert_eq!(sig.params, [TypeId::INT, TypeId::INT]);
//! ```

use rustc_hash::FxHashMap;
use syscraws_core::OperatorTag;
use syscraws_ir::{Builtin, Callable, Value};

use crate::{Candidate, OperatorTable, TypeId, TypeRegistry};

/// A named global value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    /// Static type of the value
    pub ty: TypeId,
    /// The value itself
    pub value: Value,
}

/// Central storage for everything translation looks up by name or tag.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    /// Interned types.
    types: TypeRegistry,

    /// Operator overloads by tag.
    operators: OperatorTable,

    /// Global function overloads by name, in registration order.
    functions: FxHashMap<String, Vec<Candidate>>,

    /// Global constants by name.
    constants: FxHashMap<String, Constant>,
}

impl SymbolRegistry {
    /// Create a registry with the primitive types and nothing else.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in operators, functions, and constants.
    ///
    /// Operators:
    /// - `+` over `(int, int) -> int` and `(float, float) -> float`
    /// - `==` over `(int, int) -> bool`
    ///
    /// Functions: `print` over each of `int`, `float`, `bool`, `string`,
    /// returning `unit`.
    ///
    /// Constants: `true` and `false`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    fn register_builtins(&mut self) {
        let int = TypeId::INT;
        let float = TypeId::FLOAT;

        self.register_operator(OperatorTag::Add, vec![int, int], int, Builtin::IAdd.into());
        self.register_operator(
            OperatorTag::Add,
            vec![float, float],
            float,
            Builtin::FAdd.into(),
        );
        self.register_operator(
            OperatorTag::Equal,
            vec![int, int],
            TypeId::BOOL,
            Builtin::IEq.into(),
        );

        for ty in [TypeId::INT, TypeId::FLOAT, TypeId::BOOL, TypeId::STRING] {
            self.register_function("print", vec![ty], TypeId::UNIT, Builtin::Print.into());
        }

        self.register_constant("true", TypeId::BOOL, Value::Bool(true));
        self.register_constant("false", TypeId::BOOL, Value::Bool(false));
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Append an overload for an operator. Returns the interned signature.
    ///
    /// Assignment and increment/decrement tags are lowered structurally and
    /// never consult the table.
    pub fn register_operator(
        &mut self,
        op: OperatorTag,
        params: Vec<TypeId>,
        ret: TypeId,
        callable: Callable,
    ) -> TypeId {
        let signature = self.types.function(params, ret);
        self.operators.register(
            op,
            Candidate {
                signature,
                callable,
            },
        );
        signature
    }

    /// Append an overload for a global function. Returns the interned signature.
    pub fn register_function(
        &mut self,
        name: impl Into<String>,
        params: Vec<TypeId>,
        ret: TypeId,
        callable: Callable,
    ) -> TypeId {
        let signature = self.types.function(params, ret);
        self.functions
            .entry(name.into())
            .or_default()
            .push(Candidate {
                signature,
                callable,
            });
        signature
    }

    /// Define or replace a global constant.
    pub fn register_constant(&mut self, name: impl Into<String>, ty: TypeId, value: Value) {
        self.constants.insert(name.into(), Constant { ty, value });
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// The type registry.
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// The type registry, for interning new types.
    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    /// The operator table.
    pub fn operators(&self) -> &OperatorTable {
        &self.operators
    }

    /// Overloads of an operator, in registration order.
    pub fn operator_candidates(&self, op: OperatorTag) -> &[Candidate] {
        self.operators.candidates(op)
    }

    /// Overloads of a global function, in registration order.
    pub fn function_candidates(&self, name: &str) -> &[Candidate] {
        self.functions
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether a global function with this name exists.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Look up a global constant.
    pub fn constant(&self, name: &str) -> Option<&Constant> {
        self.constants.get(name)
    }
}
