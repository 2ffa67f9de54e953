//! Syscraws symbol registry.
//!
//! - [`TypeRegistry`] interns types into identity-comparable [`TypeId`]s
//! - [`OperatorTable`] holds ordered overload lists per operator
//! - [`SymbolRegistry`] combines both with global functions and constants

mod operators;
mod registry;
mod types;

pub use operators::{Candidate, OperatorTable};
pub use registry::{Constant, SymbolRegistry};
pub use types::{FunctionType, Primitive, TypeDisplay, TypeId, TypeKind, TypeRegistry};
