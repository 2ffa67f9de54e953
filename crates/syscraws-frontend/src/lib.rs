//! Syscraws Frontend
//!
//! Type checks AST statements and lowers them to the statement graph defined
//! in `syscraws-ir`.
//!
//! ## Architecture
//!
//! - **Expressions** are translated bottom-up to a type and an IR expression.
//!   Calls of operators and global functions are resolved by exact match of
//!   the argument types against the registered overloads.
//! - **Statements** are translated by continuation threading: each one is
//!   given the statement that runs after it and returns its own entry point.
//!
//! ## Modules
//!
//! - [`context`]: Access to the symbol registry
//! - [`expr`]: Expression translator
//! - [`loops`]: Break/continue targets of enclosing loops
//! - [`overload`]: Exact-match overload resolution
//! - [`scope`]: Local variables and slot allocation
//! - [`stmt`]: Statement translator

pub mod context;
pub mod expr;
pub mod loops;
pub mod overload;
pub mod scope;
pub mod stmt;

pub use context::Context;
pub use expr::{ExprTranslator, ResolvedCallee, Translated};
pub use loops::LoopStack;
pub use overload::{OverloadMatch, resolve_function, resolve_operator};
pub use scope::{LocalScope, LocalVar};
pub use stmt::{ReturnMode, StmtTranslator, translate_routine};

// Re-export TranslateError from core for convenience
pub use syscraws_core::TranslateError;
