//! Syscraws
//!
//! A type-checking front end that lowers statements to a successor-threaded
//! IR and runs them.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use syscraws::{AstBuilder, Context, Env, OperatorTag, Value, run};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let ctx = Context::new();
//!
//! // { let x = 1 + 2; return x; }
//! let stmt = b.block(&[
//!     b.decl("x", None, Some(b.binary(OperatorTag::Add, b.int(1), b.int(2)))),
//!     b.return_(Some(b.ident("x"))),
//! ]);
//!
//! let mut env = Env::new();
//! let value = run(&ctx, &stmt, &mut env).unwrap();
//! assert_eq!(value, Value::Int(3));
//! assert_eq!(env.output(), ["3"]);
//! ```

pub use syscraws_ast::{AstBuilder, Expr, Stmt};
pub use syscraws_core::{OperatorTag, RuntimeError, Span, SyscrawsError, TranslateError};
pub use syscraws_frontend::{Context, ReturnMode, StmtTranslator, translate_routine};
pub use syscraws_ir::{Builtin, Callable, Env, FuncDef, Value};
pub use syscraws_registry::{SymbolRegistry, TypeId};

/// Translate `stmt` as a zero-argument routine, run it, and print its result.
///
/// The rendered result value is written to `env` as one line after any
/// output the routine produced, and returned.
///
/// # Errors
///
/// Returns [`SyscrawsError::Translate`] if the statement does not type check
/// and [`SyscrawsError::Runtime`] if evaluation fails. Nothing is printed for
/// the result in either case.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn run(ctx: &Context, stmt: &Stmt<'_>, env: &mut Env) -> Result<Value, SyscrawsError> {
    let routine = translate_routine(ctx, stmt)?;
    let value = routine.invoke(env, Vec::new())?;
    env.print(value.to_string());
    Ok(value)
}
