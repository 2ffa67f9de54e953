//! Syscraws intermediate representation.
//!
//! A routine is a [`FuncDef`]: a [`StmtArena`] of [`IrStmt`]s wired together
//! by explicit [`Next`] successor references, an entry point, and a local
//! slot count. There is no separate control-flow graph; branches and loops
//! are just statements whose successors differ.
//!
//! The evaluator ([`FuncDef::invoke`]) walks the successor chain against an
//! [`Env`] and produces a [`Value`].

mod env;
mod expr;
mod func;
mod stmt;
mod value;

pub use env::Env;
pub use expr::IrExpr;
pub use func::FuncDef;
pub use stmt::{IrStmt, Next, StmtArena, StmtId};
pub use value::{Builtin, Callable, Value};
