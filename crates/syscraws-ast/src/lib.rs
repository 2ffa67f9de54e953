//! Syscraws abstract syntax tree.
//!
//! All nodes are allocated in a [`bumpalo::Bump`] arena and borrow their
//! children for the arena's lifetime `'ast`. Every node carries a
//! [`Span`](syscraws_core::Span) used only for diagnostics.
//!
//! Trees come from an external parser; [`AstBuilder`] assembles them by hand.

mod builder;
pub mod expr;
pub mod stmt;
pub mod types;

pub use builder::AstBuilder;
pub use expr::*;
pub use stmt::*;
pub use types::*;
