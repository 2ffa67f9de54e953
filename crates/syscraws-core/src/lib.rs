//! Syscraws core types.
//!
//! Shared by every other crate in the workspace:
//! - [`Span`] and [`Position`] for diagnostics
//! - [`OperatorTag`] for operator references in the AST and operator table
//! - the error hierarchy ([`TranslateError`], [`RuntimeError`], [`SyscrawsError`])

mod error;
mod operator;
mod span;

pub use error::{RuntimeError, SyscrawsError, TranslateError};
pub use operator::OperatorTag;
pub use span::{Position, Span};
