//! Error types for the Syscraws front end.
//!
//! ## Error Hierarchy
//!
//! ```text
//! SyscrawsError (top-level wrapper)
//! ├── TranslateError - type checking and AST-to-IR lowering failures
//! └── RuntimeError   - failures while evaluating emitted IR
//! ```
//!
//! Translation is fail-fast: the first error aborts the statement being
//! translated, so every `TranslateError` corresponds to exactly one failure
//! site and carries that site's [`Span`].

use thiserror::Error;

use crate::{OperatorTag, Span};

// ============================================================================
// Translation Errors
// ============================================================================

/// Errors raised while translating an AST into IR.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// No binding with this name is visible.
    #[error("at {span}: unresolved identifier '{name}'")]
    UnresolvedIdentifier {
        /// The name that failed to resolve.
        name: String,
        /// Where the name was referenced.
        span: Span,
    },

    /// No candidate signature matched the argument types exactly.
    ///
    /// Arity and type mismatches are reported the same way since both mean
    /// that no candidate matched.
    #[error("at {span}: no overload of {callee} accepts {arity} argument(s) of type ({args})")]
    NoMatchingOverload {
        /// The operator or function being called.
        callee: String,
        /// Number of arguments at the call site.
        arity: usize,
        /// The argument types, comma separated.
        args: String,
        /// Where the call occurred.
        span: Span,
    },

    /// An operator was referenced without being applied to arguments.
    #[error("at {span}: operator {operator} cannot be used as a value without arguments")]
    AmbiguousOperatorValue {
        /// The operator.
        operator: OperatorTag,
        /// Where the operator was referenced.
        span: Span,
    },

    /// An overloaded global function was referenced without being called.
    #[error("at {span}: function '{name}' has {candidates} overloads and cannot be used as a value")]
    AmbiguousFunctionValue {
        /// The function name.
        name: String,
        /// How many overloads the name has.
        candidates: usize,
        /// Where the function was referenced.
        span: Span,
    },

    /// A return statement disagrees with the routine's return type.
    #[error("at {span}: return type mismatch: expected '{expected}', found '{found}'")]
    ReturnTypeMismatch {
        /// The routine's return type.
        expected: String,
        /// The type of the returned expression.
        found: String,
        /// Where the return statement occurred.
        span: Span,
    },

    /// `break` or `continue` appeared with no enclosing loop.
    #[error("at {span}: '{keyword}' outside of a loop")]
    BreakContinueOutsideLoop {
        /// Either `break` or `continue`.
        keyword: &'static str,
        /// Where the statement occurred.
        span: Span,
    },

    /// A declaration has neither a declared type nor an initializer.
    #[error("at {span}: declaration needs a type, an initializer, or both")]
    InvalidDeclaration {
        /// Where the declaration occurred.
        span: Span,
    },

    /// An expression has a different type than its context requires.
    #[error("at {span}: type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch {
        /// The required type.
        expected: String,
        /// The type actually produced.
        found: String,
        /// Where the mismatch occurred.
        span: Span,
    },

    /// A type name does not name any known type.
    #[error("at {span}: unknown type '{name}'")]
    UnknownType {
        /// The type name.
        name: String,
        /// Where the type was referenced.
        span: Span,
    },

    /// A callee expression is not of function type.
    #[error("at {span}: value of type '{found}' is not callable")]
    NotCallable {
        /// The callee's type.
        found: String,
        /// Where the call occurred.
        span: Span,
    },

    /// The target of an assignment is not a local variable.
    #[error("at {span}: left operand of {operator} is not assignable")]
    NotAssignable {
        /// The assignment operator.
        operator: OperatorTag,
        /// Where the target occurred.
        span: Span,
    },

    /// The same name was declared twice in one block.
    #[error("at {span}: '{name}' is already declared in this block")]
    DuplicateBinding {
        /// The redeclared name.
        name: String,
        /// Where the second declaration occurred.
        span: Span,
    },
}

impl TranslateError {
    /// Get the span where this error occurred.
    pub fn span(&self) -> Span {
        match self {
            TranslateError::UnresolvedIdentifier { span, .. } => *span,
            TranslateError::NoMatchingOverload { span, .. } => *span,
            TranslateError::AmbiguousOperatorValue { span, .. } => *span,
            TranslateError::AmbiguousFunctionValue { span, .. } => *span,
            TranslateError::ReturnTypeMismatch { span, .. } => *span,
            TranslateError::BreakContinueOutsideLoop { span, .. } => *span,
            TranslateError::InvalidDeclaration { span } => *span,
            TranslateError::TypeMismatch { span, .. } => *span,
            TranslateError::UnknownType { span, .. } => *span,
            TranslateError::NotCallable { span, .. } => *span,
            TranslateError::NotAssignable { span, .. } => *span,
            TranslateError::DuplicateBinding { span, .. } => *span,
        }
    }
}

// ============================================================================
// Runtime Errors
// ============================================================================

/// Errors raised while evaluating IR.
///
/// Well-typed IR produced by the translator only hits the first few of these
/// (uninitialized locals and arithmetic overflow); the rest guard against
/// hand-built or corrupted IR.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// A local slot was read before anything was stored in it.
    #[error("local slot {slot} read before initialization")]
    UninitializedLocal {
        /// The slot index.
        slot: usize,
    },

    /// Integer arithmetic overflowed.
    #[error("integer overflow in {operation}")]
    IntegerOverflow {
        /// The builtin that overflowed.
        operation: &'static str,
    },

    /// A call targeted a value that is not a callable.
    #[error("value '{found}' is not callable")]
    NotCallable {
        /// The rendered callee value.
        found: String,
    },

    /// A callable received the wrong number of arguments.
    #[error("expected {expected} argument(s), got {found}")]
    ArityMismatch {
        /// Parameters the callable takes.
        expected: usize,
        /// Arguments supplied.
        found: usize,
    },

    /// A value had the wrong runtime kind.
    #[error("type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        /// The expected kind.
        expected: &'static str,
        /// The rendered value actually found.
        found: String,
    },

    /// A slot index exceeded the routine's frame.
    #[error("local slot {slot} out of range for a frame of {num_locals}")]
    SlotOutOfRange {
        /// The slot index.
        slot: usize,
        /// Frame size.
        num_locals: usize,
    },

    /// Control reached a statement that was reserved but never filled.
    #[error("statement #{id} was reserved but never finalized")]
    DanglingStatement {
        /// The statement index.
        id: usize,
    },
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Any error the driver can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyscrawsError {
    /// A translation error.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// A runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl SyscrawsError {
    /// Check if this is a translation error.
    pub fn is_translate(&self) -> bool {
        matches!(self, SyscrawsError::Translate(_))
    }

    /// Check if this is a runtime error.
    pub fn is_runtime(&self) -> bool {
        matches!(self, SyscrawsError::Runtime(_))
    }

    /// Source span of the failure, if it came from translation.
    pub fn span(&self) -> Option<Span> {
        match self {
            SyscrawsError::Translate(err) => Some(err.span()),
            SyscrawsError::Runtime(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_error_display() {
        let err = TranslateError::UnresolvedIdentifier {
            name: "foo".to_string(),
            span: Span::on_line(10, 5, 3),
        };
        assert_eq!(format!("{err}"), "at 10:5-8: unresolved identifier 'foo'");
    }

    #[test]
    fn no_matching_overload_display() {
        let err = TranslateError::NoMatchingOverload {
            callee: OperatorTag::Add.to_string(),
            arity: 2,
            args: "int, float".to_string(),
            span: Span::point(1, 1),
        };
        assert_eq!(
            format!("{err}"),
            "at 1:1: no overload of add (+) accepts 2 argument(s) of type (int, float)"
        );
    }

    #[test]
    fn translate_error_span() {
        let span = Span::on_line(5, 10, 8);
        let err = TranslateError::BreakContinueOutsideLoop {
            keyword: "break",
            span,
        };
        assert_eq!(err.span(), span);
    }

    #[test]
    fn runtime_error_display() {
        let err = RuntimeError::TypeMismatch {
            expected: "bool",
            found: "3".to_string(),
        };
        assert_eq!(format!("{err}"), "type mismatch: expected bool, got 3");
    }

    #[test]
    fn wrapper_conversions() {
        let err: SyscrawsError = TranslateError::InvalidDeclaration {
            span: Span::point(2, 3),
        }
        .into();
        assert!(err.is_translate());
        assert_eq!(err.span(), Some(Span::point(2, 3)));

        let err: SyscrawsError = RuntimeError::UninitializedLocal { slot: 0 }.into();
        assert!(err.is_runtime());
        assert_eq!(err.span(), None);
    }
}
