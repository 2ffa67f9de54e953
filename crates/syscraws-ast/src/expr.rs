//! Expression AST nodes.
//!
//! Operators are not separate node kinds: `a + b` is a [`CallExpr`] whose
//! callee is an [`OperatorRefExpr`] for [`OperatorTag::Add`] and whose
//! arguments are `a` and `b`. Assignment and increment/decrement are spelled
//! the same way.

use syscraws_core::{OperatorTag, Span};

use crate::Ident;

/// An expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'ast> {
    /// Name reference
    Ident(Ident<'ast>),
    /// Literal value
    Literal(LiteralExpr<'ast>),
    /// Call of a function or operator
    Call(&'ast CallExpr<'ast>),
    /// Operator used in callee position
    OperatorRef(OperatorRefExpr),
}

impl<'ast> Expr<'ast> {
    /// Get the span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Ident(e) => e.span,
            Self::Literal(e) => e.span,
            Self::Call(e) => e.span,
            Self::OperatorRef(e) => e.span,
        }
    }

    /// The identifier this expression names, if it is a bare identifier.
    pub fn as_ident(&self) -> Option<&Ident<'ast>> {
        match self {
            Self::Ident(ident) => Some(ident),
            _ => None,
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiteralExpr<'ast> {
    /// The literal kind and value
    pub kind: LiteralKind<'ast>,
    /// Source location
    pub span: Span,
}

/// The kind of literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralKind<'ast> {
    /// 32-bit integer literal
    Int(i32),
    /// 64-bit float literal
    Float(f64),
    /// String literal, escapes already processed
    String(&'ast str),
}

/// A call: `callee(args...)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallExpr<'ast> {
    /// The function or operator being called
    pub callee: &'ast Expr<'ast>,
    /// Arguments, in source order
    pub args: &'ast [Expr<'ast>],
    /// Source location
    pub span: Span,
}

/// A reference to an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorRefExpr {
    /// Which operator
    pub op: OperatorTag,
    /// Source location of the operator token
    pub span: Span,
}
