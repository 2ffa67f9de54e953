//! Type expressions and binding patterns.

use syscraws_core::Span;

/// An identifier with its source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ident<'ast> {
    /// The identifier text
    pub name: &'ast str,
    /// Source location
    pub span: Span,
}

impl<'ast> Ident<'ast> {
    /// Create a new identifier.
    pub fn new(name: &'ast str, span: Span) -> Self {
        Self { name, span }
    }
}

/// A surface-syntax type reference, not yet resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeExpr<'ast> {
    /// A type named by a single identifier, e.g. `int`
    Named(Ident<'ast>),
}

impl<'ast> TypeExpr<'ast> {
    /// Create a named type reference.
    pub fn named(name: &'ast str, span: Span) -> Self {
        Self::Named(Ident::new(name, span))
    }

    /// Get the span of this type expression.
    pub fn span(&self) -> Span {
        match self {
            Self::Named(ident) => ident.span,
        }
    }
}

/// The target of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'ast> {
    /// Binds the whole value to one name
    Ident(Ident<'ast>),
}

impl<'ast> Pattern<'ast> {
    /// Get the span of this pattern.
    pub fn span(&self) -> Span {
        match self {
            Self::Ident(ident) => ident.span,
        }
    }
}
