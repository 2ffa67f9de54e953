//! Expression translator.
//!
//! The [`ExprTranslator`] turns an AST expression into its static type and
//! an [`IrExpr`]:
//! - `translate()` - synthesizes the type from the expression
//! - `check()` - translates and requires a given type
//!
//! Expressions never declare anything, so the translator only reads the
//! local scope.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use syscraws_ast::AstBuilder;
//! use syscraws_core::OperatorTag;
//! use syscraws_frontend::{Context, ExprTranslator, LocalScope};
//! use syscraws_registry::TypeId;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let ctx = Context::new();
//! let scope = LocalScope::new();
//!
//! let sum = b.binary(OperatorTag::Add, b.int(1), b.int(2));
//! let translated = ExprTranslator::new(&ctx, &scope).translate(&sum).unwrap();
//! assert_eq!(translated.ty, TypeId::INT);
//! ```

mod assignment;
mod calls;
mod identifiers;
mod literals;

use syscraws_ast::Expr;
use syscraws_core::{Span, TranslateError};
use syscraws_ir::IrExpr;
use syscraws_registry::TypeId;

pub use calls::ResolvedCallee;

use crate::context::Context;
use crate::scope::LocalScope;

type Result<T> = std::result::Result<T, TranslateError>;

/// A translated expression: its static type and the IR computing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Translated {
    /// Static type
    pub ty: TypeId,
    /// IR producing the value
    pub ir: IrExpr,
}

impl Translated {
    /// Pair a type with its IR.
    pub fn new(ty: TypeId, ir: IrExpr) -> Self {
        Self { ty, ir }
    }
}

/// Translates expressions against a context and the visible locals.
pub struct ExprTranslator<'a> {
    /// Registry of types, operators, and globals
    ctx: &'a Context,
    /// Locals visible at this point
    scope: &'a LocalScope,
}

impl<'a> ExprTranslator<'a> {
    /// Create a new expression translator.
    pub fn new(ctx: &'a Context, scope: &'a LocalScope) -> Self {
        Self { ctx, scope }
    }

    /// Synthesize the type of an expression and translate it.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn translate(&self, expr: &Expr<'_>) -> Result<Translated> {
        match expr {
            Expr::Literal(lit) => Ok(literals::translate_literal(&lit.kind)),
            Expr::Ident(ident) => identifiers::translate_ident(self, ident),
            Expr::Call(call) => calls::translate_call(self, call),
            Expr::OperatorRef(op) => Err(TranslateError::AmbiguousOperatorValue {
                operator: op.op,
                span: op.span,
            }),
        }
    }

    /// Resolve an expression in callee position against argument types.
    ///
    /// Operator references and global function names pick an overload;
    /// any other expression must be a function value accepting exactly
    /// `arg_types`.
    pub fn translate_callee(
        &self,
        callee: &Expr<'_>,
        arg_types: &[TypeId],
        span: Span,
    ) -> Result<ResolvedCallee> {
        calls::translate_callee(self, callee, arg_types, span)
    }

    /// Translate an expression that must have type `expected`.
    pub fn check(&self, expr: &Expr<'_>, expected: TypeId) -> Result<IrExpr> {
        let translated = self.translate(expr)?;
        self.expect_type(expected, translated.ty, expr.span())?;
        Ok(translated.ir)
    }

    /// Fail with `TypeMismatch` unless `found` is `expected`.
    pub(crate) fn expect_type(&self, expected: TypeId, found: TypeId, span: Span) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(TranslateError::TypeMismatch {
                expected: self.ctx.type_name(expected),
                found: self.ctx.type_name(found),
                span,
            })
        }
    }

    pub(crate) fn ctx(&self) -> &'a Context {
        self.ctx
    }

    pub(crate) fn scope(&self) -> &'a LocalScope {
        self.scope
    }
}
