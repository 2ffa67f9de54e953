//! Arena-backed construction of AST nodes.
//!
//! The front end consumes trees produced elsewhere. `AstBuilder` is how
//! embedders, tests, and benchmarks assemble such trees without spelling out
//! every node struct.
//!
//! ```
//! use bumpalo::Bump;
//! use syscraws_ast::AstBuilder;
//! use syscraws_core::OperatorTag;
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//!
//! // x == 1
//! let cond = b.binary(OperatorTag::Equal, b.ident("x"), b.int(1));
//! let stmt = b.if_(cond, b.break_(), None);
//! assert!(matches!(stmt, syscraws_ast::Stmt::If(_)));
//! ```

use bumpalo::Bump;
use syscraws_core::{OperatorTag, Span};

use crate::{
    Block, BreakStmt, CallExpr, ContinueStmt, DeclStmt, Expr, ExprStmt, Ident, IfStmt,
    LiteralExpr, LiteralKind, OperatorRefExpr, Pattern, ReturnStmt, Stmt, TypeExpr, WhileStmt,
};

/// Allocates AST nodes in an arena, stamping each with the current span.
#[derive(Clone, Copy)]
pub struct AstBuilder<'ast> {
    arena: &'ast Bump,
    span: Span,
}

impl<'ast> AstBuilder<'ast> {
    /// Create a builder whose nodes carry the default span.
    pub fn new(arena: &'ast Bump) -> Self {
        Self {
            arena,
            span: Span::default(),
        }
    }

    /// A copy of this builder that stamps nodes with `span`.
    pub fn spanned(self, span: Span) -> Self {
        Self { span, ..self }
    }

    /// A copy of this builder that stamps nodes with a point span.
    pub fn at(self, line: u32, col: u32) -> Self {
        self.spanned(Span::point(line, col))
    }

    /// The arena nodes are allocated in.
    pub fn arena(&self) -> &'ast Bump {
        self.arena
    }

    // ==========================================================================
    // Expressions
    // ==========================================================================

    /// `name`
    pub fn ident(&self, name: &str) -> Expr<'ast> {
        Expr::Ident(self.name(name))
    }

    /// Integer literal.
    pub fn int(&self, value: i32) -> Expr<'ast> {
        self.literal(LiteralKind::Int(value))
    }

    /// Float literal.
    pub fn float(&self, value: f64) -> Expr<'ast> {
        self.literal(LiteralKind::Float(value))
    }

    /// String literal.
    pub fn string(&self, value: &str) -> Expr<'ast> {
        self.literal(LiteralKind::String(self.arena.alloc_str(value)))
    }

    /// Bare operator reference.
    pub fn op(&self, op: OperatorTag) -> Expr<'ast> {
        Expr::OperatorRef(OperatorRefExpr {
            op,
            span: self.span,
        })
    }

    /// `callee(args...)`
    pub fn call(&self, callee: Expr<'ast>, args: &[Expr<'ast>]) -> Expr<'ast> {
        Expr::Call(self.arena.alloc(CallExpr {
            callee: self.arena.alloc(callee),
            args: self.arena.alloc_slice_copy(args),
            span: self.span,
        }))
    }

    /// `name(args...)`
    pub fn call_named(&self, name: &str, args: &[Expr<'ast>]) -> Expr<'ast> {
        self.call(self.ident(name), args)
    }

    /// Prefix or postfix operator application, e.g. `x++`.
    pub fn unary(&self, op: OperatorTag, operand: Expr<'ast>) -> Expr<'ast> {
        self.call(self.op(op), &[operand])
    }

    /// Infix operator application, e.g. `a + b` or `x = v`.
    pub fn binary(&self, op: OperatorTag, lhs: Expr<'ast>, rhs: Expr<'ast>) -> Expr<'ast> {
        self.call(self.op(op), &[lhs, rhs])
    }

    /// `name = value`
    pub fn assign(&self, name: &str, value: Expr<'ast>) -> Expr<'ast> {
        self.binary(OperatorTag::Assign, self.ident(name), value)
    }

    // ==========================================================================
    // Statements
    // ==========================================================================

    /// `expr;`
    pub fn expr_stmt(&self, expr: Expr<'ast>) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt {
            expr: Some(self.arena.alloc(expr)),
            span: self.span,
        })
    }

    /// `;`
    pub fn empty_stmt(&self) -> Stmt<'ast> {
        Stmt::Expr(ExprStmt {
            expr: None,
            span: self.span,
        })
    }

    /// `{ stmts... }`
    pub fn block(&self, stmts: &[Stmt<'ast>]) -> Stmt<'ast> {
        Stmt::Block(Block {
            stmts: self.arena.alloc_slice_copy(stmts),
            span: self.span,
        })
    }

    /// `if (condition) then_stmt else else_stmt`
    pub fn if_(
        &self,
        condition: Expr<'ast>,
        then_stmt: Stmt<'ast>,
        else_stmt: Option<Stmt<'ast>>,
    ) -> Stmt<'ast> {
        Stmt::If(self.arena.alloc(IfStmt {
            condition: self.arena.alloc(condition),
            then_stmt: self.arena.alloc(then_stmt),
            else_stmt: else_stmt.map(|s| &*self.arena.alloc(s)),
            span: self.span,
        }))
    }

    /// `while (condition) body`
    pub fn while_(&self, condition: Expr<'ast>, body: Stmt<'ast>) -> Stmt<'ast> {
        Stmt::While(self.arena.alloc(WhileStmt {
            condition: self.arena.alloc(condition),
            body: self.arena.alloc(body),
            span: self.span,
        }))
    }

    /// `break;`
    pub fn break_(&self) -> Stmt<'ast> {
        Stmt::Break(BreakStmt { span: self.span })
    }

    /// `continue;`
    pub fn continue_(&self) -> Stmt<'ast> {
        Stmt::Continue(ContinueStmt { span: self.span })
    }

    /// `return value;`
    pub fn return_(&self, value: Option<Expr<'ast>>) -> Stmt<'ast> {
        Stmt::Return(ReturnStmt {
            value: value.map(|v| &*self.arena.alloc(v)),
            span: self.span,
        })
    }

    /// `let name: ty = init;`
    pub fn decl(&self, name: &str, ty: Option<&str>, init: Option<Expr<'ast>>) -> Stmt<'ast> {
        Stmt::Decl(DeclStmt {
            pattern: Pattern::Ident(self.name(name)),
            ty: ty.map(|t| TypeExpr::Named(self.name(t))),
            init: init.map(|e| &*self.arena.alloc(e)),
            span: self.span,
        })
    }

    fn name(&self, name: &str) -> Ident<'ast> {
        Ident::new(self.arena.alloc_str(name), self.span)
    }

    fn literal(&self, kind: LiteralKind<'ast>) -> Expr<'ast> {
        Expr::Literal(LiteralExpr {
            kind,
            span: self.span,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_is_operator_call() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let sum = b.binary(OperatorTag::Add, b.int(1), b.int(2));
        let Expr::Call(call) = sum else {
            panic!("expected call, got {sum:?}");
        };
        assert!(matches!(
            call.callee,
            Expr::OperatorRef(OperatorRefExpr {
                op: OperatorTag::Add,
                ..
            })
        ));
        assert_eq!(call.args.len(), 2);
    }

    #[test]
    fn spans_are_stamped() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let x = b.at(4, 2).ident("x");
        assert_eq!(x.span(), Span::point(4, 2));
        assert_eq!(b.ident("y").span(), Span::default());
    }

    #[test]
    fn decl_parts() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let Stmt::Decl(decl) = b.decl("x", Some("int"), Some(b.int(0))) else {
            panic!("expected declaration");
        };
        assert_eq!(decl.pattern, Pattern::Ident(Ident::new("x", Span::default())));
        assert_eq!(decl.ty, Some(TypeExpr::named("int", Span::default())));
        assert!(decl.init.is_some());
    }

    #[test]
    fn if_without_else() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);

        let Stmt::If(if_stmt) = b.if_(b.ident("c"), b.break_(), None) else {
            panic!("expected if");
        };
        assert!(if_stmt.else_stmt.is_none());
        assert!(matches!(if_stmt.then_stmt, Stmt::Break(_)));
    }
}
