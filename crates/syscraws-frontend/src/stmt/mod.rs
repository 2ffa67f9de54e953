//! Statement translator.
//!
//! The [`StmtTranslator`] lowers statements by continuation threading. Each
//! statement is translated together with the successor that should run after
//! it and returns its own entry point:
//! - Blocks are folded right to left, each statement becoming the successor
//!   of the one before it
//! - `if` branches both continue to the statement's successor
//! - `while` reserves its head, translates the body with the head as its
//!   successor, then fills in the head's branch
//! - `break`/`continue` jump to targets from the enclosing loop
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use syscraws_ast::AstBuilder;
//! use syscraws_frontend::{Context, ReturnMode, StmtTranslator};
//! use syscraws_ir::{Env, Next, Value};
//!
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let ctx = Context::new();
//!
//! let stmt = b.block(&[b.decl("x", None, Some(b.int(4))), b.return_(Some(b.ident("x")))]);
//!
//! let mut translator = StmtTranslator::new(&ctx, ReturnMode::Inferred);
//! let entry = translator.translate(&stmt, Next::End).unwrap();
//! let routine = translator.finish(entry);
//! assert_eq!(routine.invoke(&mut Env::new(), vec![]), Ok(Value::Int(4)));
//! ```

mod block;
mod decl;
mod if_stmt;
mod return_stmt;
mod while_stmt;

use syscraws_ast::{ExprStmt, Stmt};
use syscraws_core::{Span, TranslateError};
use syscraws_ir::{FuncDef, IrStmt, Next, StmtArena};
use syscraws_registry::TypeId;

use crate::context::Context;
use crate::expr::ExprTranslator;
use crate::loops::LoopStack;
use crate::scope::LocalScope;

type Result<T> = std::result::Result<T, TranslateError>;

/// How `return` statements are type checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnMode {
    /// Every return must produce this type
    Declared(TypeId),
    /// The first return fixes the type; later ones must agree
    Inferred,
}

/// Translates the statements of one routine into a statement arena.
///
/// Holds the per-routine state: the arena being built, the local scope and
/// slot counter, and the stack of enclosing loops. A translator that has
/// returned an error should be discarded.
pub struct StmtTranslator<'ctx> {
    /// Registry of types, operators, and globals
    ctx: &'ctx Context,
    /// Statements emitted so far
    body: StmtArena,
    /// Visible locals and slot allocation
    scope: LocalScope,
    /// Enclosing loops, for break/continue
    loops: LoopStack,
    /// How returns are checked
    return_mode: ReturnMode,
    /// Type fixed by the first return, in inferred mode
    inferred_return: Option<TypeId>,
}

impl<'ctx> StmtTranslator<'ctx> {
    /// Create a translator for a routine with no parameters.
    pub fn new(ctx: &'ctx Context, return_mode: ReturnMode) -> Self {
        Self {
            ctx,
            body: StmtArena::new(),
            scope: LocalScope::new(),
            loops: LoopStack::new(),
            return_mode,
            inferred_return: None,
        }
    }

    /// Translate a statement that continues to `successor`.
    ///
    /// Returns the statement's entry point, which is `successor` itself for
    /// statements that emit nothing.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn translate(&mut self, stmt: &Stmt<'_>, successor: Next) -> Result<Next> {
        match stmt {
            Stmt::Expr(expr_stmt) => self.translate_expr_stmt(expr_stmt, successor),
            Stmt::Decl(decl) => self.translate_decl(decl, successor),
            Stmt::Return(ret) => self.translate_return(ret),
            Stmt::Break(brk) => self.translate_jump("break", brk.span),
            Stmt::Continue(cont) => self.translate_jump("continue", cont.span),
            Stmt::Block(block) => self.translate_block(block, successor),
            Stmt::If(if_stmt) => self.translate_if(if_stmt, successor),
            Stmt::While(while_stmt) => self.translate_while(while_stmt, successor),
        }
    }

    /// Package the translated statements as a routine starting at `entry`.
    pub fn finish(self, entry: Next) -> FuncDef {
        FuncDef {
            body: self.body,
            entry,
            num_params: 0,
            num_locals: self.scope.num_slots(),
        }
    }

    /// The routine's return type as checked so far.
    ///
    /// `None` in inferred mode when no `return` has been seen.
    pub fn return_type(&self) -> Option<TypeId> {
        match self.return_mode {
            ReturnMode::Declared(ty) => Some(ty),
            ReturnMode::Inferred => self.inferred_return,
        }
    }

    /// Evaluate an expression for its side effects.
    fn translate_expr_stmt(&mut self, expr_stmt: &ExprStmt<'_>, successor: Next) -> Result<Next> {
        // Empty statement (just a semicolon)
        let Some(expr) = expr_stmt.expr else {
            return Ok(successor);
        };

        let translated = self.expr_translator().translate(expr)?;
        Ok(self.push(IrStmt::Expr {
            expr: translated.ir,
            next: successor,
        }))
    }

    /// Jump to the innermost loop's break or continue target.
    fn translate_jump(&mut self, keyword: &'static str, span: Span) -> Result<Next> {
        let target = if keyword == "break" {
            self.loops.break_target()
        } else {
            self.loops.continue_target()
        };
        let target = target.ok_or(TranslateError::BreakContinueOutsideLoop { keyword, span })?;
        Ok(self.push(IrStmt::Jump { target }))
    }

    /// Create an expression translator over the current scope.
    fn expr_translator(&self) -> ExprTranslator<'_> {
        ExprTranslator::new(self.ctx, &self.scope)
    }

    fn push(&mut self, stmt: IrStmt) -> Next {
        Next::Stmt(self.body.push(stmt))
    }
}

/// Translate one statement as the body of a zero-argument routine.
///
/// The statement runs with no successor and its return type is inferred.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn translate_routine(ctx: &Context, stmt: &Stmt<'_>) -> Result<FuncDef> {
    let mut translator = StmtTranslator::new(ctx, ReturnMode::Inferred);
    let entry = translator.translate(stmt, Next::End)?;
    Ok(translator.finish(entry))
}
