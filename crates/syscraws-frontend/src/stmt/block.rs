//! Block statement translation.
//!
//! Handles block statements `{ ... }` with proper scope management.

use syscraws_ast::{Block, Stmt};
use syscraws_ir::Next;

use super::{Result, StmtTranslator};

impl<'ctx> StmtTranslator<'ctx> {
    /// Translate a block statement.
    ///
    /// Creates a new scope for the block. Declarations are bound first, in
    /// source order; then the statements are threaded right to left, each
    /// one becoming the successor of the one before it. Passing over a
    /// declaration retires its binding, so every statement sees exactly the
    /// declarations that precede it. An empty block is its successor.
    pub fn translate_block(&mut self, block: &Block<'_>, successor: Next) -> Result<Next> {
        self.scope.push_scope();
        let entry = self.thread_block(block.stmts, successor);
        self.scope.pop_scope();
        entry
    }

    fn thread_block(&mut self, stmts: &[Stmt<'_>], successor: Next) -> Result<Next> {
        let mut prepared = Vec::with_capacity(stmts.len());
        for stmt in stmts {
            prepared.push(match stmt {
                Stmt::Decl(decl) => Some(self.prepare_decl(decl)?),
                _ => None,
            });
        }

        let mut next = successor;
        for (stmt, decl) in stmts.iter().zip(prepared).rev() {
            next = match decl {
                Some(decl) => self.emit_decl(decl, next),
                None => self.translate(stmt, next)?,
            };
        }
        Ok(next)
    }

    /// Translate a branch or loop body in a scope of its own.
    pub(super) fn translate_scoped(&mut self, stmt: &Stmt<'_>, successor: Next) -> Result<Next> {
        self.scope.push_scope();
        let entry = self.translate(stmt, successor);
        self.scope.pop_scope();
        entry
    }
}
