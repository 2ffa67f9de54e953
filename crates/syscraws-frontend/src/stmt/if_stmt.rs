//! If statement translation.

use syscraws_ast::IfStmt;
use syscraws_ir::{IrStmt, Next};
use syscraws_registry::TypeId;

use super::{Result, StmtTranslator};

impl<'ctx> StmtTranslator<'ctx> {
    /// Translate an if statement.
    ///
    /// Both branches continue to `successor`; a missing else branch is the
    /// successor itself. Each branch gets its own scope.
    pub(super) fn translate_if(&mut self, if_stmt: &IfStmt<'_>, successor: Next) -> Result<Next> {
        let cond = self
            .expr_translator()
            .check(if_stmt.condition, TypeId::BOOL)?;

        let then = self.translate_scoped(if_stmt.then_stmt, successor)?;
        let otherwise = match if_stmt.else_stmt {
            Some(else_stmt) => self.translate_scoped(else_stmt, successor)?,
            None => successor,
        };

        Ok(self.push(IrStmt::Branch {
            cond,
            then,
            otherwise,
        }))
    }
}
