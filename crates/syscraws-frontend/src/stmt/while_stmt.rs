//! While loop translation.
//!
//! ```text
//!        +------------------------------+
//!        v                              |
//!   head: Branch(cond) --then--> body --+
//!        |
//!        +--otherwise--> successor
//! ```
//!
//! The body needs the head as its successor, and the head needs the body's
//! entry, so the head is reserved first and filled in once the body is done.

use syscraws_ast::WhileStmt;
use syscraws_ir::{IrStmt, Next};
use syscraws_registry::TypeId;

use super::{Result, StmtTranslator};

impl<'ctx> StmtTranslator<'ctx> {
    /// Translate a while loop.
    ///
    /// Inside the body, `break` jumps to `successor` and `continue` jumps
    /// back to the head. The loop's entry is the head.
    pub(super) fn translate_while(
        &mut self,
        while_stmt: &WhileStmt<'_>,
        successor: Next,
    ) -> Result<Next> {
        let cond = self
            .expr_translator()
            .check(while_stmt.condition, TypeId::BOOL)?;

        let head = self.body.reserve();
        self.loops.enter_loop(successor, Next::Stmt(head));
        let body = self.translate_scoped(while_stmt.body, Next::Stmt(head));
        self.loops.exit_loop();
        let body = body?;

        self.body.fill(
            head,
            IrStmt::Branch {
                cond,
                then: body,
                otherwise: successor,
            },
        );
        Ok(Next::Stmt(head))
    }
}
