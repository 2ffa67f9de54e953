//! IR statements and the arena that owns them.
//!
//! Statements do not own their successors. Each one names the statement that
//! runs after it by [`StmtId`], so a loop body can point back at its own
//! head without an ownership cycle. A head is [`reserve`](StmtArena::reserve)d
//! before the body is built and [`fill`](StmtArena::fill)ed afterwards.

use crate::IrExpr;

/// Index of a statement in a [`StmtArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StmtId(u32);

impl StmtId {
    /// Position in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where control goes after a statement completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Next {
    /// Continue with this statement
    Stmt(StmtId),
    /// Leave the routine, yielding unit
    End,
}

/// An IR statement.
#[derive(Debug, Clone, PartialEq)]
pub enum IrStmt {
    /// Evaluate for side effects, discard the value
    Expr {
        /// The expression
        expr: IrExpr,
        /// Successor
        next: Next,
    },
    /// Two-way branch on a boolean
    Branch {
        /// Condition, must evaluate to a bool
        cond: IrExpr,
        /// Taken when true
        then: Next,
        /// Taken when false
        otherwise: Next,
    },
    /// Unconditional transfer, used by `break` and `continue`
    Jump {
        /// Target
        target: Next,
    },
    /// Leave the routine
    Return {
        /// Result, unit when absent
        value: Option<IrExpr>,
    },
    /// Initialize a local slot, or reset it to uninitialized when `value` is absent
    Init {
        /// Target slot
        slot: usize,
        /// Initial value
        value: Option<IrExpr>,
        /// Successor
        next: Next,
    },
    /// Reserved by [`StmtArena::reserve`] and not yet filled
    Pending,
}

/// Owns every statement of one routine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StmtArena {
    stmts: Vec<IrStmt>,
}

impl StmtArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a finished statement.
    pub fn push(&mut self, stmt: IrStmt) -> StmtId {
        let id = StmtId(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }

    /// Allocate a placeholder to be filled later.
    pub fn reserve(&mut self) -> StmtId {
        self.push(IrStmt::Pending)
    }

    /// Finalize a placeholder.
    ///
    /// Each reserved id is filled exactly once.
    pub fn fill(&mut self, id: StmtId, stmt: IrStmt) {
        if let Some(slot) = self.stmts.get_mut(id.index()) {
            debug_assert!(
                matches!(slot, IrStmt::Pending),
                "statement {id:?} filled twice"
            );
            *slot = stmt;
        }
    }

    /// Look up a statement.
    pub fn get(&self, id: StmtId) -> Option<&IrStmt> {
        self.stmts.get(id.index())
    }

    /// Number of statements, placeholders included.
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    /// Whether the arena holds no statements.
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// Ids of placeholders that were never filled.
    pub fn pending(&self) -> impl Iterator<Item = StmtId> + '_ {
        self.stmts
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s, IrStmt::Pending))
            .map(|(i, _)| StmtId(i as u32))
    }
}
