//! IR expressions.

use crate::{Builtin, Callable, Value};

/// An IR expression. Evaluates to a single [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum IrExpr {
    /// An immediate constant, including callable references
    Imm(Value),
    /// Read a local slot
    Local(usize),
    /// Evaluate `args` left to right, then `callee`, then call
    Call {
        /// The callee expression
        callee: Box<IrExpr>,
        /// Arguments in call order
        args: Vec<IrExpr>,
    },
    /// Evaluate `value`, write it to `slot`
    Store {
        /// Target slot
        slot: usize,
        /// New value
        value: Box<IrExpr>,
        /// Yield the slot's previous value instead of the new one
        yield_old: bool,
    },
}

impl IrExpr {
    /// Call a builtin directly.
    pub fn builtin_call(builtin: Builtin, args: Vec<IrExpr>) -> Self {
        IrExpr::Call {
            callee: Box::new(IrExpr::Imm(Value::Func(Callable::Builtin(builtin)))),
            args,
        }
    }
}
