//! Routines and the evaluator.

use syscraws_core::RuntimeError;

use crate::{Callable, Env, IrExpr, IrStmt, Next, StmtArena, Value};

/// A translated routine: a statement arena plus its entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    /// Every statement of the routine
    pub body: StmtArena,
    /// First statement to run
    pub entry: Next,
    /// Parameters, bound to slots `0..num_params` on entry
    pub num_params: usize,
    /// Total local slots, parameters included
    pub num_locals: usize,
}

impl FuncDef {
    /// Invoke the routine.
    ///
    /// Follows successor references from `entry` until a `Return` or
    /// [`Next::End`]; falling off the end yields unit.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn invoke(&self, env: &mut Env, args: Vec<Value>) -> Result<Value, RuntimeError> {
        if args.len() != self.num_params {
            return Err(RuntimeError::ArityMismatch {
                expected: self.num_params,
                found: args.len(),
            });
        }

        let mut frame = Frame::new(self.num_locals);
        for (slot, arg) in args.into_iter().enumerate() {
            frame.set(slot, Some(arg))?;
        }

        let mut cursor = self.entry;
        loop {
            let Next::Stmt(id) = cursor else {
                return Ok(Value::Unit);
            };

            match self.body.get(id) {
                Some(IrStmt::Expr { expr, next }) => {
                    frame.eval(env, expr)?;
                    cursor = *next;
                }
                Some(IrStmt::Branch {
                    cond,
                    then,
                    otherwise,
                }) => {
                    cursor = if frame.eval(env, cond)?.as_bool()? {
                        *then
                    } else {
                        *otherwise
                    };
                }
                Some(IrStmt::Jump { target }) => cursor = *target,
                Some(IrStmt::Return { value }) => {
                    return match value {
                        Some(expr) => frame.eval(env, expr),
                        None => Ok(Value::Unit),
                    };
                }
                Some(IrStmt::Init { slot, value, next }) => {
                    let value = match value {
                        Some(expr) => Some(frame.eval(env, expr)?),
                        None => None,
                    };
                    frame.set(*slot, value)?;
                    cursor = *next;
                }
                Some(IrStmt::Pending) | None => {
                    return Err(RuntimeError::DanglingStatement { id: id.index() });
                }
            }
        }
    }
}

/// Local slots of one activation.
struct Frame {
    locals: Vec<Option<Value>>,
}

impl Frame {
    fn new(num_locals: usize) -> Self {
        Self {
            locals: vec![None; num_locals],
        }
    }

    fn get(&self, slot: usize) -> Result<Value, RuntimeError> {
        match self.locals.get(slot) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(RuntimeError::UninitializedLocal { slot }),
            None => Err(self.out_of_range(slot)),
        }
    }

    fn set(&mut self, slot: usize, value: Option<Value>) -> Result<Option<Value>, RuntimeError> {
        let num_locals = self.locals.len();
        match self.locals.get_mut(slot) {
            Some(entry) => Ok(std::mem::replace(entry, value)),
            None => Err(RuntimeError::SlotOutOfRange { slot, num_locals }),
        }
    }

    fn out_of_range(&self, slot: usize) -> RuntimeError {
        RuntimeError::SlotOutOfRange {
            slot,
            num_locals: self.locals.len(),
        }
    }

    fn eval(&mut self, env: &mut Env, expr: &IrExpr) -> Result<Value, RuntimeError> {
        match expr {
            IrExpr::Imm(value) => Ok(value.clone()),
            IrExpr::Local(slot) => self.get(*slot),
            IrExpr::Call { callee, args } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(env, arg)?);
                }
                match self.eval(env, callee)? {
                    Value::Func(callable) => callable.call(env, values),
                    other => Err(RuntimeError::NotCallable {
                        found: other.to_string(),
                    }),
                }
            }
            IrExpr::Store {
                slot,
                value,
                yield_old,
            } => {
                let new = self.eval(env, value)?;
                let old = self.set(*slot, Some(new.clone()))?;
                if *yield_old {
                    old.ok_or(RuntimeError::UninitializedLocal { slot: *slot })
                } else {
                    Ok(new)
                }
            }
        }
    }
}

impl From<FuncDef> for Callable {
    fn from(def: FuncDef) -> Self {
        Callable::Routine(std::sync::Arc::new(def))
    }
}
