//! Runtime values and callables.

use std::fmt;
use std::sync::Arc;

use syscraws_core::RuntimeError;

use crate::{Env, FuncDef};

/// A value produced by evaluating IR.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit float
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Immutable string
    Str(Arc<str>),
    /// The unit value, result of side-effect-only calls
    Unit,
    /// A callable
    Func(Callable),
}

impl Value {
    /// Name of this value's runtime kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "string",
            Value::Unit => "unit",
            Value::Func(_) => "function",
        }
    }

    /// Extract an integer.
    pub fn as_int(&self) -> Result<i32, RuntimeError> {
        match self {
            Value::Int(v) => Ok(*v),
            other => Err(other.mismatch("int")),
        }
    }

    /// Extract a float.
    pub fn as_float(&self) -> Result<f64, RuntimeError> {
        match self {
            Value::Float(v) => Ok(*v),
            other => Err(other.mismatch("float")),
        }
    }

    /// Extract a boolean.
    pub fn as_bool(&self) -> Result<bool, RuntimeError> {
        match self {
            Value::Bool(v) => Ok(*v),
            other => Err(other.mismatch("bool")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> RuntimeError {
        RuntimeError::TypeMismatch {
            expected,
            found: self.to_string(),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(Arc::from(v))
    }
}

impl From<Builtin> for Value {
    fn from(b: Builtin) -> Self {
        Value::Func(Callable::Builtin(b))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
            Value::Unit => f.write_str("()"),
            Value::Func(c) => write!(f, "{c}"),
        }
    }
}

// ============================================================================
// Callables
// ============================================================================

/// Something a call node can invoke.
#[derive(Debug, Clone)]
pub enum Callable {
    /// A native operation
    Builtin(Builtin),
    /// A translated routine
    Routine(Arc<FuncDef>),
}

impl Callable {
    /// Invoke with already-evaluated arguments.
    pub fn call(&self, env: &mut Env, args: Vec<Value>) -> Result<Value, RuntimeError> {
        match self {
            Callable::Builtin(b) => b.apply(env, &args),
            Callable::Routine(def) => def.invoke(env, args),
        }
    }
}

impl From<Builtin> for Callable {
    fn from(b: Builtin) -> Self {
        Callable::Builtin(b)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Callable::Builtin(a), Callable::Builtin(b)) => a == b,
            (Callable::Routine(a), Callable::Routine(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callable::Builtin(b) => write!(f, "<builtin {}>", b.name()),
            Callable::Routine(def) => write!(f, "<routine/{}>", def.num_params),
        }
    }
}

/// Native operations bound into the operator table and global functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Integer addition, overflow is an error
    IAdd,
    /// Float addition
    FAdd,
    /// Integer equality
    IEq,
    /// Write one rendered value as a line of output
    Print,
}

impl Builtin {
    /// Short name used when rendering.
    pub const fn name(&self) -> &'static str {
        match self {
            Builtin::IAdd => "iadd",
            Builtin::FAdd => "fadd",
            Builtin::IEq => "ieq",
            Builtin::Print => "print",
        }
    }

    /// Number of arguments the builtin takes.
    pub const fn arity(&self) -> usize {
        match self {
            Builtin::IAdd | Builtin::FAdd | Builtin::IEq => 2,
            Builtin::Print => 1,
        }
    }

    /// Apply the builtin to evaluated arguments.
    pub fn apply(&self, env: &mut Env, args: &[Value]) -> Result<Value, RuntimeError> {
        if args.len() != self.arity() {
            return Err(RuntimeError::ArityMismatch {
                expected: self.arity(),
                found: args.len(),
            });
        }

        match self {
            Builtin::IAdd => args[0]
                .as_int()?
                .checked_add(args[1].as_int()?)
                .map(Value::Int)
                .ok_or(RuntimeError::IntegerOverflow {
                    operation: self.name(),
                }),
            Builtin::FAdd => Ok(Value::Float(args[0].as_float()? + args[1].as_float()?)),
            Builtin::IEq => Ok(Value::Bool(args[0].as_int()? == args[1].as_int()?)),
            Builtin::Print => {
                env.print(args[0].to_string());
                Ok(Value::Unit)
            }
        }
    }
}
