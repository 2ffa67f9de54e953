//! Call translation.
//!
//! Arguments are translated first, left to right. The callee is resolved
//! afterwards against the argument types:
//! - an operator reference goes through the operator table
//! - a name that is not a local but is a global function goes through that
//!   function's overloads
//! - anything else must be a value of function type whose parameters are
//!   exactly the argument types
//!
//! Assignment-family operators are lowered separately (see `assignment`).

use syscraws_ast::{CallExpr, Expr};
use syscraws_core::{Span, TranslateError};
use syscraws_ir::{IrExpr, Value};
use syscraws_registry::TypeId;

use super::{ExprTranslator, Result, Translated, assignment};
use crate::overload::{no_matching_overload, resolve_function, resolve_operator};

/// A resolved callee: its function type and the IR producing the callable.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCallee {
    /// Interned function type of the resolved signature
    pub signature: TypeId,
    /// Return type of `signature`
    pub ret: TypeId,
    /// IR evaluating to the callable
    pub ir: IrExpr,
}

/// Translate a call expression.
pub fn translate_call(translator: &ExprTranslator<'_>, call: &CallExpr<'_>) -> Result<Translated> {
    if let Expr::OperatorRef(op) = call.callee
        && op.op.is_assignment()
    {
        return assignment::translate_assignment(translator, op.op, call);
    }

    let (arg_types, args) = translate_args(translator, call.args)?;
    let callee = translate_callee(translator, call.callee, &arg_types, call.span)?;

    Ok(Translated::new(
        callee.ret,
        IrExpr::Call {
            callee: Box::new(callee.ir),
            args,
        },
    ))
}

/// Translate arguments left to right, splitting types from IR.
pub(super) fn translate_args(
    translator: &ExprTranslator<'_>,
    args: &[Expr<'_>],
) -> Result<(Vec<TypeId>, Vec<IrExpr>)> {
    let mut types = Vec::with_capacity(args.len());
    let mut irs = Vec::with_capacity(args.len());
    for arg in args {
        let translated = translator.translate(arg)?;
        types.push(translated.ty);
        irs.push(translated.ir);
    }
    Ok((types, irs))
}

/// Resolve an expression in callee position given the argument types.
pub fn translate_callee(
    translator: &ExprTranslator<'_>,
    callee: &Expr<'_>,
    arg_types: &[TypeId],
    span: Span,
) -> Result<ResolvedCallee> {
    let ctx = translator.ctx();

    match callee {
        Expr::OperatorRef(op) => {
            let m = resolve_operator(ctx, op.op, arg_types, span)?;
            Ok(ResolvedCallee {
                signature: m.signature,
                ret: m.ret,
                ir: IrExpr::Imm(Value::Func(m.callable)),
            })
        }
        Expr::Ident(ident)
            if translator.scope().get(ident.name).is_none()
                && ctx.registry().has_function(ident.name) =>
        {
            let m = resolve_function(ctx, ident.name, arg_types, span)?;
            Ok(ResolvedCallee {
                signature: m.signature,
                ret: m.ret,
                ir: IrExpr::Imm(Value::Func(m.callable)),
            })
        }
        _ => {
            let value = translator.translate(callee)?;
            let Some(sig) = ctx.registry().types().as_function(value.ty) else {
                return Err(TranslateError::NotCallable {
                    found: ctx.type_name(value.ty),
                    span: callee.span(),
                });
            };
            if !sig.accepts(arg_types) {
                return Err(no_matching_overload(
                    ctx,
                    ctx.type_name(value.ty),
                    arg_types,
                    span,
                ));
            }
            Ok(ResolvedCallee {
                signature: value.ty,
                ret: sig.ret,
                ir: value.ir,
            })
        }
    }
}
