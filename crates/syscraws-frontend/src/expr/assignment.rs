//! Assignment, compound assignment, and increment/decrement.
//!
//! These are calls of assignment-family operators, but they write to their
//! first argument, so they are lowered to [`IrExpr::Store`] instead of going
//! through the operator table directly:
//!
//! ```text
//! x = v      Store { x, v }
//! x += v     Store { x, add(x, v) }
//! ++x        Store { x, add(x, 1) }
//! x++        Store { x, add(x, 1), yield_old }
//! ```
//!
//! The target must be a local variable. Compound and step forms resolve
//! their arithmetic operator over `(target, value)` and the result must have
//! the target's type.

use syscraws_ast::CallExpr;
use syscraws_core::{OperatorTag, TranslateError};
use syscraws_ir::{IrExpr, Value};
use syscraws_registry::TypeId;

use super::calls::translate_args;
use super::{ExprTranslator, Result, Translated};
use crate::overload::{no_matching_overload, resolve_operator};

/// Translate `op(args...)` where `op` is an assignment-family operator.
pub fn translate_assignment(
    translator: &ExprTranslator<'_>,
    op: OperatorTag,
    call: &CallExpr<'_>,
) -> Result<Translated> {
    let ctx = translator.ctx();
    let arity = if op.is_step() { 1 } else { 2 };
    if call.args.len() != arity {
        let (arg_types, _) = translate_args(translator, call.args)?;
        return Err(no_matching_overload(
            ctx,
            op.to_string(),
            &arg_types,
            call.span,
        ));
    }

    let target_expr = &call.args[0];
    let target = target_expr
        .as_ident()
        .and_then(|ident| translator.scope().get(ident.name))
        .ok_or(TranslateError::NotAssignable {
            operator: op,
            span: target_expr.span(),
        })?;
    let (slot, target_ty) = (target.slot, target.ty);

    let value = if let Some(base) = op.step_base() {
        let step = Translated::new(TypeId::INT, IrExpr::Imm(Value::Int(1)));
        apply_base(translator, base, slot, target_ty, step, call)?
    } else {
        let rhs = translator.translate(&call.args[1])?;
        match op.compound_base() {
            Some(base) => apply_base(translator, base, slot, target_ty, rhs, call)?,
            None => {
                translator.expect_type(target_ty, rhs.ty, call.args[1].span())?;
                rhs.ir
            }
        }
    };

    Ok(Translated::new(
        target_ty,
        IrExpr::Store {
            slot,
            value: Box::new(value),
            yield_old: op.yields_old_value(),
        },
    ))
}

/// Build `base(target, operand)`, requiring it to produce the target's type.
fn apply_base(
    translator: &ExprTranslator<'_>,
    base: OperatorTag,
    slot: usize,
    target_ty: TypeId,
    operand: Translated,
    call: &CallExpr<'_>,
) -> Result<IrExpr> {
    let m = resolve_operator(
        translator.ctx(),
        base,
        &[target_ty, operand.ty],
        call.span,
    )?;
    translator.expect_type(target_ty, m.ret, call.span)?;

    Ok(IrExpr::Call {
        callee: Box::new(IrExpr::Imm(Value::Func(m.callable))),
        args: vec![IrExpr::Local(slot), operand.ir],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, LocalScope};
    use bumpalo::Bump;
    use syscraws_ast::AstBuilder;
    use syscraws_core::Span;
    use syscraws_ir::{Builtin, Callable};

    fn iadd(lhs: IrExpr, rhs: IrExpr) -> IrExpr {
        IrExpr::Call {
            callee: Box::new(IrExpr::Imm(Value::Func(Callable::Builtin(Builtin::IAdd)))),
            args: vec![lhs, rhs],
        }
    }

    fn scope_with(name: &str, ty: TypeId) -> LocalScope {
        let mut scope = LocalScope::new();
        scope.declare(name, ty, Span::default()).unwrap();
        scope
    }

    #[test]
    fn plain_assignment() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let scope = scope_with("x", TypeId::INT);

        let t = ExprTranslator::new(&ctx, &scope)
            .translate(&b.assign("x", b.int(5)))
            .unwrap();
        assert_eq!(t.ty, TypeId::INT);
        assert_eq!(
            t.ir,
            IrExpr::Store {
                slot: 0,
                value: Box::new(IrExpr::Imm(Value::Int(5))),
                yield_old: false,
            }
        );
    }

    #[test]
    fn assignment_type_mismatch() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let scope = scope_with("x", TypeId::INT);

        let err = ExprTranslator::new(&ctx, &scope)
            .translate(&b.assign("x", b.at(1, 5).float(1.0)))
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::TypeMismatch {
                expected: "int".to_string(),
                found: "float".to_string(),
                span: Span::point(1, 5)
            }
        );
    }

    #[test]
    fn compound_assignment() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let scope = scope_with("x", TypeId::INT);

        let expr = b.binary(OperatorTag::AddAssign, b.ident("x"), b.int(2));
        let t = ExprTranslator::new(&ctx, &scope).translate(&expr).unwrap();
        assert_eq!(
            t.ir,
            IrExpr::Store {
                slot: 0,
                value: Box::new(iadd(IrExpr::Local(0), IrExpr::Imm(Value::Int(2)))),
                yield_old: false,
            }
        );
    }

    #[test]
    fn compound_result_must_match_target() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let mut ctx = Context::new();
        ctx.register_operator(
            OperatorTag::Add,
            vec![TypeId::BOOL, TypeId::BOOL],
            TypeId::INT,
            Builtin::IAdd.into(),
        );
        let scope = scope_with("flag", TypeId::BOOL);

        let expr = b.binary(OperatorTag::AddAssign, b.ident("flag"), b.ident("true"));
        let err = ExprTranslator::new(&ctx, &scope).translate(&expr).unwrap_err();
        assert!(matches!(err, TranslateError::TypeMismatch { .. }));
    }

    #[test]
    fn compound_without_base_overload() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let scope = scope_with("x", TypeId::INT);

        let expr = b.binary(OperatorTag::MulAssign, b.ident("x"), b.int(2));
        let err = ExprTranslator::new(&ctx, &scope).translate(&expr).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::NoMatchingOverload { ref callee, .. } if callee == "mul (*)"
        ));
    }

    #[test]
    fn increments() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let scope = scope_with("i", TypeId::INT);
        let translator = ExprTranslator::new(&ctx, &scope);

        let bumped = Box::new(iadd(IrExpr::Local(0), IrExpr::Imm(Value::Int(1))));

        let pre = translator
            .translate(&b.unary(OperatorTag::PreInc, b.ident("i")))
            .unwrap();
        assert_eq!(
            pre.ir,
            IrExpr::Store {
                slot: 0,
                value: bumped.clone(),
                yield_old: false,
            }
        );

        let post = translator
            .translate(&b.unary(OperatorTag::PostInc, b.ident("i")))
            .unwrap();
        assert_eq!(
            post.ir,
            IrExpr::Store {
                slot: 0,
                value: bumped,
                yield_old: true,
            }
        );
    }

    #[test]
    fn float_increment_has_no_overload() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let scope = scope_with("f", TypeId::FLOAT);

        let err = ExprTranslator::new(&ctx, &scope)
            .translate(&b.unary(OperatorTag::PreInc, b.ident("f")))
            .unwrap_err();
        assert!(matches!(
            err,
            TranslateError::NoMatchingOverload { ref args, .. } if args == "float, int"
        ));
    }

    #[test]
    fn target_must_be_local() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let scope = LocalScope::new();
        let translator = ExprTranslator::new(&ctx, &scope);

        let to_constant = b.binary(OperatorTag::Assign, b.at(3, 1).ident("true"), b.ident("false"));
        assert_eq!(
            translator.translate(&to_constant).unwrap_err(),
            TranslateError::NotAssignable {
                operator: OperatorTag::Assign,
                span: Span::point(3, 1)
            }
        );

        let to_literal = b.binary(OperatorTag::Assign, b.int(1), b.int(2));
        assert!(matches!(
            translator.translate(&to_literal),
            Err(TranslateError::NotAssignable { .. })
        ));
    }

    #[test]
    fn wrong_arity() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let scope = scope_with("x", TypeId::INT);

        let expr = b.unary(OperatorTag::Assign, b.ident("x"));
        let err = ExprTranslator::new(&ctx, &scope).translate(&expr).unwrap_err();
        assert_eq!(
            err,
            TranslateError::NoMatchingOverload {
                callee: "assign (=)".to_string(),
                arity: 1,
                args: "int".to_string(),
                span: Span::default(),
            }
        );
    }
}
