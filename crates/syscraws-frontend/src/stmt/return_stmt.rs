//! Return statement translation.

use syscraws_ast::ReturnStmt;
use syscraws_core::TranslateError;
use syscraws_ir::{IrStmt, Next};
use syscraws_registry::TypeId;

use super::{Result, ReturnMode, StmtTranslator};

impl<'ctx> StmtTranslator<'ctx> {
    /// Translate a return statement.
    ///
    /// A bare `return` returns unit. The statement ends the routine, so the
    /// successor is not used.
    pub(super) fn translate_return(&mut self, ret: &ReturnStmt<'_>) -> Result<Next> {
        let (ty, value) = match ret.value {
            Some(expr) => {
                let translated = self.expr_translator().translate(expr)?;
                (translated.ty, Some(translated.ir))
            }
            None => (TypeId::UNIT, None),
        };

        let expected = match self.return_mode {
            ReturnMode::Declared(expected) => expected,
            ReturnMode::Inferred => *self.inferred_return.get_or_insert(ty),
        };
        if ty != expected {
            return Err(TranslateError::ReturnTypeMismatch {
                expected: self.ctx.type_name(expected),
                found: self.ctx.type_name(ty),
                span: ret.span,
            });
        }

        Ok(self.push(IrStmt::Return { value }))
    }
}

#[cfg(test)]
mod tests {
    use super::super::translate_routine;
    use super::*;
    use crate::Context;
    use bumpalo::Bump;
    use syscraws_ast::AstBuilder;
    use syscraws_core::Span;
    use syscraws_ir::{Env, Value};

    #[test]
    fn return_value() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let routine = translate_routine(&ctx, &b.return_(Some(b.string("done")))).unwrap();
        assert_eq!(
            routine.invoke(&mut Env::new(), vec![]),
            Ok(Value::from("done"))
        );
    }

    #[test]
    fn bare_return_is_unit() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();
        let mut translator = StmtTranslator::new(&ctx, ReturnMode::Inferred);

        translator.translate(&b.return_(None), Next::End).unwrap();
        assert_eq!(translator.return_type(), Some(TypeId::UNIT));
    }

    #[test]
    fn return_skips_rest_of_block() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let stmt = b.block(&[
            b.return_(Some(b.int(1))),
            b.expr_stmt(b.call_named("print", &[b.int(2)])),
        ]);
        let routine = translate_routine(&ctx, &stmt).unwrap();
        let mut env = Env::new();
        assert_eq!(routine.invoke(&mut env, vec![]), Ok(Value::Int(1)));
        assert!(env.output().is_empty());
    }

    #[test]
    fn declared_return_type() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let mut translator = StmtTranslator::new(&ctx, ReturnMode::Declared(TypeId::BOOL));
        assert!(
            translator
                .translate(&b.return_(Some(b.ident("true"))), Next::End)
                .is_ok()
        );

        let err = translator
            .translate(&b.at(9, 5).return_(Some(b.int(0))), Next::End)
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::ReturnTypeMismatch {
                expected: "bool".to_string(),
                found: "int".to_string(),
                span: Span::point(9, 5)
            }
        );
    }

    #[test]
    fn inferred_returns_must_agree() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let stmt = b.if_(
            b.ident("true"),
            b.return_(Some(b.int(1))),
            Some(b.at(2, 1).return_(Some(b.float(1.0)))),
        );
        let err = translate_routine(&ctx, &stmt).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::ReturnTypeMismatch { ref expected, ref found, .. }
                if expected == "int" && found == "float"
        ));
    }

    #[test]
    fn bare_return_against_value_return() {
        let arena = Bump::new();
        let b = AstBuilder::new(&arena);
        let ctx = Context::new();

        let stmt = b.block(&[b.return_(Some(b.int(1))), b.return_(None)]);
        let err = translate_routine(&ctx, &stmt).unwrap_err();
        assert!(matches!(err, TranslateError::ReturnTypeMismatch { .. }));
    }
}
