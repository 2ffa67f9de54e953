//! Literal translation.

use std::sync::Arc;

use syscraws_ast::LiteralKind;
use syscraws_ir::{IrExpr, Value};
use syscraws_registry::TypeId;

use super::Translated;

/// Translate a literal into an immediate of its primitive type.
pub fn translate_literal(kind: &LiteralKind<'_>) -> Translated {
    let (ty, value) = match kind {
        LiteralKind::Int(v) => (TypeId::INT, Value::Int(*v)),
        LiteralKind::Float(v) => (TypeId::FLOAT, Value::Float(*v)),
        LiteralKind::String(s) => (TypeId::STRING, Value::Str(Arc::from(*s))),
    };
    Translated::new(ty, IrExpr::Imm(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_literals() {
        for n in [0, 1, -1, i32::MIN, i32::MAX] {
            let t = translate_literal(&LiteralKind::Int(n));
            assert_eq!(t.ty, TypeId::INT);
            assert_eq!(t.ir, IrExpr::Imm(Value::Int(n)));
        }
    }

    #[test]
    fn float_literal() {
        let t = translate_literal(&LiteralKind::Float(2.5));
        assert_eq!(t.ty, TypeId::FLOAT);
        assert_eq!(t.ir, IrExpr::Imm(Value::Float(2.5)));
    }

    #[test]
    fn string_literal() {
        let t = translate_literal(&LiteralKind::String("hello"));
        assert_eq!(t.ty, TypeId::STRING);
        assert_eq!(t.ir, IrExpr::Imm(Value::from("hello")));
    }
}
