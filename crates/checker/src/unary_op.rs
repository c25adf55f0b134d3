use gotc_span::Span;
use gotc_ty::{Ty, TyKind};

use super::TyChecker;
use super::errors;
use crate::UnaryOp;

impl<'cx> TyChecker<'_, 'cx> {
    #[tracing::instrument(
        level = tracing::Level::TRACE,
        skip_all,
        fields(operand = operand.id.as_u32(), op = op.as_str())
    )]
    pub fn check_unary_op(
        &mut self,
        operand: &'cx Ty<'cx>,
        op: UnaryOp,
        span: Span,
    ) -> &'cx Ty<'cx> {
        if operand.kind.is_unknown() {
            return self.unknown_ty();
        }
        let kind = operand.kind;
        match op {
            UnaryOp::Plus if kind.is_numeric() || kind.is_untyped_number() => return operand,
            UnaryOp::Minus => {
                if let Some(n) = kind.as_untyped_number() {
                    return self.fold_neg(n, span);
                } else if kind.is_numeric() {
                    return operand;
                }
            }
            UnaryOp::Not if kind.is_bool() => return operand,
            UnaryOp::BitNot => {
                if let Some(n) = kind.as_untyped_number()
                    && n.is_exact_integer()
                {
                    return self.tys.untyped_int(!n.int_value());
                } else if kind.is_integer() {
                    return operand;
                }
            }
            UnaryOp::Deref => {
                if let TyKind::Pointer(p) = kind {
                    return p.base;
                }
            }
            UnaryOp::AddrOf if kind.is_pointer() || kind.is_slice() => {
                return if self.options.address_of_yields_pointer() {
                    self.tys.pointer_ty(operand)
                } else {
                    self.unknown_ty()
                };
            }
            UnaryOp::Plus | UnaryOp::Not | UnaryOp::AddrOf => {}
        }
        let error = errors::OperatorCannotBeUsedOnType {
            span,
            op: op.as_str().to_string(),
            ty: self.print_ty(operand),
        };
        self.push_error(Box::new(error));
        self.unknown_ty()
    }
}
