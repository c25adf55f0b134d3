use gotc_span::Span;
use gotc_ty::Ty;

use super::TyChecker;
use super::errors;
use crate::BinOp;

impl<'cx> TyChecker<'_, 'cx> {
    /// Checks `lhs op rhs` and yields the type of the result. Two untyped
    /// constants fold into a new untyped constant. Otherwise `lhs` must
    /// accept `rhs` and the result is the type of `lhs`; with
    /// `untyped_operand_conversion` an untyped `lhs` defers to a typed `rhs`.
    #[tracing::instrument(
        level = tracing::Level::TRACE,
        skip_all,
        fields(lhs = lhs.id.as_u32(), rhs = rhs.id.as_u32(), op = op.as_str())
    )]
    pub fn check_bin_op(
        &mut self,
        lhs: &'cx Ty<'cx>,
        rhs: &'cx Ty<'cx>,
        op: BinOp,
        span: Span,
    ) -> &'cx Ty<'cx> {
        if lhs.kind.is_unknown() || rhs.kind.is_unknown() {
            return self.unknown_ty();
        }
        let lhs_untyped = lhs.kind.as_untyped_number();
        let rhs_untyped = rhs.kind.as_untyped_number();
        if let (Some(l), Some(r)) = (lhs_untyped, rhs_untyped) {
            if let Some(folded) = self.fold_bin_op(l, r, op, span) {
                return folded;
            }
            return self.check_typed_bin_op(lhs, lhs, rhs, op, span);
        }

        let (subject, other) = if self.options.untyped_operand_conversion()
            && lhs_untyped.is_some()
            && !op.is_shift()
        {
            (rhs, lhs)
        } else {
            (lhs, rhs)
        };
        let gate_exempt = op.is_shift() && self.options.shift_operands_exempt();
        if !gate_exempt && !self.can_assign(subject, other, span) {
            let error = errors::MismatchedOperandTypes {
                span,
                lhs: self.print_ty(lhs),
                rhs: self.print_ty(rhs),
            };
            self.push_error(Box::new(error));
            return self.unknown_ty();
        }
        self.check_typed_bin_op(subject, lhs, rhs, op, span)
    }

    fn check_typed_bin_op(
        &mut self,
        subject: &'cx Ty<'cx>,
        lhs: &'cx Ty<'cx>,
        rhs: &'cx Ty<'cx>,
        op: BinOp,
        span: Span,
    ) -> &'cx Ty<'cx> {
        use BinOp::*;
        let applicable = match op {
            Add => subject.kind.is_numeric() || subject.kind.is_string(),
            Sub | Mul | Div => subject.kind.is_numeric(),
            Rem | BitAnd | BitOr | BitXor | BitClear => subject.kind.is_integer(),
            Shl | Shr => {
                if lhs.kind.is_int() && self.is_shift_count(rhs) {
                    return lhs;
                }
                let error = errors::OperatorCannotBeUsedOnTypes {
                    span,
                    op: op.as_str().to_string(),
                    ty1: self.print_ty(lhs),
                    ty2: self.print_ty(rhs),
                };
                self.push_error(Box::new(error));
                return self.unknown_ty();
            }
        };
        if applicable {
            return subject;
        }
        let error = errors::OperatorCannotBeUsedOnType {
            span,
            op: op.as_str().to_string(),
            ty: self.print_ty(subject),
        };
        self.push_error(Box::new(error));
        self.unknown_ty()
    }

    /// `Uint`. With `untyped_operand_conversion`, also an untyped constant
    /// representable as one.
    fn is_shift_count(&self, ty: &'cx Ty<'cx>) -> bool {
        match ty.kind.as_untyped_number() {
            Some(n) if self.options.untyped_operand_conversion() => {
                n.is_integer() && n.int_value() >= 0
            }
            _ => ty.kind.is_uint(),
        }
    }
}
