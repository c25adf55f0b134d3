use gotc_span::Span;
use gotc_ty::{Ty, UntypedNumberTy};

use super::TyChecker;
use super::errors;
use crate::BinOp;

impl<'cx> TyChecker<'_, 'cx> {
    /// Folds two untyped constants. Yields `None` when the operator needs
    /// integral operands and they are not, leaving the operands to the
    /// typed rules.
    pub(super) fn fold_bin_op(
        &mut self,
        l: &UntypedNumberTy<'cx>,
        r: &UntypedNumberTy<'cx>,
        op: BinOp,
        span: Span,
    ) -> Option<&'cx Ty<'cx>> {
        use BinOp::*;
        match op {
            Add | Sub | Mul | Div => {
                if l.is_exact_integer() && r.is_exact_integer() {
                    Some(self.fold_int(l, r, op, span))
                } else {
                    Some(self.fold_float(l, r, op, span))
                }
            }
            Rem | BitAnd | BitOr | BitXor | BitClear => {
                (l.is_integer() && r.is_integer()).then(|| self.fold_int(l, r, op, span))
            }
            Shl | Shr => {
                if !l.is_integer() {
                    return None;
                }
                if !r.is_integer() || r.int_value() < 0 {
                    let error = errors::InvalidShiftCount {
                        span,
                        count: r.text.to_string(),
                    };
                    self.push_error(Box::new(error));
                    return Some(self.unknown_ty());
                }
                Some(self.fold_int(l, r, op, span))
            }
        }
    }

    fn fold_int(
        &mut self,
        l: &UntypedNumberTy<'cx>,
        r: &UntypedNumberTy<'cx>,
        op: BinOp,
        span: Span,
    ) -> &'cx Ty<'cx> {
        use BinOp::*;
        let (a, b) = (l.int_value(), r.int_value());
        let folded = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Rem if b == 0 => {
                self.push_error(Box::new(errors::DivisionByZero { span }));
                return self.unknown_ty();
            }
            Div => a.checked_div(b),
            Rem => a.checked_rem(b),
            BitAnd => Some(a & b),
            BitOr => Some(a | b),
            BitXor => Some(a ^ b),
            BitClear => Some(a & !b),
            Shl => shl(a, b),
            Shr => Some(shr(a, b)),
        };
        match folded {
            Some(v) => {
                tracing::debug!(lhs = l.text, rhs = r.text, op = op.as_str(), result = %v, "fold");
                self.tys.untyped_int(v)
            }
            None => self.report_constant_overflow(format!("{} {op} {}", l.text, r.text), span),
        }
    }

    fn fold_float(
        &mut self,
        l: &UntypedNumberTy<'cx>,
        r: &UntypedNumberTy<'cx>,
        op: BinOp,
        span: Span,
    ) -> &'cx Ty<'cx> {
        let (a, b) = (l.float_value(), r.float_value());
        let folded = match op {
            BinOp::Add => a + b,
            BinOp::Sub => a - b,
            BinOp::Mul => a * b,
            BinOp::Div if b == 0.0 => {
                self.push_error(Box::new(errors::DivisionByZero { span }));
                return self.unknown_ty();
            }
            BinOp::Div => a / b,
            _ => unreachable!("{op} is not folded as floating point"),
        };
        match self.tys.untyped_float(folded) {
            Ok(ty) => {
                tracing::debug!(lhs = l.text, rhs = r.text, op = op.as_str(), result = folded, "fold");
                ty
            }
            Err(_) => self.report_constant_overflow(format!("{} {op} {}", l.text, r.text), span),
        }
    }

    pub(super) fn fold_neg(&mut self, n: &UntypedNumberTy<'cx>, span: Span) -> &'cx Ty<'cx> {
        if n.is_exact_integer() {
            match n.int_value().checked_neg() {
                Some(v) => self.tys.untyped_int(v),
                None => self.report_constant_overflow(format!("-{}", n.text), span),
            }
        } else {
            match self.tys.untyped_float(-n.float_value()) {
                Ok(ty) => ty,
                Err(_) => self.report_constant_overflow(format!("-{}", n.text), span),
            }
        }
    }

    fn report_constant_overflow(&mut self, expr: String, span: Span) -> &'cx Ty<'cx> {
        self.push_error(Box::new(errors::ConstantOverflow { span, expr }));
        self.unknown_ty()
    }
}

/// `a << b` for a non-negative count, `None` when bits are shifted out.
fn shl(a: i128, b: i128) -> Option<i128> {
    if a == 0 {
        return Some(0);
    }
    if b >= i128::BITS as i128 {
        return None;
    }
    let shifted = a << b;
    (shifted >> b == a).then_some(shifted)
}

/// Arithmetic `a >> b` for a non-negative count.
fn shr(a: i128, b: i128) -> i128 {
    if b >= i128::BITS as i128 {
        if a < 0 { -1 } else { 0 }
    } else {
        a >> b
    }
}
