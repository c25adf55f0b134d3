use gotc_span::Span;
use gotc_ty::{Ty, TyKind, UntypedNumberTy};

use super::TyChecker;
use super::errors;

impl<'cx> TyChecker<'_, 'cx> {
    /// Whether a value of `src` may be stored into a location of `dest`.
    /// Reports the first reason it may not.
    #[tracing::instrument(
        level = tracing::Level::TRACE,
        skip_all,
        fields(dest = dest.id.as_u32(), src = src.id.as_u32()),
        ret
    )]
    pub fn can_assign(&mut self, dest: &'cx Ty<'cx>, src: &'cx Ty<'cx>, span: Span) -> bool {
        if dest == src {
            return true;
        }
        if dest.kind.is_unknown() || dest.kind.is_any() || src.kind.is_unknown() {
            return true;
        }
        if self.options.nil_pointer()
            && dest.kind.is_pointer()
            && src.kind.as_pointer().is_some_and(|p| p.base.kind.is_any())
        {
            tracing::debug!(dest = dest.id.as_u32(), "nil assigned to pointer");
            return true;
        }
        if let Some(number) = src.kind.as_untyped_number() {
            return self.can_assign_untyped_number(dest, src, number, span);
        }
        if let Some(list) = src.kind.as_ty_list() {
            match dest.kind {
                TyKind::Array(array) => {
                    return list
                        .tys
                        .iter()
                        .all(|ty| self.can_assign(array.element, *ty, span));
                }
                TyKind::Slice(slice) => {
                    return list
                        .tys
                        .iter()
                        .all(|ty| self.can_assign(slice.element, *ty, span));
                }
                TyKind::TyList(dest_list) => {
                    if dest_list.tys.len() != list.tys.len() {
                        let error = errors::AssignmentMismatch {
                            span,
                            x: dest_list.tys.len(),
                            y: list.tys.len(),
                        };
                        self.push_error(Box::new(error));
                        return false;
                    }
                    return dest_list
                        .tys
                        .iter()
                        .zip(list.tys)
                        .all(|(dest, src)| self.can_assign(*dest, *src, span));
                }
                _ => {}
            }
        }
        self.report_incompatible(dest, src, span);
        false
    }

    fn can_assign_untyped_number(
        &mut self,
        dest: &'cx Ty<'cx>,
        src: &'cx Ty<'cx>,
        number: &'cx UntypedNumberTy<'cx>,
        span: Span,
    ) -> bool {
        let size = match dest.kind {
            TyKind::Flt(_) => return true,
            TyKind::Int(i) | TyKind::Uint(i) => i.size,
            _ => {
                self.report_incompatible(dest, src, span);
                return false;
            }
        };
        if !number.is_integer() {
            let error = errors::UntypedNumberTruncatedToInteger {
                span,
                value: number.text.to_string(),
                ty: self.print_ty(dest),
            };
            self.push_error(Box::new(error));
            return false;
        }
        let value = number.int_value();
        let fits = self
            .int_range(dest.kind.is_uint(), size)
            .is_some_and(|(min, max)| (min..=max).contains(&value));
        if !fits {
            let error = errors::UntypedNumberOverflowsTy {
                span,
                value: number.text.to_string(),
                ty: self.print_ty(dest),
            };
            self.push_error(Box::new(error));
            return false;
        }
        true
    }

    /// The inclusive range of values an integer type of `size` bits holds.
    /// `None` for a width outside `1..=64`, which holds no constant.
    fn int_range(&self, unsigned: bool, size: u32) -> Option<(i128, i128)> {
        if !(1..=64).contains(&size) {
            return None;
        }
        let half = 1i128 << (size - 1);
        if unsigned && self.options.exact_unsigned_range() {
            Some((0, (half << 1) - 1))
        } else {
            Some((-half, half - 1))
        }
    }

    fn report_incompatible(&mut self, dest: &'cx Ty<'cx>, src: &'cx Ty<'cx>, span: Span) {
        let error = errors::TypeIsIncompatibleWithType {
            span,
            src: self.print_ty(src),
            dest: self.print_ty(dest),
        };
        self.push_error(Box::new(error));
    }
}
