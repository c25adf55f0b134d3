use gotc_ty::{Ty, TyKind};

use super::TyChecker;

impl<'cx> TyChecker<'_, 'cx> {
    /// Structural type identity. Two named types are identical iff their
    /// names are; a named type is never identical to an unnamed one.
    /// Untyped numbers and sentinels are identical only to themselves.
    #[tracing::instrument(
        level = tracing::Level::TRACE,
        skip_all,
        fields(a = a.id.as_u32(), b = b.id.as_u32()),
        ret
    )]
    pub fn is_identical(&self, a: &'cx Ty<'cx>, b: &'cx Ty<'cx>) -> bool {
        if a == b {
            return true;
        }
        match (a.name, b.name) {
            (Some(a), Some(b)) => return a == b,
            (None, None) => {}
            _ => return false,
        }
        use TyKind::*;
        match (a.kind, b.kind) {
            (Bool, Bool) | (String, String) => true,
            (Int(x), Int(y)) | (Uint(x), Uint(y)) => x.size == y.size,
            (Flt(x), Flt(y)) => x.size == y.size,
            (Array(x), Array(y)) => x.size == y.size && self.is_identical(x.element, y.element),
            (Slice(x), Slice(y)) => self.is_identical(x.element, y.element),
            (Pointer(x), Pointer(y)) => self.is_identical(x.base, y.base),
            (Struct(x), Struct(y)) => {
                x.fields.len() == y.fields.len()
                    && x
                        .fields
                        .values()
                        .zip(y.fields.values())
                        .all(|(x, y)| x.name == y.name && self.is_identical(x.ty, y.ty))
            }
            (Fn(x), Fn(y)) => {
                self.are_identical(x.params, y.params) && self.are_identical(x.results, y.results)
            }
            (TyList(x), TyList(y)) => self.are_identical(x.tys, y.tys),
            (UntypedNumber(_) | Unknown | Any | Void | VariadicAny, _) => false,
            (
                Bool | String | Int(_) | Uint(_) | Flt(_) | Array(_) | Slice(_) | Pointer(_)
                | Struct(_) | Fn(_) | TyList(_),
                _,
            ) => false,
        }
    }

    fn are_identical(&self, a: &[&'cx Ty<'cx>], b: &[&'cx Ty<'cx>]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(a, b)| self.is_identical(*a, *b))
    }

    /// Whether `a` and `b` share a representation. Element, base and field
    /// types are not compared structurally: arrays, slices and pointers
    /// need the very same nested type, and structs and functions only need
    /// to be structs and functions.
    ///
    /// Beyond the variant tag, numeric types must also agree on bit width
    /// and arrays on length, so `int8` and `int64` are not equivalent here.
    #[tracing::instrument(
        level = tracing::Level::TRACE,
        skip_all,
        fields(a = a.id.as_u32(), b = b.id.as_u32()),
        ret
    )]
    pub fn is_same_underlying(&self, a: &'cx Ty<'cx>, b: &'cx Ty<'cx>) -> bool {
        if a == b {
            return true;
        }
        use TyKind::*;
        match (a.kind, b.kind) {
            (Bool, Bool) | (String, String) => true,
            (Int(x), Int(y)) | (Uint(x), Uint(y)) => x.size == y.size,
            (Flt(x), Flt(y)) => x.size == y.size,
            (Array(x), Array(y)) => x.size == y.size && x.element == y.element,
            (Slice(x), Slice(y)) => x.element == y.element,
            (Pointer(x), Pointer(y)) => x.base == y.base,
            (Struct(_), Struct(_)) | (Fn(_), Fn(_)) | (TyList(_), TyList(_)) => true,
            (UntypedNumber(_), UntypedNumber(_)) => true,
            (Unknown, Unknown) | (Any, Any) | (Void, Void) | (VariadicAny, VariadicAny) => true,
            (
                Bool | String | Int(_) | Uint(_) | Flt(_) | Array(_) | Slice(_) | Pointer(_)
                | Struct(_) | Fn(_) | TyList(_) | UntypedNumber(_) | Unknown | Any | Void
                | VariadicAny,
                _,
            ) => false,
        }
    }
}
