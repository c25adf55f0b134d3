mod arena;
mod errors;
mod number;
mod pprint;
mod predeclared;

pub use arena::TyArena;
pub use errors::TyError;
pub use number::{UntypedNumberTy, UntypedValue};
pub use predeclared::PREDECLARED_TYS;

use gotc_atom::AtomId;

gotc_utils::index!(TyID);

pub type Tys<'cx> = &'cx [&'cx Ty<'cx>];

#[derive(Debug, Clone, Copy)]
pub struct Ty<'cx> {
    pub id: TyID,
    pub kind: TyKind<'cx>,
    /// `Some` for a declared named type. The kind of a named type is a
    /// copy of its underlying type's kind.
    pub name: Option<AtomId>,
}

impl PartialEq for Ty<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ty<'_> {}

impl<'cx> Ty<'cx> {
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TyKind<'cx> {
    Bool,
    String,
    Int(IntTy),
    Uint(IntTy),
    Flt(FltTy),
    Pointer(&'cx PointerTy<'cx>),
    Array(&'cx ArrayTy<'cx>),
    Slice(&'cx SliceTy<'cx>),
    Struct(&'cx StructTy<'cx>),
    Fn(&'cx FnTy<'cx>),
    TyList(&'cx TyListTy<'cx>),
    UntypedNumber(&'cx UntypedNumberTy<'cx>),
    /// Result of an expression that already failed to check.
    Unknown,
    Any,
    Void,
    /// Marks the position from which a function accepts any number of
    /// trailing arguments.
    VariadicAny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntTy {
    pub size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FltTy {
    pub size: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct PointerTy<'cx> {
    pub base: &'cx Ty<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct ArrayTy<'cx> {
    pub size: u64,
    pub element: &'cx Ty<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct SliceTy<'cx> {
    pub element: &'cx Ty<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSymbol<'cx> {
    pub name: AtomId,
    pub ty: &'cx Ty<'cx>,
}

pub type FieldMap<'cx> = indexmap::IndexMap<AtomId, FieldSymbol<'cx>, rustc_hash::FxBuildHasher>;

#[derive(Debug)]
pub struct StructTy<'cx> {
    /// Declaration order is preserved.
    pub fields: FieldMap<'cx>,
}

impl<'cx> StructTy<'cx> {
    pub fn field(&self, name: AtomId) -> Option<&FieldSymbol<'cx>> {
        self.fields.get(&name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FnTy<'cx> {
    pub params: Tys<'cx>,
    pub results: Tys<'cx>,
}

#[derive(Debug, Clone, Copy)]
pub struct TyListTy<'cx> {
    pub tys: Tys<'cx>,
}

macro_rules! ty_kind_as {
    ($(($variant: ident, $ty: ty, $as_kind: ident, $is_kind: ident)),* $(,)?) => {
        impl<'cx> TyKind<'cx> {
            $(
                #[inline(always)]
                pub fn $as_kind(&self) -> Option<$ty> {
                    match self {
                        TyKind::$variant(t) => Some(*t),
                        _ => None,
                    }
                }
                #[inline(always)]
                pub fn $is_kind(&self) -> bool {
                    matches!(self, TyKind::$variant(_))
                }
            )*
        }
    };
}

ty_kind_as!(
    (Int, IntTy, as_int, is_int),
    (Uint, IntTy, as_uint, is_uint),
    (Flt, FltTy, as_flt, is_flt),
    (Pointer, &'cx PointerTy<'cx>, as_pointer, is_pointer),
    (Array, &'cx ArrayTy<'cx>, as_array, is_array),
    (Slice, &'cx SliceTy<'cx>, as_slice, is_slice),
    (Struct, &'cx StructTy<'cx>, as_struct, is_struct),
    (Fn, &'cx FnTy<'cx>, as_fn, is_fn),
    (TyList, &'cx TyListTy<'cx>, as_ty_list, is_ty_list),
    (UntypedNumber, &'cx UntypedNumberTy<'cx>, as_untyped_number, is_untyped_number),
);

impl<'cx> TyKind<'cx> {
    pub fn is_bool(&self) -> bool {
        matches!(self, TyKind::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, TyKind::String)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TyKind::Unknown)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, TyKind::Any)
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TyKind::Void)
    }

    pub fn is_variadic_any(&self) -> bool {
        matches!(self, TyKind::VariadicAny)
    }

    /// `Int` or `Uint`.
    pub fn is_integer(&self) -> bool {
        self.is_int() || self.is_uint()
    }

    /// `Int`, `Uint` or `Flt`.
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_flt()
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            TyKind::Unknown | TyKind::Any | TyKind::Void | TyKind::VariadicAny
        )
    }
}
