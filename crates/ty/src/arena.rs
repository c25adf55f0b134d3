use std::borrow::Cow;
use std::cell::{Cell, RefCell};

use gotc_atom::{AtomId, AtomMap};
use gotc_utils::fx_hashmap_with_capacity;
use rustc_hash::FxHashMap;

use crate::number::{Classified, UntypedNumberTy, classify};
use crate::predeclared;
use crate::{ArrayTy, FieldMap, FieldSymbol, FltTy, FnTy, IntTy, PointerTy, SliceTy, StructTy};
use crate::{Ty, TyError, TyID, TyKind, TyListTy};

/// Unnamed numeric and single-element composite types are shared, so the
/// same spelling always yields the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum InternKey {
    Int(u32),
    Uint(u32),
    Flt(u32),
    Pointer(TyID),
    Slice(TyID),
    Array(u64, TyID),
}

macro_rules! intrinsic_type {
    ($(($name: ident, $kind: expr)),* $(,)?) => {
        struct IntrinsicTys<'cx> {
            $($name: &'cx Ty<'cx>,)*
        }

        impl<'cx> IntrinsicTys<'cx> {
            fn new(mut alloc: impl FnMut(TyKind<'cx>) -> &'cx Ty<'cx>) -> Self {
                Self {
                    $($name: alloc($kind),)*
                }
            }
        }

        impl<'cx> TyArena<'cx> {
            $(
                #[inline(always)]
                pub fn $name(&self) -> &'cx Ty<'cx> {
                    self.intrinsics.$name
                }
            )*
        }
    };
}

intrinsic_type!(
    (unknown_ty, TyKind::Unknown),
    (any_ty, TyKind::Any),
    (void_ty, TyKind::Void),
    (variadic_any_ty, TyKind::VariadicAny),
    (bool_ty, TyKind::Bool),
    (string_ty, TyKind::String),
);

/// Owns every type of a compilation. Types are immutable once allocated
/// and compared by [`TyID`].
pub struct TyArena<'cx> {
    bump: &'cx bumpalo::Bump,
    next_ty_id: Cell<TyID>,
    intrinsics: IntrinsicTys<'cx>,
    atoms: RefCell<AtomMap<'static>>,
    interned: RefCell<FxHashMap<InternKey, &'cx Ty<'cx>>>,
    pub(crate) printed: RefCell<FxHashMap<TyID, String>>,
}

impl<'cx> TyArena<'cx> {
    pub fn new(bump: &'cx bumpalo::Bump) -> Self {
        let next_ty_id = Cell::new(TyID::root());
        let intrinsics = IntrinsicTys::new(|kind| alloc_ty(bump, &next_ty_id, kind, None));
        let mut atoms = AtomMap::new(predeclared::PREDECLARED_TYS.len() + 64);
        for (text, atom) in predeclared::PREDECLARED_TYS {
            atoms.insert(*atom, Cow::Borrowed(*text));
        }
        Self {
            bump,
            next_ty_id,
            intrinsics,
            atoms: RefCell::new(atoms),
            interned: RefCell::new(fx_hashmap_with_capacity(64)),
            printed: RefCell::new(fx_hashmap_with_capacity(64)),
        }
    }

    pub fn alloc<T>(&self, t: T) -> &'cx T {
        self.bump.alloc(t)
    }

    fn new_ty(&self, kind: TyKind<'cx>, name: Option<AtomId>) -> &'cx Ty<'cx> {
        alloc_ty(self.bump, &self.next_ty_id, kind, name)
    }

    fn intern(&self, key: InternKey, kind: impl FnOnce() -> TyKind<'cx>) -> &'cx Ty<'cx> {
        if let Some(ty) = self.interned.borrow().get(&key) {
            return *ty;
        }
        let ty = self.new_ty(kind(), None);
        self.interned.borrow_mut().insert(key, ty);
        ty
    }

    pub fn intern_atom(&self, text: &str) -> AtomId {
        self.atoms
            .borrow_mut()
            .insert_by_str(Cow::Owned(text.to_string()))
    }

    pub fn atom_str(&self, atom: AtomId) -> String {
        self.atoms.borrow().get(atom).to_string()
    }

    pub fn int_ty(&self, size: u32) -> Result<&'cx Ty<'cx>, TyError> {
        if !matches!(size, 8 | 16 | 32 | 64) {
            return Err(TyError::UnsupportedIntSize(size));
        }
        Ok(self.sized_int(size))
    }

    pub fn uint_ty(&self, size: u32) -> Result<&'cx Ty<'cx>, TyError> {
        if !matches!(size, 8 | 16 | 32 | 64) {
            return Err(TyError::UnsupportedIntSize(size));
        }
        Ok(self.sized_uint(size))
    }

    pub fn flt_ty(&self, size: u32) -> Result<&'cx Ty<'cx>, TyError> {
        if !matches!(size, 32 | 64) {
            return Err(TyError::UnsupportedFltSize(size));
        }
        Ok(self.sized_flt(size))
    }

    fn sized_int(&self, size: u32) -> &'cx Ty<'cx> {
        self.intern(InternKey::Int(size), || TyKind::Int(IntTy { size }))
    }

    fn sized_uint(&self, size: u32) -> &'cx Ty<'cx> {
        self.intern(InternKey::Uint(size), || TyKind::Uint(IntTy { size }))
    }

    fn sized_flt(&self, size: u32) -> &'cx Ty<'cx> {
        self.intern(InternKey::Flt(size), || TyKind::Flt(FltTy { size }))
    }

    pub fn pointer_ty(&self, base: &'cx Ty<'cx>) -> &'cx Ty<'cx> {
        self.intern(InternKey::Pointer(base.id), || {
            TyKind::Pointer(self.alloc(PointerTy { base }))
        })
    }

    pub fn slice_ty(&self, element: &'cx Ty<'cx>) -> &'cx Ty<'cx> {
        self.intern(InternKey::Slice(element.id), || {
            TyKind::Slice(self.alloc(SliceTy { element }))
        })
    }

    pub fn array_ty(&self, size: u64, element: &'cx Ty<'cx>) -> &'cx Ty<'cx> {
        self.intern(InternKey::Array(size, element.id), || {
            TyKind::Array(self.alloc(ArrayTy { size, element }))
        })
    }

    /// The type of the `nil` literal, a pointer to `any`.
    pub fn nil_ty(&self) -> &'cx Ty<'cx> {
        self.pointer_ty(self.any_ty())
    }

    pub fn struct_ty(&self, fields: &[(&str, &'cx Ty<'cx>)]) -> Result<&'cx Ty<'cx>, TyError> {
        let mut map = FieldMap::with_capacity_and_hasher(fields.len(), Default::default());
        for (name, ty) in fields {
            let atom = self.intern_atom(name);
            if map.contains_key(&atom) {
                return Err(TyError::DuplicateField(name.to_string()));
            }
            map.insert(atom, FieldSymbol { name: atom, ty: *ty });
        }
        let ty = self.alloc(StructTy { fields: map });
        Ok(self.new_ty(TyKind::Struct(ty), None))
    }

    pub fn fn_ty(&self, params: &[&'cx Ty<'cx>], results: &[&'cx Ty<'cx>]) -> &'cx Ty<'cx> {
        let params = self.bump.alloc_slice_copy(params);
        let results = self.bump.alloc_slice_copy(results);
        let ty = self.alloc(FnTy { params, results });
        self.new_ty(TyKind::Fn(ty), None)
    }

    pub fn ty_list(&self, tys: &[&'cx Ty<'cx>]) -> &'cx Ty<'cx> {
        let tys = self.bump.alloc_slice_copy(tys);
        let ty = self.alloc(TyListTy { tys });
        self.new_ty(TyKind::TyList(ty), None)
    }

    /// A fresh untyped constant for literal `text`.
    pub fn untyped_number(&self, text: &str) -> Result<&'cx Ty<'cx>, TyError> {
        let Some(classified) = classify(text) else {
            return Err(TyError::InvalidNumberLiteral(text.to_string()));
        };
        let text = self.bump.alloc_str(text);
        let number = match classified {
            Classified::Int(v) => UntypedNumberTy::from_int(text, v),
            Classified::Float(v) => UntypedNumberTy::from_float(text, v),
        };
        let number = self.alloc(number);
        Ok(self.new_ty(TyKind::UntypedNumber(number), None))
    }

    pub fn untyped_int(&self, value: i128) -> &'cx Ty<'cx> {
        let text = self.bump.alloc_str(&value.to_string());
        let number = self.alloc(UntypedNumberTy::from_int(text, value));
        self.new_ty(TyKind::UntypedNumber(number), None)
    }

    pub fn untyped_float(&self, value: f64) -> Result<&'cx Ty<'cx>, TyError> {
        if !value.is_finite() {
            return Err(TyError::NonFiniteConstant(value));
        }
        let text = self.bump.alloc_str(&format!("{value:?}"));
        let number = self.alloc(UntypedNumberTy::from_float(text, value));
        Ok(self.new_ty(TyKind::UntypedNumber(number), None))
    }

    /// Declares `name` with the underlying type of `underlying`. Every call
    /// yields a distinct type.
    pub fn named(&self, name: &str, underlying: &'cx Ty<'cx>) -> Result<&'cx Ty<'cx>, TyError> {
        if underlying.kind.is_sentinel()
            || underlying.kind.is_untyped_number()
            || underlying.kind.is_ty_list()
        {
            return Err(TyError::CannotName(self.print_ty(underlying)));
        }
        let atom = self.intern_atom(name);
        let ty = self.new_ty(underlying.kind, Some(atom));
        tracing::debug!(name, id = ty.id.as_u32(), "declare named type");
        Ok(ty)
    }

    /// Resolves a predeclared type name such as `int32` or `byte`.
    pub fn predeclared(&self, name: &str) -> Option<&'cx Ty<'cx>> {
        use predeclared::*;
        let ty = match AtomId::from_str(name) {
            BOOL => self.bool_ty(),
            STRING => self.string_ty(),
            INT8 => self.sized_int(8),
            INT16 => self.sized_int(16),
            INT32 | RUNE => self.sized_int(32),
            INT64 => self.sized_int(64),
            UINT8 | BYTE => self.sized_uint(8),
            UINT16 => self.sized_uint(16),
            UINT32 => self.sized_uint(32),
            UINT64 => self.sized_uint(64),
            FLOAT32 => self.sized_flt(32),
            FLOAT64 => self.sized_flt(64),
            ANY => self.any_ty(),
            _ => return None,
        };
        Some(ty)
    }
}

fn alloc_ty<'cx>(
    bump: &'cx bumpalo::Bump,
    next_ty_id: &Cell<TyID>,
    kind: TyKind<'cx>,
    name: Option<AtomId>,
) -> &'cx Ty<'cx> {
    let id = next_ty_id.get();
    next_ty_id.set(id.next());
    bump.alloc(Ty { id, kind, name })
}
