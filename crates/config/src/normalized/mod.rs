use crate::options::UnsignedRange;

macro_rules! normalized_option {
    ($s: ident, $(($option: ident, $ty: ty)),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub struct $s {
            $(pub(super) $option: $ty,)*
        }
        impl $s {
            $(pub fn $option(&self) -> & $ty {
                &self.$option
            })*
        }
    };
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct CheckerOptionFlags: u8 {
        /// `&x` has type `*T`. Without it the result is the unknown type.
        const ADDRESS_OF_YIELDS_POINTER         = 1 << 0;
        /// `*any` is accepted by every pointer destination.
        const NIL_POINTER                       = 1 << 1;
        /// `<<` and `>>` do not require their operands to be assignable.
        const SHIFT_OPERANDS_EXEMPT             = 1 << 2;
        /// An untyped left operand takes the type of a typed right operand,
        /// and an untyped non-negative integer counts as a shift count.
        const UNTYPED_OPERAND_CONVERSION        = 1 << 3;
    }
}

normalized_option!(
    NormalizedCheckerOptions,
    (unsigned_range, UnsignedRange),
    (flags, CheckerOptionFlags),
);

impl NormalizedCheckerOptions {
    #[inline(always)]
    pub const fn address_of_yields_pointer(&self) -> bool {
        self.flags
            .contains(CheckerOptionFlags::ADDRESS_OF_YIELDS_POINTER)
    }

    #[inline(always)]
    pub const fn nil_pointer(&self) -> bool {
        self.flags.contains(CheckerOptionFlags::NIL_POINTER)
    }

    #[inline(always)]
    pub const fn shift_operands_exempt(&self) -> bool {
        self.flags.contains(CheckerOptionFlags::SHIFT_OPERANDS_EXEMPT)
    }

    #[inline(always)]
    pub const fn untyped_operand_conversion(&self) -> bool {
        self.flags
            .contains(CheckerOptionFlags::UNTYPED_OPERAND_CONVERSION)
    }

    #[inline(always)]
    pub fn exact_unsigned_range(&self) -> bool {
        self.unsigned_range == UnsignedRange::Exact
    }
}

impl Default for NormalizedCheckerOptions {
    fn default() -> Self {
        crate::RawCheckerOptions::default().normalize()
    }
}
