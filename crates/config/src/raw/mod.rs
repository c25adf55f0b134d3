use super::RawUnsignedRange;
use super::normalized::CheckerOptionFlags;

macro_rules! with_option {
    ($s: ident, $(($option: ident, $ty: ty)),* $(,)?) => {
        #[derive(Debug, Default, Clone, serde::Deserialize, serde::Serialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct $s {
            $(pub(super) $option: Option<$ty>,)*
        }
        impl $s {
            paste::paste! {
                $(
                    pub fn [<with_ $option>](mut self, $option: $ty) -> Self {
                        self.$option = Some($option);
                        self
                    }
                    pub fn [<with_ $option _if_none>](mut self, $option: $ty) -> Self {
                        if self.$option.is_none() {
                            self.$option = Some($option);
                        }
                        self
                    }
                )*
            }
        }
    };
}

with_option!(
    RawCheckerOptions,
    (unsigned_range, RawUnsignedRange),
    (address_of_yields_pointer, bool),
    (nil_pointer, bool),
    (shift_operands_exempt, bool),
    (untyped_operand_conversion, bool),
);

impl RawCheckerOptions {
    pub fn normalize(self) -> super::NormalizedCheckerOptions {
        let unsigned_range = self.unsigned_range.unwrap_or_default().into();
        let mut flags = CheckerOptionFlags::empty();
        flags.set(
            CheckerOptionFlags::ADDRESS_OF_YIELDS_POINTER,
            self.address_of_yields_pointer.unwrap_or(true),
        );
        flags.set(
            CheckerOptionFlags::NIL_POINTER,
            self.nil_pointer.unwrap_or(true),
        );
        flags.set(
            CheckerOptionFlags::SHIFT_OPERANDS_EXEMPT,
            self.shift_operands_exempt.unwrap_or(true),
        );
        flags.set(
            CheckerOptionFlags::UNTYPED_OPERAND_CONVERSION,
            self.untyped_operand_conversion.unwrap_or(false),
        );
        super::NormalizedCheckerOptions {
            unsigned_range,
            flags,
        }
    }
}
