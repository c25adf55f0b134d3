/// Declares a `u32` newtype id that is handed out sequentially by its owner.
///
/// ```
/// gotc_utils::index!(NodeID);
///
/// let root = NodeID::root();
/// assert_eq!(root.next().as_u32(), 1);
/// ```
#[macro_export]
macro_rules! index {
    ($name: ident) => {
        #[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(u32);
        impl $name {
            pub const fn root() -> $name {
                $name(0)
            }
            pub const fn new(id: u32) -> $name {
                $name(id)
            }
            pub const fn next(&self) -> $name {
                $name(self.0 + 1)
            }
            pub const fn as_u32(&self) -> u32 {
                self.0
            }
            pub const fn as_usize(&self) -> usize {
                self.0 as usize
            }
        }
        impl $crate::nohash_hasher::IsEnabled for $name {}
    };
}
