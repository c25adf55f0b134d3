mod normalized;
mod options;
mod raw;

pub use normalized::{CheckerOptionFlags, NormalizedCheckerOptions};
pub use options::{RawUnsignedRange, UnsignedRange};
pub use raw::RawCheckerOptions;
