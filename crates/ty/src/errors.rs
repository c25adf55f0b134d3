use thiserror::Error;

/// Rejected type constructions. These come from malformed declarations and
/// are reported by the declaration phase, not by the checker.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TyError {
    #[error("Integer types of {0} bits are not supported.")]
    UnsupportedIntSize(u32),
    #[error("Floating-point types of {0} bits are not supported.")]
    UnsupportedFltSize(u32),
    #[error("Duplicate field '{0}'.")]
    DuplicateField(String),
    #[error("'{0}' is not a valid number literal.")]
    InvalidNumberLiteral(String),
    #[error("Constant value {0} is not finite.")]
    NonFiniteConstant(f64),
    #[error("Type '{0}' cannot be given a name.")]
    CannotName(String),
}
