use gotc_errors::DiagnosticExt;
use gotc_errors::diag_ext;
use gotc_errors::miette;
use gotc_errors::miette::Diagnostic;
use gotc_errors::thiserror;
use gotc_errors::thiserror::Error;
use gotc_span::Span;

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Type '{src}' is incompatible with '{dest}'.")]
pub(super) struct TypeIsIncompatibleWithType {
    #[label(primary)]
    pub span: Span,
    pub src: String,
    pub dest: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Untyped number ({value}) overflows '{ty}'.")]
pub(super) struct UntypedNumberOverflowsTy {
    #[label(primary)]
    pub span: Span,
    pub value: String,
    pub ty: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Untyped number ({value}) is truncated when assigned to '{ty}'.")]
pub(super) struct UntypedNumberTruncatedToInteger {
    #[label(primary)]
    pub span: Span,
    pub value: String,
    pub ty: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Assignment mismatch: {x} variables but {y} values.")]
pub(super) struct AssignmentMismatch {
    #[label(primary)]
    pub span: Span,
    pub x: usize,
    pub y: usize,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Left hand side ('{lhs}') cannot be assigned right hand side ('{rhs}').")]
pub(super) struct MismatchedOperandTypes {
    #[label(primary)]
    pub span: Span,
    pub lhs: String,
    pub rhs: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Operator '{op}' cannot be used on type '{ty}'.")]
pub(super) struct OperatorCannotBeUsedOnType {
    #[label(primary)]
    pub span: Span,
    pub op: String,
    pub ty: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Operator '{op}' cannot be used on types '{ty1}' and '{ty2}'.")]
pub(super) struct OperatorCannotBeUsedOnTypes {
    #[label(primary)]
    pub span: Span,
    pub op: String,
    pub ty1: String,
    pub ty2: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Too many arguments in function call: expected {x}, but got {y}.")]
pub(super) struct TooManyArgumentsInCall {
    #[label(primary)]
    pub span: Span,
    pub x: usize,
    pub y: usize,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Too few arguments in function call: expected {x}, but got {y}.")]
pub(super) struct TooFewArgumentsInCall {
    #[label(primary)]
    pub span: Span,
    pub x: usize,
    pub y: usize,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Value of type '{ty}' is not callable.")]
pub(super) struct ValueOfTyIsNotCallable {
    #[label(primary)]
    pub span: Span,
    pub ty: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Constant '{expr}' overflows.")]
pub(super) struct ConstantOverflow {
    #[label(primary)]
    pub span: Span,
    pub expr: String,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Division by zero.")]
pub(super) struct DivisionByZero {
    #[label(primary)]
    pub span: Span,
}

#[derive(Error, Diagnostic, DiagnosticExt, Debug)]
#[error("Invalid shift count '{count}'.")]
pub(super) struct InvalidShiftCount {
    #[label(primary)]
    pub span: Span,
    pub count: String,
}
