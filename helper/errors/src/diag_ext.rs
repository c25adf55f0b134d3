use gotc_span::{ModuleID, Span};

pub trait DiagnosticExt: miette::Diagnostic {
    fn module_id(&self) -> ModuleID;
    fn primary_span(&self) -> Span;
}
