pub mod diag_ext;

pub use gotc_diag_derive::DiagnosticExt;
use gotc_span::Span;
pub use miette;
pub use thiserror;

#[derive(Debug)]
pub struct Diag {
    pub inner: Box<dyn diag_ext::DiagnosticExt + Send + Sync + 'static>,
}

impl Diag {
    pub fn new(inner: Box<dyn diag_ext::DiagnosticExt + Send + Sync + 'static>) -> Self {
        Self { inner }
    }

    /// The one-line message, without source context.
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    pub fn span(&self) -> Span {
        self.inner.primary_span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag_ext;
    use crate::diag_ext::DiagnosticExt as _;
    use gotc_span::ModuleID;
    use miette::Diagnostic;
    use thiserror::Error;

    #[derive(Error, Diagnostic, DiagnosticExt, Debug)]
    #[error("Type '{ty1}' is incompatible with '{ty2}'.")]
    struct Incompatible {
        #[label(primary)]
        span: Span,
        ty1: String,
        ty2: String,
    }

    #[derive(Error, Diagnostic, DiagnosticExt, Debug)]
    enum Either {
        #[error(transparent)]
        #[diagnostic(transparent)]
        Incompatible(#[from] Incompatible),
    }

    fn incompatible(span: Span) -> Incompatible {
        Incompatible {
            span,
            ty1: "string".to_string(),
            ty2: "int8".to_string(),
        }
    }

    #[test]
    fn message_is_the_display_text() {
        let diag = Diag::new(Box::new(incompatible(Span::new(13, 16, ModuleID::root()))));
        assert_eq!(diag.message(), "Type 'string' is incompatible with 'int8'.");
    }

    #[test]
    fn span_is_the_primary_label() {
        let span = Span::new(13, 16, ModuleID::root().next());
        let diag = Diag::new(Box::new(incompatible(span)));
        assert_eq!(diag.span(), span);
        assert_eq!(diag.inner.module_id(), span.module);
        let labels: Vec<_> = diag.inner.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 13);
        assert_eq!(labels[0].len(), 3);
    }

    #[test]
    fn enum_forwards_to_its_variant() {
        let span = Span::new(2, 5, ModuleID::root());
        let diag = Diag::new(Box::new(Either::from(incompatible(span))));
        assert_eq!(diag.span(), span);
        assert_eq!(diag.message(), "Type 'string' is incompatible with 'int8'.");
    }
}
