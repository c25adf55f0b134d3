use gotc_checker::TyChecker;
use gotc_span::{ModuleID, Span};

pub fn span() -> Span {
    gotc_tracing::init_tracing();
    Span::new(0, 1, ModuleID::DEFAULT)
}

pub fn messages(checker: &mut TyChecker<'_, '_>) -> Vec<String> {
    checker
        .steal_diags()
        .iter()
        .map(|diag| diag.message())
        .collect()
}
