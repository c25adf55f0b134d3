mod assign;
mod bin_op;
mod call;
mod errors;
mod fold;
mod op;
mod relation;
mod unary_op;

pub use op::{BinOp, UnaryOp};

use gotc_config::NormalizedCheckerOptions;
use gotc_errors::Diag;
use gotc_errors::diag_ext::DiagnosticExt;
use gotc_ty::{Ty, TyArena};

/// Decides type compatibility over types built in a [`TyArena`].
///
/// Every check that fails pushes a diagnostic onto [`TyChecker::diags`] and
/// continues; the caller decides when to drain them.
pub struct TyChecker<'a, 'cx> {
    tys: &'a TyArena<'cx>,
    options: &'a NormalizedCheckerOptions,
    pub diags: Vec<Diag>,
}

impl<'a, 'cx> TyChecker<'a, 'cx> {
    pub fn new(tys: &'a TyArena<'cx>, options: &'a NormalizedCheckerOptions) -> Self {
        Self {
            tys,
            options,
            diags: Vec::with_capacity(16),
        }
    }

    pub fn tys(&self) -> &'a TyArena<'cx> {
        self.tys
    }

    pub fn steal_diags(&mut self) -> Vec<Diag> {
        std::mem::take(&mut self.diags)
    }

    fn push_error(&mut self, error: Box<dyn DiagnosticExt + Send + Sync + 'static>) {
        self.diags.push(Diag::new(error));
    }

    fn print_ty(&self, ty: &Ty<'cx>) -> String {
        self.tys.print_ty(ty)
    }

    fn unknown_ty(&self) -> &'cx Ty<'cx> {
        self.tys.unknown_ty()
    }
}
