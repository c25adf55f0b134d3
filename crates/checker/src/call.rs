use gotc_span::Span;
use gotc_ty::{FnTy, Ty};

use super::TyChecker;
use super::errors;

impl<'cx> TyChecker<'_, 'cx> {
    /// Checks `args` against the parameters of `f` and yields the type of
    /// the call: the first result, or void when there is none.
    ///
    /// A `...any` parameter accepts every remaining argument unchecked.
    #[tracing::instrument(level = tracing::Level::TRACE, skip_all, fields(args = args.len()))]
    pub fn check_call(
        &mut self,
        f: &'cx FnTy<'cx>,
        args: &[&'cx Ty<'cx>],
        span: Span,
    ) -> &'cx Ty<'cx> {
        let params = f.params;
        let mut idx = 0;
        for arg in args {
            let Some(&param) = params.get(idx) else {
                let error = errors::TooManyArgumentsInCall {
                    span,
                    x: params.len(),
                    y: args.len(),
                };
                self.push_error(Box::new(error));
                break;
            };
            if param.kind.is_variadic_any() {
                break;
            }
            self.can_assign(param, *arg, span);
            idx += 1;
        }
        if args.len() < params.len() && !params[idx].kind.is_variadic_any() {
            let error = errors::TooFewArgumentsInCall {
                span,
                x: params.len(),
                y: args.len(),
            };
            self.push_error(Box::new(error));
        }
        f.results.first().copied().unwrap_or_else(|| self.tys.void_ty())
    }

    /// [`TyChecker::check_call`] for a callee whose type is not yet known to
    /// be a function.
    pub fn check_call_expr(
        &mut self,
        callee: &'cx Ty<'cx>,
        args: &[&'cx Ty<'cx>],
        span: Span,
    ) -> &'cx Ty<'cx> {
        if callee.kind.is_unknown() {
            return self.unknown_ty();
        }
        let Some(f) = callee.kind.as_fn() else {
            let error = errors::ValueOfTyIsNotCallable {
                span,
                ty: self.print_ty(callee),
            };
            self.push_error(Box::new(error));
            return self.unknown_ty();
        };
        self.check_call(f, args, span)
    }
}
