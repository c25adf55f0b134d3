use crate::{Ty, TyArena, TyKind};

impl<'cx> TyArena<'cx> {
    /// Renders `ty` the way it is spelled in source. Named types print as
    /// their name.
    pub fn print_ty(&self, ty: &Ty<'cx>) -> String {
        if let Some(printed) = self.printed.borrow().get(&ty.id) {
            return printed.clone();
        }
        let printed = self.print_ty_uncached(ty);
        self.printed.borrow_mut().insert(ty.id, printed.clone());
        printed
    }

    fn print_tys(&self, tys: &[&'cx Ty<'cx>]) -> String {
        tys.iter()
            .map(|ty| self.print_ty(ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn print_ty_uncached(&self, ty: &Ty<'cx>) -> String {
        if let Some(name) = ty.name {
            return self.atom_str(name);
        }
        match ty.kind {
            TyKind::Bool => "bool".to_string(),
            TyKind::String => "string".to_string(),
            TyKind::Int(i) => format!("int{}", i.size),
            TyKind::Uint(i) => format!("uint{}", i.size),
            TyKind::Flt(f) => format!("float{}", f.size),
            TyKind::Pointer(p) => format!("*{}", self.print_ty(p.base)),
            TyKind::Array(a) => format!("[{}]{}", a.size, self.print_ty(a.element)),
            TyKind::Slice(s) => format!("[]{}", self.print_ty(s.element)),
            TyKind::Struct(s) => {
                if s.fields.is_empty() {
                    return "struct {}".to_string();
                }
                let fields = s
                    .fields
                    .values()
                    .map(|f| format!("{} {}", self.atom_str(f.name), self.print_ty(f.ty)))
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("struct {{ {fields} }}")
            }
            TyKind::Fn(f) => {
                let params = self.print_tys(f.params);
                match f.results {
                    [] => format!("func({params})"),
                    [result] => format!("func({params}) {}", self.print_ty(result)),
                    results => format!("func({params}) ({})", self.print_tys(results)),
                }
            }
            TyKind::TyList(list) => format!("({})", self.print_tys(list.tys)),
            TyKind::UntypedNumber(n) => format!("untyped number {}", n.text),
            TyKind::Unknown => "unknown".to_string(),
            TyKind::Any => "any".to_string(),
            TyKind::Void => "void".to_string(),
            TyKind::VariadicAny => "...any".to_string(),
        }
    }
}
