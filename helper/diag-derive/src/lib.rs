use quote::quote;
use syn::{Attribute, DeriveInput, parse_macro_input};

fn find_field_satisfy_attr(
    input: &DeriveInput,
    attr_f: impl Fn(&Attribute) -> bool,
) -> Option<syn::Ident> {
    if let syn::Data::Struct(data_struct) = &input.data {
        if let syn::Fields::Named(fields_named) = &data_struct.fields {
            for field in fields_named.named.iter() {
                for attr in &field.attrs {
                    if attr_f(attr) {
                        if let Some(ident) = &field.ident {
                            return Some(ident.clone());
                        }
                    }
                }
            }
        }
    }
    None
}

enum DiagnosticExt {
    Struct {
        name: syn::Ident,
        primary_field_name: syn::Ident,
    },
    Enum {
        name: syn::Ident,
        variant_names: Vec<syn::Ident>,
    },
}

impl DiagnosticExt {
    fn from_derive_input(input: DeriveInput) -> syn::Result<Self> {
        match input.data {
            syn::Data::Struct(_) => {
                let primary_field_name = find_field_satisfy_attr(&input, |attr| {
                    attr.meta.require_list().is_ok_and(|list| {
                        list.path.is_ident("label") && list.tokens.to_string() == "primary"
                    })
                })
                .ok_or_else(|| {
                    syn::Error::new_spanned(&input.ident, "`#[label(primary)]` not found.")
                })?;
                Ok(Self::Struct {
                    name: input.ident,
                    primary_field_name,
                })
            }
            syn::Data::Enum(syn::DataEnum { variants, .. }) => {
                let variant_names = variants
                    .iter()
                    .map(|variant| variant.ident.clone())
                    .collect();
                Ok(Self::Enum {
                    name: input.ident,
                    variant_names,
                })
            }
            syn::Data::Union(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "`DiagnosticExt` cannot be derived for unions.",
            )),
        }
    }

    fn r#gen(self) -> proc_macro2::TokenStream {
        match self {
            Self::Struct {
                name,
                primary_field_name,
            } => {
                quote! {
                    impl diag_ext::DiagnosticExt for #name {
                        fn module_id(&self) -> gotc_span::ModuleID {
                            self.#primary_field_name.module
                        }

                        fn primary_span(&self) -> gotc_span::Span {
                            self.#primary_field_name
                        }
                    }
                }
            }
            Self::Enum {
                name,
                variant_names,
            } => {
                let module_id_arms = variant_names.iter().map(|name| {
                    quote! {
                        Self::#name(x) => x.module_id(),
                    }
                });
                let primary_span_arms = variant_names.iter().map(|name| {
                    quote! {
                        Self::#name(x) => x.primary_span(),
                    }
                });

                quote! {
                    impl diag_ext::DiagnosticExt for #name {
                        fn module_id(&self) -> gotc_span::ModuleID {
                            match self {
                                #(#module_id_arms)*
                            }
                        }
                        fn primary_span(&self) -> gotc_span::Span {
                            match self {
                                #(#primary_span_arms)*
                            }
                        }
                    }
                }
            }
        }
    }
}

#[proc_macro_derive(DiagnosticExt, attributes(label))]
pub fn derive_diagnostic_ext(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let stream = match DiagnosticExt::from_derive_input(input) {
        Ok(ext) => ext.r#gen(),
        Err(err) => err.to_compile_error(),
    };

    proc_macro::TokenStream::from(stream)
}
