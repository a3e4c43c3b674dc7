use super::Diagnostics;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Field identifier, used to read the value
    pub(crate) ident: syn::Ident,

    /// Column name, the identifier without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// True if the field is annotated with `#[sql(primary)]`
    pub(crate) primary: bool,

    /// True if the field is annotated with `#[sql(unique)]`
    pub(crate) unique: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut attrs = FieldAttr::default();
        let mut diag = Diagnostics::new();

        for attr in &field.attrs {
            if attr.path().is_ident("sql") {
                diag.check(attrs.populate_from_attr(attr));
            }
        }

        diag.finish()?;

        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name).to_string();

        Ok(Field {
            attrs,
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
        })
    }
}

impl FieldAttr {
    /// Reads the flags of one `#[sql(..)]` attribute. Bare tokens other than
    /// `primary` and `unique` are ignored.
    fn populate_from_attr(&mut self, attr: &syn::Attribute) -> syn::Result<()> {
        let mut diag = Diagnostics::new();

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("primary") {
                if self.primary {
                    diag.push(meta.error("duplicate `primary` flag"));
                }
                self.primary = true;
            } else if meta.path.is_ident("unique") {
                if self.unique {
                    diag.push(meta.error("duplicate `unique` flag"));
                }
                self.unique = true;
            } else if meta.input.peek(syn::Token![=]) || meta.input.peek(syn::token::Paren) {
                return Err(meta.error("expected a bare flag such as `primary` or `unique`"));
            }

            Ok(())
        })?;

        diag.finish()
    }
}
