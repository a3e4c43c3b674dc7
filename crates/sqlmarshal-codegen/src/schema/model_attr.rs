use super::Diagnostics;

#[derive(Debug, Default)]
pub(crate) struct ModelAttr {
    /// Optional table name overriding the struct name
    pub(crate) table: Option<syn::LitStr>,
}

impl ModelAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut diag = Diagnostics::new();

        for attr in attrs {
            if !attr.path().is_ident("sql") {
                continue;
            }

            let res = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    if self.table.is_some() {
                        return Err(meta.error("duplicate `table` attribute"));
                    }

                    let lit: syn::LitStr = meta.value()?.parse()?;

                    if lit.value().is_empty() {
                        return Err(syn::Error::new_spanned(&lit, "table name must not be empty"));
                    }

                    self.table = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("expected `table = \"table_name\"`"))
                }
            });

            diag.check(res);
        }

        diag.finish()
    }
}
