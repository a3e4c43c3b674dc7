use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let sqlmarshal = &self.sqlmarshal;
        let model_ident = &self.model.ident;
        let table_name = &self.model.name;
        let field_defs = self.expand_field_defs();

        quote! {
            impl #sqlmarshal::Model for #model_ident {
                const NAME: &'static str = #table_name;

                fn definition() -> #sqlmarshal::RecordDef {
                    #sqlmarshal::RecordDef {
                        name: <Self as #sqlmarshal::Model>::NAME,
                        fields: vec![ #( #field_defs, )* ],
                    }
                }
            }
        }
    }

    fn expand_field_defs(&self) -> Vec<TokenStream> {
        let sqlmarshal = &self.sqlmarshal;

        self.model
            .fields
            .iter()
            .map(|field| {
                let name = &field.name;
                let ty = &field.ty;
                let primary = field.attrs.primary;
                let unique = field.attrs.unique;

                quote! {
                    #sqlmarshal::FieldDef {
                        name: #name,
                        shape: <#ty as #sqlmarshal::Column>::shape(),
                        attrs: #sqlmarshal::FieldAttrs {
                            primary: #primary,
                            unique: #unique,
                        },
                    }
                }
            })
            .collect()
    }
}
