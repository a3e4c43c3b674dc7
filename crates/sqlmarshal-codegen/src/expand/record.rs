use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Reads field values by column name.
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let sqlmarshal = &self.sqlmarshal;
        let model_ident = &self.model.ident;

        let arms = self.model.fields.iter().map(|field| {
            let name = &field.name;
            let ident = &field.ident;

            quote! {
                #name => Some(#sqlmarshal::Column::to_value(&self.#ident)),
            }
        });

        quote! {
            impl #sqlmarshal::Record for #model_ident {
                fn value(&self, field: &str) -> Option<#sqlmarshal::Value<'_>> {
                    match field {
                        #( #arms )*
                        _ => None,
                    }
                }
            }
        }
    }
}
