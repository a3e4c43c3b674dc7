use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the model be nested in another model, becoming a foreign key.
    pub(super) fn expand_column_impl(&self) -> TokenStream {
        let sqlmarshal = &self.sqlmarshal;
        let model_ident = &self.model.ident;

        quote! {
            impl #sqlmarshal::Column for #model_ident {
                fn shape() -> #sqlmarshal::Shape {
                    #sqlmarshal::Shape::Record(<Self as #sqlmarshal::Model>::record_ref())
                }

                fn to_value(&self) -> #sqlmarshal::Value<'_> {
                    #sqlmarshal::Value::Record(self)
                }
            }
        }
    }
}
