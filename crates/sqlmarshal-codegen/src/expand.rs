mod column;
mod model;
mod record;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for sqlmarshal types
    sqlmarshal: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impl = self.expand_model_impl();
        let record_impl = self.expand_record_impl();
        let column_impl = self.expand_column_impl();

        wrap_in_const(quote! {
            #model_impl
            #record_impl
            #column_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        sqlmarshal: quote!(_sqlmarshal::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use sqlmarshal as _sqlmarshal;
            #code
        };
    }
}
