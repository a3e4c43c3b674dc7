extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives the record description, field access and nesting support of a
/// struct with named fields.
///
/// Fields accept `#[sql(primary)]` and `#[sql(unique)]`; the struct accepts
/// `#[sql(table = "name")]`.
#[proc_macro_derive(Model, attributes(sql))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match sqlmarshal_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
