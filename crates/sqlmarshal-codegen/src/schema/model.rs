use super::{Diagnostics, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Table name
    pub(crate) name: String,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let syn::Data::Struct(data) = &ast.data else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "`Model` can only be derived for structs",
            ));
        };

        let syn::Fields::Named(node) = &data.fields else {
            return Err(syn::Error::new_spanned(
                &data.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut diag = Diagnostics::new();

        diag.check(model_attr.populate_from_ast(&ast.attrs));

        for node in node.named.iter() {
            match Field::from_ast(node) {
                Ok(field) => fields.push(field),
                Err(err) => match &node.ident {
                    Some(ident) => diag.push_field(ident, err),
                    None => diag.push(err),
                },
            }
        }

        diag.finish()?;

        let name = match &model_attr.table {
            Some(table) => table.value(),
            None => ast.ident.to_string(),
        };

        Ok(Model {
            name,
            ident: ast.ident.clone(),
            fields,
        })
    }
}
