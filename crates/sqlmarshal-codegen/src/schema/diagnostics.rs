use std::fmt;

/// Errors found while reading a model and its `#[sql(..)]` attributes.
///
/// Every error is kept so the compiler reports all of them at once, each at
/// the span of the offending tokens.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    errors: Vec<syn::Error>,
}

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    /// Records every message of `err` prefixed with the field it belongs to.
    pub(crate) fn push_field(&mut self, field: &impl fmt::Display, err: syn::Error) {
        for err in err {
            let message = format!("field `{field}`: {err}");
            self.errors.push(syn::Error::new(err.span(), message));
        }
    }

    /// Records the error of `res`, if any, and hands back its value.
    pub(crate) fn check<T>(&mut self, res: syn::Result<T>) -> Option<T> {
        res.map_err(|err| self.push(err)).ok()
    }

    /// Fails with every recorded error combined into one.
    pub(crate) fn finish(self) -> syn::Result<()> {
        match self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        }) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proc_macro2::Span;

    #[test]
    fn empty_is_ok() {
        assert!(Diagnostics::new().finish().is_ok());
    }

    #[test]
    fn field_errors_are_prefixed() {
        let mut diag = Diagnostics::new();
        diag.push(syn::Error::new(Span::call_site(), "bad table"));

        let mut err = syn::Error::new(Span::call_site(), "first");
        err.combine(syn::Error::new(Span::call_site(), "second"));
        diag.push_field(&"id", err);

        let messages: Vec<_> = diag
            .finish()
            .unwrap_err()
            .into_iter()
            .map(|err| err.to_string())
            .collect();
        assert_eq!(
            messages,
            ["bad table", "field `id`: first", "field `id`: second"]
        );
    }

    #[test]
    fn check_keeps_values() {
        let mut diag = Diagnostics::new();

        assert_eq!(diag.check(Ok::<_, syn::Error>(1)), Some(1));
        assert_eq!(
            diag.check(Err::<i32, _>(syn::Error::new(Span::call_site(), "nope"))),
            None
        );
        assert_eq!(diag.finish().unwrap_err().to_string(), "nope");
    }
}
