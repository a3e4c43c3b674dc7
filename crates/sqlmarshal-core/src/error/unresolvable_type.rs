use super::Error;

/// Error when a field's declared type has no SQL kind.
///
/// This occurs for container shapes such as `Vec<T>`, `Option<T>` or maps,
/// which have no single-column representation.
#[derive(Debug)]
pub(super) struct UnresolvableTypeError {
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnresolvableTypeError {}

impl core::fmt::Display for UnresolvableTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot resolve an SQL kind for field `{}` of type `{}`",
            self.field, self.ty
        )
    }
}

impl Error {
    /// Creates an unresolvable type error for `field`, whose type is described by `ty`.
    pub fn unresolvable_type(field: impl Into<String>, ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvableType(UnresolvableTypeError {
            field: field.into().into(),
            ty: ty.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolvable type error.
    pub fn is_unresolvable_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvableType(_))
    }
}
