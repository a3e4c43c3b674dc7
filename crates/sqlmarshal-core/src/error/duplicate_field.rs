use super::Error;

#[derive(Debug)]
pub(super) struct DuplicateFieldError {
    name: Box<str>,
}

impl std::error::Error for DuplicateFieldError {}

impl core::fmt::Display for DuplicateFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "field `{}` already present", self.name)
    }
}

impl Error {
    /// Creates a duplicate field error.
    ///
    /// Raised when two columns of one statement end up with the same name,
    /// e.g. a declared field colliding with a synthesized foreign-key column.
    pub fn duplicate_field(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateField(DuplicateFieldError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate field error.
    pub fn is_duplicate_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateField(_))
    }
}
