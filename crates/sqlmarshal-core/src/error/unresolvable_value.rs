use super::Error;

/// Error when a referenced record has no literal value for one of its
/// primary-key columns, so the foreign key cannot be filled in.
#[derive(Debug)]
pub(super) struct UnresolvableValueError {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for UnresolvableValueError {}

impl core::fmt::Display for UnresolvableValueError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot determine primary key value `{}` of `{}`",
            self.column, self.table
        )
    }
}

impl Error {
    pub fn unresolvable_value(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvableValue(UnresolvableValueError {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolvable value error.
    pub fn is_unresolvable_value(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvableValue(_))
    }
}
