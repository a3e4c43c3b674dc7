use super::Error;

/// Error when a foreign-key field does not point at a record.
///
/// Only one level of indirection is followed, so `Box<Box<T>>` lands here
/// as well as `Box<i32>`.
#[derive(Debug)]
pub(super) struct ExpectedRecordError {
    field: Box<str>,
    found: Box<str>,
}

impl std::error::Error for ExpectedRecordError {}

impl core::fmt::Display for ExpectedRecordError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}` expected a record, got `{}`",
            self.field, self.found
        )
    }
}

impl Error {
    pub fn expected_record(field: impl Into<String>, found: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ExpectedRecord(ExpectedRecordError {
            field: field.into().into(),
            found: found.into().into(),
        }))
    }

    /// Returns `true` if this error is an expected record error.
    pub fn is_expected_record(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExpectedRecord(_))
    }
}
