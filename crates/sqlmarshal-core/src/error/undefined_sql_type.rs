use super::Error;
use crate::Kind;

/// Error when neither the selected driver nor the ANSI fallback can render a kind.
#[derive(Debug)]
pub(super) struct UndefinedSqlTypeError {
    field: Box<str>,
    kind: Kind,
}

impl std::error::Error for UndefinedSqlTypeError {}

impl core::fmt::Display for UndefinedSqlTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no SQL definition for field `{}` of kind {:?} in the driver or the ANSI fallback",
            self.field, self.kind
        )
    }
}

impl Error {
    pub fn undefined_sql_type(field: impl Into<String>, kind: Kind) -> Error {
        Error::from(super::ErrorKind::UndefinedSqlType(UndefinedSqlTypeError {
            field: field.into().into(),
            kind,
        }))
    }

    /// Returns `true` if this error is an undefined SQL type error.
    pub fn is_undefined_sql_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UndefinedSqlType(_))
    }
}
