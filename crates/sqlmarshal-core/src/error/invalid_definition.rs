use super::Error;

/// Error when a map-shaped table definition is malformed.
///
/// This occurs when:
/// - A column declares neither a `type` nor `references`
/// - A column declares both
/// - A column declares `foreign_key` or `invalid` as its type
#[derive(Debug)]
pub(super) struct InvalidDefinitionError {
    column: Box<str>,
    message: Box<str>,
}

impl std::error::Error for InvalidDefinitionError {}

impl core::fmt::Display for InvalidDefinitionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid definition for column `{}`: {}", self.column, self.message)
    }
}

impl Error {
    pub fn invalid_definition(column: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDefinition(InvalidDefinitionError {
            column: column.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid definition error.
    pub fn is_invalid_definition(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDefinition(_))
    }
}
