use super::Error;

/// Context error added while resolving a referenced record.
///
/// Always carries the nested failure as its cause.
#[derive(Debug)]
pub(super) struct TokenizationError {
    table: Box<str>,
    field: Box<str>,
}

impl std::error::Error for TokenizationError {}

impl core::fmt::Display for TokenizationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "tokenizing `{}.{}`", self.table, self.field)
    }
}

impl Error {
    /// Creates a tokenization context error for `table.field`.
    ///
    /// Use with [`Error::context`] so the nested failure is kept as the cause.
    pub fn tokenization(table: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Tokenization(TokenizationError {
            table: table.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is a tokenization error.
    pub fn is_tokenization(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Tokenization(_))
    }
}
