use super::Error;

/// Error when a statement would be rendered without any column.
#[derive(Debug)]
pub(super) struct EmptyStatementError {
    statement: &'static str,
    table: Box<str>,
    reason: &'static str,
}

impl std::error::Error for EmptyStatementError {}

impl core::fmt::Display for EmptyStatementError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{} statement for table `{}` would be empty: {}",
            self.statement, self.table, self.reason
        )
    }
}

impl Error {
    /// Creates an empty statement error.
    ///
    /// `statement` is the SQL verb (`CREATE`, `INSERT`), `reason`
    /// says which part of the statement had nothing in it.
    pub fn empty_statement(
        statement: &'static str,
        table: impl Into<String>,
        reason: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::EmptyStatement(EmptyStatementError {
            statement,
            table: table.into().into(),
            reason,
        }))
    }

    /// Returns `true` if this error is an empty statement error.
    pub fn is_empty_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::EmptyStatement(_))
    }
}
