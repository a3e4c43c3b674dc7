mod cyclic_reference;
mod duplicate_field;
mod empty_statement;
mod expected_record;
mod invalid_definition;
mod mismatched_count;
mod tokenization;
mod undefined_sql_type;
mod unresolvable_type;
mod unresolvable_value;
mod unsupported_shape;

use cyclic_reference::CyclicReferenceError;
use duplicate_field::DuplicateFieldError;
use empty_statement::EmptyStatementError;
use expected_record::ExpectedRecordError;
use invalid_definition::InvalidDefinitionError;
use mismatched_count::MismatchedFieldValueCountError;
use std::sync::Arc;
use tokenization::TokenizationError;
use undefined_sql_type::UndefinedSqlTypeError;
use unresolvable_type::UnresolvableTypeError;
use unresolvable_value::UnresolvableValueError;
use unsupported_shape::UnsupportedShapeError;

/// An error that can occur while building a schema or crafting a statement.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }
        let inner = err.inner.as_mut().unwrap();
        assert!(
            inner.cause.is_none(),
            "consequent error must not already have a cause"
        );
        Arc::get_mut(inner).unwrap().cause = Some(self);
        err
    }

    /// Returns the innermost error of the context chain.
    pub fn root(&self) -> &Error {
        self.chain().last().unwrap_or(self)
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    UnresolvableType(UnresolvableTypeError),
    ExpectedRecord(ExpectedRecordError),
    Tokenization(TokenizationError),
    CyclicReference(CyclicReferenceError),
    UndefinedSqlType(UndefinedSqlTypeError),
    DuplicateField(DuplicateFieldError),
    EmptyStatement(EmptyStatementError),
    MismatchedFieldValueCount(MismatchedFieldValueCountError),
    UnsupportedShape(UnsupportedShapeError),
    UnresolvableValue(UnresolvableValueError),
    InvalidDefinition(InvalidDefinitionError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            UnresolvableType(err) => core::fmt::Display::fmt(err, f),
            ExpectedRecord(err) => core::fmt::Display::fmt(err, f),
            Tokenization(err) => core::fmt::Display::fmt(err, f),
            CyclicReference(err) => core::fmt::Display::fmt(err, f),
            UndefinedSqlType(err) => core::fmt::Display::fmt(err, f),
            DuplicateField(err) => core::fmt::Display::fmt(err, f),
            EmptyStatement(err) => core::fmt::Display::fmt(err, f),
            MismatchedFieldValueCount(err) => core::fmt::Display::fmt(err, f),
            UnsupportedShape(err) => core::fmt::Display::fmt(err, f),
            UnresolvableValue(err) => core::fmt::Display::fmt(err, f),
            InvalidDefinition(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown sqlmarshal error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
