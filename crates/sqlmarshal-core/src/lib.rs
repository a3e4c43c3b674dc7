mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{Kind, Tokenized};

pub mod stmt;
pub use stmt::{Record, Value};

/// A Result type alias that uses sqlmarshal's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
