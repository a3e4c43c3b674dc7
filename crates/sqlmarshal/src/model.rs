use sqlmarshal_core::{
    schema::{RecordDef, RecordRef, Tokenizer},
    Record, Result, Tokenized,
};

use std::any::TypeId;

/// A struct mapped to a table, usually through `#[derive(Model)]`.
pub trait Model: Record + Sized + 'static {
    /// Table name, the struct name unless overridden with
    /// `#[sql(table = "..")]`.
    const NAME: &'static str;

    /// Describes the fields of the model in declaration order.
    fn definition() -> RecordDef;

    fn record_ref() -> RecordRef {
        RecordRef::new(TypeId::of::<Self>(), Self::NAME, Self::definition)
    }

    /// Builds the tokenized schema of the model and of every model it
    /// references.
    fn tokenize() -> Result<Tokenized> {
        Tokenizer::tokenize(&Self::record_ref(), None)
    }
}
