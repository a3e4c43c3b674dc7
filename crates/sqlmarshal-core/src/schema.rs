mod definition;
pub use definition::{FieldDefinition, FkDefinition, SURROGATE_ID};

mod kind;
pub use kind::Kind;

mod resolve;
pub use resolve::resolve;

mod shape;
pub use shape::{FieldAttrs, FieldDef, RecordDef, RecordRef, Shape};

mod tokenize;
pub use tokenize::Tokenizer;

mod tokenized;
pub use tokenized::{FieldTy, Tokenized, TokenizedField};
