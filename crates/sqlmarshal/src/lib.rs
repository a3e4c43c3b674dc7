mod column;
pub use column::Column;

pub mod dynamic;

mod marshaller;
pub use marshaller::Marshaller;

mod model;
pub use model::Model;

pub use sqlmarshal_core::{schema, Error, Kind, Record, Result, Tokenized, Value};
pub use sqlmarshal_macros::Model;
pub use sqlmarshal_sql::{driver, Ansi, Driver, Flavor, Mysql, Postgresql, Sqlite};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Column, Model};
    pub use sqlmarshal_core::{
        schema::{FieldAttrs, FieldDef, RecordDef, RecordRef, Shape},
        Record, Value,
    };
}
