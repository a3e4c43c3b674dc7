pub mod driver;
pub use driver::{Ansi, Driver, Flavor, Mysql, Postgresql, Sqlite};

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::{FieldsWithValue, Statement};
