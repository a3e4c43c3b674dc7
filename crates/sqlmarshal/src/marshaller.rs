use crate::{dynamic, Column, Model};

use sqlmarshal_core::{schema::Tokenizer, Record, Result, Tokenized};
use sqlmarshal_sql::{Driver, Serializer, Statement};

use std::sync::Arc;

/// Crafts CREATE, INSERT and UPDATE statements for one table.
///
/// The schema is tokenized once on construction and shared by every clone of
/// the marshaller.
#[derive(Debug, Clone)]
pub struct Marshaller {
    schema: Arc<Tokenized>,
}

impl Marshaller {
    /// Marshaller for the model `T`, named after the model.
    pub fn new<T: Model>() -> Result<Marshaller> {
        Ok(Marshaller::from_schema(T::tokenize()?))
    }

    /// Marshaller for the model `T` with the table named `name`.
    pub fn with_name<T: Model>(name: &str) -> Result<Marshaller> {
        let schema = Tokenizer::tokenize(&T::record_ref(), Some(name))?;
        Ok(Marshaller::from_schema(schema))
    }

    /// Marshaller for the type of `value`.
    ///
    /// Fails with an unsupported shape error unless the type is a model.
    pub fn for_value<T: Column>(_value: &T, name: Option<&str>) -> Result<Marshaller> {
        let schema = Tokenizer::tokenize_shape(&T::shape(), name)?;
        Ok(Marshaller::from_schema(schema))
    }

    /// Marshaller for a table described at runtime.
    pub fn from_table(table: &dynamic::Table) -> Result<Marshaller> {
        Ok(Marshaller::from_schema(table.tokenize()?))
    }

    /// Marshaller for a JSON object mapping column names to column
    /// definitions.
    pub fn from_json(value: &serde_json::Value, name: &str) -> Result<Marshaller> {
        let table = dynamic::Table::from_json(name, value)?;
        Marshaller::from_table(&table)
    }

    pub fn from_schema(schema: Tokenized) -> Marshaller {
        Marshaller {
            schema: Arc::new(schema),
        }
    }

    /// Table name
    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn schema(&self) -> &Tokenized {
        &self.schema
    }

    /// `CREATE TABLE` statement, column types rendered by `driver`.
    pub fn create(&self, driver: &dyn Driver) -> Result<String> {
        let stmt = Statement::create_table(&self.schema)?;
        Serializer::new(driver).serialize(&stmt)
    }

    /// `INSERT` statement storing `record`.
    pub fn insert(&self, record: &dyn Record) -> Result<String> {
        let stmt = Statement::insert(&self.schema, record)?;
        Serializer::ansi().serialize(&stmt)
    }

    /// `UPDATE` statement writing every non key column of `record` to the row
    /// with the same primary key.
    pub fn update_primary_key(&self, record: &dyn Record) -> Result<String> {
        let stmt = Statement::update_by_primary_key(&self.schema, record)?;
        Serializer::ansi().serialize(&stmt)
    }
}
