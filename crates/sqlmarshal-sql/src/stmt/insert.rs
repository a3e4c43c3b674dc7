use super::{fields_and_values, FieldsWithValue, Statement};

use sqlmarshal_core::{Error, Record, Result, Tokenized};

/// An `INSERT INTO` statement of a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Target table
    pub table: String,

    /// Columns and their literals, in schema order
    pub values: FieldsWithValue,
}

impl Statement {
    /// Builds the `INSERT` statement storing `record` in the `schema` table.
    pub fn insert(schema: &Tokenized, record: &dyn Record) -> Result<Statement> {
        let values = fields_and_values(schema, record)?;

        if values.is_empty() {
            return Err(Error::empty_statement(
                "INSERT",
                &schema.name,
                "no field has a value",
            ));
        }

        Ok(Insert {
            table: schema.name.clone(),
            values,
        }
        .into())
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
