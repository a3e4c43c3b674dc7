use super::{fields_and_values, FieldsWithValue, Statement};

use sqlmarshal_core::{Record, Result, Tokenized};

/// An `UPDATE` statement matching a single row by its primary key.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Target table
    pub table: String,

    /// `SET` clause, every non key column with a value
    pub assignments: FieldsWithValue,

    /// `WHERE` clause, the primary key columns
    pub conditions: FieldsWithValue,
}

impl Statement {
    /// Builds the `UPDATE` statement writing `record` back to the row with
    /// the same primary key.
    ///
    /// Either clause may be empty: a table without a primary key has no
    /// conditions and a record holding only key columns has nothing to set.
    pub fn update_by_primary_key(schema: &Tokenized, record: &dyn Record) -> Result<Statement> {
        let mut assignments = fields_and_values(schema, record)?;
        let mut conditions = FieldsWithValue::new();

        for column in schema.primary_key_columns() {
            if let Some(field) = assignments.pop(&column.name) {
                conditions.add(field.name, field.value)?;
            }
        }

        Ok(Update {
            table: schema.name.clone(),
            assignments,
            conditions,
        }
        .into())
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
