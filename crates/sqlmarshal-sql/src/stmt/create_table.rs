use super::Statement;

use sqlmarshal_core::{
    schema::{FieldDefinition, FkDefinition},
    Error, Result, Tokenized,
};

/// A `CREATE TABLE` statement over fully expanded columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, foreign key columns already synthesized
    pub columns: Vec<FieldDefinition>,

    /// One constraint per foreign key field
    pub foreign_keys: Vec<FkDefinition>,

    /// Primary key column names
    pub primary_key: Vec<String>,
}

impl Statement {
    /// Builds the `CREATE TABLE` statement for `schema`.
    pub fn create_table(schema: &Tokenized) -> Result<Statement> {
        let (columns, foreign_keys, primary_key) = schema.definitions();

        if columns.is_empty() {
            return Err(Error::empty_statement("CREATE", &schema.name, "no columns"));
        }

        Ok(CreateTable {
            name: schema.name.clone(),
            columns,
            foreign_keys,
            primary_key,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Statement::CreateTable(value)
    }
}
