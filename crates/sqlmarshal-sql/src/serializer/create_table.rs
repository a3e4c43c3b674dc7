use super::{Comma, Formatter, Serializer, ToSql};

use crate::{driver, stmt::CreateTable};

use sqlmarshal_core::Result;

/// A `CREATE TABLE` statement with every definition rendered by the driver.
pub(super) struct TableDefinition<'a> {
    name: &'a str,

    /// Column definitions, then foreign keys, then the primary key
    definitions: Vec<String>,
}

impl Serializer<'_> {
    pub(super) fn create_table<'s>(&self, stmt: &'s CreateTable) -> Result<TableDefinition<'s>> {
        let mut definitions = Vec::with_capacity(stmt.columns.len() + stmt.foreign_keys.len() + 1);

        for column in &stmt.columns {
            definitions.push(driver::define(self.driver, column.kind, &column.name)?);
        }

        for fk in &stmt.foreign_keys {
            definitions.push(
                self.driver
                    .define_fk(&fk.remote_table, &fk.names, &fk.remote_names),
            );
        }

        definitions.extend(self.driver.define_pk(&stmt.primary_key));

        Ok(TableDefinition {
            name: &stmt.name,
            definitions,
        })
    }
}

impl ToSql for TableDefinition<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let definitions = Comma(self.definitions);

        fmt!(f, "CREATE TABLE " self.name " (" definitions ")");
    }
}
