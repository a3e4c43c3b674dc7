#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

// Statement serializers
mod create_table;
mod insert;
mod update;

use crate::{driver::Ansi, stmt::Statement, Driver};

use sqlmarshal_core::Result;
use tracing::debug;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    /// Renders column types and key constraints. Kinds it does not know are
    /// rendered by the ANSI driver.
    driver: &'a dyn Driver,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(driver: &'a dyn Driver) -> Serializer<'a> {
        Serializer { driver }
    }

    pub fn ansi() -> Serializer<'static> {
        Serializer { driver: &Ansi }
    }

    pub fn driver(&self) -> &'a dyn Driver {
        self.driver
    }

    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };

        match stmt {
            Statement::CreateTable(stmt) => self.create_table(stmt)?.to_sql(&mut fmt),
            Statement::Insert(stmt) => stmt.to_sql(&mut fmt),
            Statement::Update(stmt) => stmt.to_sql(&mut fmt),
        }

        ret.push(';');

        debug!(table = stmt.table(), sql = %ret, "serialized statement");
        Ok(ret)
    }
}
