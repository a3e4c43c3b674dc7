use super::Driver;

use sqlmarshal_core::Kind;

/// SQLite type names.
///
/// Only the storage classes SQLite has affinities for are spelled out; the
/// remaining kinds use the ANSI names, which SQLite accepts anyway.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sqlite;

impl Driver for Sqlite {
    fn define(&self, kind: Kind, name: &str) -> Option<String> {
        let ty = match kind {
            Kind::Int | Kind::SmallInt | Kind::BigInt => "INTEGER",
            Kind::Float | Kind::Real | Kind::Double => "REAL",
            Kind::Char | Kind::Varchar | Kind::Nchar | Kind::Nvarchar => "TEXT",
            _ => return None,
        };

        Some(format!("{name} {ty}"))
    }
}
