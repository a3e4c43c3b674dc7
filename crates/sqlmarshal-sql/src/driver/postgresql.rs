use super::Driver;

use sqlmarshal_core::Kind;

#[derive(Debug, Default, Clone, Copy)]
pub struct Postgresql;

impl Driver for Postgresql {
    fn define(&self, kind: Kind, name: &str) -> Option<String> {
        let ty = match kind {
            Kind::Int => "INTEGER",
            Kind::Float => "REAL",
            Kind::Double => "DOUBLE PRECISION",
            // PostgreSQL has no national character types
            Kind::Nchar => "CHAR",
            Kind::Nvarchar => "VARCHAR",
            Kind::BitVarying => "VARBIT",
            _ => return None,
        };

        Some(format!("{name} {ty}"))
    }
}
