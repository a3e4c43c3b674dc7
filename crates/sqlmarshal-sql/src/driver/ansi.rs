use super::Driver;

use sqlmarshal_core::Kind;

/// ANSI SQL types. Used directly or as the fallback of every other driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ansi;

impl Ansi {
    fn type_name(kind: Kind) -> Option<&'static str> {
        let ty = match kind {
            Kind::Char => "CHAR",
            Kind::Varchar => "VARCHAR",
            Kind::Nchar => "NCHAR",
            Kind::Nvarchar => "NVARCHAR",
            Kind::Bit => "BIT",
            Kind::BitVarying => "BIT VARYING",
            Kind::Int => "INT",
            Kind::SmallInt => "SMALLINT",
            Kind::BigInt => "BIGINT",
            Kind::Float => "FLOAT",
            Kind::Real => "REAL",
            Kind::Double => "DOUBLE",
            Kind::Numeric => "NUMERIC",
            Kind::Decimal => "DECIMAL",
            Kind::ForeignKey | Kind::Invalid => return None,
        };

        Some(ty)
    }
}

impl Driver for Ansi {
    // TODO: support sizes, e.g. `VARCHAR(255)`
    fn define(&self, kind: Kind, name: &str) -> Option<String> {
        Ansi::type_name(kind).map(|ty| format!("{name} {ty}"))
    }
}
