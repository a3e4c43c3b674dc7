use super::Driver;

use sqlmarshal_core::Kind;

/// MySQL type names.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mysql;

impl Mysql {
    /// MySQL requires a length on VARCHAR columns. 191 characters keeps an
    /// indexed utf8mb4 column within the 767 byte index prefix limit.
    const VARCHAR_LEN: u32 = 191;
}

impl Driver for Mysql {
    fn define(&self, kind: Kind, name: &str) -> Option<String> {
        let ty = match kind {
            Kind::Varchar => format!("VARCHAR({})", Mysql::VARCHAR_LEN),
            Kind::Nvarchar => format!("NVARCHAR({})", Mysql::VARCHAR_LEN),
            Kind::BitVarying => "VARBINARY(255)".to_string(),
            _ => return None,
        };

        Some(format!("{name} {ty}"))
    }
}
