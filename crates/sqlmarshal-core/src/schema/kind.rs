use serde::{Deserialize, Serialize};

/// Abstract SQL kind of a column, independent of any dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Invalid,
    ForeignKey,

    // Character strings
    Char,
    Varchar,
    #[serde(alias = "n_char")]
    Nchar,
    #[serde(alias = "n_varchar")]
    Nvarchar,

    // Bit strings
    Bit,
    BitVarying,

    // Numbers
    Int,
    #[serde(alias = "smallint")]
    SmallInt,
    #[serde(alias = "bigint")]
    BigInt,
    Float,
    Real,
    Double,
    Numeric,
    Decimal,
}

impl Kind {
    /// Returns `true` for kinds that a driver can render as a column type.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Kind::Invalid | Kind::ForeignKey)
    }
}
