use super::{Ansi, Driver, Mysql, Postgresql, Sqlite};

use serde::{Deserialize, Serialize};

/// Selects one of the built-in drivers by name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    #[default]
    Ansi,
    Sqlite,
    Postgresql,
    Mysql,
}

impl Flavor {
    pub fn driver(self) -> &'static dyn Driver {
        match self {
            Flavor::Ansi => &Ansi,
            Flavor::Sqlite => &Sqlite,
            Flavor::Postgresql => &Postgresql,
            Flavor::Mysql => &Mysql,
        }
    }
}

impl std::str::FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ansi" => Ok(Flavor::Ansi),
            "sqlite" => Ok(Flavor::Sqlite),
            "postgresql" | "postgres" => Ok(Flavor::Postgresql),
            "mysql" => Ok(Flavor::Mysql),
            other => Err(format!("unknown SQL flavor `{other}`")),
        }
    }
}
