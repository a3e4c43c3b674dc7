use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlmarshal::Flavor;

use std::path::Path;

/// Configuration for sqlmarshal CLI operations
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// SQL dialect used to render column types
    pub dialect: Flavor,

    /// Log filter used when `RUST_LOG` is not set, e.g. `debug` or
    /// `sqlmarshal_sql=trace`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SQL dialect
    pub fn dialect(mut self, dialect: Flavor) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the log filter
    pub fn log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = Some(log_level.into());
        self
    }

    /// Load the configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;

        contents
            .parse()
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

impl std::str::FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse() {
        let config: Config = r#"
            dialect = "postgresql"
            log_level = "debug"
        "#
        .parse()
        .unwrap();

        assert_eq!(
            config,
            Config::new().dialect(Flavor::Postgresql).log_level("debug")
        );
    }

    #[test]
    fn defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dialect, Flavor::Ansi);
    }

    #[test]
    fn unknown_key() {
        assert!("dialects = \"mysql\"".parse::<Config>().is_err());
    }
}
