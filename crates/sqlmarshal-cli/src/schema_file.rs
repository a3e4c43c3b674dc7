use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use sqlmarshal::dynamic::{ColumnDef, Row, Table};

use std::path::Path;

/// Format of a schema file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Format> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => bail!(
                "cannot tell the format of {}: expected a .json or .toml file",
                path.display()
            ),
        }
    }
}

/// Parses a mapping of column name to column definition.
pub fn parse_table(name: &str, contents: &str, format: Format) -> Result<Table> {
    let table = match format {
        Format::Json => {
            let value: serde_json::Value = serde_json::from_str(contents)?;
            Table::from_json(name, &value)?
        }
        Format::Toml => {
            let columns: IndexMap<String, ColumnDef> = toml::from_str(contents)?;
            Table {
                name: name.to_string(),
                columns,
            }
        }
    };

    Ok(table)
}

/// Loads the table definition at `path`. The table is named `name`, or
/// after the file stem when no name is given.
pub fn load_table(path: &Path, name: Option<&str>) -> Result<Table> {
    let format = Format::from_path(path)?;

    let name = match name {
        Some(name) => name.to_string(),
        None => path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("cannot derive a table name from {}", path.display()))?
            .to_string(),
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading schema file {}", path.display()))?;

    parse_table(&name, &contents, format)
        .with_context(|| format!("parsing schema file {}", path.display()))
}

/// Loads a row from a JSON object file.
pub fn load_row(path: &Path) -> Result<Row> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading row file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("parsing row file {}", path.display()))?;

    Ok(Row::from_json(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlmarshal::Kind;

    #[test]
    fn formats() {
        assert_eq!(Format::from_path(Path::new("a/b.json")).unwrap(), Format::Json);
        assert_eq!(Format::from_path(Path::new("b.toml")).unwrap(), Format::Toml);
        assert!(Format::from_path(Path::new("b.yaml")).is_err());
        assert!(Format::from_path(Path::new("schema")).is_err());
    }

    #[test]
    fn json_and_toml_agree() {
        let json = parse_table(
            "X",
            r#"{ "ID": { "type": "small_int", "primary": true }, "Name": { "type": "varchar" } }"#,
            Format::Json,
        )
        .unwrap();

        let toml = parse_table(
            "X",
            r#"
            ID = { type = "small_int", primary = true }
            Name = { type = "varchar" }
            "#,
            Format::Toml,
        )
        .unwrap();

        assert_eq!(json, toml);
        assert_eq!(json.columns["ID"].ty, Some(Kind::SmallInt));
    }
}
