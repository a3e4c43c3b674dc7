use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlmarshal_core::{
    schema::{Kind, TokenizedField},
    Error, Result, Tokenized,
};

/// A table whose columns are known only at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,

    /// Columns in declaration order
    pub columns: IndexMap<String, ColumnDef>,
}

/// Definition of a single column: either a scalar `type` or a table it
/// `references`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnDef {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<Kind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Box<Table>>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub unique: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            columns: IndexMap::new(),
        }
    }

    /// Appends a column, replacing any column with the same name in place.
    pub fn column(mut self, name: impl Into<String>, def: ColumnDef) -> Table {
        self.columns.insert(name.into(), def);
        self
    }

    /// Reads the columns from a JSON object of column name to definition.
    pub fn from_json(name: impl Into<String>, value: &serde_json::Value) -> Result<Table> {
        let name = name.into();

        let Some(object) = value.as_object() else {
            return Err(Error::unsupported_shape(json_type(value)));
        };

        let mut columns = IndexMap::with_capacity(object.len());
        for (column, def) in object {
            let def = ColumnDef::deserialize(def)
                .map_err(|err| Error::invalid_definition(column, err.to_string()))?;
            columns.insert(column.clone(), def);
        }

        Ok(Table { name, columns })
    }

    pub fn tokenize(&self) -> Result<Tokenized> {
        let mut fields = Vec::with_capacity(self.columns.len());

        for (name, def) in &self.columns {
            let field = match (def.ty, &def.references) {
                (Some(kind), None) if kind.is_scalar() => TokenizedField::scalar(name, kind),
                (Some(kind), None) => {
                    return Err(Error::invalid_definition(
                        name,
                        format!("kind `{kind:?}` cannot be used as a column type"),
                    ))
                }
                (None | Some(Kind::ForeignKey), Some(references)) => {
                    let references = references
                        .tokenize()
                        .map_err(|err| err.context(Error::tokenization(&self.name, name)))?;
                    TokenizedField::foreign_key(name, references)
                }
                (Some(_), Some(_)) => {
                    return Err(Error::invalid_definition(
                        name,
                        "declares both a scalar `type` and `references`",
                    ))
                }
                (None, None) => {
                    return Err(Error::invalid_definition(
                        name,
                        "declares neither `type` nor `references`",
                    ))
                }
            };

            fields.push(field.primary_key(def.primary).unique(def.unique));
        }

        tracing::debug!(table = %self.name, fields = fields.len(), "tokenized dynamic table");

        Ok(Tokenized::new(&self.name, fields))
    }
}

impl ColumnDef {
    pub fn scalar(kind: Kind) -> ColumnDef {
        ColumnDef {
            ty: Some(kind),
            ..ColumnDef::default()
        }
    }

    pub fn references(table: Table) -> ColumnDef {
        ColumnDef {
            references: Some(Box::new(table)),
            ..ColumnDef::default()
        }
    }

    pub fn primary(mut self) -> ColumnDef {
        self.primary = true;
        self
    }

    pub fn unique(mut self) -> ColumnDef {
        self.unique = true;
        self
    }
}

pub(super) fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
