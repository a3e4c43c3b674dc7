use super::table::json_type;

use indexmap::IndexMap;
use sqlmarshal_core::{Error, Record, Result, Value};

/// Column values of a single row, for tables described at runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: IndexMap<String, Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),

    /// The row of a referenced table
    Row(Row),

    Null,

    /// A value with no SQL literal, such as a JSON array
    Unsupported,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Sets `column`, returning the previous cell.
    pub fn insert(&mut self, column: impl Into<String>, cell: impl Into<Cell>) -> Option<Cell> {
        self.cells.insert(column.into(), cell.into())
    }

    /// Builder form of [`insert`](Row::insert).
    pub fn with(mut self, column: impl Into<String>, cell: impl Into<Cell>) -> Row {
        self.insert(column, cell);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells.get(column)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reads a row from a JSON object. Nested objects become nested rows.
    pub fn from_json(value: &serde_json::Value) -> Result<Row> {
        let Some(object) = value.as_object() else {
            return Err(Error::unsupported_shape(json_type(value)));
        };

        let mut row = Row::new();
        for (column, value) in object {
            row.insert(column, Cell::from_json(value)?);
        }

        Ok(row)
    }
}

impl Cell {
    fn from_json(value: &serde_json::Value) -> Result<Cell> {
        use serde_json::Value as Json;

        let cell = match value {
            Json::Null => Cell::Null,
            Json::Bool(v) => Cell::Bool(*v),
            Json::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Cell::Int(v)
                } else if let Some(v) = n.as_u64() {
                    Cell::Uint(v)
                } else {
                    // Always succeeds without the arbitrary precision feature
                    Cell::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(v) => Cell::Text(v.clone()),
            Json::Object(_) => Cell::Row(Row::from_json(value)?),
            Json::Array(_) => Cell::Unsupported,
        };

        Ok(cell)
    }

    fn as_value(&self) -> Value<'_> {
        match self {
            Cell::Bool(v) => Value::Bool(*v),
            Cell::Int(v) => Value::I64(*v),
            Cell::Uint(v) => Value::U64(*v),
            Cell::Float(v) => Value::F64(*v),
            Cell::Text(v) => Value::String(v),
            Cell::Row(row) => Value::Record(row),
            Cell::Null => Value::Null,
            Cell::Unsupported => Value::Unsupported,
        }
    }
}

impl Record for Row {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        self.cells.get(field).map(Cell::as_value)
    }
}

impl TryFrom<&serde_json::Value> for Row {
    type Error = Error;

    fn try_from(value: &serde_json::Value) -> Result<Row> {
        Row::from_json(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Uint(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<Row> for Cell {
    fn from(value: Row) -> Self {
        Cell::Row(value)
    }
}
