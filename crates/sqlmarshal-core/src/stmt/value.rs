use super::Record;

/// A field value borrowed from a record instance.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(&'a str),

    /// A nested record, used to fill in foreign key columns.
    Record(&'a dyn Record),

    /// Absent value, e.g. a `null` cell of a dynamic row.
    Null,

    /// A value with no literal representation.
    Unsupported,
}

impl<'a> Value<'a> {
    /// Renders the value as an SQL literal.
    ///
    /// Booleans become `1`/`0`, floats use six fractional digits, strings are
    /// wrapped in double quotes without escaping. Returns `None` for values
    /// that have no literal form (records, nulls, unsupported values).
    pub fn to_sql_literal(&self) -> Option<String> {
        let literal = match self {
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) => "0".to_string(),
            Value::I64(v) => v.to_string(),
            Value::U64(v) => v.to_string(),
            Value::F64(v) => format!("{v:.6}"),
            Value::String(v) => format!("\"{v}\""),
            Value::Record(_) | Value::Null | Value::Unsupported => return None,
        };

        Some(literal)
    }

    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match *self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }
}

impl core::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::I64(v) => f.debug_tuple("I64").field(v).finish(),
            Value::U64(v) => f.debug_tuple("U64").field(v).finish(),
            Value::F64(v) => f.debug_tuple("F64").field(v).finish(),
            Value::String(v) => f.debug_tuple("String").field(v).finish(),
            Value::Record(_) => f.write_str("Record(..)"),
            Value::Null => f.write_str("Null"),
            Value::Unsupported => f.write_str("Unsupported"),
        }
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value<'_> {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<u64> for Value<'_> {
    fn from(value: u64) -> Self {
        Value::U64(value)
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::String(value)
    }
}
