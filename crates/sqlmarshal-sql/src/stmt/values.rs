use super::FieldsWithValue;

use sqlmarshal_core::{schema::FieldTy, Error, Record, Result, Tokenized, Value};
use tracing::trace;

/// Collects the column literals of `record`, walking the fields of `schema`.
///
/// Scalar fields contribute one column each. A foreign key field holding a
/// record contributes one column per remote primary key column, named the
/// way `CREATE TABLE` names them. Fields that are absent from the record or
/// have no literal form are skipped.
pub fn fields_and_values(schema: &Tokenized, record: &dyn Record) -> Result<FieldsWithValue> {
    let mut fields = FieldsWithValue::new();

    for field in &schema.fields {
        let Some(value) = record.value(&field.name) else {
            trace!(table = %schema.name, field = %field.name, "no value; skipping");
            continue;
        };

        match (&field.ty, value) {
            (FieldTy::ForeignKey(references), Value::Record(nested)) => {
                let mut columns = FieldsWithValue::new();
                for (remote_column, literal) in primary_key_values(references, nested)? {
                    columns.add(field.foreign_key_column_name(&remote_column), literal)?;
                }
                fields.merge(columns)?;
            }
            (FieldTy::Scalar(_), value) => match value.to_sql_literal() {
                Some(literal) => fields.add(&field.name, literal)?,
                None => {
                    trace!(table = %schema.name, field = %field.name, ?value, "no SQL literal; skipping");
                }
            },
            (FieldTy::ForeignKey(_), value) => {
                trace!(table = %schema.name, field = %field.name, ?value, "foreign key without a record; skipping");
            }
        }
    }

    Ok(fields)
}

/// Primary key literals of `record`, keyed by the expanded primary key
/// columns of `schema`.
///
/// Tables without a primary key yield nothing; their surrogate column is
/// not part of the record.
fn primary_key_values(schema: &Tokenized, record: &dyn Record) -> Result<Vec<(String, String)>> {
    let mut values = vec![];

    for field in schema.primary() {
        let value = record.value(&field.name);

        match &field.ty {
            FieldTy::Scalar(_) => {
                let literal = value
                    .and_then(|value| value.to_sql_literal())
                    .ok_or_else(|| Error::unresolvable_value(&schema.name, &field.name))?;
                values.push((field.name.clone(), literal));
            }
            FieldTy::ForeignKey(references) => {
                let nested = value
                    .and_then(|value| value.as_record())
                    .ok_or_else(|| Error::unresolvable_value(&schema.name, &field.name))?;

                for (remote_column, literal) in primary_key_values(references, nested)? {
                    values.push((field.foreign_key_column_name(&remote_column), literal));
                }
            }
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sqlmarshal_core::{schema::TokenizedField, Kind};

    /// Record backed by a list of name/value pairs.
    struct Fields<'a>(Vec<(&'static str, Value<'a>)>);

    impl Record for Fields<'_> {
        fn value(&self, field: &str) -> Option<Value<'_>> {
            self.0
                .iter()
                .find(|(name, _)| *name == field)
                .map(|(_, value)| *value)
        }
    }

    fn pair() -> Tokenized {
        Tokenized::new(
            "Pair",
            vec![
                TokenizedField::scalar("A", Kind::BigInt).primary_key(true),
                TokenizedField::scalar("B", Kind::Varchar).primary_key(true),
                TokenizedField::scalar("Note", Kind::Varchar),
            ],
        )
    }

    #[test]
    fn scalars_and_foreign_keys() {
        let schema = Tokenized::new(
            "Child",
            vec![
                TokenizedField::scalar("ID", Kind::BigInt).primary_key(true),
                TokenizedField::foreign_key("Parent", pair()),
                TokenizedField::scalar("Done", Kind::Int),
            ],
        );

        let parent = Fields(vec![
            ("A", Value::I64(7)),
            ("B", Value::String("x")),
            ("Note", Value::String("ignored")),
        ]);
        let child = Fields(vec![
            ("ID", Value::I64(1)),
            ("Parent", Value::Record(&parent)),
            ("Done", Value::Bool(true)),
        ]);

        let fields = fields_and_values(&schema, &child).unwrap();
        assert_eq!(
            fields.pairs("="),
            ["ID=1", "Parent_A_fk=7", "Parent_B_fk=\"x\"", "Done=1"]
        );
    }

    #[test]
    fn missing_and_unsupported_values_are_skipped() {
        let schema = Tokenized::new(
            "T",
            vec![
                TokenizedField::scalar("A", Kind::BigInt),
                TokenizedField::scalar("B", Kind::BigInt),
                TokenizedField::scalar("C", Kind::BigInt),
                TokenizedField::foreign_key("D", pair()),
            ],
        );

        let record = Fields(vec![
            ("A", Value::Unsupported),
            ("C", Value::I64(3)),
            ("D", Value::Null),
        ]);

        let fields = fields_and_values(&schema, &record).unwrap();
        assert_eq!(fields.pairs("="), ["C=3"]);
    }

    #[test]
    fn remote_key_without_value() {
        let schema = Tokenized::new("Child", vec![TokenizedField::foreign_key("Parent", pair())]);

        let parent = Fields(vec![("A", Value::I64(7))]);
        let child = Fields(vec![("Parent", Value::Record(&parent))]);

        let err = fields_and_values(&schema, &child).unwrap_err();
        assert!(err.is_unresolvable_value());
        assert_eq!(
            err.to_string(),
            "cannot determine primary key value `B` of `Pair`"
        );
    }

    #[test]
    fn nested_key_reaches_scalars() {
        let middle = Tokenized::new(
            "Middle",
            vec![TokenizedField::foreign_key("Parent", pair()).primary_key(true)],
        );
        let schema = Tokenized::new("Leaf", vec![TokenizedField::foreign_key("Of", middle)]);

        let parent = Fields(vec![("A", Value::I64(1)), ("B", Value::String("b"))]);
        let middle = Fields(vec![("Parent", Value::Record(&parent))]);
        let leaf = Fields(vec![("Of", Value::Record(&middle))]);

        let fields = fields_and_values(&schema, &leaf).unwrap();
        assert_eq!(
            fields.pairs("="),
            ["Of_Parent_A_fk_fk=1", "Of_Parent_B_fk_fk=\"b\""]
        );
    }
}
