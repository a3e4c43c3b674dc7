use super::{resolve, FieldTy, Kind, RecordRef, Shape, Tokenized, TokenizedField};
use crate::{Error, Result};

use std::any::TypeId;

/// Walks record descriptions and builds their [`Tokenized`] schema,
/// recursing into referenced records.
#[derive(Debug, Default)]
pub struct Tokenizer {
    /// Records currently being tokenized, outermost first.
    stack: Vec<Frame>,
}

#[derive(Debug)]
struct Frame {
    type_id: TypeId,
    table: &'static str,

    /// Field being descended into
    field: &'static str,
}

impl Tokenizer {
    /// Tokenizes `record`. The table is named `name` when given, otherwise
    /// after the record type.
    pub fn tokenize(record: &RecordRef, name: Option<&str>) -> Result<Tokenized> {
        let mut tokenizer = Tokenizer::default();
        let mut tokenized = tokenizer.record(record)?;

        if let Some(name) = name {
            tokenized.name = name.to_string();
        }

        tracing::debug!(
            table = %tokenized.name,
            fields = tokenized.fields.len(),
            "tokenized record"
        );

        Ok(tokenized)
    }

    /// Tokenizes the record behind `shape`.
    ///
    /// Fails with an unsupported shape error when the shape is not a record.
    pub fn tokenize_shape(shape: &Shape, name: Option<&str>) -> Result<Tokenized> {
        match shape {
            Shape::Record(record) => Tokenizer::tokenize(record, name),
            _ => Err(Error::unsupported_shape(shape.describe())),
        }
    }

    fn record(&mut self, record: &RecordRef) -> Result<Tokenized> {
        if let Some(start) = self
            .stack
            .iter()
            .position(|frame| frame.type_id == record.type_id)
        {
            return Err(Error::cyclic_reference(self.cycle_path(start, record)));
        }

        let def = record.definition();

        self.stack.push(Frame {
            type_id: record.type_id,
            table: def.name,
            field: "",
        });

        let mut fields = Vec::with_capacity(def.fields.len());

        for field in &def.fields {
            let kind = resolve(&field.shape)
                .ok_or_else(|| Error::unresolvable_type(field.name, field.shape.describe()))?;

            let ty = if kind == Kind::ForeignKey {
                // Dereference at most one level
                let target = match &field.shape {
                    Shape::Ref(inner) => &**inner,
                    shape => shape,
                };

                let Shape::Record(target) = target else {
                    return Err(Error::expected_record(field.name, target.describe()));
                };

                if let Some(frame) = self.stack.last_mut() {
                    frame.field = field.name;
                }

                let references = self
                    .record(target)
                    .map_err(|err| err.context(Error::tokenization(def.name, field.name)))?;

                FieldTy::ForeignKey(Box::new(references))
            } else {
                FieldTy::Scalar(kind)
            };

            tracing::trace!(
                table = def.name,
                field = field.name,
                ?kind,
                primary = field.attrs.primary,
                unique = field.attrs.unique,
                "tokenized field"
            );

            fields.push(TokenizedField {
                name: field.name.to_string(),
                ty,
                primary_key: field.attrs.primary,
                unique: field.attrs.unique,
            });
        }

        self.stack.pop();

        Ok(Tokenized::new(def.name, fields))
    }

    fn cycle_path(&self, start: usize, record: &RecordRef) -> String {
        let mut path = String::new();

        for frame in &self.stack[start..] {
            path.push_str(frame.table);
            path.push('.');
            path.push_str(frame.field);
            path.push_str(" -> ");
        }

        path.push_str(record.name);
        path
    }
}
