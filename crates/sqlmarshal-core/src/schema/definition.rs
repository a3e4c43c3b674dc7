use super::{FieldTy, Kind, Tokenized, TokenizedField};

/// Column assumed to exist on referenced tables that declare no primary key.
pub const SURROGATE_ID: &str = "_ID";

/// A column as handed to a driver's `define`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: Kind,
}

/// A foreign key constraint as handed to a driver's `define_fk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FkDefinition {
    /// Local columns
    pub names: Vec<String>,

    /// Columns of the referenced table, in the same order as `names`
    pub remote_names: Vec<String>,

    pub remote_table: String,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, kind: Kind) -> FieldDefinition {
        FieldDefinition {
            name: name.into(),
            kind,
        }
    }
}

impl Tokenized {
    /// Expands the primary key into concrete columns.
    ///
    /// Scalar key fields map to themselves. Foreign-key key fields contribute
    /// the columns synthesized for the reference, so every returned column has
    /// a scalar kind.
    pub fn primary_key_columns(&self) -> Vec<FieldDefinition> {
        let mut columns = vec![];

        for field in self.primary() {
            match &field.ty {
                FieldTy::Scalar(kind) => columns.push(FieldDefinition::new(&field.name, *kind)),
                FieldTy::ForeignKey(references) => {
                    let (fk_columns, _) = foreign_key_columns(&field.name, references);
                    columns.extend(fk_columns);
                }
            }
        }

        columns
    }

    /// Column definitions, foreign key constraints and primary key column
    /// names for a CREATE statement, in declaration order.
    pub fn definitions(&self) -> (Vec<FieldDefinition>, Vec<FkDefinition>, Vec<String>) {
        let mut columns = vec![];
        let mut foreign_keys = vec![];

        for field in &self.fields {
            match &field.ty {
                FieldTy::Scalar(kind) => columns.push(FieldDefinition::new(&field.name, *kind)),
                FieldTy::ForeignKey(references) => {
                    let (fk_columns, fk) = foreign_key_columns(&field.name, references);
                    columns.extend(fk_columns);
                    foreign_keys.push(fk);
                }
            }
        }

        let primary_key = self
            .primary_key_columns()
            .into_iter()
            .map(|column| column.name)
            .collect();

        (columns, foreign_keys, primary_key)
    }
}

impl TokenizedField {
    /// Name of the local column synthesized for `remote_column`.
    pub fn foreign_key_column_name(&self, remote_column: &str) -> String {
        fk_column_name(&self.name, remote_column)
    }
}

fn fk_column_name(field: &str, remote_column: &str) -> String {
    format!("{field}_{remote_column}_fk")
}

/// Local columns and constraint for a field referencing `references`.
///
/// Without a remote primary key, a single `BigInt` column named after the
/// field is linked to the remote surrogate [`SURROGATE_ID`] column.
fn foreign_key_columns(
    field: &str,
    references: &Tokenized,
) -> (Vec<FieldDefinition>, FkDefinition) {
    let remote = references.primary_key_columns();

    if remote.is_empty() {
        let fk = FkDefinition {
            names: vec![field.to_string()],
            remote_names: vec![SURROGATE_ID.to_string()],
            remote_table: references.name.clone(),
        };
        return (vec![FieldDefinition::new(field, Kind::BigInt)], fk);
    }

    let columns: Vec<_> = remote
        .iter()
        .map(|column| FieldDefinition::new(fk_column_name(field, &column.name), column.kind))
        .collect();

    let fk = FkDefinition {
        names: columns.iter().map(|column| column.name.clone()).collect(),
        remote_names: remote.into_iter().map(|column| column.name).collect(),
        remote_table: references.name.clone(),
    };

    (columns, fk)
}
