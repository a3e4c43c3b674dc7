use super::Kind;

/// Driver independent description of a record's table.
///
/// Built once by the [`Tokenizer`](super::Tokenizer) (or by the dynamic map
/// adapter) and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Tokenized {
    /// Table name
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<TokenizedField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenizedField {
    /// Column name
    pub name: String,

    /// Scalar kind, or the referenced table for foreign keys
    pub ty: FieldTy,

    /// True if the field is annotated with `#[sql(primary)]`
    pub primary_key: bool,

    /// True if the field is annotated with `#[sql(unique)]`
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldTy {
    Scalar(Kind),
    ForeignKey(Box<Tokenized>),
}

impl Tokenized {
    pub fn new(name: impl Into<String>, fields: Vec<TokenizedField>) -> Tokenized {
        Tokenized {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[TokenizedField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&TokenizedField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields flagged as primary key, in declaration order.
    pub fn primary(&self) -> impl Iterator<Item = &TokenizedField> + '_ {
        self.fields.iter().filter(|field| field.primary_key)
    }

    pub fn has_primary_key(&self) -> bool {
        self.fields.iter().any(|field| field.primary_key)
    }
}

impl TokenizedField {
    pub fn scalar(name: impl Into<String>, kind: Kind) -> TokenizedField {
        TokenizedField {
            name: name.into(),
            ty: FieldTy::Scalar(kind),
            primary_key: false,
            unique: false,
        }
    }

    pub fn foreign_key(name: impl Into<String>, references: Tokenized) -> TokenizedField {
        TokenizedField {
            name: name.into(),
            ty: FieldTy::ForeignKey(Box::new(references)),
            primary_key: false,
            unique: false,
        }
    }

    pub fn primary_key(mut self, primary_key: bool) -> TokenizedField {
        self.primary_key = primary_key;
        self
    }

    pub fn unique(mut self, unique: bool) -> TokenizedField {
        self.unique = unique;
        self
    }

    pub fn kind(&self) -> Kind {
        match &self.ty {
            FieldTy::Scalar(kind) => *kind,
            FieldTy::ForeignKey(_) => Kind::ForeignKey,
        }
    }

    pub fn references(&self) -> Option<&Tokenized> {
        match &self.ty {
            FieldTy::Scalar(_) => None,
            FieldTy::ForeignKey(references) => Some(references),
        }
    }
}
