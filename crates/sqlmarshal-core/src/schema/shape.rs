use std::any::TypeId;

/// Describes the declared type of a record field.
///
/// Shapes are produced by the `Column` implementations of field types (or by
/// the derive macro for records) and consumed by the [`Tokenizer`].
///
/// [`Tokenizer`]: super::Tokenizer
#[derive(Debug, Clone)]
pub enum Shape {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,

    /// A record nested by value.
    Record(RecordRef),

    /// One level of indirection (`Box<T>`, `Rc<T>`, `Arc<T>`).
    Ref(Box<Shape>),

    /// A type with no column representation. Carries the type name for error
    /// reporting.
    Unsupported(&'static str),
}

/// Lazy handle to a record description.
///
/// The definition is produced on demand so that self-referencing records can
/// describe themselves without recursing.
#[derive(Debug, Clone, Copy)]
pub struct RecordRef {
    pub type_id: TypeId,
    pub name: &'static str,
    pub definition: fn() -> RecordDef,
}

/// Static description of a record type: its name and ordered fields.
#[derive(Debug, Clone)]
pub struct RecordDef {
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub shape: Shape,
    pub attrs: FieldAttrs,
}

/// Key flags attached to a field with `#[sql(primary, unique)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    pub primary: bool,
    pub unique: bool,
}

impl RecordRef {
    pub fn new(type_id: TypeId, name: &'static str, definition: fn() -> RecordDef) -> RecordRef {
        RecordRef {
            type_id,
            name,
            definition,
        }
    }

    pub fn definition(&self) -> RecordDef {
        (self.definition)()
    }
}

impl Shape {
    /// Human readable name of the shape, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Shape::Bool => "bool".to_string(),
            Shape::I8 => "i8".to_string(),
            Shape::I16 => "i16".to_string(),
            Shape::I32 => "i32".to_string(),
            Shape::I64 => "i64".to_string(),
            Shape::U8 => "u8".to_string(),
            Shape::U16 => "u16".to_string(),
            Shape::U32 => "u32".to_string(),
            Shape::U64 => "u64".to_string(),
            Shape::F32 => "f32".to_string(),
            Shape::F64 => "f64".to_string(),
            Shape::String => "String".to_string(),
            Shape::Record(record) => record.name.to_string(),
            Shape::Ref(inner) => format!("&{}", inner.describe()),
            Shape::Unsupported(name) => name.to_string(),
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Shape::Record(_))
    }

    /// Returns the record behind this shape, following at most one reference.
    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Shape::Record(record) => Some(record),
            Shape::Ref(inner) => match &**inner {
                Shape::Record(record) => Some(record),
                _ => None,
            },
            _ => None,
        }
    }
}
