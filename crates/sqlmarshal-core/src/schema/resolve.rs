use super::{Kind, Shape};

/// Maps a field shape to its abstract SQL kind.
///
/// Unsigned integers are not distinguished from signed ones: every integer
/// wider than 16 bits becomes `BigInt`. Records and references resolve to
/// `ForeignKey`; whether the reference actually points at a record is checked
/// by the tokenizer. Returns `None` for shapes with no column representation.
pub fn resolve(shape: &Shape) -> Option<Kind> {
    let kind = match shape {
        Shape::Bool => Kind::Int,
        Shape::I8 | Shape::I16 => Kind::SmallInt,
        Shape::I32 | Shape::I64 => Kind::BigInt,
        Shape::U8 | Shape::U16 | Shape::U32 | Shape::U64 => Kind::BigInt,
        Shape::F32 => Kind::Float,
        Shape::F64 => Kind::Double,
        Shape::String => Kind::Varchar,
        Shape::Record(_) | Shape::Ref(_) => Kind::ForeignKey,
        Shape::Unsupported(_) => return None,
    };

    Some(kind)
}
