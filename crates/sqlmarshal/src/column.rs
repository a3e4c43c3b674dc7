use sqlmarshal_core::{schema::Shape, Value};

use std::{
    collections::{BTreeMap, HashMap},
    rc::Rc,
    sync::Arc,
};

/// A type that can be the field of a model.
///
/// The shape decides the column kind when the model is tokenized; the value
/// is read when crafting INSERT and UPDATE statements.
pub trait Column {
    fn shape() -> Shape;

    fn to_value(&self) -> Value<'_>;
}

macro_rules! impl_column {
    ( $( $ty:ty => $shape:ident, $variant:ident as $cast:ty; )* ) => {
        $(
            impl Column for $ty {
                fn shape() -> Shape {
                    Shape::$shape
                }

                fn to_value(&self) -> Value<'_> {
                    Value::$variant(*self as $cast)
                }
            }
        )*
    };
}

impl_column! {
    i8 => I8, I64 as i64;
    i16 => I16, I64 as i64;
    i32 => I32, I64 as i64;
    i64 => I64, I64 as i64;
    isize => I64, I64 as i64;
    u8 => U8, U64 as u64;
    u16 => U16, U64 as u64;
    u32 => U32, U64 as u64;
    u64 => U64, U64 as u64;
    usize => U64, U64 as u64;
    f32 => F32, F64 as f64;
    f64 => F64, F64 as f64;
}

impl Column for bool {
    fn shape() -> Shape {
        Shape::Bool
    }

    fn to_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl Column for String {
    fn shape() -> Shape {
        Shape::String
    }

    fn to_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

macro_rules! impl_column_indirection {
    ( $( $ptr:ident ),* ) => {
        $(
            impl<T: Column> Column for $ptr<T> {
                fn shape() -> Shape {
                    Shape::Ref(Box::new(T::shape()))
                }

                fn to_value(&self) -> Value<'_> {
                    (**self).to_value()
                }
            }
        )*
    };
}

impl_column_indirection!(Box, Rc, Arc);

impl<T> Column for Vec<T> {
    fn shape() -> Shape {
        Shape::Unsupported("Vec")
    }

    fn to_value(&self) -> Value<'_> {
        Value::Unsupported
    }
}

impl<T> Column for Option<T> {
    fn shape() -> Shape {
        Shape::Unsupported("Option")
    }

    fn to_value(&self) -> Value<'_> {
        Value::Unsupported
    }
}

impl<K, V, S> Column for HashMap<K, V, S> {
    fn shape() -> Shape {
        Shape::Unsupported("HashMap")
    }

    fn to_value(&self) -> Value<'_> {
        Value::Unsupported
    }
}

impl<K, V> Column for BTreeMap<K, V> {
    fn shape() -> Shape {
        Shape::Unsupported("BTreeMap")
    }

    fn to_value(&self) -> Value<'_> {
        Value::Unsupported
    }
}
