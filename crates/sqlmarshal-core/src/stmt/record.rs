use super::Value;

/// Read access to the field values of a record instance.
///
/// Implemented by `#[derive(Model)]` and by the dynamic `Row` type. Statement
/// crafting only ever looks fields up by the names found in the schema.
pub trait Record {
    /// Returns the value of `field`, or `None` if the record has no such field.
    fn value(&self, field: &str) -> Option<Value<'_>>;
}

impl<T: Record + ?Sized> Record for &T {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        (**self).value(field)
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn value(&self, field: &str) -> Option<Value<'_>> {
        (**self).value(field)
    }
}
