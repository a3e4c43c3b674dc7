use indexmap::IndexMap;
use sqlmarshal_core::{Error, Result};

/// A column name and its SQL literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWithValue {
    pub name: String,
    pub value: String,
}

/// Ordered column name to literal mapping used while crafting INSERT and
/// UPDATE statements. Names are unique; insertion order is kept.
///
/// Names and values are stored as pairs, so [`fields`](Self::fields) and
/// [`values`](Self::values) always yield the same number of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsWithValue {
    fields: IndexMap<String, String>,
}

impl FieldsWithValue {
    pub fn new() -> FieldsWithValue {
        FieldsWithValue::default()
    }

    /// Appends a field, failing if `name` is already present.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();

        if self.fields.contains_key(&name) {
            return Err(Error::duplicate_field(name));
        }

        self.fields.insert(name, value.into());
        Ok(())
    }

    /// Appends every field of `other`.
    ///
    /// Nothing is appended if any name of `other` is already present.
    pub fn merge(&mut self, other: FieldsWithValue) -> Result<()> {
        if let Some(name) = other.fields.keys().find(|name| self.fields.contains_key(*name)) {
            return Err(Error::duplicate_field(name.clone()));
        }

        self.fields.extend(other.fields);
        Ok(())
    }

    /// Removes and returns the field `name`, keeping the order of the rest.
    pub fn pop(&mut self, name: &str) -> Option<FieldWithValue> {
        self.fields
            .shift_remove_entry(name)
            .map(|(name, value)| FieldWithValue { name, value })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Renders every field as `name<separator>value`.
    pub fn pairs(&self, separator: &str) -> Vec<String> {
        self.fields
            .iter()
            .map(|(name, value)| format!("{name}{separator}{value}"))
            .collect()
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.fields.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collection(pairs: &[(&str, &str)]) -> FieldsWithValue {
        let mut fields = FieldsWithValue::new();
        for (name, value) in pairs {
            fields.add(*name, *value).unwrap();
        }
        fields
    }

    #[test]
    fn add_keeps_order() {
        let fields = collection(&[("b", "1"), ("a", "2"), ("c", "3")]);

        assert_eq!(fields.fields().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(fields.values().collect::<Vec<_>>(), ["1", "2", "3"]);
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn add_rejects_duplicates() {
        let mut fields = collection(&[("ID", "1")]);

        let err = fields.add("ID", "2").unwrap_err();
        assert!(err.is_duplicate_field());
        assert_eq!(fields.pairs("="), ["ID=1"]);
    }

    #[test]
    fn merge() {
        let mut fields = collection(&[("ID", "1")]);
        fields.merge(collection(&[("Ref_A_fk", "2"), ("Ref_B_fk", "3")])).unwrap();

        assert_eq!(fields.pairs("="), ["ID=1", "Ref_A_fk=2", "Ref_B_fk=3"]);
    }

    #[test]
    fn merge_collision_appends_nothing() {
        let mut fields = collection(&[("ID", "1"), ("Name", "\"a\"")]);

        let err = fields
            .merge(collection(&[("Other", "2"), ("Name", "\"b\"")]))
            .unwrap_err();
        assert!(err.is_duplicate_field());
        assert!(!fields.contains("Other"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn pop() {
        let mut fields = collection(&[("a", "1"), ("b", "2"), ("c", "3")]);

        assert_eq!(
            fields.pop("b"),
            Some(FieldWithValue {
                name: "b".to_string(),
                value: "2".to_string()
            })
        );
        assert_eq!(fields.pop("b"), None);
        assert_eq!(fields.pairs(" = "), ["a = 1", "c = 3"]);

        // A popped name can be added again
        fields.add("b", "4").unwrap();
        assert_eq!(fields.fields().collect::<Vec<_>>(), ["a", "c", "b"]);
    }

    #[test]
    fn fields_and_values_stay_paired() {
        let mut fields = collection(&[("a", "1"), ("b", "2")]);
        fields.merge(collection(&[("c", "3")])).unwrap();
        fields.pop("a");
        assert!(fields.add("b", "9").is_err());

        assert_eq!(fields.fields().len(), fields.values().len());
        assert_eq!(fields.fields().collect::<Vec<_>>(), ["b", "c"]);
        assert_eq!(fields.values().collect::<Vec<_>>(), ["2", "3"]);
    }

    #[test]
    fn empty() {
        let fields = FieldsWithValue::new();
        assert!(fields.is_empty());
        assert!(fields.pairs(",").is_empty());
    }
}
