use super::Error;

#[derive(Debug)]
pub(super) struct MismatchedFieldValueCountError {
    fields: usize,
    values: usize,
}

impl std::error::Error for MismatchedFieldValueCountError {}

impl core::fmt::Display for MismatchedFieldValueCountError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "the amount of fields and values differ: {} vs {}",
            self.fields, self.values
        )
    }
}

impl Error {
    pub fn mismatched_field_value_count(fields: usize, values: usize) -> Error {
        Error::from(super::ErrorKind::MismatchedFieldValueCount(
            MismatchedFieldValueCountError { fields, values },
        ))
    }

    pub fn is_mismatched_field_value_count(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MismatchedFieldValueCount(_))
    }
}
