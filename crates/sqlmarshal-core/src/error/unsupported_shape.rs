use super::Error;

/// Error when a marshaller is requested for something that is neither a
/// record nor a map-shaped definition.
#[derive(Debug)]
pub(super) struct UnsupportedShapeError {
    shape: Box<str>,
}

impl std::error::Error for UnsupportedShapeError {}

impl core::fmt::Display for UnsupportedShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported shape `{}`: expected a record or a map definition",
            self.shape
        )
    }
}

impl Error {
    pub fn unsupported_shape(shape: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedShape(UnsupportedShapeError {
            shape: shape.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported shape error.
    pub fn is_unsupported_shape(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedShape(_))
    }
}
