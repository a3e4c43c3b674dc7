use super::Error;

/// Error when a record references itself, directly or through other records.
#[derive(Debug)]
pub(super) struct CyclicReferenceError {
    path: Box<str>,
}

impl std::error::Error for CyclicReferenceError {}

impl core::fmt::Display for CyclicReferenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cyclic record reference: {}", self.path)
    }
}

impl Error {
    /// Creates a cyclic reference error. `path` describes the loop, e.g.
    /// `Node.next -> Node`.
    pub fn cyclic_reference(path: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::CyclicReference(CyclicReferenceError {
            path: path.into().into(),
        }))
    }

    /// Returns `true` if this error is a cyclic reference error.
    pub fn is_cyclic_reference(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::CyclicReference(_))
    }
}
