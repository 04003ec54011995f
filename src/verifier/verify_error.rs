use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    /// The serialized object does not match the expected JSON
    Serialization,
    /// The deserialized JSON does not match the expected object
    Deserialization
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailureKind::Serialization => write!(f, "Serialization test"),
            FailureKind::Deserialization => write!(f, "Deserialization test")
        }
    }
}

///
/// A forward or backward equality check that did not hold.
///
/// ``object`` is the ``Debug`` rendering of the expected object of the offending case,
/// ``case`` its zero-based registration index.
///
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{kind} [{object}]: {detail}\nexpected: {expected}\n  actual: {actual}")]
pub struct AssertionFailure {
    pub kind: FailureKind,
    pub case: usize,
    pub object: String,
    pub expected: String,
    pub actual: String,
    pub detail: String
}

#[derive(Debug, Error)]
pub enum VerifyError<E: StdError + 'static> {
    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    /// Raised by the serializer under test, passed through as is
    #[error(transparent)]
    Serializer(E)
}

impl<E: StdError + 'static> VerifyError<E> {
    pub fn is_assertion(&self) -> bool {
        matches!(self, VerifyError::Assertion(_))
    }

    pub fn assertion(&self) -> Option<&AssertionFailure> {
        match self {
            VerifyError::Assertion(failure) => Some(failure),
            VerifyError::Serializer(_) => None
        }
    }

    pub fn into_serializer_error(self) -> Option<E> {
        match self {
            VerifyError::Serializer(error) => Some(error),
            VerifyError::Assertion(_) => None
        }
    }
}
