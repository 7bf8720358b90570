//! Error types reported when an expectation cannot be evaluated.

use std::any::Any;

use thiserror::Error;

use crate::value::Type;

/// A match time failure.
///
/// Whenever a matcher returns an error, the value is reported as not matched.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The actual value does not have a length.
    #[error("length is not defined for {0}")]
    Unsized(Type),

    /// The length was requested through a nil pointer.
    #[error("length is not defined for a nil pointer")]
    NilPointer,

    /// The actual value cannot be represented as JSON.
    #[error("cannot represent {0} as JSON")]
    UnsupportedJson(Type),

    /// An error raised by a caller supplied predicate or recovered from a
    /// panic during value inspection.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error from the passed message.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Extracts a readable message from a recovered panic payload.
    pub(crate) fn recovered(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_owned(),
                Err(_) => "unexpected panic".to_owned(),
            },
        };

        Self::Custom(message)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn recovered_string() {
        let err = Error::recovered(Box::new(String::from("boom")));

        assert_eq!(Error::custom("boom"), err);
    }

    #[test]
    fn recovered_str() {
        let err = Error::recovered(Box::new("boom"));

        assert_eq!(Error::custom("boom"), err);
    }

    #[test]
    fn recovered_other() {
        let err = Error::recovered(Box::new(42));

        assert_eq!(Error::custom("unexpected panic"), err);
    }
}
