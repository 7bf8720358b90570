use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Error, Value};

use super::Matcher;

/// Creates an [`IsEmpty`] matcher.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Creates an [`IsNotEmpty`] matcher.
pub fn is_not_empty() -> IsNotEmpty {
    IsNotEmpty
}

/// Matches values that are nil, zero-length, a nil pointer or equal to the
/// zero value of their type. Pointers are followed recursively.
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsEmpty;

impl Matcher for IsEmpty {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        Ok(empty(actual))
    }

    fn expected(&self) -> String {
        "is empty".to_owned()
    }
}

impl Display for IsEmpty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("<is empty>")
    }
}

/// The exact negation of [`IsEmpty`].
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsNotEmpty;

impl Matcher for IsNotEmpty {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        Ok(!empty(actual))
    }

    fn expected(&self) -> String {
        "is not empty".to_owned()
    }
}

impl Display for IsNotEmpty {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("<is not empty>")
    }
}

fn empty(value: &Value) -> bool {
    match value {
        Value::Nil | Value::Ptr(None) => true,
        Value::Ptr(Some(pointee)) => empty(pointee),
        value => match value.length() {
            Some(length) => length == 0,
            None => value.is_zero(),
        },
    }
}
