use std::fmt::{Display, Formatter, Result as FmtResult};
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::{Error, Value};

use super::Matcher;

/// Creates a [`Len`] matcher that compares the element count of a sized
/// container.
pub fn len(expected: usize) -> Len {
    Len { expected }
}

/// Matches by the element count of a sized container.
///
/// A nil actual has no length and never matches. One level of pointer
/// indirection is followed; a nil pointer and an unsized pointee are
/// reported as errors, not as mismatches.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Len {
    expected: usize,
}

impl Len {
    fn check(&self, actual: &Value) -> Result<bool, Error> {
        let value = match actual {
            Value::Ptr(Some(pointee)) => pointee,
            Value::Ptr(None) => return Err(Error::NilPointer),
            value => value,
        };

        match value.length() {
            Some(length) => Ok(length == self.expected),
            None => Err(Error::Unsized(value.type_of())),
        }
    }
}

impl Matcher for Len {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        if actual.is_nil() {
            return Ok(false);
        }

        // A fault while inspecting the value must surface as a match error,
        // never crash the caller.
        catch_unwind(AssertUnwindSafe(|| self.check(actual)))
            .unwrap_or_else(|payload| Err(Error::recovered(payload)))
    }

    fn expected(&self) -> String {
        format!("len is {}", self.expected)
    }
}

impl Display for Len {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<len is {}>", self.expected)
    }
}
