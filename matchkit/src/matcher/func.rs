use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Error, Value};

use super::Matcher;

/// Creates a [`Func`] matcher that delegates to the passed predicate.
pub fn func<F>(expected: impl Into<String>, predicate: F) -> Func<F>
where
    F: Fn(&Value) -> Result<bool, Error>,
{
    Func {
        expected: expected.into(),
        predicate,
    }
}

/// Matches by calling a caller supplied predicate.
///
/// The verdict and any error come verbatim from the predicate; the
/// description is returned verbatim from [`expected`](Matcher::expected).
#[must_use]
pub struct Func<F> {
    expected: String,
    predicate: F,
}

impl<F> Matcher for Func<F>
where
    F: Fn(&Value) -> Result<bool, Error>,
{
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        (self.predicate)(actual)
    }

    fn expected(&self) -> String {
        self.expected.clone()
    }
}

impl<F> Display for Func<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<{}>", self.expected)
    }
}
