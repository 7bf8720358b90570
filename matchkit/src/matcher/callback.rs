use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Error, Value};

use super::Matcher;

/// Creates a [`Callback`] matcher that builds the effective matcher on every
/// use.
pub fn callback<F>(factory: F) -> Callback<F>
where
    F: Fn() -> Box<dyn Matcher>,
{
    Callback(factory)
}

/// Defers matcher construction until the matcher is used.
///
/// The factory is invoked once per [`matches`](Matcher::matches) and
/// [`expected`](Matcher::expected) call and is never memoized. This breaks
/// initialization cycles and allows the expectation to depend on state that
/// is only known at match time.
#[must_use]
pub struct Callback<F>(pub F);

impl<F> Callback<F>
where
    F: Fn() -> Box<dyn Matcher>,
{
    /// Resolves the underlying matcher.
    pub fn matcher(&self) -> Box<dyn Matcher> {
        (self.0)()
    }
}

impl<F> Matcher for Callback<F>
where
    F: Fn() -> Box<dyn Matcher>,
{
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        (self.0)().matches(actual)
    }

    fn expected(&self) -> String {
        (self.0)().expected()
    }
}

impl<F> Display for Callback<F>
where
    F: Fn() -> Box<dyn Matcher>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.expected())
    }
}
