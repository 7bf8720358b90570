use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Error, Value};

use super::{Arg, Matcher};

const OPERATOR_AND: &str = "and";
const OPERATOR_OR: &str = "or";

/// Creates an [`And`] matcher that matches if all of the passed matchers
/// match.
///
/// The items are coerced like [`of`](super::of); combinators passed as
/// children are rendered parenthesized.
pub fn and(matchers: impl Into<Args>) -> And {
    And(Logical::new(OPERATOR_AND, matchers.into()))
}

/// Creates an [`Or`] matcher that matches if any of the passed matchers
/// matches.
///
/// The items are coerced like [`of`](super::of); combinators passed as
/// children are rendered parenthesized.
pub fn or(matchers: impl Into<Args>) -> Or {
    Or(Logical::new(OPERATOR_OR, matchers.into()))
}

/// Shared state of the [`And`] and [`Or`] combinators.
struct Logical {
    matchers: Vec<Box<dyn Matcher>>,
    operator: &'static str,
    nested: bool,
}

impl Logical {
    fn new(operator: &'static str, matchers: Args) -> Self {
        Self {
            matchers: matchers
                .0
                .into_iter()
                .map(Arg::into_nested_matcher)
                .collect(),
            operator,
            nested: false,
        }
    }

    fn expected(&self) -> String {
        let expected: Vec<String> = self.matchers.iter().map(|m| m.expected()).collect();

        if let [single] = expected.as_slice() {
            return single.clone();
        }

        let joined = expected.join(&format!(" {} ", self.operator));

        if self.nested {
            format!("({joined})")
        } else {
            joined
        }
    }
}

/// Matches if all children match.
///
/// Children are evaluated strictly in the order supplied, stopping at the
/// first non-matching child or the first error.
#[must_use]
pub struct And(Logical);

impl And {
    pub(crate) fn nested(mut self) -> Self {
        self.0.nested = true;
        self
    }
}

impl Matcher for And {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        for matcher in &self.0.matchers {
            if !matcher.matches(actual)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn expected(&self) -> String {
        self.0.expected()
    }
}

impl Display for And {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0.expected())
    }
}

/// Matches if any child matches.
///
/// Children are evaluated strictly in the order supplied, stopping at the
/// first matching child or the first error.
#[must_use]
pub struct Or(Logical);

impl Or {
    pub(crate) fn nested(mut self) -> Self {
        self.0.nested = true;
        self
    }
}

impl Matcher for Or {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        for matcher in &self.0.matchers {
            if matcher.matches(actual)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn expected(&self) -> String {
        self.0.expected()
    }
}

impl Display for Or {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0.expected())
    }
}

/// An ordered list of coercible matcher arguments, built from a tuple or a
/// [`Vec`] of [`Arg`]s.
#[must_use]
pub struct Args(pub(crate) Vec<Arg>);

impl From<Vec<Arg>> for Args {
    fn from(args: Vec<Arg>) -> Self {
        Self(args)
    }
}

macro_rules! impl_args {
    ($( $arg:ident: $ty:ident ),+) => {
        impl<$( $ty ),+> From<($( $ty, )+)> for Args
        where
            $( $ty: Into<Arg>, )+
        {
            fn from(($( $arg, )+): ($( $ty, )+)) -> Self {
                Self(vec![$( $arg.into() ),+])
            }
        }
    };
}

impl_args!(a0: A0);
impl_args!(a0: A0, a1: A1);
impl_args!(a0: A0, a1: A1, a2: A2);
impl_args!(a0: A0, a1: A1, a2: A2, a3: A3);
impl_args!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4);
impl_args!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
impl_args!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
impl_args!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
impl_args!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
impl_args!(a0: A0, a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8, a9: A9);
