use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::format::{self, Spec};
use crate::{Error, Value};

use super::{str_val, Matcher};

/// Creates an [`Equal`] matcher that compares by deep equality.
pub fn eq(expected: impl Into<Value>) -> Equal {
    Equal {
        expected: expected.into(),
    }
}

/// Matches by deep structural equality.
///
/// Equality is variant sensitive and recursive, see [`Value`] for the exact
/// semantics. Matching never errors.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Equal {
    expected: Value,
}

impl Matcher for Equal {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        Ok(self.expected == *actual)
    }

    fn expected(&self) -> String {
        if let Some(v) = str_val(&self.expected) {
            return v;
        }

        format::to_string(Spec::default().plus(), &self.expected)
    }
}

impl Display for Equal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        format::format(f, Spec::default(), &self.expected)
    }
}

/// Creates an [`Equal`](crate::matcher::Equal) matcher against a string built
/// from the format template at construction time, not at match time.
#[macro_export]
macro_rules! eq_fmt {
    ($($arg:tt)*) => {
        $crate::matcher::eq(::std::format!($($arg)*))
    };
}
