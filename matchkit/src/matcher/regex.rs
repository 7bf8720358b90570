use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Error, Value};

use super::{str_val, Matcher};

/// Creates a [`Regex`] matcher from a pattern or an already compiled
/// expression.
///
/// # Panics
/// Panics if a string `pattern` is not a valid regular expression.
pub fn regex(pattern: impl Into<Regex>) -> Regex {
    pattern.into()
}

/// Matches string-like values against a regular expression.
///
/// The pattern may match anywhere in the value. A non-string actual is a
/// non-match, not an error.
#[must_use]
#[derive(Debug, Clone)]
pub struct Regex {
    regex: ::regex::Regex,
}

impl Matcher for Regex {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        if let Some(v) = str_val(actual) {
            return Ok(self.regex.is_match(&v));
        }

        Ok(false)
    }

    fn expected(&self) -> String {
        self.regex.as_str().to_owned()
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.regex.as_str())
    }
}

impl From<::regex::Regex> for Regex {
    fn from(regex: ::regex::Regex) -> Self {
        Self { regex }
    }
}

impl From<&::regex::Regex> for Regex {
    fn from(regex: &::regex::Regex) -> Self {
        Self {
            regex: regex.clone(),
        }
    }
}

impl From<&str> for Regex {
    fn from(pattern: &str) -> Self {
        match ::regex::Regex::new(pattern) {
            Ok(regex) => Self { regex },
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<String> for Regex {
    fn from(pattern: String) -> Self {
        Self::from(pattern.as_str())
    }
}
