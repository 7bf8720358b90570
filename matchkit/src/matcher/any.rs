use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{Error, Value};

use super::Matcher;

/// Creates an [`Any`] matcher that matches any value.
pub fn any() -> Any {
    Any
}

/// Matches any value unconditionally.
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

impl Matcher for Any {
    fn matches(&self, _actual: &Value) -> Result<bool, Error> {
        Ok(true)
    }

    fn expected(&self) -> String {
        "is anything".to_owned()
    }
}

impl Display for Any {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("<is anything>")
    }
}
