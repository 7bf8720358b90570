use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::value::{Type, Typed};
use crate::{Error, Value};

use super::Matcher;

/// Creates an [`IsType`] matcher with the target type given as the type
/// parameter `T`.
pub fn is_type<T: Typed>() -> IsType {
    IsType {
        type_of: T::type_of(),
    }
}

/// Creates an [`IsType`] matcher with the target type computed from a sample
/// value.
pub fn same_type_as(sample: impl Into<Value>) -> IsType {
    IsType {
        type_of: sample.into().type_of(),
    }
}

/// Matches by exact runtime type identity, not by convertibility.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsType {
    type_of: Type,
}

impl Matcher for IsType {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        Ok(self.type_of == actual.type_of())
    }

    fn expected(&self) -> String {
        format!("type is {}", self.type_of)
    }
}

impl Display for IsType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "<type is {}>", self.type_of)
    }
}
