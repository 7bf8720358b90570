//! The [`matcher`](self) module contains the matcher contract, the built-in
//! matcher variants and the coercion from bare values.

mod any;
mod callback;
mod empty;
mod equal;
mod func;
mod json;
mod len;
mod logical;
mod regex;
mod type_of;
mod wildcard;

pub use any::{any, Any};
pub use callback::{callback, Callback};
pub use empty::{is_empty, is_not_empty, IsEmpty, IsNotEmpty};
pub use equal::{eq, Equal};
pub use func::{func, Func};
pub use json::{json, Json, IGNORE_DIFF};
pub use len::{len, Len};
pub use logical::{and, or, And, Args, Or};
pub use self::regex::{regex, Regex};
pub use type_of::{is_type, same_type_as, IsType};
pub use wildcard::wildcard;

use crate::{Error, Value};

/// A matcher determines whether an actual [`Value`] satisfies a pre-defined
/// expectation and describes that expectation for failure messages.
///
/// Matchers are immutable once constructed and safe to share between threads
/// for read-only use. The only exception is [`Callback`], which re-invokes
/// its factory on every call; keeping that factory free of side effects is
/// the factory author's contract.
pub trait Matcher {
    /// Returns `true` if `actual` meets the expectation.
    ///
    /// # Errors
    /// Returns an error if the expectation cannot be evaluated against
    /// `actual`, e.g. when the length of an unsized value is requested.
    /// Whenever an error is returned, the value did not match.
    fn matches(&self, actual: &Value) -> Result<bool, Error>;

    /// Returns a human readable description of the expectation.
    fn expected(&self) -> String;
}

impl Matcher for Box<dyn Matcher> {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        (**self).matches(actual)
    }

    fn expected(&self) -> String {
        (**self).expected()
    }
}

/// Returns the string form of string-like values, `None` for everything else.
pub(crate) fn str_val(value: &Value) -> Option<String> {
    match value {
        Value::Str(v) => Some(v.clone()),
        Value::Bytes(v) => Some(String::from_utf8_lossy(v).into_owned()),
        _ => None,
    }
}

/// A value that can stand in for a matcher.
///
/// This is the input to the coercion performed by [`of`] and by the
/// [`and`]/[`or`] combinators. The [`From`] conversions keep combinators
/// concrete so that a composing parent can flag them as nested.
pub enum Arg {
    /// A ready matcher, used unchanged.
    Matcher(Box<dyn Matcher>),
    /// An [`And`] combinator, kept concrete for nesting.
    And(And),
    /// An [`Or`] combinator, kept concrete for nesting.
    Or(Or),
    /// A factory, wrapped as a [`Callback`] matcher.
    Factory(Box<dyn Fn() -> Box<dyn Matcher>>),
    /// A compiled regular expression, wrapped as a [`Regex`] matcher.
    Regex(::regex::Regex),
    /// A bare value, wrapped as an [`Equal`] matcher.
    Value(Value),
}

impl Arg {
    /// Captures any [`Display`](std::fmt::Display) value as its rendered
    /// string, to be matched by string equality.
    pub fn display(value: impl std::fmt::Display) -> Self {
        Self::Value(Value::Str(value.to_string()))
    }

    pub(crate) fn into_matcher(self) -> Box<dyn Matcher> {
        match self {
            Self::Matcher(matcher) => matcher,
            Self::And(matcher) => Box::new(matcher),
            Self::Or(matcher) => Box::new(matcher),
            Self::Factory(factory) => Box::new(Callback(factory)),
            Self::Regex(pattern) => Box::new(regex(pattern)),
            Self::Value(Value::Regex(pattern)) => Box::new(regex(pattern)),
            Self::Value(value) => Box::new(eq(value)),
        }
    }

    pub(crate) fn into_nested_matcher(self) -> Box<dyn Matcher> {
        match self {
            Self::And(matcher) => Box::new(matcher.nested()),
            Self::Or(matcher) => Box::new(matcher.nested()),
            other => other.into_matcher(),
        }
    }
}

/// Coerces an arbitrary value into a matcher.
///
/// The precedence is fixed: a ready matcher is used unchanged, a factory is
/// wrapped as [`Callback`], a compiled regular expression (by value or by
/// reference, including [`Value::Regex`]) becomes a [`Regex`] matcher, a
/// string captured with [`Arg::display`] is matched by equality against that
/// string, and any other value falls back to [`Equal`].
pub fn of(value: impl Into<Arg>) -> Box<dyn Matcher> {
    value.into().into_matcher()
}

macro_rules! impl_arg_from_matcher {
    ($( $ty:ident ),+ $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(matcher: $ty) -> Self {
                    Self::Matcher(Box::new(matcher))
                }
            }
        )+
    };
}

impl_arg_from_matcher!(Any, Equal, Json, Regex, IsType, Len, IsEmpty, IsNotEmpty);

impl From<And> for Arg {
    fn from(matcher: And) -> Self {
        Self::And(matcher)
    }
}

impl From<Or> for Arg {
    fn from(matcher: Or) -> Self {
        Self::Or(matcher)
    }
}

impl From<Box<dyn Matcher>> for Arg {
    fn from(matcher: Box<dyn Matcher>) -> Self {
        Self::Matcher(matcher)
    }
}

impl<F> From<Func<F>> for Arg
where
    F: Fn(&Value) -> Result<bool, Error> + 'static,
{
    fn from(matcher: Func<F>) -> Self {
        Self::Matcher(Box::new(matcher))
    }
}

impl<F> From<Callback<F>> for Arg
where
    F: Fn() -> Box<dyn Matcher> + 'static,
{
    fn from(matcher: Callback<F>) -> Self {
        Self::Factory(Box::new(matcher.0))
    }
}

impl From<::regex::Regex> for Arg {
    fn from(pattern: ::regex::Regex) -> Self {
        Self::Regex(pattern)
    }
}

impl From<&::regex::Regex> for Arg {
    fn from(pattern: &::regex::Regex) -> Self {
        Self::Regex(pattern.clone())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

macro_rules! impl_arg_from_value {
    ($( $ty:ty ),+ $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Self::Value(Value::from(value))
                }
            }
        )+
    };
}

impl_arg_from_value!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, &str, String, Vec<u8>,
    &[u8], Vec<Value>,
);
