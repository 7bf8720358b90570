//! Composable value matchers for test assertions and mocks.
//!
//! A matcher judges whether an observed [`Value`] satisfies an expectation
//! and describes that expectation for failure messages. Matchers are
//! immutable once constructed and can be combined into boolean expressions
//! with [`and`] and [`or`]; bare values, compiled regular expressions and
//! matcher factories are coerced into matchers automatically.
//!
//! ```
//! use matchkit::{len, or, regex, Matcher, Value};
//!
//! let m = or((regex("^bar"), len(3)));
//!
//! assert_eq!(Ok(true), m.matches(&Value::from("barry")));
//! assert_eq!("^bar or len is 3", m.expected());
//! ```

pub mod error;
pub mod format;
pub mod matcher;
pub mod value;

pub use error::Error;
pub use matcher::{
    and, any, callback, eq, func, is_empty, is_not_empty, is_type, json, len, of, or, regex,
    same_type_as, wildcard, Arg, Args, Matcher,
};
pub use value::{Record, Type, Typed, Value};
