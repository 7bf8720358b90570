use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::Value as JsonValue;

use crate::{Error, Value};

use super::Matcher;

/// JSON string value that matches any value at its position.
pub const IGNORE_DIFF: &str = "<ignore-diff>";

/// Creates a [`Json`] matcher.
///
/// String-like expectations are used as JSON text verbatim, everything else
/// is marshaled at construction time.
///
/// # Panics
/// Panics if `expected` cannot be represented as JSON.
pub fn json(expected: impl Into<Value>) -> Json {
    let expected = expected.into();

    match json_text(&expected) {
        Ok(expected) => Json { expected },
        Err(err) => panic!("{err}"),
    }
}

/// Matches by JSON-semantic equality with [`IGNORE_DIFF`] support.
///
/// Key order and insignificant whitespace are ignored. An expectation value
/// equal to `"<ignore-diff>"` matches any value at the same position, at any
/// nesting depth.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json {
    expected: String,
}

impl Matcher for Json {
    fn matches(&self, actual: &Value) -> Result<bool, Error> {
        let actual = json_text(actual)?;

        let (Ok(expected), Ok(actual)) = (
            serde_json::from_str::<JsonValue>(&self.expected),
            serde_json::from_str::<JsonValue>(&actual),
        ) else {
            // Unparseable payloads cannot be equal, but they are not an error.
            return Ok(false);
        };

        Ok(json_equal(&expected, &actual))
    }

    fn expected(&self) -> String {
        self.expected.clone()
    }
}

impl Display for Json {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.expected)
    }
}

/// Renders a value as JSON text. `Str`, `Bytes` and `Json` payloads are used
/// verbatim, everything else is marshaled.
fn json_text(value: &Value) -> Result<String, Error> {
    match value {
        Value::Str(v) => Ok(v.clone()),
        Value::Bytes(v) => Ok(String::from_utf8_lossy(v).into_owned()),
        Value::Json(v) => Ok(v.clone()),
        _ => Ok(marshal(value)?.to_string()),
    }
}

fn marshal(value: &Value) -> Result<JsonValue, Error> {
    match value {
        Value::Nil | Value::Ptr(None) => Ok(JsonValue::Null),
        Value::Bool(v) => Ok(JsonValue::Bool(*v)),
        Value::Int(v) => Ok(JsonValue::from(*v)),
        Value::Uint(v) => Ok(JsonValue::from(*v)),
        Value::Float(v) => serde_json::Number::from_f64(*v)
            .map(JsonValue::Number)
            .ok_or_else(|| Error::UnsupportedJson(value.type_of())),
        Value::Str(v) => Ok(JsonValue::String(v.clone())),
        Value::Bytes(v) => Ok(JsonValue::String(String::from_utf8_lossy(v).into_owned())),
        Value::Seq(items) => items
            .iter()
            .map(marshal)
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Value::Map(entries) => {
            let mut map = serde_json::Map::with_capacity(entries.len());

            for (key, entry) in entries {
                let key = match key {
                    Value::Str(key) => key.clone(),
                    other => other.to_string(),
                };

                map.insert(key, marshal(entry)?);
            }

            Ok(JsonValue::Object(map))
        }
        Value::Record(record) => {
            let mut map = serde_json::Map::with_capacity(record.fields().len());

            for (name, field) in record.fields() {
                map.insert(name.clone(), marshal(field)?);
            }

            Ok(JsonValue::Object(map))
        }
        Value::Ptr(Some(pointee)) => marshal(pointee),
        Value::Json(v) => {
            serde_json::from_str(v).map_err(|_| Error::UnsupportedJson(value.type_of()))
        }
        Value::Regex(_) => Err(Error::UnsupportedJson(value.type_of())),
    }
}

fn json_equal(expected: &JsonValue, actual: &JsonValue) -> bool {
    match expected {
        JsonValue::String(v) if v == IGNORE_DIFF => true,
        JsonValue::Array(expected) => actual.as_array().is_some_and(|actual| {
            expected.len() == actual.len()
                && expected.iter().zip(actual).all(|(e, a)| json_equal(e, a))
        }),
        JsonValue::Object(expected) => actual.as_object().is_some_and(|actual| {
            expected.len() == actual.len()
                && expected
                    .iter()
                    .all(|(key, e)| actual.get(key).is_some_and(|a| json_equal(e, a)))
        }),
        _ => expected == actual,
    }
}
