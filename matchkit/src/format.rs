//! The [`format`](self) module renders [`Value`]s for failure messages.
//!
//! Rendering is controlled by a [`Spec`]: a base [`Verb`] (plain string view,
//! type-qualified default view or quoted view) combined with two independent
//! modifiers, `plus` (verbose) and `sharp` (literal). Two inputs are special
//! cased before the verb is applied: raw JSON payloads render verbatim under
//! every specifier, and compiled regular expressions are rendered as their
//! pattern source.

use std::fmt::{Display, Formatter, Result as FmtResult, Write};

use crate::value::{Type, Value};

/// The base rendering verb.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verb {
    /// The value's natural string form, without type information.
    #[default]
    Str,
    /// The type-qualified view, `type(value)`.
    Default,
    /// The quoted view for string-like values, falling back to
    /// [`Default`](Self::Default) for everything else.
    Quote,
}

/// A format specifier: a [`Verb`] plus the verbose and literal modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spec {
    pub verb: Verb,
    pub plus: bool,
    pub sharp: bool,
}

impl Spec {
    /// Creates a new [`Spec`] with the passed verb and no modifiers.
    #[must_use]
    pub fn new(verb: Verb) -> Self {
        Self {
            verb,
            plus: false,
            sharp: false,
        }
    }

    /// Enables the verbose modifier.
    #[must_use]
    pub fn plus(mut self) -> Self {
        self.plus = true;
        self
    }

    /// Enables the literal modifier.
    #[must_use]
    pub fn sharp(mut self) -> Self {
        self.sharp = true;
        self
    }
}

/// Writes `value` to `w` according to `spec`.
///
/// # Errors
/// Returns an error if writing to the sink failed.
pub fn format<W: Write>(w: &mut W, spec: Spec, value: &Value) -> FmtResult {
    // Raw JSON payloads render verbatim, without a type wrapper or quoting.
    if let Value::Json(payload) = value {
        return w.write_str(payload);
    }

    let converted = match value {
        Value::Regex(regex) => Some(Value::Str(regex.as_str().to_owned())),
        _ => None,
    };
    let shown = converted.as_ref().unwrap_or(value);

    let verb = match spec.verb {
        Verb::Quote if !matches!(shown, Value::Str(_)) => Verb::Default,
        verb => verb,
    };

    match verb {
        Verb::Str => untyped(w, spec, shown),
        Verb::Default => typed(w, spec, &value.type_of(), shown),
        Verb::Quote => quoted(w, spec.sharp, &value.type_of(), shown),
    }
}

/// Renders `value` to a string according to `spec`.
#[must_use]
pub fn to_string(spec: Spec, value: &Value) -> String {
    let mut out = String::new();
    let _ = format(&mut out, spec, value);

    out
}

/// Adapter that renders a value under a [`Spec`] inside `format!`-style
/// macros.
#[must_use]
pub struct Formatted<'a> {
    spec: Spec,
    value: &'a Value,
}

impl<'a> Formatted<'a> {
    /// Creates a new [`Formatted`] adapter for the passed value.
    pub fn new(spec: Spec, value: &'a Value) -> Self {
        Self { spec, value }
    }
}

impl Display for Formatted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        format(f, self.spec, self.value)
    }
}

fn untyped<W: Write>(w: &mut W, spec: Spec, value: &Value) -> FmtResult {
    if spec.plus {
        verbose(w, value)
    } else if spec.sharp {
        literal(w, value)
    } else {
        write!(w, "{value}")
    }
}

fn typed<W: Write>(w: &mut W, spec: Spec, ty: &Type, value: &Value) -> FmtResult {
    if spec.plus {
        write!(w, "{ty}(")?;
        verbose(w, value)?;
        w.write_str(")")
    } else if spec.sharp && is_compound(value) {
        write!(w, "{ty}{{")?;
        literal_body(w, value)?;
        w.write_str("}")
    } else if spec.sharp {
        write!(w, "{ty}(")?;
        literal(w, value)?;
        w.write_str(")")
    } else {
        write!(w, "{ty}({value})")
    }
}

fn quoted<W: Write>(w: &mut W, sharp: bool, ty: &Type, value: &Value) -> FmtResult {
    if sharp {
        write!(w, "{ty}(")?;
        literal(w, value)?;
        w.write_str(")")
    } else {
        literal(w, value)
    }
}

fn is_compound(value: &Value) -> bool {
    matches!(
        value,
        Value::Bytes(_) | Value::Seq(_) | Value::Map(_) | Value::Record(_)
    )
}

/// The natural form with record fields labeled, recursively.
fn verbose<W: Write>(w: &mut W, value: &Value) -> FmtResult {
    match value {
        Value::Seq(items) => {
            w.write_str("[")?;

            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }

                verbose(w, item)?;
            }

            w.write_str("]")
        }
        Value::Map(entries) => {
            w.write_str("{")?;

            for (i, (key, entry)) in entries.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }

                write!(w, "{key}: ")?;
                verbose(w, entry)?;
            }

            w.write_str("}")
        }
        Value::Record(record) => {
            w.write_str("{")?;

            for (i, (name, field)) in record.fields().iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }

                write!(w, "{name}: ")?;
                verbose(w, field)?;
            }

            w.write_str("}")
        }
        Value::Ptr(Some(pointee)) => {
            w.write_str("&")?;
            verbose(w, pointee)
        }
        other => write!(w, "{other}"),
    }
}

/// The debug form: strings quoted and escaped, floats with a decimal point.
fn literal<W: Write>(w: &mut W, value: &Value) -> FmtResult {
    match value {
        Value::Float(v) => write!(w, "{v:?}"),
        Value::Str(v) => write!(w, "{v:?}"),
        Value::Bytes(_) | Value::Seq(_) => {
            w.write_str("[")?;
            literal_body(w, value)?;
            w.write_str("]")
        }
        Value::Map(_) | Value::Record(_) => {
            w.write_str("{")?;
            literal_body(w, value)?;
            w.write_str("}")
        }
        Value::Ptr(Some(pointee)) => {
            w.write_str("&")?;
            literal(w, pointee)
        }
        Value::Regex(regex) => write!(w, "{:?}", regex.as_str()),
        other => write!(w, "{other}"),
    }
}

/// The brace-less body of a compound literal, used for `type{...}` output.
fn literal_body<W: Write>(w: &mut W, value: &Value) -> FmtResult {
    match value {
        Value::Bytes(bytes) => {
            for (i, byte) in bytes.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }

                write!(w, "{byte}")?;
            }

            Ok(())
        }
        Value::Seq(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }

                literal(w, item)?;
            }

            Ok(())
        }
        Value::Map(entries) => {
            for (i, (key, entry)) in entries.iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }

                literal(w, key)?;
                w.write_str(": ")?;
                literal(w, entry)?;
            }

            Ok(())
        }
        Value::Record(record) => {
            for (i, (name, field)) in record.fields().iter().enumerate() {
                if i > 0 {
                    w.write_str(", ")?;
                }

                write!(w, "{name}: ")?;
                literal(w, field)?;
            }

            Ok(())
        }
        other => literal(w, other),
    }
}
