//! The [`value`](self) module contains the dynamic value model the matchers
//! operate on.
//!
//! A [`Value`] is an explicit tagged union over the kinds of data an
//! expectation can be checked against. Matchers never inspect host types
//! directly; callers convert their data into a [`Value`] (usually through the
//! provided [`From`] conversions) and the matchers dispatch on the variant.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// A dynamically typed value that matchers can be evaluated against.
///
/// Equality is deep and variant sensitive: differently typed but equal valued
/// primitives are unequal, containers compare element wise, pointers compare
/// by pointee and compiled regular expressions compare by pattern source.
#[derive(Clone, Debug)]
pub enum Value {
    /// The absence of a value.
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// Key-value entries. Entry order is insignificant for equality.
    Map(Vec<(Value, Value)>),
    /// A named aggregate with ordered, named fields.
    Record(Record),
    /// One level of nullable pointer indirection. The pointee is borrowed
    /// read-only during a match and never retained.
    Ptr(Option<Box<Value>>),
    /// A raw JSON payload, used verbatim instead of being re-encoded.
    Json(String),
    /// A compiled regular expression carried as a value.
    Regex(regex::Regex),
}

impl Value {
    /// Creates a sequence value from the passed items.
    pub fn seq<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Creates a map value from the passed entries.
    pub fn map<E, K, V>(entries: E) -> Self
    where
        E: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates a record value with the passed type name and fields.
    pub fn record<N, F, K, V>(name: N, fields: F) -> Self
    where
        N: Into<String>,
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Record(Record::new(name, fields))
    }

    /// Creates a byte string value.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Creates a raw JSON payload value.
    pub fn json(payload: impl Into<String>) -> Self {
        Self::Json(payload.into())
    }

    /// Creates a non-nil pointer to the passed value.
    pub fn some(pointee: impl Into<Value>) -> Self {
        Self::Ptr(Some(Box::new(pointee.into())))
    }

    /// Creates a nil pointer.
    #[must_use]
    pub fn none() -> Self {
        Self::Ptr(None)
    }

    /// Returns the runtime type descriptor of the value.
    #[must_use]
    pub fn type_of(&self) -> Type {
        match self {
            Self::Nil => Type::Nil,
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Uint(_) => Type::Uint,
            Self::Float(_) => Type::Float,
            Self::Str(_) => Type::Str,
            Self::Bytes(_) => Type::Bytes,
            Self::Seq(_) => Type::Seq,
            Self::Map(_) => Type::Map,
            Self::Record(record) => Type::Record(record.name.clone()),
            Self::Ptr(Some(pointee)) => Type::Ptr(Box::new(pointee.type_of())),
            // A dynamic nil pointer carries no pointee type.
            Self::Ptr(None) => Type::Nil,
            Self::Json(_) => Type::Json,
            Self::Regex(_) => Type::Regex,
        }
    }

    /// Returns the element count of a sized container, `None` for everything
    /// else. `Str`, `Bytes` and `Json` count bytes, `Seq` and `Map` count
    /// elements.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Str(v) => Some(v.len()),
            Self::Bytes(v) => Some(v.len()),
            Self::Seq(v) => Some(v.len()),
            Self::Map(v) => Some(v.len()),
            Self::Json(v) => Some(v.len()),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Nil`](Self::Nil).
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` if the value equals the zero value of its type.
    pub(crate) fn is_zero(&self) -> bool {
        match self {
            Self::Nil | Self::Ptr(None) => true,
            Self::Bool(v) => !v,
            Self::Int(v) => *v == 0,
            Self::Uint(v) => *v == 0,
            Self::Float(v) => *v == 0.0,
            Self::Str(v) => v.is_empty(),
            Self::Bytes(v) => v.is_empty(),
            Self::Seq(v) => v.is_empty(),
            Self::Map(v) => v.is_empty(),
            Self::Json(v) => v.is_empty(),
            Self::Record(record) => record.fields.iter().all(|(_, v)| v.is_zero()),
            Self::Ptr(Some(_)) | Self::Regex(_) => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Seq(a), Self::Seq(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => map_eq(a, b),
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::Ptr(a), Self::Ptr(b)) => a == b,
            (Self::Json(a), Self::Json(b)) => a == b,
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

fn map_eq(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, value)| b.iter().any(|(k, v)| k == key && v == value))
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Nil | Self::Ptr(None) => f.write_str("nil"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::Bytes(bytes) => {
                f.write_str("[")?;

                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{byte}")?;
                }

                f.write_str("]")
            }
            Self::Seq(items) => {
                f.write_str("[")?;

                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{item}")?;
                }

                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;

                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                f.write_str("}")
            }
            Self::Record(record) => {
                f.write_str("{")?;

                for (i, (_, value)) in record.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    write!(f, "{value}")?;
                }

                f.write_str("}")
            }
            Self::Ptr(Some(pointee)) => write!(f, "&{pointee}"),
            Self::Json(payload) => f.write_str(payload),
            Self::Regex(regex) => f.write_str(regex.as_str()),
        }
    }
}

/// A named aggregate value with ordered, named fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates a new [`Record`] with the passed type name and fields.
    pub fn new<N, F, K, V>(name: N, fields: F) -> Self
    where
        N: Into<String>,
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the type name of the record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields of the record.
    #[must_use]
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }
}

/// The runtime type descriptor of a [`Value`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Nil,
    Bool,
    Int,
    Uint,
    Float,
    Str,
    Bytes,
    Seq,
    Map,
    /// A record type, identified by its name.
    Record(String),
    /// A pointer type, identified by its pointee type.
    Ptr(Box<Type>),
    Json,
    Regex,
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Uint => f.write_str("uint"),
            Self::Float => f.write_str("float"),
            Self::Str => f.write_str("string"),
            Self::Bytes => f.write_str("bytes"),
            Self::Seq => f.write_str("seq"),
            Self::Map => f.write_str("map"),
            Self::Record(name) => f.write_str(name),
            Self::Ptr(pointee) => write!(f, "*{pointee}"),
            Self::Json => f.write_str("json"),
            Self::Regex => f.write_str("regex"),
        }
    }
}

/// Maps a Rust type to the [`Type`] descriptor its values convert to.
///
/// This is what allows [`is_type`](crate::matcher::is_type) to name a target
/// type without a sample value at hand.
pub trait Typed {
    /// Returns the type descriptor.
    fn type_of() -> Type;
}

macro_rules! impl_typed {
    ($( $ty:ty => $type_of:expr ),+ $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_of() -> Type {
                    $type_of
                }
            }
        )+
    };
}

impl_typed!(
    () => Type::Nil,
    bool => Type::Bool,
    i8 => Type::Int,
    i16 => Type::Int,
    i32 => Type::Int,
    i64 => Type::Int,
    isize => Type::Int,
    u8 => Type::Uint,
    u16 => Type::Uint,
    u32 => Type::Uint,
    u64 => Type::Uint,
    usize => Type::Uint,
    f32 => Type::Float,
    f64 => Type::Float,
    &str => Type::Str,
    String => Type::Str,
    Vec<u8> => Type::Bytes,
    Vec<Value> => Type::Seq,
    regex::Regex => Type::Regex,
);

impl<T: Typed> Typed for Option<T> {
    fn type_of() -> Type {
        Type::Ptr(Box::new(T::type_of()))
    }
}

macro_rules! impl_from_int {
    ($( $ty:ty ),+ => $variant:ident as $as:ty) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value as $as)
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, isize => Int as i64);
impl_from_int!(u8, u16, u32, u64, usize => Uint as u64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Seq(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<regex::Regex> for Value {
    fn from(value: regex::Regex) -> Self {
        Self::Regex(value)
    }
}

impl From<&regex::Regex> for Value {
    fn from(value: &regex::Regex) -> Self {
        Self::Regex(value.clone())
    }
}
