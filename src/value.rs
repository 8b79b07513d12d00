//! Dynamic specification and draw value types.

use core::fmt;
use std::collections::BTreeMap;

/// A dynamic value inside a parameter specification.
///
/// Raw specifications arrive as already-parsed native values: a mapping
/// (an explicit distribution), a list (shorthand), or a scalar. `Value`
/// represents all of them, and doubles as the element type of candidate
/// lists and draws, so an `enum` sampler over strings yields strings.
///
/// With the `serde` feature enabled, `Value` deserializes untagged: a JSON
/// parameter block maps directly onto `BTreeMap<String, Value>`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// An integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// A mapping of field name to value.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the value as an `f64`, coercing integers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as an `i64`. Floats do not coerce.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a non-negative count.
    #[must_use]
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Int(i) => usize::try_from(*i).ok(),
            _ => None,
        }
    }

    /// Returns the value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a list of values.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the value as a field mapping.
    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Whether the value is an integer.
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Whether the value is an integer or a float.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

pub(crate) fn fmt_list(f: &mut fmt::Formatter<'_>, values: &[Value]) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{value}")?;
    }
    write!(f, "]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::List(items) => fmt_list(f, items),
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// The result of drawing from a sampler.
///
/// A sampler configured with `size == 1` yields a bare scalar; any other
/// size yields the full array of draws. This shape distinction is part of
/// the public contract: callers must not assume either shape without
/// checking the sampler's size.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Samples {
    /// A single scalar draw.
    One(Value),
    /// An array of independent draws.
    Many(Vec<Value>),
}

impl Samples {
    /// Returns the scalar draw, if this is a single-value result.
    #[must_use]
    pub fn one(&self) -> Option<&Value> {
        match self {
            Samples::One(value) => Some(value),
            Samples::Many(_) => None,
        }
    }

    /// Returns the draw array, if this is a bulk result.
    #[must_use]
    pub fn many(&self) -> Option<&[Value]> {
        match self {
            Samples::One(_) => None,
            Samples::Many(values) => Some(values),
        }
    }

    /// Number of values drawn.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Samples::One(_) => 1,
            Samples::Many(values) => values.len(),
        }
    }

    /// Whether no values were drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens the result into a plain vector of draws.
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Samples::One(value) => vec![value],
            Samples::Many(values) => values,
        }
    }
}
