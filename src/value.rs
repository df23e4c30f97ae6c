// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Format used for dates, both when lexing and when rendering them back.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The five scalar kinds a value can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Float,
    Date,
    String,
}

impl Kind {
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int64",
            Kind::Float => "float64",
            Kind::Date => "date",
            Kind::String => "string",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Kind::Bool => "boolean",
            Kind::Int => "integer",
            Kind::Float => "floating-point number",
            Kind::Date => "date",
            Kind::String => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type tag of a stored value: a scalar kind, optionally marked as an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueType {
    pub kind: Kind,
    pub array: bool,
}

impl ValueType {
    pub const fn scalar(kind: Kind) -> Self {
        ValueType { kind, array: false }
    }

    pub const fn array(kind: Kind) -> Self {
        ValueType { kind, array: true }
    }

    /// Human description with an article, e.g. `an array of integers`.
    pub fn description(&self) -> String {
        let noun = self.kind.noun();
        if self.array {
            format!("an array of {}s", noun)
        } else if noun.starts_with(['a', 'e', 'i', 'o', 'u']) {
            format!("an {}", noun)
        } else {
            format!("a {}", noun)
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.array {
            f.write_str("[]")?;
        }
        f.write_str(self.kind.name())
    }
}

/// A typed configuration value: one scalar or a homogeneous array of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(DateTime<Utc>),
    String(String),
    BoolArray(Vec<bool>),
    IntArray(Vec<i64>),
    FloatArray(Vec<f64>),
    DateArray(Vec<DateTime<Utc>>),
    StringArray(Vec<String>),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::scalar(Kind::Bool),
            Value::Int(_) => ValueType::scalar(Kind::Int),
            Value::Float(_) => ValueType::scalar(Kind::Float),
            Value::Date(_) => ValueType::scalar(Kind::Date),
            Value::String(_) => ValueType::scalar(Kind::String),
            Value::BoolArray(_) => ValueType::array(Kind::Bool),
            Value::IntArray(_) => ValueType::array(Kind::Int),
            Value::FloatArray(_) => ValueType::array(Kind::Float),
            Value::DateArray(_) => ValueType::array(Kind::Date),
            Value::StringArray(_) => ValueType::array(Kind::String),
        }
    }

    pub fn kind(&self) -> Kind {
        self.value_type().kind
    }

    pub fn is_array(&self) -> bool {
        self.value_type().array
    }

    /// Gathers scalars into the array variant of `kind`.
    ///
    /// Returns `None` if any element is not a scalar of exactly `kind`.
    pub fn array_of(kind: Kind, items: Vec<Value>) -> Option<Value> {
        fn collect<T>(items: Vec<Value>, f: impl Fn(Value) -> Option<T>) -> Option<Vec<T>> {
            items.into_iter().map(f).collect()
        }

        let array = match kind {
            Kind::Bool => Value::BoolArray(collect(items, |v| match v {
                Value::Bool(b) => Some(b),
                _ => None,
            })?),
            Kind::Int => Value::IntArray(collect(items, |v| match v {
                Value::Int(i) => Some(i),
                _ => None,
            })?),
            Kind::Float => Value::FloatArray(collect(items, |v| match v {
                Value::Float(x) => Some(x),
                _ => None,
            })?),
            Kind::Date => Value::DateArray(collect(items, |v| match v {
                Value::Date(d) => Some(d),
                _ => None,
            })?),
            Kind::String => Value::StringArray(collect(items, |v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })?),
        };
        Some(array)
    }
}

fn join<T>(f: &mut fmt::Formatter<'_>, items: &[T], each: impl Fn(&T) -> String) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(&each(item))?;
    }
    f.write_str("]")
}

fn float(x: &f64) -> String {
    format!("{:.6}", x)
}

fn date(d: &DateTime<Utc>) -> String {
    d.format(DATE_FORMAT).to_string()
}

fn quoted(s: &String) -> String {
    format!("\"{}\"", s)
}

/// Renders the value the way the dump writes it: fixed-point floats, Zulu
/// dates and double-quoted strings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => f.write_str(&float(x)),
            Value::Date(d) => f.write_str(&date(d)),
            Value::String(s) => f.write_str(&quoted(s)),
            Value::BoolArray(items) => join(f, items, |b| b.to_string()),
            Value::IntArray(items) => join(f, items, |i| i.to_string()),
            Value::FloatArray(items) => join(f, items, float),
            Value::DateArray(items) => join(f, items, date),
            Value::StringArray(items) => join(f, items, quoted),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<bool>> for Value {
    fn from(items: Vec<bool>) -> Self {
        Value::BoolArray(items)
    }
}

impl From<Vec<i64>> for Value {
    fn from(items: Vec<i64>) -> Self {
        Value::IntArray(items)
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Value::FloatArray(items)
    }
}

impl From<Vec<DateTime<Utc>>> for Value {
    fn from(items: Vec<DateTime<Utc>>) -> Self {
        Value::DateArray(items)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::StringArray(items)
    }
}
