//! The tagged value of the dynamic layer.

use std::cmp;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::error::{AlgebraError, Result};
use super::func::Func;
use super::record::Record;
use super::shape::Shape;

/// A value whose shape is known only at runtime.
///
/// `Value` implements the standard `Eq` and `Ord` structurally (floats by
/// `total_cmp`, functions by identity) so it can key a [`BTreeMap`] or live in
/// a [`BTreeSet`]. Algebraic comparison goes through
/// [`Registry::compare`](super::Registry::compare) instead, which honours
/// record conformances and rejects mismatched shapes.
///
/// `Display` renders values the way they would be written:
///
/// ```rust
/// use algebars::dynamic::Value;
///
/// let pair = Value::tuple([Value::from(1), Value::text("one")]);
/// assert_eq!(pair.to_string(), "(1, \"one\")");
/// assert_eq!(Value::from(42).to_string(), "42");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// See [`Shape::Integer`].
    Integer(i64),
    /// See [`Shape::Float`].
    Float(f64),
    /// See [`Shape::Text`].
    Text(String),
    /// See [`Shape::Sequence`].
    Sequence(Vec<Value>),
    /// See [`Shape::Mapping`].
    Mapping(BTreeMap<Value, Value>),
    /// See [`Shape::Set`].
    Set(BTreeSet<Value>),
    /// See [`Shape::Tuple`]; the arity is the slot count.
    Tuple(Vec<Value>),
    /// See [`Shape::Function`].
    Function(Func),
    /// See [`Shape::Record`].
    Record(Record),
}

impl Value {
    /// Creates a text value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a sequence.
    pub fn sequence(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Creates a tuple.
    pub fn tuple(slots: impl IntoIterator<Item = Self>) -> Self {
        Self::Tuple(slots.into_iter().collect())
    }

    /// Creates a mapping. Later entries replace earlier ones with the same key.
    pub fn mapping(entries: impl IntoIterator<Item = (Self, Self)>) -> Self {
        Self::Mapping(entries.into_iter().collect())
    }

    /// Creates a set.
    pub fn set(elements: impl IntoIterator<Item = Self>) -> Self {
        Self::Set(elements.into_iter().collect())
    }

    /// Wraps a unary closure as a function value.
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(Self) -> Result<Self> + Send + Sync + 'static,
    {
        Self::Function(Func::unary(body))
    }

    /// The shape this value dispatches on.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Integer(_) => Shape::Integer,
            Self::Float(_) => Shape::Float,
            Self::Text(_) => Shape::Text,
            Self::Sequence(_) => Shape::Sequence,
            Self::Mapping(_) => Shape::Mapping,
            Self::Set(_) => Shape::Set,
            Self::Tuple(slots) => Shape::Tuple(slots.len()),
            Self::Function(_) => Shape::Function,
            Self::Record(record) => record.shape(),
        }
    }

    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless the value is an integer.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Self::Integer(value) => Ok(*value),
            other => Err(AlgebraError::mismatch("as_integer", Shape::Integer, other.shape())),
        }
    }

    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless the value is a float.
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Self::Float(value) => Ok(*value),
            other => Err(AlgebraError::mismatch("as_float", Shape::Float, other.shape())),
        }
    }

    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless the value is text.
    pub fn as_text(&self) -> Result<&str> {
        match self {
            Self::Text(text) => Ok(text),
            other => Err(AlgebraError::mismatch("as_text", Shape::Text, other.shape())),
        }
    }

    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless the value is a sequence.
    pub fn as_sequence(&self) -> Result<&[Self]> {
        match self {
            Self::Sequence(elements) => Ok(elements),
            other => Err(AlgebraError::mismatch("as_sequence", Shape::Sequence, other.shape())),
        }
    }

    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless the value is a function.
    pub fn as_function(&self) -> Result<&Func> {
        match self {
            Self::Function(function) => Ok(function),
            other => Err(AlgebraError::mismatch("as_function", Shape::Function, other.shape())),
        }
    }

    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless the value is a record.
    pub fn as_record(&self) -> Result<&Record> {
        match self {
            Self::Record(record) => Ok(record),
            other => Err(AlgebraError::mismatch("as_record", "record", other.shape())),
        }
    }

    /// Consumes a record value.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless the value is a record.
    pub fn into_record(self) -> Result<Record> {
        match self {
            Self::Record(record) => Ok(record),
            other => Err(AlgebraError::mismatch("into_record", "record", other.shape())),
        }
    }

    /// Splits a two-slot tuple.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless the value is a `tuple/2`.
    pub fn into_pair(self) -> Result<(Self, Self)> {
        match self {
            Self::Tuple(slots) => match <[Self; 2]>::try_from(slots) {
                Ok([left, right]) => Ok((left, right)),
                Err(slots) => Err(AlgebraError::mismatch(
                    "into_pair",
                    Shape::Tuple(2),
                    Shape::Tuple(slots.len()),
                )),
            },
            other => Err(AlgebraError::mismatch("into_pair", Shape::Tuple(2), other.shape())),
        }
    }

    /// Builds a two-slot tuple.
    pub fn pair(left: Self, right: Self) -> Self {
        Self::Tuple(vec![left, right])
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Integer(_) => 0,
            Self::Float(_) => 1,
            Self::Text(_) => 2,
            Self::Sequence(_) => 3,
            Self::Mapping(_) => 4,
            Self::Set(_) => 5,
            Self::Tuple(_) => 6,
            Self::Function(_) => 7,
            Self::Record(_) => 8,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left.cmp(right),
            (Self::Float(left), Self::Float(right)) => left.total_cmp(right),
            (Self::Text(left), Self::Text(right)) => left.cmp(right),
            (Self::Sequence(left), Self::Sequence(right))
            | (Self::Tuple(left), Self::Tuple(right)) => left.cmp(right),
            (Self::Mapping(left), Self::Mapping(right)) => {
                left.len().cmp(&right.len()).then_with(|| left.cmp(right))
            }
            (Self::Set(left), Self::Set(right)) => {
                left.len().cmp(&right.len()).then_with(|| left.cmp(right))
            }
            (Self::Function(left), Self::Function(right)) => left.cmp(right),
            (Self::Record(left), Self::Record(right)) => left.cmp(right),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

fn write_separated<'a>(
    formatter: &mut fmt::Formatter<'_>,
    elements: impl IntoIterator<Item = &'a Value>,
) -> fmt::Result {
    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{element}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
            Self::Text(text) => write!(formatter, "{text:?}"),
            Self::Sequence(elements) => {
                formatter.write_str("[")?;
                write_separated(formatter, elements)?;
                formatter.write_str("]")
            }
            Self::Tuple(slots) => {
                formatter.write_str("(")?;
                write_separated(formatter, slots)?;
                if slots.len() == 1 {
                    formatter.write_str(",")?;
                }
                formatter.write_str(")")
            }
            Self::Mapping(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key} => {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Set(elements) => {
                formatter.write_str("#{")?;
                write_separated(formatter, elements)?;
                formatter.write_str("}")
            }
            Self::Function(function) => write!(formatter, "{function}"),
            Self::Record(record) => write!(formatter, "{record}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Sequence(elements)
    }
}

impl From<Func> for Value {
    fn from(function: Func) -> Self {
        Self::Function(function)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}
