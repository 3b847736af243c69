//! Runtime shapes and capability tags.
//!
//! A [`Shape`] is the dispatch key of the dynamic layer: every
//! [`Value`](super::Value) has exactly one, and a conformance is found by exact
//! shape match. Tuple arities are distinct shapes and records are told apart
//! by name.

use std::fmt;
use std::sync::Arc;

use super::error::{AlgebraError, Result};
use super::value::Value;

/// The runtime category of a [`Value`](super::Value).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// A callable with a fixed arity.
    Function,
    /// A 64-bit signed integer.
    Integer,
    /// A 64-bit float.
    Float,
    /// A UTF-8 string.
    Text,
    /// An ordered list.
    Sequence,
    /// A key/value map.
    Mapping,
    /// A set of unique elements.
    Set,
    /// A fixed-size tuple of the given arity.
    Tuple(usize),
    /// A user-defined record with the given name.
    Record(Arc<str>),
}

impl Shape {
    /// The shape of records named `name`.
    pub fn record(name: impl Into<Arc<str>>) -> Self {
        Self::Record(name.into())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => formatter.write_str("function"),
            Self::Integer => formatter.write_str("integer"),
            Self::Float => formatter.write_str("float"),
            Self::Text => formatter.write_str("text"),
            Self::Sequence => formatter.write_str("sequence"),
            Self::Mapping => formatter.write_str("mapping"),
            Self::Set => formatter.write_str("set"),
            Self::Tuple(arity) => write!(formatter, "tuple/{arity}"),
            Self::Record(name) => write!(formatter, "record {name}"),
        }
    }
}

/// One algebraic capability.
///
/// Capabilities form a strict hierarchy; [`Capability::prerequisite`] names
/// the one each capability builds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// Equivalence.
    Setoid,
    /// Total order, requires [`Capability::Setoid`].
    Ord,
    /// Morphism composition.
    Semigroupoid,
    /// Identity morphisms, requires [`Capability::Semigroupoid`].
    Category,
    /// Lifting plain functions, requires [`Capability::Category`].
    Arrow,
    /// Associative combination.
    Semigroup,
    /// Identity element, requires [`Capability::Semigroup`].
    Monoid,
    /// Structure-preserving mapping.
    Functor,
    /// Applicative combination, requires [`Capability::Functor`].
    Apply,
}

impl Capability {
    /// Every capability, prerequisites before dependents.
    pub const ALL: [Self; 9] = [
        Self::Setoid,
        Self::Ord,
        Self::Semigroupoid,
        Self::Category,
        Self::Arrow,
        Self::Semigroup,
        Self::Monoid,
        Self::Functor,
        Self::Apply,
    ];

    /// The capability this one requires, if any.
    pub const fn prerequisite(self) -> Option<Self> {
        match self {
            Self::Ord => Some(Self::Setoid),
            Self::Category => Some(Self::Semigroupoid),
            Self::Arrow => Some(Self::Category),
            Self::Monoid => Some(Self::Semigroup),
            Self::Apply => Some(Self::Functor),
            Self::Setoid | Self::Semigroupoid | Self::Semigroup | Self::Functor => None,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Setoid => "Setoid",
            Self::Ord => "Ord",
            Self::Semigroupoid => "Semigroupoid",
            Self::Category => "Category",
            Self::Arrow => "Arrow",
            Self::Semigroup => "Semigroup",
            Self::Monoid => "Monoid",
            Self::Functor => "Functor",
            Self::Apply => "Apply",
        };
        formatter.write_str(name)
    }
}

/// Returns the common shape of two operands, or a
/// [`AlgebraError::ShapeMismatch`] naming `operation`.
pub(crate) fn same_shape(operation: &'static str, left: &Value, right: &Value) -> Result<Shape> {
    let expected = left.shape();
    let found = right.shape();
    if expected == found {
        Ok(expected)
    } else {
        Err(AlgebraError::mismatch(operation, expected, found))
    }
}
