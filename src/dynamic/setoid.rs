//! Equivalence and total order over [`Value`]s.
//!
//! Both operands must have the same shape. Containers compare element by
//! element through the registry, so records nested inside a sequence use
//! their registered conformances.

use super::error::{AlgebraError, Result};
use super::registry::Registry;
use super::shape::{Capability, same_shape};
use super::value::Value;
use crate::typeclass::Ordering;

impl Registry {
    /// Whether `left` and `right` are equivalent.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::ShapeMismatch`] when the shapes differ
    /// - [`AlgebraError::NoConformance`] when the shape has no Setoid
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::dynamic::{Registry, Value};
    ///
    /// let registry = Registry::builtin();
    /// assert_eq!(registry.equivalent(&Value::from(f64::NAN), &Value::from(f64::NAN)), Ok(true));
    /// assert!(registry.equivalent(&Value::from(1), &Value::text("1")).is_err());
    /// ```
    pub fn equivalent(&self, left: &Value, right: &Value) -> Result<bool> {
        let shape = same_shape("equivalent", left, right)?;
        self.require(Capability::Setoid, &shape)?;

        match (left, right) {
            (Value::Integer(left), Value::Integer(right)) => Ok(left == right),
            (Value::Float(left), Value::Float(right)) => Ok(left.total_cmp(right).is_eq()),
            (Value::Text(left), Value::Text(right)) => Ok(left == right),
            (Value::Sequence(left), Value::Sequence(right))
            | (Value::Tuple(left), Value::Tuple(right)) => {
                self.all_equivalent(left.len() == right.len(), left.iter().zip(right))
            }
            (Value::Set(left), Value::Set(right)) => {
                self.all_equivalent(left.len() == right.len(), left.iter().zip(right))
            }
            (Value::Mapping(left), Value::Mapping(right)) => {
                if left.len() != right.len() {
                    return Ok(false);
                }
                for ((left_key, left_value), (right_key, right_value)) in left.iter().zip(right) {
                    if !self.equivalent(left_key, right_key)?
                        || !self.equivalent(left_value, right_value)?
                    {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            (Value::Record(_), _) => {
                let equivalent =
                    self.record(Capability::Setoid, &shape, |found| found.setoid.as_ref())?;
                equivalent(self, left, right)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Setoid, shape)),
        }
    }

    /// Negation of [`Registry::equivalent`].
    ///
    /// # Errors
    ///
    /// As [`Registry::equivalent`].
    pub fn nonequivalent(&self, left: &Value, right: &Value) -> Result<bool> {
        self.equivalent(left, right).map(|equivalent| !equivalent)
    }

    fn all_equivalent<'a>(
        &self,
        same_size: bool,
        pairs: impl Iterator<Item = (&'a Value, &'a Value)>,
    ) -> Result<bool> {
        if !same_size {
            return Ok(false);
        }
        for (left, right) in pairs {
            if !self.equivalent(left, right)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Compares two values of the same shape.
    ///
    /// Sequences and tuples compare lexicographically. Mappings and sets
    /// compare by size first, then entry by entry in key order.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::ShapeMismatch`] when the shapes differ
    /// - [`AlgebraError::NoConformance`] when the shape has no Ord
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::dynamic::{Registry, Value};
    /// use algebars::typeclass::Ordering;
    ///
    /// let registry = Registry::builtin();
    /// let short = Value::sequence([Value::from(1)]);
    /// let long = Value::sequence([Value::from(1), Value::from(0)]);
    /// assert_eq!(registry.compare(&short, &long), Ok(Ordering::Lesser));
    /// ```
    pub fn compare(&self, left: &Value, right: &Value) -> Result<Ordering> {
        let shape = same_shape("compare", left, right)?;
        self.require(Capability::Ord, &shape)?;

        match (left, right) {
            (Value::Integer(left), Value::Integer(right)) => Ok(left.cmp(right).into()),
            (Value::Float(left), Value::Float(right)) => Ok(left.total_cmp(right).into()),
            (Value::Text(left), Value::Text(right)) => Ok(left.cmp(right).into()),
            (Value::Sequence(left), Value::Sequence(right))
            | (Value::Tuple(left), Value::Tuple(right)) => {
                let ordering = self.compare_pairs(left.iter().zip(right))?;
                Ok(ordering.then(|| left.len().cmp(&right.len()).into()))
            }
            (Value::Set(left), Value::Set(right)) => {
                let by_size: Ordering = left.len().cmp(&right.len()).into();
                if !by_size.is_equal() {
                    return Ok(by_size);
                }
                self.compare_pairs(left.iter().zip(right))
            }
            (Value::Mapping(left), Value::Mapping(right)) => {
                let by_size: Ordering = left.len().cmp(&right.len()).into();
                if !by_size.is_equal() {
                    return Ok(by_size);
                }
                for ((left_key, left_value), (right_key, right_value)) in left.iter().zip(right) {
                    let ordering = self.compare(left_key, right_key)?;
                    if !ordering.is_equal() {
                        return Ok(ordering);
                    }
                    let ordering = self.compare(left_value, right_value)?;
                    if !ordering.is_equal() {
                        return Ok(ordering);
                    }
                }
                Ok(Ordering::Equal)
            }
            (Value::Record(_), _) => {
                let compare = self.record(Capability::Ord, &shape, |found| found.ord.as_ref())?;
                compare(self, left, right)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Ord, shape)),
        }
    }

    fn compare_pairs<'a>(
        &self,
        pairs: impl Iterator<Item = (&'a Value, &'a Value)>,
    ) -> Result<Ordering> {
        for (left, right) in pairs {
            let ordering = self.compare(left, right)?;
            if !ordering.is_equal() {
                return Ok(ordering);
            }
        }
        Ok(Ordering::Equal)
    }

    /// `compare(left, right) == Equal`.
    ///
    /// # Errors
    ///
    /// As [`Registry::compare`].
    pub fn equal(&self, left: &Value, right: &Value) -> Result<bool> {
        Ok(self.compare(left, right)? == Ordering::Equal)
    }

    /// `compare(left, right) == Greater`.
    ///
    /// # Errors
    ///
    /// As [`Registry::compare`].
    pub fn greater(&self, left: &Value, right: &Value) -> Result<bool> {
        Ok(self.compare(left, right)? == Ordering::Greater)
    }

    /// `compare(left, right) == Lesser`.
    ///
    /// # Errors
    ///
    /// As [`Registry::compare`].
    pub fn lesser(&self, left: &Value, right: &Value) -> Result<bool> {
        Ok(self.compare(left, right)? == Ordering::Lesser)
    }

    /// `compare(left, right) != Lesser`.
    ///
    /// # Errors
    ///
    /// As [`Registry::compare`].
    pub fn at_least(&self, left: &Value, right: &Value) -> Result<bool> {
        Ok(self.compare(left, right)? != Ordering::Lesser)
    }

    /// `compare(left, right) != Greater`.
    ///
    /// # Errors
    ///
    /// As [`Registry::compare`].
    pub fn at_most(&self, left: &Value, right: &Value) -> Result<bool> {
        Ok(self.compare(left, right)? != Ordering::Greater)
    }
}
