//! Associative combination and identity elements over [`Value`]s.

use super::error::{AlgebraError, Result};
use super::func::Func;
use super::registry::Registry;
use super::shape::{Capability, same_shape};
use super::value::Value;

impl Registry {
    /// Combines two values of the same shape.
    ///
    /// | Shape    | Combination                        |
    /// |----------|------------------------------------|
    /// | integer  | wrapping addition                  |
    /// | float    | addition                           |
    /// | text     | concatenation                      |
    /// | sequence | concatenation                      |
    /// | mapping  | merge, `right` wins on shared keys |
    /// | set      | union                              |
    /// | tuple    | slot-wise `append`                 |
    /// | function | `left` runs first, then `right`    |
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::ShapeMismatch`] when the shapes differ
    /// - [`AlgebraError::NoConformance`] when the shape, or a tuple slot, has
    ///   no Semigroup
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::dynamic::{Registry, Value};
    ///
    /// let registry = Registry::builtin();
    /// let left = Value::tuple([Value::text("a"), Value::from(1)]);
    /// let right = Value::tuple([Value::text("b"), Value::from(2)]);
    /// assert_eq!(
    ///     registry.append(left, right),
    ///     Ok(Value::tuple([Value::text("ab"), Value::from(3)]))
    /// );
    /// ```
    pub fn append(&self, left: Value, right: Value) -> Result<Value> {
        let shape = same_shape("append", &left, &right)?;
        self.require(Capability::Semigroup, &shape)?;

        match (left, right) {
            (Value::Integer(left), Value::Integer(right)) => {
                Ok(Value::Integer(left.wrapping_add(right)))
            }
            (Value::Float(left), Value::Float(right)) => Ok(Value::Float(left + right)),
            (Value::Text(mut left), Value::Text(right)) => {
                left.push_str(&right);
                Ok(Value::Text(left))
            }
            (Value::Sequence(mut left), Value::Sequence(right)) => {
                left.extend(right);
                Ok(Value::Sequence(left))
            }
            (Value::Mapping(mut left), Value::Mapping(right)) => {
                left.extend(right);
                Ok(Value::Mapping(left))
            }
            (Value::Set(mut left), Value::Set(right)) => {
                left.extend(right);
                Ok(Value::Set(left))
            }
            (Value::Tuple(left), Value::Tuple(right)) => left
                .into_iter()
                .zip(right)
                .map(|(left, right)| self.append(left, right))
                .collect::<Result<Vec<_>>>()
                .map(Value::Tuple),
            (Value::Function(first), Value::Function(then)) => {
                Ok(Value::Function(Func::new(first.arity(), move |arguments| {
                    then.apply(first.call(arguments)?)
                })))
            }
            (left @ Value::Record(_), right) => {
                let append =
                    self.record(Capability::Semigroup, &shape, |found| found.append.as_ref())?;
                append(self, left, right)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Semigroup, shape)),
        }
    }

    /// The identity element for the shape of `sample`.
    ///
    /// Tuples yield a tuple of slot-wise identities; functions yield the
    /// identity function.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoConformance`] when the shape, or a tuple slot, has no
    /// Monoid.
    pub fn empty(&self, sample: &Value) -> Result<Value> {
        let shape = sample.shape();
        self.require(Capability::Monoid, &shape)?;

        match sample {
            Value::Integer(_) => Ok(Value::Integer(0)),
            Value::Float(_) => Ok(Value::Float(0.0)),
            Value::Text(_) => Ok(Value::Text(String::new())),
            Value::Sequence(_) => Ok(Value::Sequence(Vec::new())),
            Value::Mapping(_) => Ok(Value::mapping([])),
            Value::Set(_) => Ok(Value::set([])),
            Value::Tuple(slots) => slots
                .iter()
                .map(|slot| self.empty(slot))
                .collect::<Result<Vec<_>>>()
                .map(Value::Tuple),
            Value::Function(_) => Ok(Value::Function(Func::identity())),
            Value::Record(_) => {
                let empty = self.record(Capability::Monoid, &shape, |found| found.empty.as_ref())?;
                empty(self, sample)
            }
        }
    }

    /// Left fold of `append` over a non-empty input.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::EmptyInput`] when `values` is empty, otherwise as
    /// [`Registry::append`].
    pub fn concat(&self, values: impl IntoIterator<Item = Value>) -> Result<Value> {
        let mut values = values.into_iter();
        let first = values
            .next()
            .ok_or(AlgebraError::EmptyInput { operation: "concat" })?;
        self.require_semigroup(&first)?;
        values.try_fold(first, |accumulated, value| self.append(accumulated, value))
    }

    /// Left fold of `append` starting from the identity of `sample`'s shape.
    ///
    /// # Errors
    ///
    /// As [`Registry::empty`] and [`Registry::append`].
    pub fn concat_or_empty(
        &self,
        sample: &Value,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Value> {
        values
            .into_iter()
            .try_fold(self.empty(sample)?, |accumulated, value| {
                self.append(accumulated, value)
            })
    }

    /// Appends `value` to itself until it occurs `times` times.
    ///
    /// `times == 0` yields the identity element and so needs a Monoid.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::NoConformance`] for `Monoid` when `times` is zero and
    ///   the shape has no identity
    /// - otherwise as [`Registry::append`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::dynamic::{Registry, Value};
    ///
    /// let registry = Registry::builtin();
    /// assert_eq!(registry.repeat(Value::text("ab"), 3), Ok(Value::text("ababab")));
    /// assert_eq!(registry.repeat(Value::text("ab"), 0), Ok(Value::text("")));
    /// ```
    pub fn repeat(&self, value: Value, times: usize) -> Result<Value> {
        if times == 0 {
            return self.empty(&value);
        }
        self.require_semigroup(&value)?;
        let mut accumulated = value.clone();
        for _ in 1..times {
            accumulated = self.append(accumulated, value.clone())?;
        }
        Ok(accumulated)
    }

    /// Checks that `value` could take part in `append`, slot by slot for tuples.
    fn require_semigroup(&self, value: &Value) -> Result<()> {
        self.require(Capability::Semigroup, &value.shape())?;
        match value {
            Value::Tuple(slots) => slots
                .iter()
                .try_for_each(|slot| self.require_semigroup(slot)),
            _ => Ok(()),
        }
    }

    /// Whether `value` is equivalent to its shape's identity element.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoConformance`] when the shape lacks Monoid or Setoid.
    pub fn is_empty(&self, value: &Value) -> Result<bool> {
        let empty = self.empty(value)?;
        self.equivalent(&empty, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::{Record, Shape};
    use rstest::rstest;

    #[rstest]
    #[case(Value::from(i64::MAX), Value::from(1), Value::from(i64::MIN))]
    #[case(Value::from(1.5), Value::from(2.0), Value::from(3.5))]
    #[case(Value::text("foo"), Value::text("bar"), Value::text("foobar"))]
    #[case(
        Value::sequence([Value::from(1)]),
        Value::sequence([Value::from(2)]),
        Value::sequence([Value::from(1), Value::from(2)])
    )]
    #[case(
        Value::set([Value::from(1), Value::from(2)]),
        Value::set([Value::from(2), Value::from(3)]),
        Value::set([Value::from(1), Value::from(2), Value::from(3)])
    )]
    fn builtin_append(#[case] left: Value, #[case] right: Value, #[case] expected: Value) {
        assert_eq!(Registry::builtin().append(left, right), Ok(expected));
    }

    #[rstest]
    fn mapping_merge_is_right_biased() {
        let left = Value::mapping([
            (Value::text("a"), Value::from(1)),
            (Value::text("b"), Value::from(2)),
        ]);
        let right = Value::mapping([(Value::text("b"), Value::from(20))]);
        assert_eq!(
            Registry::builtin().append(left, right),
            Ok(Value::mapping([
                (Value::text("a"), Value::from(1)),
                (Value::text("b"), Value::from(20)),
            ]))
        );
    }

    #[rstest]
    fn function_append_runs_left_first() {
        let registry = Registry::builtin();
        let add_one = Value::unary(|value| Ok(Value::from(value.as_integer()? + 1)));
        let double = Value::unary(|value| Ok(Value::from(value.as_integer()? * 2)));
        let pipeline = registry.append(add_one, double).unwrap();
        assert_eq!(pipeline.as_function().unwrap().apply(Value::from(5)), Ok(Value::from(12)));
    }

    #[rstest]
    fn tuple_slot_without_semigroup_fails() {
        let opaque = Value::from(Record::new("Opaque"));
        let left = Value::tuple([opaque.clone(), Value::from(1)]);
        let right = Value::tuple([opaque, Value::from(1)]);
        assert_eq!(
            Registry::builtin().append(left, right),
            Err(AlgebraError::no_conformance(Capability::Semigroup, Shape::record("Opaque")))
        );
    }

    #[rstest]
    #[case(Value::from(Record::new("Opaque")))]
    #[case(Value::tuple([Value::from(Record::new("Opaque")), Value::from(1)]))]
    fn single_value_without_semigroup_fails(#[case] value: Value) {
        let registry = Registry::builtin();
        let expected = Err(AlgebraError::no_conformance(
            Capability::Semigroup,
            Shape::record("Opaque"),
        ));
        assert_eq!(registry.concat([value.clone()]), expected);
        assert_eq!(registry.repeat(value, 1), expected);
    }

    #[rstest]
    fn single_value_concat_returns_it() {
        let registry = Registry::builtin();
        let pair = Value::tuple([Value::text("solo"), Value::from(1)]);
        assert_eq!(registry.concat([pair.clone()]), Ok(pair.clone()));
        assert_eq!(registry.repeat(pair.clone(), 1), Ok(pair));
    }

    #[rstest]
    fn tuple_slots_must_match() {
        let left = Value::tuple([Value::Function(Func::identity()), Value::from(1)]);
        let right = Value::tuple([Value::from(1), Value::from(1)]);
        assert!(matches!(
            Registry::builtin().append(left, right),
            Err(AlgebraError::ShapeMismatch { operation: "append", .. })
        ));
    }

    #[rstest]
    fn record_without_conformance_fails() {
        let record = Value::from(Record::new("Opaque"));
        assert_eq!(
            Registry::builtin().append(record.clone(), record),
            Err(AlgebraError::no_conformance(Capability::Semigroup, Shape::record("Opaque")))
        );
    }

    #[rstest]
    #[case(Value::from(7), Value::from(0))]
    #[case(Value::from(7.5), Value::from(0.0))]
    #[case(Value::text("x"), Value::text(""))]
    #[case(
        Value::tuple([Value::text("x"), Value::sequence([Value::from(1)])]),
        Value::tuple([Value::text(""), Value::sequence([])])
    )]
    fn builtin_empty(#[case] sample: Value, #[case] expected: Value) {
        assert_eq!(Registry::builtin().empty(&sample), Ok(expected));
    }

    #[rstest]
    fn function_empty_is_identity() {
        let sample = Value::Function(Func::identity());
        let empty = Registry::builtin().empty(&sample).unwrap();
        assert_eq!(empty.as_function().unwrap().apply(Value::from(9)), Ok(Value::from(9)));
    }

    #[rstest]
    fn concat_folds_left() {
        let registry = Registry::builtin();
        let words = ["a", "b", "c"].map(Value::text);
        assert_eq!(registry.concat(words), Ok(Value::text("abc")));
    }

    #[rstest]
    fn concat_of_nothing_fails() {
        assert_eq!(
            Registry::builtin().concat(Vec::new()),
            Err(AlgebraError::EmptyInput { operation: "concat" })
        );
    }

    #[rstest]
    fn concat_or_empty_of_nothing_is_identity() {
        let registry = Registry::builtin();
        assert_eq!(registry.concat_or_empty(&Value::from(1), []), Ok(Value::from(0)));
    }

    #[rstest]
    fn repeat_zero_without_monoid_fails() {
        let registry = Registry::builder()
            .semigroup("Max", |_, left, right| Ok(left.max(right)))
            .build()
            .unwrap();
        let record = Value::from(Record::new("Max").with("value", 1));
        assert_eq!(registry.repeat(record.clone(), 2), Ok(record.clone()));
        assert_eq!(
            registry.repeat(record, 0),
            Err(AlgebraError::no_conformance(Capability::Monoid, Shape::record("Max")))
        );
    }

    #[rstest]
    #[case(Value::from(0), true)]
    #[case(Value::from(1), false)]
    #[case(Value::sequence([]), true)]
    #[case(Value::tuple([Value::text(""), Value::from(0)]), true)]
    fn is_empty(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(Registry::builtin().is_empty(&value), Ok(expected));
    }

    #[rstest]
    fn is_empty_on_function_needs_setoid() {
        let function = Value::Function(Func::identity());
        assert_eq!(
            Registry::builtin().is_empty(&function),
            Err(AlgebraError::no_conformance(Capability::Setoid, Shape::Function))
        );
    }
}
