//! Applicative combination over [`Value`]s.
//!
//! [`Registry::convey`] is the primitive and is data-major: for sequences the
//! data is the outer loop and the functions the inner one. [`Registry::ap`]
//! is the function-major counterpart and every `lift` variant is built on it.
//!
//! ```rust
//! use algebars::dynamic::{Registry, Value};
//!
//! let registry = Registry::builtin();
//! let data = Value::sequence([Value::from(1), Value::from(2), Value::from(3)]);
//! let functions = Value::sequence([
//!     Value::unary(|x| Ok(Value::from(x.as_integer()? + 1))),
//!     Value::unary(|x| Ok(Value::from(x.as_integer()? * 10))),
//! ]);
//!
//! let conveyed = registry.convey(data.clone(), functions.clone())?;
//! assert_eq!(conveyed.to_string(), "[2, 10, 3, 20, 4, 30]");
//!
//! let applied = registry.ap(functions, data)?;
//! assert_eq!(applied.to_string(), "[2, 3, 4, 10, 20, 30]");
//! # Ok::<(), algebars::dynamic::AlgebraError>(())
//! ```

use super::error::{AlgebraError, Result};
use super::func::Func;
use super::registry::Registry;
use super::shape::{Capability, same_shape};
use super::value::Value;

impl Registry {
    /// Applies the functions in `functions` to the data in `data`.
    ///
    /// - Sequences: every function over every datum, data-major.
    /// - Tuples of equal arity: leading slots are appended in
    ///   `(data, functions)` order, the last slot of `functions` is applied to
    ///   the last slot of `data`.
    /// - Functions (reader): `x -> functions(x)(data(x))`.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::ShapeMismatch`] for different shapes, different tuple
    ///   arities, or a non-function where a function is expected
    /// - [`AlgebraError::NoConformance`] when the shape has no Apply, or a
    ///   leading tuple slot has no Semigroup
    pub fn convey(&self, data: Value, functions: Value) -> Result<Value> {
        let shape = same_shape("convey", &data, &functions)?;
        self.require(Capability::Apply, &shape)?;

        match (data, functions) {
            (Value::Sequence(data), Value::Sequence(functions)) => {
                let functions = functions
                    .iter()
                    .map(Value::as_function)
                    .collect::<Result<Vec<_>>>()?;
                let mut results = Vec::with_capacity(data.len().saturating_mul(functions.len()));
                for datum in data {
                    for function in &functions {
                        results.push(function.apply(datum.clone())?);
                    }
                }
                Ok(Value::Sequence(results))
            }
            (Value::Tuple(mut data), Value::Tuple(mut functions)) => {
                let (Some(datum), Some(function)) = (data.pop(), functions.pop()) else {
                    return Err(AlgebraError::no_conformance(Capability::Apply, shape));
                };
                let mut slots = data
                    .into_iter()
                    .zip(functions)
                    .map(|(left, right)| self.append(left, right))
                    .collect::<Result<Vec<_>>>()?;
                slots.push(function.as_function()?.apply(datum)?);
                Ok(Value::Tuple(slots))
            }
            (Value::Function(data), Value::Function(functions)) => {
                Ok(Value::Function(Func::new(data.arity(), move |arguments| {
                    let function = functions.call(arguments.clone())?;
                    function.as_function()?.apply(data.call(arguments)?)
                })))
            }
            (data @ Value::Record(_), functions) => {
                let convey = self.record(Capability::Apply, &shape, |found| found.convey.as_ref())?;
                convey(self, data, functions)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Apply, shape)),
        }
    }

    /// Function-major application: `convey(functions, map(data, x -> f -> f(x)))`.
    ///
    /// # Errors
    ///
    /// As [`Registry::convey`] and [`Registry::map`].
    pub fn ap(&self, functions: Value, data: Value) -> Result<Value> {
        let appliers = self.map(
            data,
            &Func::unary(|datum| {
                Ok(Value::unary(move |function| {
                    function.as_function()?.apply(datum.clone())
                }))
            }),
        )?;
        self.convey(functions, appliers)
    }

    /// Combines two wrapped values with a binary function:
    /// `ap(map(first, curry(function)), second)`.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] unless `function` takes two arguments,
    /// otherwise as [`Registry::ap`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::dynamic::{Func, Registry, Value};
    ///
    /// let registry = Registry::builtin();
    /// let add = Func::binary(|x, y| Ok(Value::from(x.as_integer()? + y.as_integer()?)));
    /// let numbers = Value::sequence([Value::from(1), Value::from(2)]);
    ///
    /// let sums = registry.lift(numbers.clone(), numbers, &add)?;
    /// assert_eq!(sums.to_string(), "[2, 3, 3, 4]");
    /// # Ok::<(), algebars::dynamic::AlgebraError>(())
    /// ```
    pub fn lift(&self, first: Value, second: Value, function: &Func) -> Result<Value> {
        expect_arity("lift", function, 2)?;
        let partial = self.map(first, &function.curry())?;
        self.ap(partial, second)
    }

    /// Three-argument [`Registry::lift`].
    ///
    /// # Errors
    ///
    /// As [`Registry::lift`], with an arity of three.
    pub fn lift3(&self, first: Value, second: Value, third: Value, function: &Func) -> Result<Value> {
        expect_arity("lift3", function, 3)?;
        let partial = self.map(first, &function.curry())?;
        let partial = self.ap(partial, second)?;
        self.ap(partial, third)
    }

    /// Four-argument [`Registry::lift`].
    ///
    /// # Errors
    ///
    /// As [`Registry::lift`], with an arity of four.
    pub fn lift4(
        &self,
        first: Value,
        second: Value,
        third: Value,
        fourth: Value,
        function: &Func,
    ) -> Result<Value> {
        expect_arity("lift4", function, 4)?;
        let partial = self.map(first, &function.curry())?;
        let partial = self.ap(partial, second)?;
        let partial = self.ap(partial, third)?;
        self.ap(partial, fourth)
    }

    /// [`Registry::lift`] with the function first.
    ///
    /// # Errors
    ///
    /// As [`Registry::lift`].
    pub fn over(&self, function: &Func, first: Value, second: Value) -> Result<Value> {
        self.lift(first, second, function)
    }

    /// [`Registry::lift3`] with the function first.
    ///
    /// # Errors
    ///
    /// As [`Registry::lift3`].
    pub fn over3(&self, function: &Func, first: Value, second: Value, third: Value) -> Result<Value> {
        self.lift3(first, second, third, function)
    }

    /// Alias of [`Registry::ap`].
    ///
    /// # Errors
    ///
    /// As [`Registry::ap`].
    pub fn provide(&self, functions: Value, data: Value) -> Result<Value> {
        self.ap(functions, data)
    }

    /// Alias of [`Registry::convey`].
    ///
    /// # Errors
    ///
    /// As [`Registry::convey`].
    pub fn supply(&self, data: Value, functions: Value) -> Result<Value> {
        self.convey(data, functions)
    }

    /// Sequences two wrapped values, keeping the right value of each pairing.
    ///
    /// # Errors
    ///
    /// As [`Registry::lift`].
    pub fn then(&self, left: Value, right: Value) -> Result<Value> {
        self.lift(left, right, &Func::binary(|_, right| Ok(right)))
    }

    /// Sequences two wrapped values, keeping the left value of each pairing.
    ///
    /// # Errors
    ///
    /// As [`Registry::lift`].
    pub fn following(&self, left: Value, right: Value) -> Result<Value> {
        self.lift(left, right, &Func::binary(|left, _| Ok(left)))
    }
}

fn expect_arity(operation: &'static str, function: &Func, arity: usize) -> Result<()> {
    if function.arity() == arity {
        Ok(())
    } else {
        Err(AlgebraError::mismatch(
            operation,
            format!("function/{arity}"),
            format!("function/{}", function.arity()),
        ))
    }
}
