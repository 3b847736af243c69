//! Structure-preserving mapping over [`Value`]s.

use std::collections::BTreeMap;

use super::error::{AlgebraError, Result};
use super::func::Func;
use super::registry::Registry;
use super::shape::Capability;
use super::value::Value;

impl Registry {
    /// Applies `function` inside `value`, keeping its shape and size.
    ///
    /// | Shape    | Mapped part                            |
    /// |----------|----------------------------------------|
    /// | sequence | every element                          |
    /// | mapping  | every value, keys unchanged            |
    /// | tuple    | the last slot                          |
    /// | function | the result (post-composition)          |
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoConformance`] when the shape has no Functor, or
    /// whatever `function` returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::dynamic::{Func, Registry, Value};
    ///
    /// let registry = Registry::builtin();
    /// let double = Func::unary(|value| Ok(Value::from(value.as_integer()? * 2)));
    ///
    /// let pair = Value::tuple([Value::text("label"), Value::from(21)]);
    /// assert_eq!(
    ///     registry.map(pair, &double),
    ///     Ok(Value::tuple([Value::text("label"), Value::from(42)]))
    /// );
    /// ```
    pub fn map(&self, value: Value, function: &Func) -> Result<Value> {
        let shape = value.shape();
        self.require(Capability::Functor, &shape)?;

        match value {
            Value::Sequence(elements) => elements
                .into_iter()
                .map(|element| function.apply(element))
                .collect::<Result<Vec<_>>>()
                .map(Value::Sequence),
            Value::Mapping(entries) => entries
                .into_iter()
                .map(|(key, value)| function.apply(value).map(|mapped| (key, mapped)))
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Value::Mapping),
            Value::Tuple(mut slots) => {
                let last = slots
                    .pop()
                    .ok_or_else(|| AlgebraError::no_conformance(Capability::Functor, shape))?;
                slots.push(function.apply(last)?);
                Ok(Value::Tuple(slots))
            }
            Value::Function(inner) => {
                let function = function.clone();
                Ok(Value::Function(Func::new(inner.arity(), move |arguments| {
                    function.apply(inner.call(arguments)?)
                })))
            }
            record @ Value::Record(_) => {
                let map = self.record(Capability::Functor, &shape, |found| found.map.as_ref())?;
                map(self, record, function)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Functor, shape)),
        }
    }

    /// Replaces every mapped part of `value` with `constant`.
    ///
    /// # Errors
    ///
    /// As [`Registry::map`].
    pub fn replace(&self, value: Value, constant: Value) -> Result<Value> {
        self.map(value, &Func::unary(move |_| Ok(constant.clone())))
    }
}
