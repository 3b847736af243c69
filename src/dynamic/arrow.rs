//! Morphism composition and the arrow algebra over [`Value`]s.
//!
//! Functions are the built-in morphisms; records become morphisms through
//! [`RegistryBuilder::semigroupoid`](super::RegistryBuilder::semigroupoid) and
//! friends. Everything past `compose`, `invoke`, `identity` and `arrowize` is
//! derived, so a record arrow gets `first`, `product`, `fanout` and the rest
//! for free.
//!
//! ```rust
//! use algebars::dynamic::{Registry, Value};
//!
//! let registry = Registry::builtin();
//! let minus_ten = Value::unary(|x| Ok(Value::from(x.as_integer()? - 10)));
//! let shout = Value::unary(|x| Ok(Value::text(format!("{x}!"))));
//!
//! let both = registry.fanout(minus_ten, shout)?;
//! assert_eq!(registry.pipe(Value::from(42), &both)?.to_string(), "(32, \"42!\")");
//! # Ok::<(), algebars::dynamic::AlgebraError>(())
//! ```

use super::error::{AlgebraError, Result};
use super::func::Func;
use super::registry::Registry;
use super::shape::{Capability, same_shape};
use super::value::Value;

/// Duplicates a value into a pair.
pub fn split(value: Value) -> Value {
    Value::pair(value.clone(), value)
}

/// Feeds both halves of a pair to a binary function.
///
/// # Errors
///
/// [`AlgebraError::ShapeMismatch`] unless `pair` is a `tuple/2`, or whatever
/// `combine` returns.
pub fn unsplit(pair: Value, combine: &Func) -> Result<Value> {
    let (left, right) = pair.into_pair()?;
    combine.call(vec![left, right])
}

/// Exchanges the halves of a pair.
///
/// # Errors
///
/// [`AlgebraError::ShapeMismatch`] unless `pair` is a `tuple/2`.
pub fn swap(pair: Value) -> Result<Value> {
    let (left, right) = pair.into_pair()?;
    Ok(Value::pair(right, left))
}

/// Regroups `((a, b), c)` as `(a, (b, c))` and `(a, (b, c))` as
/// `((a, b), c)`.
///
/// When both readings apply, as for `((a, b), (c, d))`, the left-nested one
/// wins and the value is regrouped to the right.
///
/// # Errors
///
/// [`AlgebraError::ShapeMismatch`] when neither grouping applies.
///
/// # Examples
///
/// ```rust
/// use algebars::dynamic::{Value, reassociate};
///
/// let nested = Value::pair(Value::pair(Value::from(1), Value::from(2)), Value::from(3));
/// let regrouped = reassociate(nested.clone())?;
/// assert_eq!(regrouped.to_string(), "(1, (2, 3))");
/// assert_eq!(reassociate(regrouped)?, nested);
/// # Ok::<(), algebars::dynamic::AlgebraError>(())
/// ```
pub fn reassociate(value: Value) -> Result<Value> {
    let found = value.shape();
    let (left, right) = value
        .into_pair()
        .map_err(|_| AlgebraError::mismatch("reassociate", "((a, b), c) or (a, (b, c))", &found))?;

    match (left, right) {
        (Value::Tuple(inner), outer) if inner.len() == 2 => {
            let (first, second) = Value::Tuple(inner).into_pair()?;
            Ok(Value::pair(first, Value::pair(second, outer)))
        }
        (outer, Value::Tuple(inner)) if inner.len() == 2 => {
            let (second, third) = Value::Tuple(inner).into_pair()?;
            Ok(Value::pair(Value::pair(outer, second), third))
        }
        _ => Err(AlgebraError::mismatch(
            "reassociate",
            "((a, b), c) or (a, (b, c))",
            &found,
        )),
    }
}

impl Registry {
    /// Composes two morphisms; `earlier` runs first.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::ShapeMismatch`] when the morphisms have different
    ///   shapes
    /// - [`AlgebraError::NoConformance`] when the shape has no Semigroupoid
    pub fn compose(&self, later: Value, earlier: Value) -> Result<Value> {
        let shape = same_shape("compose", &later, &earlier)?;
        self.require(Capability::Semigroupoid, &shape)?;

        match (later, earlier) {
            (Value::Function(later), Value::Function(earlier)) => {
                Ok(Value::Function(Func::new(earlier.arity(), move |arguments| {
                    later.apply(earlier.call(arguments)?)
                })))
            }
            (later @ Value::Record(_), earlier) => {
                let compose =
                    self.record(Capability::Semigroupoid, &shape, |found| found.compose.as_ref())?;
                compose(self, later, earlier)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Semigroupoid, shape)),
        }
    }

    /// Runs a morphism on its arguments.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoConformance`] when the shape has no Semigroupoid,
    /// [`AlgebraError::ShapeMismatch`] on a wrong argument count, or whatever
    /// the morphism returns.
    pub fn invoke(&self, morphism: &Value, arguments: Vec<Value>) -> Result<Value> {
        let shape = morphism.shape();
        self.require(Capability::Semigroupoid, &shape)?;

        match morphism {
            Value::Function(function) => function.call(arguments),
            Value::Record(_) => {
                let invoke =
                    self.record(Capability::Semigroupoid, &shape, |found| found.invoke.as_ref())?;
                invoke(self, morphism, arguments)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Semigroupoid, shape)),
        }
    }

    /// The identity morphism of `sample`'s family.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoConformance`] when the shape has no Category.
    pub fn identity(&self, sample: &Value) -> Result<Value> {
        let shape = sample.shape();
        self.require(Capability::Category, &shape)?;

        match sample {
            Value::Function(_) => Ok(Value::Function(Func::identity())),
            Value::Record(_) => {
                let identity =
                    self.record(Capability::Category, &shape, |found| found.identity.as_ref())?;
                identity(self, sample)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Category, shape)),
        }
    }

    /// Lifts a plain function into `sample`'s morphism family.
    ///
    /// `sample` only selects the conformance.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::NoConformance`] when the shape has no Arrow.
    pub fn arrowize(&self, sample: &Value, function: Func) -> Result<Value> {
        let shape = sample.shape();
        self.require(Capability::Arrow, &shape)?;

        match sample {
            Value::Function(_) => Ok(Value::Function(function)),
            Value::Record(_) => {
                let arrowize =
                    self.record(Capability::Arrow, &shape, |found| found.arrowize.as_ref())?;
                arrowize(self, sample, function)
            }
            _ => Err(AlgebraError::no_conformance(Capability::Arrow, shape)),
        }
    }

    /// Runs a unary morphism on `value`.
    ///
    /// # Errors
    ///
    /// As [`Registry::invoke`].
    pub fn pipe(&self, value: Value, morphism: &Value) -> Result<Value> {
        self.invoke(morphism, vec![value])
    }

    /// Composes in reading order; `first` runs first.
    ///
    /// # Errors
    ///
    /// As [`Registry::compose`].
    pub fn pipe_compose(&self, first: Value, then: Value) -> Result<Value> {
        self.compose(then, first)
    }

    /// Composes a chain right to left, so the last morphism runs first.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::EmptyInput`] for an empty chain, otherwise as
    /// [`Registry::compose`].
    pub fn compose_all(&self, morphisms: impl IntoIterator<Item = Value>) -> Result<Value> {
        let mut morphisms = morphisms.into_iter();
        let first = morphisms.next().ok_or(AlgebraError::EmptyInput {
            operation: "compose_all",
        })?;
        morphisms.try_fold(first, |composed, morphism| self.compose(composed, morphism))
    }

    /// Runs `arrow` on the first half of a pair and passes the second half
    /// through.
    ///
    /// # Errors
    ///
    /// As [`Registry::arrowize`]. The returned morphism fails with
    /// [`AlgebraError::ShapeMismatch`] on inputs that are not pairs.
    pub fn first(&self, arrow: Value) -> Result<Value> {
        let registry = self.clone();
        let sample = arrow.clone();
        self.arrowize(
            &sample,
            Func::unary(move |pair| {
                let (input, passed) = pair.into_pair()?;
                Ok(Value::pair(registry.pipe(input, &arrow)?, passed))
            }),
        )
    }

    /// Runs `arrow` on the second half of a pair: `swap`, `first`, `swap`.
    ///
    /// # Errors
    ///
    /// As [`Registry::first`].
    pub fn second(&self, arrow: Value) -> Result<Value> {
        let swapped = self.arrowize(&arrow, Func::unary(swap))?;
        let first = self.first(arrow)?;
        self.compose_all([swapped.clone(), first, swapped])
    }

    /// Runs `left` on the first half and `right` on the second half of a pair.
    ///
    /// Built as `compose(first(left), second(right))`, so `right` runs first.
    ///
    /// # Errors
    ///
    /// As [`Registry::first`] and [`Registry::compose`].
    pub fn product(&self, left: Value, right: Value) -> Result<Value> {
        let first = self.first(left)?;
        let second = self.second(right)?;
        self.compose(first, second)
    }

    /// Runs both morphisms on one input and pairs the results.
    ///
    /// # Errors
    ///
    /// As [`Registry::product`].
    pub fn fanout(&self, left: Value, right: Value) -> Result<Value> {
        let duplicate = self.arrowize(&left, Func::unary(|value| Ok(split(value))))?;
        let both = self.product(left, right)?;
        self.compose(both, duplicate)
    }

    /// Runs a plain function before `arrow`.
    ///
    /// # Errors
    ///
    /// As [`Registry::arrowize`] and [`Registry::compose`].
    pub fn precompose(&self, function: Func, arrow: Value) -> Result<Value> {
        let lifted = self.arrowize(&arrow, function)?;
        self.compose(arrow, lifted)
    }

    /// Runs a plain function after `arrow`.
    ///
    /// # Errors
    ///
    /// As [`Registry::arrowize`] and [`Registry::compose`].
    pub fn postcompose(&self, arrow: Value, function: Func) -> Result<Value> {
        let lifted = self.arrowize(&arrow, function)?;
        self.compose(lifted, arrow)
    }
}
