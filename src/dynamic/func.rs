//! Dynamically typed functions with a fixed arity.

use std::cmp;
use std::fmt;
use std::sync::Arc;

use super::error::{AlgebraError, Result};
use super::value::Value;

type Body = Arc<dyn Fn(Vec<Value>) -> Result<Value> + Send + Sync>;

/// A reference-counted function over [`Value`]s.
///
/// Every `Func` declares how many arguments it takes; [`Func::call`] rejects
/// any other count with [`AlgebraError::ShapeMismatch`]. Two `Func`s are equal
/// only when they share the same body, so equality is identity.
///
/// # Examples
///
/// ```rust
/// use algebars::dynamic::{Func, Value};
///
/// let add = Func::binary(|left, right| Ok(Value::from(left.as_integer()? + right.as_integer()?)));
/// assert_eq!(add.call(vec![Value::from(2), Value::from(3)]), Ok(Value::from(5)));
/// assert!(add.call(vec![Value::from(2)]).is_err());
///
/// let add_two = add.curry().apply(Value::from(2)).and_then(|partial| partial.as_function()?.apply(Value::from(3)));
/// assert_eq!(add_two, Ok(Value::from(5)));
/// ```
#[derive(Clone)]
pub struct Func {
    arity: usize,
    body: Body,
}

impl Func {
    /// Wraps a closure taking exactly `arity` arguments.
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(Vec<Value>) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            arity,
            body: Arc::new(body),
        }
    }

    /// Wraps a one-argument closure.
    pub fn unary<F>(body: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(1, move |arguments| {
            let [argument]: [Value; 1] = arguments
                .try_into()
                .map_err(|rest: Vec<Value>| arity_mismatch(1, rest.len()))?;
            body(argument)
        })
    }

    /// Wraps a two-argument closure.
    pub fn binary<F>(body: F) -> Self
    where
        F: Fn(Value, Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(2, move |arguments| {
            let [left, right]: [Value; 2] = arguments
                .try_into()
                .map_err(|rest: Vec<Value>| arity_mismatch(2, rest.len()))?;
            body(left, right)
        })
    }

    /// The identity function.
    pub fn identity() -> Self {
        Self::unary(Ok)
    }

    /// Number of arguments the function takes.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the function.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] when `arguments` does not have exactly
    /// [`Func::arity`] elements, or whatever the body returns.
    pub fn call(&self, arguments: Vec<Value>) -> Result<Value> {
        if arguments.len() != self.arity {
            return Err(arity_mismatch(self.arity, arguments.len()));
        }
        (self.body)(arguments)
    }

    /// Invokes a unary function.
    ///
    /// # Errors
    ///
    /// As [`Func::call`].
    pub fn apply(&self, argument: Value) -> Result<Value> {
        self.call(vec![argument])
    }

    /// Binds the first argument, leaving a function of one fewer argument.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::ShapeMismatch`] for a nullary function.
    pub fn partial(&self, argument: Value) -> Result<Self> {
        if self.arity == 0 {
            return Err(arity_mismatch(0, 1));
        }
        let body = Arc::clone(&self.body);
        Ok(Self::new(self.arity - 1, move |mut rest| {
            rest.insert(0, argument.clone());
            body(rest)
        }))
    }

    /// Turns an n-ary function into `n` nested unary functions.
    ///
    /// Functions of arity zero or one are returned unchanged.
    #[must_use]
    pub fn curry(&self) -> Self {
        if self.arity <= 1 {
            return self.clone();
        }
        let function = self.clone();
        Self::unary(move |argument| Ok(Value::Function(function.partial(argument)?.curry())))
    }

    fn address(&self) -> usize {
        Arc::as_ptr(&self.body).cast::<()>().addr()
    }
}

fn arity_mismatch(expected: usize, found: usize) -> AlgebraError {
    AlgebraError::mismatch(
        "invoke",
        format!("{expected} argument(s)"),
        format!("{found} argument(s)"),
    )
}

impl fmt::Debug for Func {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Func")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Func {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<function/{}>", self.arity)
    }
}

impl PartialEq for Func {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Func {}

impl PartialOrd for Func {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Func {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.address()
            .cmp(&other.address())
            .then(self.arity.cmp(&other.arity))
    }
}
