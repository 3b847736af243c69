//! A shareable, thread-safe function value.
//!
//! Closures in Rust all have distinct anonymous types, which makes them
//! awkward to store in containers, return from trait methods or pass through
//! a GAT. [`Function`] erases the closure type behind an `Arc` so the same
//! function value can be cloned freely and sent across threads.
//!
//! `Function<A, A>` is a [`Monoid`]: `append` composes left to right and the
//! identity function is `empty`.
//!
//! # Examples
//!
//! ```rust
//! use algebars::typeclass::{Function, Monoid, Semigroup};
//!
//! let increment = Function::new(|value: i32| value + 1);
//! let double = Function::new(|value: i32| value * 2);
//!
//! // increment runs first
//! let pipeline = increment.append(double);
//! assert_eq!(pipeline.call(5), 12);
//! assert_eq!(Function::<i32, i32>::empty().call(5), 5);
//! ```

use std::fmt;
use std::sync::Arc;

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use super::semigroup::Semigroup;

/// A reference-counted `Fn(A) -> B`.
pub struct Function<A, B> {
    body: Arc<dyn Fn(A) -> B + Send + Sync>,
}

impl<A, B> Function<A, B> {
    /// Wraps a closure.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self {
            body: Arc::new(function),
        }
    }

    /// Applies the function.
    #[inline]
    pub fn call(&self, input: A) -> B {
        (self.body)(input)
    }
}

impl<A, B> Clone for Function<A, B> {
    fn clone(&self) -> Self {
        Self {
            body: Arc::clone(&self.body),
        }
    }
}

impl<A, B> fmt::Debug for Function<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("input", &std::any::type_name::<A>())
            .field("output", &std::any::type_name::<B>())
            .finish()
    }
}

/// The mapped slot is the result type.
impl<R, A> TypeConstructor for Function<R, A> {
    type Inner = A;
    type WithType<B> = Function<R, B>;
}

/// Left-to-right composition: `f.append(g)` runs `f`, then `g`.
impl<A: 'static> Semigroup for Function<A, A> {
    fn append(self, other: Self) -> Self {
        Self::new(move |input| other.call(self.call(input)))
    }
}

impl<A: 'static> Monoid for Function<A, A> {
    fn empty() -> Self {
        Self::new(|input| input)
    }
}
