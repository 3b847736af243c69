//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps a single value and adds no behavior of its own. It is the
//! simplest lawful [`Functor`](super::Functor) and [`Apply`](super::Apply),
//! which makes it a convenient model when checking type class laws.

use super::TypeConstructor;
use super::ord::{Ordering, TotalOrder};
use super::setoid::Setoid;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use algebars::typeclass::{Functor, Identity};
///
/// let wrapped = Identity::new(20);
/// assert_eq!(wrapped.map(|value| value + 1).into_inner(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: Setoid> Setoid for Identity<A> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.0.equivalent(&other.0)
    }
}

impl<A: TotalOrder> TotalOrder for Identity<A> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.0.compare(&other.0)
    }
}
