//! Plain-function combinators that lift cleanly into any arrow family.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: ignores its argument and returns a fixed value (K combinator)
//!
//! Both return values that satisfy the `Fn + Send + Sync + 'static` bound of
//! [`Arrow::arrowize`](crate::typeclass::Arrow::arrowize) and
//! [`Functor::map`](crate::typeclass::Functor::map).

/// Returns the value unchanged.
///
/// `arrowize(identity)` behaves like
/// [`Category::identity`](crate::typeclass::Category::identity).
///
/// # Examples
///
/// ```
/// use algebars::compose::identity;
/// use algebars::typeclass::{Arrow, FunctionArrow, Semigroupoid};
///
/// let unchanged = FunctionArrow::arrowize(identity::<i32>);
/// assert_eq!(FunctionArrow::invoke(&unchanged, 7), 7);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Mapping `constant(x)` over a functor is the same as replacing with `x`.
///
/// # Examples
///
/// ```
/// use algebars::compose::constant;
/// use algebars::typeclass::Functor;
///
/// let zeros = vec![1, 2, 3].map(constant(0));
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T, U>(value: T) -> impl Fn(U) -> T + Clone + Send + Sync + 'static
where
    T: Clone + Send + Sync + 'static,
    U: 'static,
{
    move |_| value.clone()
}
