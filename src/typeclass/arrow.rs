//! Arrow - morphisms that can be built from plain functions.
//!
//! [`Arrow::arrowize`] lifts an ordinary closure into a family's morphism
//! type, and [`Arrow::first`] threads an untouched companion value alongside
//! a morphism. Everything else in this module is derived from those two,
//! [`Semigroupoid::compose`](super::Semigroupoid::compose) and the plain pair functions [`split`],
//! [`unsplit`], [`swap`], [`reassociate_left`] and [`reassociate_right`].
//!
//! # Examples
//!
//! ```rust
//! use algebars::typeclass::{Arrow, FunctionArrow, Semigroupoid};
//!
//! let below = FunctionArrow::arrowize(|value: i32| value - 10);
//! let shout = FunctionArrow::arrowize(|value: i32| format!("{value}!"));
//!
//! let both = FunctionArrow::fanout(below, shout);
//! assert_eq!(FunctionArrow::invoke(&both, 42), (32, String::from("42!")));
//! ```

use super::semigroupoid::Category;

// =============================================================================
// Pair Functions
// =============================================================================

/// Duplicates a value into a pair.
#[inline]
pub fn split<A: Clone>(value: A) -> (A, A) {
    (value.clone(), value)
}

/// Merges a pair with a binary function.
#[inline]
pub fn unsplit<A, B, C, F>(pair: (A, B), combine: F) -> C
where
    F: FnOnce(A, B) -> C,
{
    let (left, right) = pair;
    combine(left, right)
}

/// Exchanges the two components of a pair.
#[inline]
pub fn swap<A, B>(pair: (A, B)) -> (B, A) {
    let (left, right) = pair;
    (right, left)
}

/// `(a, (b, c))` to `((a, b), c)`.
#[inline]
pub fn reassociate_left<A, B, C>(nested: (A, (B, C))) -> ((A, B), C) {
    let (a, (b, c)) = nested;
    ((a, b), c)
}

/// `((a, b), c)` to `(a, (b, c))`.
#[inline]
pub fn reassociate_right<A, B, C>(nested: ((A, B), C)) -> (A, (B, C)) {
    let ((a, b), c) = nested;
    (a, (b, c))
}

// =============================================================================
// Arrow
// =============================================================================

/// A category whose morphisms can be lifted from plain functions.
///
/// # Laws
///
/// ```text
/// arrowize(|x| x) == identity()
/// arrowize(g . f) == compose(arrowize(g), arrowize(f))
/// first(arrowize(f)) == arrowize(|(a, c)| (f(a), c))
/// first(compose(g, f)) == compose(first(g), first(f))
/// ```
pub trait Arrow: Category {
    /// Lifts a plain function into a morphism of this family.
    fn arrowize<A, B, F>(function: F) -> Self::Morphism<A, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static;

    /// Runs the morphism on the first component and passes the second through.
    fn first<A: 'static, B: 'static, C: 'static>(
        morphism: Self::Morphism<A, B>,
    ) -> Self::Morphism<(A, C), (B, C)>;

    /// Runs the morphism on the second component and passes the first through.
    fn second<A: 'static, B: 'static, C: 'static>(
        morphism: Self::Morphism<A, B>,
    ) -> Self::Morphism<(C, A), (C, B)> {
        let swapped = Self::compose::<(C, A), (A, C), (B, C)>(
            Self::first::<A, B, C>(morphism),
            Self::arrowize::<(C, A), (A, C), _>(swap::<C, A>),
        );
        Self::compose::<(C, A), (B, C), (C, B)>(
            Self::arrowize::<(B, C), (C, B), _>(swap::<B, C>),
            swapped,
        )
    }

    /// Runs `left` on the first component and `right` on the second.
    ///
    /// Built as `compose(first(left), second(right))`, so `right` runs before
    /// `left`. The order only shows for families with effects.
    fn product<A, B, C, D>(
        left: Self::Morphism<A, B>,
        right: Self::Morphism<C, D>,
    ) -> Self::Morphism<(A, C), (B, D)>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        D: 'static,
    {
        Self::compose::<(A, C), (A, D), (B, D)>(
            Self::first::<A, B, D>(left),
            Self::second::<C, D, A>(right),
        )
    }

    /// Feeds one input to both morphisms and pairs their results.
    ///
    /// The input is duplicated with [`split`] before [`Arrow::product`] runs.
    fn fanout<A, B, C>(
        left: Self::Morphism<A, B>,
        right: Self::Morphism<A, C>,
    ) -> Self::Morphism<A, (B, C)>
    where
        A: Clone + 'static,
        B: 'static,
        C: 'static,
    {
        Self::compose::<A, (A, A), (B, C)>(
            Self::product::<A, B, A, C>(left, right),
            Self::arrowize::<A, (A, A), _>(split::<A>),
        )
    }

    /// Runs a plain function before the morphism.
    fn precompose<A, B, C, F>(function: F, morphism: Self::Morphism<B, C>) -> Self::Morphism<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Self::compose::<A, B, C>(morphism, Self::arrowize::<A, B, F>(function))
    }

    /// Runs a plain function after the morphism.
    fn postcompose<A, B, C, F>(morphism: Self::Morphism<A, B>, function: F) -> Self::Morphism<A, C>
    where
        A: 'static,
        B: 'static,
        C: 'static,
        F: Fn(B) -> C + Send + Sync + 'static,
    {
        Self::compose::<A, B, C>(Self::arrowize::<B, C, F>(function), morphism)
    }
}
