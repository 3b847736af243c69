//! Semigroupoid and Category - composable morphisms.
//!
//! A *morphism family* is a marker type that names one kind of composable
//! step. [`Semigroupoid::Morphism<A, B>`] is the step from `A` to `B` and
//! [`Semigroupoid::Output<B>`] is what running it yields: a plain `B` for
//! [`FunctionArrow`](super::FunctionArrow), a `Result<B, E>` for
//! [`FallibleArrow`](super::FallibleArrow).
//!
//! # Composition order
//!
//! `compose(later, earlier)` follows mathematical order: the result runs
//! `earlier` first and feeds its output to `later`. [`Semigroupoid::pipe_compose`]
//! takes the arguments the other way round.
//!
//! # Laws
//!
//! ```text
//! compose(h, compose(g, f)) == compose(compose(h, g), f)       (associativity)
//! compose(identity(), f) == f == compose(f, identity())        (identity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebars::typeclass::{Category, Function, FunctionArrow, Semigroupoid};
//!
//! let increment = Function::new(|value: i32| value + 1);
//! let double = Function::new(|value: i32| value * 2);
//!
//! let composed = FunctionArrow::compose(double, increment);
//! assert_eq!(FunctionArrow::invoke(&composed, 5), 12);
//!
//! let unchanged = FunctionArrow::compose(FunctionArrow::identity(), composed);
//! assert_eq!(FunctionArrow::invoke(&unchanged, 5), 12);
//! ```

/// A family of morphisms closed under associative composition.
pub trait Semigroupoid: 'static {
    /// A morphism from `A` to `B`.
    type Morphism<A, B>: Clone + Send + Sync;

    /// What invoking a morphism that ends in `B` produces.
    type Output<B>;

    /// Composes two morphisms: `earlier` runs first, then `later`.
    fn compose<A: 'static, B: 'static, C: 'static>(
        later: Self::Morphism<B, C>,
        earlier: Self::Morphism<A, B>,
    ) -> Self::Morphism<A, C>;

    /// Runs a morphism.
    fn invoke<A, B>(morphism: &Self::Morphism<A, B>, input: A) -> Self::Output<B>;

    /// [`Semigroupoid::compose`] in reading order: `first` runs first.
    #[inline]
    fn pipe_compose<A: 'static, B: 'static, C: 'static>(
        first: Self::Morphism<A, B>,
        then: Self::Morphism<B, C>,
    ) -> Self::Morphism<A, C> {
        Self::compose::<A, B, C>(then, first)
    }

    /// Composes a chain of endomorphisms in mathematical order, so the last
    /// morphism runs first. Returns `None` for an empty chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::typeclass::{Function, FunctionArrow, Semigroupoid};
    ///
    /// let chain = FunctionArrow::compose_all([
    ///     Function::new(|value: i32| value * 10),
    ///     Function::new(|value: i32| value + 1),
    /// ])
    /// .unwrap();
    /// assert_eq!(FunctionArrow::invoke(&chain, 1), 20);
    /// ```
    fn compose_all<A, I>(morphisms: I) -> Option<Self::Morphism<A, A>>
    where
        A: 'static,
        I: IntoIterator<Item = Self::Morphism<A, A>>,
    {
        morphisms
            .into_iter()
            .reduce(|later, earlier| Self::compose::<A, A, A>(later, earlier))
    }
}

/// A semigroupoid with an identity morphism for every type.
pub trait Category: Semigroupoid {
    /// The morphism that returns its input unchanged.
    fn identity<A: 'static>() -> Self::Morphism<A, A>;
}
