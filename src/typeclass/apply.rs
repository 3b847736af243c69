//! Apply type class - combining values held in two containers of one shape.
//!
//! `Apply` extends [`Functor`] with [`Apply::convey`], which runs every
//! function held in one container against every value held in another. The
//! two combinators of this module differ only in iteration order, and both
//! orders are part of the contract:
//!
//! - `data.convey(functions)` is *data-major*: each value is run through every
//!   function before the next value is visited.
//! - `functions.ap(data)` is *function-major*: each function is run over every
//!   value before the next function is visited.
//!
//! ```rust
//! use algebars::typeclass::Apply;
//!
//! let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
//!
//! assert_eq!(vec![1, 2, 3].convey(functions.clone()), vec![2, 10, 3, 20, 4, 30]);
//! assert_eq!(functions.ap(vec![1, 2, 3]), vec![2, 3, 4, 10, 20, 30]);
//! ```
//!
//! # Tuples
//!
//! A tuple conveys by appending every slot but the last with its
//! [`Semigroup`] (left operand first) and applying the function in the last
//! slot of the right tuple to the last slot of the left tuple:
//!
//! ```rust
//! use algebars::typeclass::Apply;
//!
//! let combined = (vec![1, 2], 5).convey((vec![3, 4], |value: i32| value + 1));
//! assert_eq!(combined, (vec![1, 2, 3, 4], 6));
//! ```
//!
//! # Functions
//!
//! A [`Function`] conveys as a reader: `g.convey(f)` is `x -> f(x)(g(x))`.
//!
//! # Laws
//!
//! ```text
//! data.convey(functions.map(|f| move |x| g(f(x))))
//!     == data.convey(functions).map(g)                       (naturality)
//! fs.ap(data) == fs.convey(data.map(|x| move |f| f(x)))      (ap definition)
//! ```

use super::function::Function;
use super::functor::Functor;
use super::identity::Identity;
use super::semigroup::Semigroup;

/// A type class for functors whose contents can be combined pairwise.
///
/// Only [`Apply::convey`] carries per-type behavior. [`Apply::ap`],
/// [`Apply::lift`], [`Apply::lift3`] and [`Apply::lift4`] are built from
/// `convey` and [`Functor::map`] alone, but they need the container's concrete
/// shape to chain calls, so every implementation expands them with the
/// crate-internal `derive_lift_methods!` macro.
pub trait Apply: Functor {
    /// Data-major application of every function to every value.
    fn convey<B, F>(self, functions: Self::WithType<F>) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + Clone + Send + Sync + 'static,
        B: 'static;

    /// Function-major application: `self` holds the functions.
    fn ap<A, B>(self, data: Self::WithType<A>) -> Self::WithType<B>
    where
        Self::Inner: Fn(A) -> B + Clone + Send + Sync + 'static,
        A: Clone + Send + Sync + 'static,
        B: 'static;

    /// Combines two containers with a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::typeclass::Apply;
    ///
    /// assert_eq!(Some(3).lift(Some(4), |left, right| left * right), Some(12));
    /// assert_eq!(
    ///     vec![1, 2, 3].lift(vec![4, 5, 6], |left, right| left + right),
    ///     vec![5, 6, 7, 6, 7, 8, 7, 8, 9]
    /// );
    /// ```
    fn lift<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        C: 'static,
        F: Fn(Self::Inner, B) -> C + Clone + Send + Sync + 'static;

    /// Combines three containers with a ternary function.
    fn lift3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        Self::Inner: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        C: Clone + Send + Sync + 'static,
        D: 'static,
        F: Fn(Self::Inner, B, C) -> D + Clone + Send + Sync + 'static;

    /// Combines four containers with a quaternary function.
    fn lift4<B, C, D, E, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        fourth: Self::WithType<D>,
        function: F,
    ) -> Self::WithType<E>
    where
        Self::Inner: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
        C: Clone + Send + Sync + 'static,
        D: Clone + Send + Sync + 'static,
        E: 'static,
        F: Fn(Self::Inner, B, C, D) -> E + Clone + Send + Sync + 'static;

    /// Keeps the right value of every pairing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::typeclass::Apply;
    ///
    /// assert_eq!(vec![1, 2].then(vec!['a', 'b']), vec!['a', 'b', 'a', 'b']);
    /// ```
    fn then<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self::Inner: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
    {
        self.lift::<B, B, _>(other, |_left, right| right)
    }

    /// Keeps the left value of every pairing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::typeclass::Apply;
    ///
    /// assert_eq!(vec![1, 2].following(vec!['a', 'b']), vec![1, 1, 2, 2]);
    /// assert_eq!(Some(1).following(None::<char>), None);
    /// ```
    fn following<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self::Inner: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
    {
        self.lift::<B, Self::Inner, _>(other, |left, _right| left)
    }
}

/// Expands the combinators that chain `map`, `ap` and `convey` inside an
/// `impl Apply` block, where the container's concrete shape is known.
macro_rules! derive_lift_methods {
    () => {
        fn ap<X, Y>(self, data: Self::WithType<X>) -> Self::WithType<Y>
        where
            Self::Inner: Fn(X) -> Y + Clone + Send + Sync + 'static,
            X: Clone + Send + Sync + 'static,
            Y: 'static,
        {
            self.convey(Functor::map(data, |value: X| {
                move |function: Self::Inner| function(value.clone())
            }))
        }

        fn lift<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
        where
            Self::Inner: Clone + Send + Sync + 'static,
            B: Clone + Send + Sync + 'static,
            C: 'static,
            F: Fn(Self::Inner, B) -> C + Clone + Send + Sync + 'static,
        {
            Functor::map(self, move |left: Self::Inner| {
                let function = function.clone();
                move |right: B| function(left.clone(), right)
            })
            .ap(other)
        }

        fn lift3<B, C, D, F>(
            self,
            second: Self::WithType<B>,
            third: Self::WithType<C>,
            function: F,
        ) -> Self::WithType<D>
        where
            Self::Inner: Clone + Send + Sync + 'static,
            B: Clone + Send + Sync + 'static,
            C: Clone + Send + Sync + 'static,
            D: 'static,
            F: Fn(Self::Inner, B, C) -> D + Clone + Send + Sync + 'static,
        {
            Functor::map(self, move |first: Self::Inner| {
                let function = function.clone();
                move |second: B| {
                    let function = function.clone();
                    let first = first.clone();
                    move |third: C| function(first.clone(), second.clone(), third)
                }
            })
            .ap(second)
            .ap(third)
        }

        fn lift4<B, C, D, E, F>(
            self,
            second: Self::WithType<B>,
            third: Self::WithType<C>,
            fourth: Self::WithType<D>,
            function: F,
        ) -> Self::WithType<E>
        where
            Self::Inner: Clone + Send + Sync + 'static,
            B: Clone + Send + Sync + 'static,
            C: Clone + Send + Sync + 'static,
            D: Clone + Send + Sync + 'static,
            E: 'static,
            F: Fn(Self::Inner, B, C, D) -> E + Clone + Send + Sync + 'static,
        {
            Functor::map(self, move |first: Self::Inner| {
                let function = function.clone();
                move |second: B| {
                    let function = function.clone();
                    let first = first.clone();
                    move |third: C| {
                        let function = function.clone();
                        let first = first.clone();
                        let second = second.clone();
                        move |fourth: D| {
                            function(first.clone(), second.clone(), third.clone(), fourth)
                        }
                    }
                }
            })
            .ap(second)
            .ap(third)
            .ap(fourth)
        }
    };
}

// =============================================================================
// Option / Identity
// =============================================================================

impl<A> Apply for Option<A> {
    fn convey<B, F>(self, functions: Option<F>) -> Option<B>
    where
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
        B: 'static,
    {
        match (self, functions) {
            (Some(value), Some(function)) => Some(function(value)),
            _ => None,
        }
    }

    derive_lift_methods!();
}

impl<A> Apply for Identity<A> {
    fn convey<B, F>(self, functions: Identity<F>) -> Identity<B>
    where
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
        B: 'static,
    {
        Identity((functions.0)(self.0))
    }

    derive_lift_methods!();
}

// =============================================================================
// Vec (flattened Cartesian application, data-major)
// =============================================================================

impl<A: Clone> Apply for Vec<A> {
    fn convey<B, F>(self, functions: Vec<F>) -> Vec<B>
    where
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
        B: 'static,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(functions.len()));
        for value in self {
            for function in &functions {
                result.push(function(value.clone()));
            }
        }
        result
    }

    derive_lift_methods!();
}

// =============================================================================
// Tuples (leading slots append, last slot applies)
// =============================================================================

macro_rules! impl_tuple_apply {
    ($($slot:ident $index:tt),* ; $last:tt) => {
        impl<$($slot: Semigroup,)* A> Apply for ($($slot,)* A,) {
            fn convey<B, F>(self, functions: ($($slot,)* F,)) -> ($($slot,)* B,)
            where
                F: Fn(A) -> B + Clone + Send + Sync + 'static,
                B: 'static,
            {
                (
                    $(Semigroup::append(self.$index, functions.$index),)*
                    (functions.$last)(self.$last),
                )
            }

            derive_lift_methods!();
        }
    };
}

impl_tuple_apply!(W0 0 ; 1);
impl_tuple_apply!(W0 0, W1 1 ; 2);
impl_tuple_apply!(W0 0, W1 1, W2 2 ; 3);
impl_tuple_apply!(W0 0, W1 1, W2 2, W3 3 ; 4);
impl_tuple_apply!(W0 0, W1 1, W2 2, W3 3, W4 4 ; 5);

// =============================================================================
// Function (reader)
// =============================================================================

/// `g.convey(f)` is `x -> f(x)(g(x))`.
impl<R: Clone + 'static, A: 'static> Apply for Function<R, A> {
    fn convey<B, F>(self, functions: Function<R, F>) -> Function<R, B>
    where
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
        B: 'static,
    {
        Function::new(move |input: R| functions.call(input.clone())(self.call(input)))
    }

    derive_lift_methods!();
}

// =============================================================================
// Argument-order variants
// =============================================================================

/// [`Apply::lift`] with the function first.
pub fn over<T, B, C, F>(function: F, first: T, second: T::WithType<B>) -> T::WithType<C>
where
    T: Apply,
    T::Inner: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: 'static,
    F: Fn(T::Inner, B) -> C + Clone + Send + Sync + 'static,
{
    first.lift::<B, C, F>(second, function)
}

/// [`Apply::lift3`] with the function first.
pub fn over3<T, B, C, D, F>(
    function: F,
    first: T,
    second: T::WithType<B>,
    third: T::WithType<C>,
) -> T::WithType<D>
where
    T: Apply,
    T::Inner: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    D: 'static,
    F: Fn(T::Inner, B, C) -> D + Clone + Send + Sync + 'static,
{
    first.lift3::<B, C, D, F>(second, third, function)
}

/// Function-major application, functions first. Same as [`Apply::ap`].
pub fn provide<T, A, B>(functions: T, data: T::WithType<A>) -> T::WithType<B>
where
    T: Apply,
    T::Inner: Fn(A) -> B + Clone + Send + Sync + 'static,
    A: Clone + Send + Sync + 'static,
    B: 'static,
{
    functions.ap::<A, B>(data)
}

/// Data-major application, data first. Same as [`Apply::convey`].
pub fn supply<T, B, F>(data: T, functions: T::WithType<F>) -> T::WithType<B>
where
    T: Apply,
    F: Fn(T::Inner) -> B + Clone + Send + Sync + 'static,
    B: 'static,
{
    data.convey::<B, F>(functions)
}
