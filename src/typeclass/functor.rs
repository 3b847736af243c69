//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to its inner value(s) while its
//! outer shape and size stay the same.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(move |x| g(f(x)))
//! ```
//!
//! # Multi-parameter containers
//!
//! The last type parameter is the mapped one: maps keep their keys, tuples keep
//! every slot but the final one, and a [`Function`] keeps its input type.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use algebars::typeclass::Functor;
//!
//! let scores = BTreeMap::from([("ada", 3), ("grace", 4)]);
//! let doubled = Functor::map(scores, |score| score * 2);
//! assert_eq!(doubled, BTreeMap::from([("ada", 6), ("grace", 8)]));
//!
//! let tagged = ("label", 20).map(|value| value + 1);
//! assert_eq!(tagged, ("label", 21));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::function::Function;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for types that can have a function mapped over their contents.
///
/// The mapping function must be `Fn + Send + Sync + 'static` because a
/// container may call it many times and a [`Function`] stores it.
pub trait Functor: TypeConstructor + Sized {
    /// Applies a function to every value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2, 3].map(|n| n * 10), vec![10, 20, 30]);
    /// ```
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + Send + Sync + 'static,
        B: 'static;

    /// Replaces every inner value with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2, 3].replace("x"), vec!["x", "x", "x"]);
    /// assert_eq!(Functor::replace(None::<i32>, 0), None);
    /// ```
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        self.map::<B, _>(move |_| value.clone())
    }
}

// =============================================================================
// Option / Vec / Identity
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: 'static,
    {
        Self::map(self, function)
    }
}

impl<A> Functor for Vec<A> {
    fn map<B, F>(self, function: F) -> Vec<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: 'static,
    {
        self.into_iter().map(function).collect()
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: 'static,
    {
        Identity(function(self.0))
    }
}

// =============================================================================
// Mappings (values are mapped, keys are kept)
// =============================================================================

impl<K: Ord, V> Functor for BTreeMap<K, V> {
    fn map<B, F>(self, function: F) -> BTreeMap<K, B>
    where
        F: Fn(V) -> B + Send + Sync + 'static,
        B: 'static,
    {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> Functor for HashMap<K, V, S> {
    fn map<B, F>(self, function: F) -> HashMap<K, B, S>
    where
        F: Fn(V) -> B + Send + Sync + 'static,
        B: 'static,
    {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

// =============================================================================
// Tuples (the final slot is mapped)
// =============================================================================

macro_rules! impl_tuple_functor {
    ($($slot:ident $index:tt),* ; $last:tt) => {
        impl<$($slot,)* A> Functor for ($($slot,)* A,) {
            fn map<B, F>(self, function: F) -> ($($slot,)* B,)
            where
                F: Fn(A) -> B + Send + Sync + 'static,
                B: 'static,
            {
                ($(self.$index,)* function(self.$last),)
            }
        }
    };
}

impl_tuple_functor!(W0 0 ; 1);
impl_tuple_functor!(W0 0, W1 1 ; 2);
impl_tuple_functor!(W0 0, W1 1, W2 2 ; 3);
impl_tuple_functor!(W0 0, W1 1, W2 2, W3 3 ; 4);
impl_tuple_functor!(W0 0, W1 1, W2 2, W3 3, W4 4 ; 5);

// =============================================================================
// Function (post-composition)
// =============================================================================

/// Mapping a function post-composes: `f.map(g)` is `x -> g(f(x))`.
impl<R: 'static, A: 'static> Functor for Function<R, A> {
    fn map<B, F>(self, function: F) -> Function<R, B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: 'static,
    {
        Function::new(move |input| function(self.call(input)))
    }
}
