//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! For all `a` of type `T` (in addition to associativity):
//!
//! ```text
//! T::empty().append(a) == a    (left identity)
//! a.append(T::empty()) == a    (right identity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebars::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(String::empty(), "");
//! assert_eq!(String::empty().append(String::from("hello")), "hello");
//! assert_eq!(i64::concat_all(vec![1, 2, 3]), 6);
//! assert_eq!(i64::concat_all(Vec::new()), 0);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::Identity;
use super::ord::Ordering;
use super::semigroup::Semigroup;
use super::setoid::Setoid;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Folds all elements starting from the identity element.
    ///
    /// Unlike [`Semigroup::concat`], this always produces a value.
    fn concat_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.append(element)
            })
    }

    /// Appends a value to itself `count` times; `0` yields the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::typeclass::Monoid;
    ///
    /// assert_eq!(String::from("ab").replicate(0), "");
    /// assert_eq!(String::from("ab").replicate(2), "abab");
    /// ```
    #[must_use]
    fn replicate(self, count: usize) -> Self
    where
        Self: Clone,
    {
        (0..count).fold(Self::empty(), |accumulator, _| {
            accumulator.append(self.clone())
        })
    }

    /// Returns `true` when this value is equivalent to the identity element.
    ///
    /// Equivalence is decided by [`Setoid`], not by `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algebars::typeclass::Monoid;
    ///
    /// assert!(String::new().is_empty_value());
    /// assert!(!vec![0].is_empty_value());
    /// assert!(0.0_f64.is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: Setoid,
    {
        Self::empty().equivalent(self)
    }
}

// =============================================================================
// Numeric Implementations
// =============================================================================

macro_rules! impl_integer_monoid {
    ($($type:ty),* $(,)?) => {
        $(
            impl Monoid for $type {
                #[inline]
                fn empty() -> Self {
                    0
                }
            }
        )*
    };
}

impl_integer_monoid!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Monoid for f32 {
    fn empty() -> Self {
        0.0
    }
}

impl Monoid for f64 {
    fn empty() -> Self {
        0.0
    }
}

// =============================================================================
// Text, Sequence, Mapping and Set Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Monoid for BTreeMap<K, V> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> Monoid for HashMap<K, V, S> {
    fn empty() -> Self {
        Self::default()
    }
}

impl<T: Ord> Monoid for BTreeSet<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> Monoid for HashSet<T, S> {
    fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Option, Unit, Identity and Ordering
// =============================================================================

/// `None` is the identity, so any semigroup gains one through `Option`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

impl Monoid for Ordering {
    fn empty() -> Self {
        Self::Equal
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

macro_rules! impl_tuple_monoid {
    ($($slot:ident),+) => {
        impl<$($slot: Monoid),+> Monoid for ($($slot,)+) {
            fn empty() -> Self {
                ($($slot::empty(),)+)
            }
        }
    };
}

impl_tuple_monoid!(A);
impl_tuple_monoid!(A, B);
impl_tuple_monoid!(A, B, C);
impl_tuple_monoid!(A, B, C, D);
impl_tuple_monoid!(A, B, C, D, E);
impl_tuple_monoid!(A, B, C, D, E, F);
