//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there is an `append: (T, T) -> T` that is
//! associative. Nothing else is required: in particular there need not be an
//! identity element (see [`Monoid`](super::Monoid) for that).
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! a.append(b).append(c) == a.append(b.append(c))    (associativity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebars::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").append(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].append(vec![3, 4]), vec![1, 2, 3, 4]);
//! assert_eq!(40_i32.append(2), 42);
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::num::NonZeroUsize;

use super::Identity;
use super::ord::Ordering;

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use std::num::NonZeroUsize;
///
/// use algebars::typeclass::Semigroup;
///
/// let count = NonZeroUsize::new(3).unwrap();
/// assert_eq!(String::from("ab").repeat(count), "ababab");
/// assert_eq!(Semigroup::concat(vec![1, 2, 3]), Some(6));
/// ```
pub trait Semigroup: Sized {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn append(self, other: Self) -> Self;

    /// Left fold of all elements with [`Semigroup::append`].
    ///
    /// Returns `None` for an empty iterator since a bare semigroup has no
    /// value to start from. Use [`Monoid::concat_all`](super::Monoid::concat_all)
    /// when an identity element exists.
    fn concat<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.append(element))
    }

    /// Appends a value to itself `count` times.
    ///
    /// `repeat(x, 1)` is `x`, `repeat(x, 3)` is `x.append(x).append(x)`.
    #[must_use]
    fn repeat(self, count: NonZeroUsize) -> Self
    where
        Self: Clone,
    {
        let mut result = self.clone();
        for _ in 1..count.get() {
            result = result.append(self.clone());
        }
        result
    }
}

// =============================================================================
// Numeric Implementations
// =============================================================================

// Wrapping keeps the operation total, so associativity holds for every input.
macro_rules! impl_integer_semigroup {
    ($($type:ty),* $(,)?) => {
        $(
            impl Semigroup for $type {
                #[inline]
                fn append(self, other: Self) -> Self {
                    self.wrapping_add(other)
                }
            }
        )*
    };
}

impl_integer_semigroup!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Semigroup for f32 {
    #[inline]
    fn append(self, other: Self) -> Self {
        self + other
    }
}

impl Semigroup for f64 {
    #[inline]
    fn append(self, other: Self) -> Self {
        self + other
    }
}

// =============================================================================
// Text and Sequence Implementations
// =============================================================================

impl Semigroup for String {
    fn append(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn append(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// =============================================================================
// Mapping and Set Implementations
// =============================================================================

/// Merges both maps. On a key collision the right operand wins.
impl<K: Ord, V> Semigroup for BTreeMap<K, V> {
    fn append(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Merges both maps. On a key collision the right operand wins.
impl<K: Eq + Hash, V, S: BuildHasher> Semigroup for HashMap<K, V, S> {
    fn append(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    fn append(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Eq + Hash, S: BuildHasher> Semigroup for HashSet<T, S> {
    fn append(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// =============================================================================
// Option, Unit, Identity and Ordering
// =============================================================================

/// - `Some(a).append(Some(b))` = `Some(a.append(b))`
/// - `None` on either side yields the other operand
impl<T: Semigroup> Semigroup for Option<T> {
    fn append(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.append(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn append(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn append(self, other: Self) -> Self {
        Self(self.0.append(other.0))
    }
}

/// Lexicographic combination: the first non-`Equal` ordering wins.
impl Semigroup for Ordering {
    #[inline]
    fn append(self, other: Self) -> Self {
        self.then(|| other)
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

macro_rules! impl_tuple_semigroup {
    ($($slot:ident $index:tt),+) => {
        /// Slot-wise combination.
        impl<$($slot: Semigroup),+> Semigroup for ($($slot,)+) {
            fn append(self, other: Self) -> Self {
                ($(self.$index.append(other.$index),)+)
            }
        }
    };
}

impl_tuple_semigroup!(A 0);
impl_tuple_semigroup!(A 0, B 1);
impl_tuple_semigroup!(A 0, B 1, C 2);
impl_tuple_semigroup!(A 0, B 1, C 2, D 3);
impl_tuple_semigroup!(A 0, B 1, C 2, D 3, E 4);
impl_tuple_semigroup!(A 0, B 1, C 2, D 3, E 4, F 5);
