//! Setoid type class - types with an equivalence relation.
//!
//! A setoid is a set equipped with an equivalence relation. Equivalence is
//! deliberately separate from [`PartialEq`]: a type may consider two values
//! interchangeable without them being structurally identical, and floats get
//! a reflexive equivalence (`NaN` is equivalent to itself).
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! a.equivalent(&a)                                          (reflexivity)
//! a.equivalent(&b) == b.equivalent(&a)                      (symmetry)
//! a.equivalent(&b) && b.equivalent(&c) => a.equivalent(&c)  (transitivity)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebars::typeclass::Setoid;
//!
//! assert!(vec![1, 2, 3].equivalent(&vec![1, 2, 3]));
//! assert!(f64::NAN.equivalent(&f64::NAN));
//! assert!("left".nonequivalent("right"));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

/// A type class for types with an equivalence relation.
pub trait Setoid {
    /// Returns `true` when both values are equivalent.
    fn equivalent(&self, other: &Self) -> bool;

    /// Negation of [`Setoid::equivalent`].
    #[inline]
    fn nonequivalent(&self, other: &Self) -> bool {
        !self.equivalent(other)
    }
}

// =============================================================================
// Primitive Implementations
// =============================================================================

macro_rules! impl_setoid_by_eq {
    ($($type:ty),* $(,)?) => {
        $(
            impl Setoid for $type {
                #[inline]
                fn equivalent(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_setoid_by_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String, ()
);

impl Setoid for f32 {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.total_cmp(other).is_eq()
    }
}

impl Setoid for f64 {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.total_cmp(other).is_eq()
    }
}

impl<T: Setoid + ?Sized> Setoid for &T {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        (**self).equivalent(*other)
    }
}

// =============================================================================
// Sequence Implementations
// =============================================================================

impl<T: Setoid> Setoid for [T] {
    fn equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(left, right)| left.equivalent(right))
    }
}

impl<T: Setoid> Setoid for Vec<T> {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self.as_slice().equivalent(other.as_slice())
    }
}

impl<T: Setoid> Setoid for Option<T> {
    fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.equivalent(right),
            (None, None) => true,
            _ => false,
        }
    }
}

// =============================================================================
// Mapping and Set Implementations
// =============================================================================

/// Entries are compared pairwise in key order.
impl<K: Setoid, V: Setoid> Setoid for BTreeMap<K, V> {
    fn equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(left, right)| {
                left.0.equivalent(right.0) && left.1.equivalent(right.1)
            })
    }
}

/// Keys are matched by `Eq`; only the values go through `Setoid`.
impl<K: Eq + Hash, V: Setoid, S: BuildHasher> Setoid for HashMap<K, V, S> {
    fn equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| {
                other
                    .get(key)
                    .is_some_and(|candidate| value.equivalent(candidate))
            })
    }
}

impl<T: Setoid> Setoid for BTreeSet<T> {
    fn equivalent(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(left, right)| left.equivalent(right))
    }
}

impl<T: Eq + Hash, S: BuildHasher> Setoid for HashSet<T, S> {
    fn equivalent(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

// =============================================================================
// Tuple Implementations
// =============================================================================

macro_rules! impl_tuple_setoid {
    ($($slot:ident $index:tt),+) => {
        impl<$($slot: Setoid),+> Setoid for ($($slot,)+) {
            #[inline]
            fn equivalent(&self, other: &Self) -> bool {
                $(self.$index.equivalent(&other.$index))&&+
            }
        }
    };
}

impl_tuple_setoid!(A 0);
impl_tuple_setoid!(A 0, B 1);
impl_tuple_setoid!(A 0, B 1, C 2);
impl_tuple_setoid!(A 0, B 1, C 2, D 3);
impl_tuple_setoid!(A 0, B 1, C 2, D 3, E 4);
impl_tuple_setoid!(A 0, B 1, C 2, D 3, E 4, F 5);
