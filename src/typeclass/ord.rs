//! Total orders and the three-valued [`Ordering`] tag.
//!
//! [`TotalOrder`] extends [`Setoid`] with a comparison that always produces
//! exactly one of [`Ordering::Lesser`], [`Ordering::Equal`] or
//! [`Ordering::Greater`]. All derived predicates (`greater`, `at_most`, ...)
//! call [`TotalOrder::compare`] exactly once.
//!
//! # Coherence
//!
//! Implementations must keep `compare` and `equivalent` in agreement:
//!
//! ```text
//! a.compare(&b) == Ordering::Equal  <=>  a.equivalent(&b)
//! ```
//!
//! This is not checked at runtime.
//!
//! # Examples
//!
//! ```rust
//! use algebars::typeclass::{Ordering, TotalOrder};
//!
//! assert_eq!(1.compare(&2), Ordering::Lesser);
//! assert!("b".greater("a"));
//! assert!(vec![1, 2].at_most(&vec![1, 2]));
//! ```

use std::cmp;
use std::collections::{BTreeMap, BTreeSet};

use super::setoid::Setoid;

/// The result of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ordering {
    /// The left operand sorts before the right one.
    Lesser,
    /// Both operands are equivalent.
    Equal,
    /// The left operand sorts after the right one.
    Greater,
}

impl Ordering {
    /// Swaps `Lesser` and `Greater`.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Lesser => Self::Greater,
            Self::Equal => Self::Equal,
            Self::Greater => Self::Lesser,
        }
    }

    /// Returns `true` for [`Ordering::Equal`].
    pub const fn is_equal(self) -> bool {
        matches!(self, Self::Equal)
    }
}

impl From<cmp::Ordering> for Ordering {
    fn from(ordering: cmp::Ordering) -> Self {
        match ordering {
            cmp::Ordering::Less => Self::Lesser,
            cmp::Ordering::Equal => Self::Equal,
            cmp::Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Ordering> for cmp::Ordering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Lesser => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// A type class for totally ordered types.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
///
/// ```text
/// a.compare(&b) == b.compare(&a).reverse()                   (antisymmetry)
/// a.at_most(&b) && b.at_most(&c) => a.at_most(&c)            (transitivity)
/// a.compare(&b).is_equal() == a.equivalent(&b)               (coherence)
/// ```
pub trait TotalOrder: Setoid {
    /// Compares two values.
    fn compare(&self, other: &Self) -> Ordering;

    /// `compare == Equal`.
    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// `compare == Greater`.
    #[inline]
    fn greater(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// `compare == Lesser`.
    #[inline]
    fn lesser(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Lesser
    }

    /// `compare != Lesser`.
    #[inline]
    fn at_least(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Lesser
    }

    /// `compare != Greater`.
    #[inline]
    fn at_most(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }
}

// =============================================================================
// Primitive Implementations
// =============================================================================

macro_rules! impl_total_order_by_ord {
    ($($type:ty),* $(,)?) => {
        $(
            impl TotalOrder for $type {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    cmp::Ord::cmp(self, other).into()
                }
            }
        )*
    };
}

impl_total_order_by_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String, ()
);

impl TotalOrder for f32 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other).into()
    }
}

impl TotalOrder for f64 {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other).into()
    }
}

impl<T: TotalOrder + ?Sized> TotalOrder for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

impl Setoid for Ordering {
    #[inline]
    fn equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

impl TotalOrder for Ordering {
    fn compare(&self, other: &Self) -> Ordering {
        const fn rank(ordering: Ordering) -> u8 {
            match ordering {
                Ordering::Lesser => 0,
                Ordering::Equal => 1,
                Ordering::Greater => 2,
            }
        }
        rank(*self).compare(&rank(*other))
    }
}

// =============================================================================
// Sequence Implementations (lexicographic)
// =============================================================================

fn compare_sequences<'a, T, I>(left: I, right: I) -> Ordering
where
    T: TotalOrder + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (Some(left_element), Some(right_element)) => {
                let ordering = left_element.compare(right_element);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (None, Some(_)) => return Ordering::Lesser,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

impl<T: TotalOrder> TotalOrder for [T] {
    fn compare(&self, other: &Self) -> Ordering {
        compare_sequences(self, other)
    }
}

impl<T: TotalOrder> TotalOrder for Vec<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Ordering {
        self.as_slice().compare(other.as_slice())
    }
}

/// `None` sorts before every `Some`.
impl<T: TotalOrder> TotalOrder for Option<T> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Some(left), Some(right)) => left.compare(right),
            (None, Some(_)) => Ordering::Lesser,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

// =============================================================================
// Mapping and Set Implementations (size first, then key order)
// =============================================================================

impl<K: TotalOrder, V: TotalOrder> TotalOrder for BTreeMap<K, V> {
    fn compare(&self, other: &Self) -> Ordering {
        let by_size = self.len().compare(&other.len());
        if by_size != Ordering::Equal {
            return by_size;
        }
        self.iter()
            .zip(other)
            .map(|(left, right)| left.0.compare(right.0).then(|| left.1.compare(right.1)))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl<T: TotalOrder> TotalOrder for BTreeSet<T> {
    fn compare(&self, other: &Self) -> Ordering {
        let by_size = self.len().compare(&other.len());
        if by_size != Ordering::Equal {
            return by_size;
        }
        compare_sequences(self, other)
    }
}

impl Ordering {
    /// Returns `self` unless it is `Equal`, in which case `next` decides.
    #[must_use]
    pub fn then<F: FnOnce() -> Self>(self, next: F) -> Self {
        match self {
            Self::Equal => next(),
            decided => decided,
        }
    }
}

// =============================================================================
// Tuple Implementations (lexicographic by slot)
// =============================================================================

macro_rules! impl_tuple_total_order {
    ($($slot:ident $index:tt),+) => {
        impl<$($slot: TotalOrder),+> TotalOrder for ($($slot,)+) {
            fn compare(&self, other: &Self) -> Ordering {
                Ordering::Equal
                    $(.then(|| self.$index.compare(&other.$index)))+
            }
        }
    };
}

impl_tuple_total_order!(A 0);
impl_tuple_total_order!(A 0, B 1);
impl_tuple_total_order!(A 0, B 1, C 2);
impl_tuple_total_order!(A 0, B 1, C 2, D 3);
impl_tuple_total_order!(A 0, B 1, C 2, D 3, E 4);
impl_tuple_total_order!(A 0, B 1, C 2, D 3, E 4, F 5);
