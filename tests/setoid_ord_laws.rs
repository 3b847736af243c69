#![cfg(feature = "typeclass")]
//! Property-based tests for Setoid and TotalOrder laws.
//!
//! - **Reflexivity**: `a.equivalent(&a)`
//! - **Symmetry**: `a.equivalent(&b) == b.equivalent(&a)`
//! - **Coherence**: `a.compare(&b) == Equal` iff `a.equivalent(&b)`
//! - **Antisymmetry**: `a.compare(&b) == b.compare(&a).reverse()`
//! - **Transitivity**: `a <= b` and `b <= c` imply `a <= c`

use std::collections::BTreeSet;

use algebars::typeclass::{Monoid, Ordering, Semigroup, Setoid, TotalOrder};
use proptest::prelude::*;

// =============================================================================
// Setoid Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_reflexivity(value in any::<i64>()) {
        prop_assert!(value.equivalent(&value));
    }

    #[test]
    fn prop_float_reflexivity(value in any::<f64>()) {
        prop_assert!(value.equivalent(&value));
    }

    #[test]
    fn prop_string_symmetry(left in ".{0,8}", right in ".{0,8}") {
        prop_assert_eq!(left.equivalent(&right), right.equivalent(&left));
    }

    #[test]
    fn prop_vec_symmetry(
        left in prop::collection::vec(any::<i8>(), 0..5),
        right in prop::collection::vec(any::<i8>(), 0..5),
    ) {
        prop_assert_eq!(left.equivalent(&right), right.equivalent(&left));
        prop_assert_eq!(left.nonequivalent(&right), !left.equivalent(&right));
    }
}

// =============================================================================
// Ord Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_coherence(left in any::<i32>(), right in any::<i32>()) {
        prop_assert_eq!(left.compare(&right) == Ordering::Equal, left.equivalent(&right));
    }

    #[test]
    fn prop_float_coherence(left in any::<f64>(), right in any::<f64>()) {
        prop_assert_eq!(left.compare(&right) == Ordering::Equal, left.equivalent(&right));
    }

    #[test]
    fn prop_tuple_coherence(
        left in (any::<i8>(), ".{0,3}"),
        right in (any::<i8>(), ".{0,3}"),
    ) {
        prop_assert_eq!(left.compare(&right) == Ordering::Equal, left.equivalent(&right));
    }

    #[test]
    fn prop_set_coherence(
        left in prop::collection::btree_set(any::<u8>(), 0..4),
        right in prop::collection::btree_set(any::<u8>(), 0..4),
    ) {
        let left: BTreeSet<u8> = left;
        prop_assert_eq!(left.compare(&right) == Ordering::Equal, left.equivalent(&right));
    }

    #[test]
    fn prop_vec_antisymmetry(
        left in prop::collection::vec(any::<i16>(), 0..5),
        right in prop::collection::vec(any::<i16>(), 0..5),
    ) {
        prop_assert_eq!(left.compare(&right), right.compare(&left).reverse());
    }

    #[test]
    fn prop_integer_transitivity(a in any::<i16>(), b in any::<i16>(), c in any::<i16>()) {
        if a.at_most(&b) && b.at_most(&c) {
            prop_assert!(a.at_most(&c));
        }
    }

    #[test]
    fn prop_derived_predicates_agree(left in any::<i64>(), right in any::<i64>()) {
        let ordering = left.compare(&right);
        prop_assert_eq!(left.lesser(&right), ordering == Ordering::Lesser);
        prop_assert_eq!(left.greater(&right), ordering == Ordering::Greater);
        prop_assert_eq!(left.equal(&right), ordering == Ordering::Equal);
        prop_assert_eq!(left.at_least(&right), ordering != Ordering::Lesser);
        prop_assert_eq!(left.at_most(&right), ordering != Ordering::Greater);
    }
}

// =============================================================================
// Ordering as a Monoid
// =============================================================================

fn ordering() -> impl Strategy<Value = Ordering> {
    prop_oneof![
        Just(Ordering::Lesser),
        Just(Ordering::Equal),
        Just(Ordering::Greater),
    ]
}

proptest! {
    #[test]
    fn prop_ordering_associativity(a in ordering(), b in ordering(), c in ordering()) {
        prop_assert_eq!(a.append(b).append(c), a.append(b.append(c)));
    }

    #[test]
    fn prop_ordering_identity(value in ordering()) {
        prop_assert_eq!(Ordering::empty().append(value), value);
        prop_assert_eq!(value.append(Ordering::empty()), value);
    }

    /// Appending slot orderings is lexicographic tuple comparison.
    #[test]
    fn prop_ordering_append_is_lexicographic(left in (any::<i8>(), any::<i8>()), right in (any::<i8>(), any::<i8>())) {
        let combined = left.0.compare(&right.0).append(left.1.compare(&right.1));
        prop_assert_eq!(combined, left.compare(&right));
    }
}
