#![cfg(feature = "typeclass")]
//! Property-based tests for Apply laws and ordering contracts.
//!
//! - **Ap Definition**: `fs.ap(data) == fs.convey(data.map(|x| move |f| f(x)))`
//! - **Naturality**: mapping after `convey` equals post-composing the functions
//! - **Lift Consistency**: `a.lift(b, f)` applies `f` to every pairing, `a` outermost
//! - **Ordering**: `convey` is data-major and `ap` is function-major

use algebars::typeclass::{Apply, Function, Functor, Identity, over, provide, supply};
use proptest::prelude::*;
use rstest::rstest;

type Step = fn(i32) -> i32;

fn steps() -> Vec<Step> {
    vec![|x| x.wrapping_add(1), |x| x.wrapping_mul(10), |x| x.wrapping_neg()]
}

// =============================================================================
// Ordering Contracts
// =============================================================================

#[rstest]
fn convey_visits_data_first() {
    let functions: Vec<Step> = vec![|x| x + 1, |x| x * 10];
    assert_eq!(vec![1, 2, 3].convey(functions), vec![2, 10, 3, 20, 4, 30]);
}

#[rstest]
fn ap_visits_functions_first() {
    let functions: Vec<Step> = vec![|x| x + 1, |x| x * 10];
    assert_eq!(functions.ap(vec![1, 2, 3]), vec![2, 3, 4, 10, 20, 30]);
}

#[rstest]
fn tuple_convey_appends_leading_slots() {
    let combined = (vec![1, 2], 5).convey((vec![3, 4], |x: i32| x + 1));
    assert_eq!(combined, (vec![1, 2, 3, 4], 6));
}

#[rstest]
fn provide_and_supply_are_ap_and_convey() {
    let functions: Vec<Step> = vec![|x| x + 1, |x| x * 10];
    assert_eq!(
        provide(functions.clone(), vec![1, 2]),
        functions.clone().ap(vec![1, 2])
    );
    assert_eq!(
        supply(vec![1, 2], functions.clone()),
        vec![1, 2].convey(functions)
    );
}

// =============================================================================
// Vec<A> Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_ap_definition(data in prop::collection::vec(any::<i32>(), 0..6)) {
        let functions = steps();
        let wrapped = data.clone().map(|x: i32| move |f: Step| f(x));
        prop_assert_eq!(functions.clone().ap(data), functions.convey(wrapped));
    }

    #[test]
    fn prop_vec_convey_length(
        data in prop::collection::vec(any::<i16>(), 0..6),
        count in 0usize..4,
    ) {
        let unchanged: fn(i16) -> i16 = |value| value;
        let functions = vec![unchanged; count];
        let length = data.len();
        prop_assert_eq!(data.convey(functions).len(), length * count);
    }

    #[test]
    fn prop_vec_naturality(data in prop::collection::vec(any::<i32>(), 0..6)) {
        let after = |x: i32| x.wrapping_sub(3);
        let composed: Vec<Step> = vec![|x| x.wrapping_add(1).wrapping_sub(3), |x| x.wrapping_mul(10).wrapping_sub(3)];
        let functions: Vec<Step> = vec![|x| x.wrapping_add(1), |x| x.wrapping_mul(10)];

        let left = data.clone().convey(functions).map(after);
        let right = data.convey(composed);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_lift_is_cartesian(
        left in prop::collection::vec(any::<i16>(), 0..5),
        right in prop::collection::vec(any::<i16>(), 0..5),
    ) {
        let mut expected = Vec::new();
        for x in &left {
            for y in &right {
                expected.push(i32::from(*x) + i32::from(*y));
            }
        }
        let lifted = left.lift(right, |x: i16, y: i16| i32::from(x) + i32::from(y));
        prop_assert_eq!(lifted, expected);
    }

    #[test]
    fn prop_over_matches_lift(left in any::<Option<i32>>(), right in any::<Option<i32>>()) {
        let add = |x: i32, y: i32| x.wrapping_add(y);
        prop_assert_eq!(over(add, left, right), left.lift(right, add));
    }
}

// =============================================================================
// Option / Identity Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_option_ap_definition(data in any::<Option<i32>>(), present in any::<bool>()) {
        let tripled: Step = |x| x.wrapping_mul(3);
        let function = present.then_some(tripled);
        let wrapped = Functor::map(data, |x: i32| move |f: Step| f(x));
        prop_assert_eq!(function.ap(data), function.convey(wrapped));
    }

    #[test]
    fn prop_option_then_and_following(left in any::<Option<u8>>(), right in any::<Option<u8>>()) {
        let both = left.is_some() && right.is_some();
        prop_assert_eq!(left.then(right), if both { right } else { None });
        prop_assert_eq!(left.following(right), if both { left } else { None });
    }

    #[test]
    fn prop_identity_lift3(a in any::<i8>(), b in any::<i8>(), c in any::<i8>()) {
        let total = Identity::new(a).lift3(Identity::new(b), Identity::new(c), |x: i8, y: i8, z: i8| {
            i32::from(x) + i32::from(y) + i32::from(z)
        });
        prop_assert_eq!(total, Identity::new(i32::from(a) + i32::from(b) + i32::from(c)));
    }
}

// =============================================================================
// Tuple / Function Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_tuple_convey_slot_order(
        left in prop::collection::vec(any::<u8>(), 0..4),
        right in prop::collection::vec(any::<u8>(), 0..4),
        value in any::<i32>(),
    ) {
        let (log, result) = (left.clone(), value).convey((right.clone(), |x: i32| x.wrapping_add(1)));
        let mut expected = left;
        expected.extend(right);
        prop_assert_eq!(log, expected);
        prop_assert_eq!(result, value.wrapping_add(1));
    }

    #[test]
    fn prop_reader_convey(input in any::<i32>()) {
        let data = Function::new(|x: i32| x.wrapping_mul(2));
        let functions = Function::new(|x: i32| move |y: i32| x.wrapping_add(y));
        let combined = data.convey(functions);
        prop_assert_eq!(combined.call(input), input.wrapping_add(input.wrapping_mul(2)));
    }
}
