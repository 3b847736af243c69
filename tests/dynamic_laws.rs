#![cfg(feature = "dynamic")]
//! Property-based tests for the algebraic laws of the built-in dynamic
//! conformances.
//!
//! Values are generated per shape, since every law quantifies over operands
//! of one shape. Results are compared with the registry's own equivalence,
//! not structural equality.

use algebars::dynamic::{Func, Registry, Value, reassociate};
use algebars::typeclass::Ordering;
use proptest::prelude::*;

fn integer() -> impl Strategy<Value = Value> {
    any::<i64>().prop_map(Value::from)
}

fn float() -> impl Strategy<Value = Value> {
    any::<f64>().prop_map(Value::from)
}

fn text() -> impl Strategy<Value = Value> {
    ".{0,6}".prop_map(Value::text)
}

fn sequence() -> impl Strategy<Value = Value> {
    prop::collection::vec(any::<i16>(), 0..5)
        .prop_map(|values| Value::sequence(values.into_iter().map(|value| Value::from(i64::from(value)))))
}

fn mapping() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(0u8..4, any::<i8>(), 0..4).prop_map(|entries| {
        Value::mapping(
            entries
                .into_iter()
                .map(|(key, value)| (Value::from(i64::from(key)), Value::from(i64::from(value)))),
        )
    })
}

fn set() -> impl Strategy<Value = Value> {
    prop::collection::btree_set(0u8..6, 0..4)
        .prop_map(|elements| Value::set(elements.into_iter().map(|element| Value::from(i64::from(element)))))
}

fn pair() -> impl Strategy<Value = Value> {
    (text(), sequence()).prop_map(|(left, right)| Value::pair(left, right))
}

/// Any value with a Semigroup, Monoid, Setoid and Ord conformance.
fn ordered_monoid() -> impl Strategy<Value = Value> {
    prop_oneof![integer(), text(), sequence(), mapping(), set(), pair()]
}

/// Three operands sharing one shape.
fn triple() -> impl Strategy<Value = (Value, Value, Value)> {
    prop_oneof![
        (integer(), integer(), integer()),
        (text(), text(), text()),
        (sequence(), sequence(), sequence()),
        (mapping(), mapping(), mapping()),
        (set(), set(), set()),
        (pair(), pair(), pair()),
    ]
}

/// Two operands sharing one shape.
fn couple() -> impl Strategy<Value = (Value, Value)> {
    prop_oneof![
        (integer(), integer()),
        (float(), float()),
        (text(), text()),
        (sequence(), sequence()),
        (mapping(), mapping()),
        (set(), set()),
        (pair(), pair()),
    ]
}

fn increment() -> Func {
    Func::unary(|value| Ok(Value::from(value.as_integer()?.wrapping_add(1))))
}

fn negate() -> Func {
    Func::unary(|value| Ok(Value::from(value.as_integer()?.wrapping_neg())))
}

// =============================================================================
// Semigroup / Monoid
// =============================================================================

proptest! {
    #[test]
    fn prop_append_associativity((a, b, c) in triple()) {
        let registry = Registry::builtin();
        let left = registry.append(registry.append(a.clone(), b.clone()).unwrap(), c.clone()).unwrap();
        let right = registry.append(a, registry.append(b, c).unwrap()).unwrap();
        prop_assert!(registry.equivalent(&left, &right).unwrap());
    }

    #[test]
    fn prop_monoid_identity(value in ordered_monoid()) {
        let registry = Registry::builtin();
        let empty = registry.empty(&value).unwrap();

        let left = registry.append(empty.clone(), value.clone()).unwrap();
        let right = registry.append(value.clone(), empty).unwrap();
        prop_assert!(registry.equivalent(&left, &value).unwrap());
        prop_assert!(registry.equivalent(&right, &value).unwrap());
    }

    #[test]
    fn prop_repeat_matches_concat(value in ordered_monoid(), times in 1usize..4) {
        let registry = Registry::builtin();
        let repeated = registry.repeat(value.clone(), times).unwrap();
        let concatenated = registry.concat(std::iter::repeat_n(value, times)).unwrap();
        prop_assert!(registry.equivalent(&repeated, &concatenated).unwrap());
    }
}

// =============================================================================
// Setoid / Ord
// =============================================================================

proptest! {
    #[test]
    fn prop_equivalence_is_reflexive(value in ordered_monoid()) {
        prop_assert!(Registry::builtin().equivalent(&value, &value).unwrap());
    }

    #[test]
    fn prop_compare_coheres_with_equivalent((left, right) in couple()) {
        let registry = Registry::builtin();
        let ordering = registry.compare(&left, &right).unwrap();
        prop_assert_eq!(ordering == Ordering::Equal, registry.equivalent(&left, &right).unwrap());
    }

    #[test]
    fn prop_compare_is_antisymmetric((left, right) in couple()) {
        let registry = Registry::builtin();
        prop_assert_eq!(
            registry.compare(&left, &right).unwrap(),
            registry.compare(&right, &left).unwrap().reverse()
        );
    }

    #[test]
    fn prop_equivalence_matches_structural_equality((left, right) in couple()) {
        let registry = Registry::builtin();
        prop_assert_eq!(registry.equivalent(&left, &right).unwrap(), left == right);
    }
}

// =============================================================================
// Functor
// =============================================================================

fn functor_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        sequence(),
        mapping(),
        (text(), any::<i32>()).prop_map(|(label, value)| Value::pair(label, Value::from(i64::from(value)))),
    ]
}

proptest! {
    #[test]
    fn prop_map_identity(value in functor_value()) {
        let registry = Registry::builtin();
        let mapped = registry.map(value.clone(), &Func::identity()).unwrap();
        prop_assert!(registry.equivalent(&mapped, &value).unwrap());
    }

    #[test]
    fn prop_map_composition(value in functor_value()) {
        let registry = Registry::builtin();
        let fused = Func::unary(|value| negate().apply(increment().apply(value)?));

        let twice = registry.map(registry.map(value.clone(), &increment()).unwrap(), &negate()).unwrap();
        let once = registry.map(value, &fused).unwrap();
        prop_assert!(registry.equivalent(&twice, &once).unwrap());
    }

    #[test]
    fn prop_convey_length_is_product(
        data in prop::collection::vec(any::<i16>(), 0..5),
        count in 0usize..4,
    ) {
        let registry = Registry::builtin();
        let size = data.len();
        let data = Value::sequence(data.into_iter().map(|value| Value::from(i64::from(value))));
        let functions = Value::sequence(std::iter::repeat_n(Value::Function(increment()), count));

        let conveyed = registry.convey(data, functions).unwrap();
        prop_assert_eq!(conveyed.as_sequence().unwrap().len(), size * count);
    }
}

// =============================================================================
// Category / Arrow
// =============================================================================

proptest! {
    #[test]
    fn prop_function_category_identity(input in any::<i64>()) {
        let registry = Registry::builtin();
        let morphism = Value::Function(increment());
        let identity = registry.identity(&morphism).unwrap();

        let left = registry.compose(identity.clone(), morphism.clone()).unwrap();
        let right = registry.compose(morphism.clone(), identity).unwrap();
        let expected = registry.pipe(Value::from(input), &morphism).unwrap();
        prop_assert_eq!(registry.pipe(Value::from(input), &left).unwrap(), expected.clone());
        prop_assert_eq!(registry.pipe(Value::from(input), &right).unwrap(), expected);
    }

    #[test]
    fn prop_function_compose_associativity(input in any::<i64>()) {
        let registry = Registry::builtin();
        let f = Value::Function(increment());
        let g = Value::Function(negate());
        let h = Value::Function(increment());

        let left = registry.compose(h.clone(), registry.compose(g.clone(), f.clone()).unwrap()).unwrap();
        let right = registry.compose(registry.compose(h, g).unwrap(), f).unwrap();
        prop_assert_eq!(
            registry.pipe(Value::from(input), &left).unwrap(),
            registry.pipe(Value::from(input), &right).unwrap()
        );
    }

    #[test]
    fn prop_fanout_pairs_results(input in any::<i64>()) {
        let registry = Registry::builtin();
        let both = registry
            .fanout(Value::Function(increment()), Value::Function(negate()))
            .unwrap();
        prop_assert_eq!(
            registry.pipe(Value::from(input), &both).unwrap(),
            Value::pair(Value::from(input.wrapping_add(1)), Value::from(input.wrapping_neg()))
        );
    }

    #[test]
    fn prop_reassociate_round_trip(a in any::<i64>(), b in ".{0,3}", c in any::<i64>()) {
        let nested = Value::pair(Value::from(a), Value::pair(Value::text(b), Value::from(c)));
        let twice = reassociate(reassociate(nested.clone()).unwrap()).unwrap();
        prop_assert!(Registry::builtin().equivalent(&twice, &nested).unwrap());
    }
}
