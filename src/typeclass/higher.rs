//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Vec<_>` or `Option<_>` as type constructors.
//! [`TypeConstructor`] works around this with a GAT: a container applied to
//! `A` names the same container applied to any other `B`. [`Functor`] and
//! [`Apply`] are built on top of it.
//!
//! For containers with several type parameters the *last* one is the slot a
//! functor maps over: `BTreeMap<K, V>` maps values, `(W, A)` maps `A`, and
//! `Function<R, A>` maps the result `A`.
//!
//! [`Functor`]: super::Functor
//! [`Apply`]: super::Apply
//!
//! # Example
//!
//! ```rust
//! use algebars::typeclass::TypeConstructor;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//!
//! assert_inner::<Vec<i32>>();
//! assert_inner::<(String, i32)>();
//! ```

use std::collections::{BTreeMap, HashMap};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: the type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` (up to type equality).
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<K, V> TypeConstructor for BTreeMap<K, V> {
    type Inner = V;
    type WithType<B> = BTreeMap<K, B>;
}

impl<K, V, S> TypeConstructor for HashMap<K, V, S> {
    type Inner = V;
    type WithType<B> = HashMap<K, B, S>;
}

// =============================================================================
// Tuple Implementations (the final slot is the mapped one)
// =============================================================================

macro_rules! impl_tuple_type_constructor {
    ($($slot:ident),*) => {
        impl<$($slot,)* A> TypeConstructor for ($($slot,)* A,) {
            type Inner = A;
            type WithType<B> = ($($slot,)* B,);
        }
    };
}

impl_tuple_type_constructor!(W0);
impl_tuple_type_constructor!(W0, W1);
impl_tuple_type_constructor!(W0, W1, W2);
impl_tuple_type_constructor!(W0, W1, W2, W3);
impl_tuple_type_constructor!(W0, W1, W2, W3, W4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[test]
    fn vec_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Vec<String> = transform(vec![1, 2, 3]);
        assert!(result.is_empty());
    }

    #[test]
    fn btreemap_inner_type_is_the_value_type() {
        fn assert_inner<T: TypeConstructor<Inner = String>>() {}
        assert_inner::<BTreeMap<i32, String>>();
    }

    #[test]
    fn hashmap_with_type_keeps_key_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<bool>
        where
            T::WithType<bool>: Default,
        {
            Default::default()
        }

        let result: HashMap<&str, bool> = transform(HashMap::<&str, i32>::new());
        assert!(result.is_empty());
    }

    #[test]
    fn pair_inner_type_is_the_last_slot() {
        fn assert_inner<T: TypeConstructor<Inner = char>>() {}
        assert_inner::<(String, char)>();
        assert_inner::<(i32, i64, char)>();
    }

    #[test]
    fn tuple_with_type_replaces_only_the_last_slot() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<u8>
        where
            T::WithType<u8>: Default,
        {
            Default::default()
        }

        let result: (String, i32, u8) = transform((String::new(), 0, 'x'));
        assert_eq!(result, (String::new(), 0, 0));
    }
}
