//! # algebars
//!
//! Algebraic structures for Rust: equivalence, total order, semigroups,
//! monoids, functors, applicatives, categories and arrows.
//!
//! ## Overview
//!
//! The capability hierarchy is exposed twice:
//!
//! - **Type Classes**: traits with supertrait bounds, resolved at compile time.
//!   A missing conformance is a compile error.
//! - **Dynamic Dispatch**: a tagged [`Value`](dynamic::Value) and an immutable
//!   [`Registry`](dynamic::Registry) that resolves (capability, shape) pairs at
//!   runtime, with user-defined record shapes declared once up front.
//! - **Function Composition**: `compose!`, `pipe_compose!` and `pipe!` over any
//!   morphism family.
//!
//! Both layers share [`Ordering`](typeclass::Ordering) as the result of
//! comparison.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Setoid, Semigroup, Functor, Arrow, etc.)
//! - `compose`: Composition macros
//! - `dynamic`: `Value`, `Registry` and the registry-based operations
//! - `serde`: Serialize/Deserialize for `Ordering`, `Shape` and `Capability`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use algebars::prelude::*;
//!
//! // Static: (Vec<i32>, i32) is an Apply whose first slot is appended
//! let combined = (vec![1, 2], 5).convey((vec![3, 4], |x: i32| x + 1));
//! assert_eq!(combined, (vec![1, 2, 3, 4], 6));
//!
//! // Dynamic: the same combination on runtime values
//! let registry = Registry::builtin();
//! let data = Value::tuple([Value::sequence([Value::from(1), Value::from(2)]), Value::from(5)]);
//! let functions = Value::tuple([
//!     Value::sequence([Value::from(3), Value::from(4)]),
//!     Value::unary(|x| Ok(Value::from(x.as_integer()? + 1))),
//! ]);
//! assert_eq!(registry.convey(data, functions)?.to_string(), "([1, 2, 3, 4], 6)");
//! # Ok::<(), AlgebraError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use algebars::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "dynamic")]
    pub use crate::dynamic::{
        AlgebraError, Capability, Func, Record, Registry, RegistryBuilder, Shape, Value,
    };
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "dynamic")]
pub mod dynamic;

#[cfg(feature = "typeclass")]
static_assertions::assert_impl_all!(typeclass::Function<i32, i32>: Send, Sync, Clone);

#[cfg(feature = "dynamic")]
static_assertions::assert_impl_all!(dynamic::Registry: Send, Sync, Clone);

#[cfg(feature = "dynamic")]
static_assertions::assert_impl_all!(dynamic::Value: Send, Sync, Clone);

#[cfg(feature = "dynamic")]
static_assertions::assert_impl_all!(dynamic::Func: Send, Sync, Clone);
