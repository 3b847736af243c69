//! Static type classes for algebraic structures.
//!
//! Each capability is a trait and every prerequisite is a supertrait bound,
//! so a missing conformance is a compile error rather than a runtime one:
//!
//! - [`Setoid`] → [`TotalOrder`]
//! - [`Semigroup`] → [`Monoid`]
//! - [`Functor`] → [`Apply`]
//! - [`Semigroupoid`] → [`Category`] → [`Arrow`]
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] emulates them with a
//! Generic Associated Type so that [`Functor`] and [`Apply`] can speak about
//! "the same container holding a different type". Morphism families use the
//! same trick with a two-parameter GAT, [`Semigroupoid::Morphism`].
//!
//! ## Foundation Types
//!
//! - [`Ordering`]: the three-valued comparison result
//! - [`Function`]: a cloneable, thread-safe `Fn(A) -> B`
//! - [`Identity`]: the identity functor
//! - [`FunctionArrow`], [`FallibleArrow`]: built-in morphism families
//!
//! # Examples
//!
//! ## Semigroup and Monoid
//!
//! ```rust
//! use algebars::typeclass::{Monoid, Semigroup};
//!
//! assert_eq!(vec![1, 2].append(vec![3]), vec![1, 2, 3]);
//! assert_eq!(String::concat_all(vec![String::from("a"), String::from("b")]), "ab");
//! ```
//!
//! ## Apply
//!
//! ```rust
//! use algebars::typeclass::Apply;
//!
//! assert_eq!(Some(1).lift(Some(2), |x, y| x + y), Some(3));
//! ```
//!
//! ## Arrow
//!
//! ```rust
//! use algebars::typeclass::{Arrow, FunctionArrow, Semigroupoid};
//!
//! let both = FunctionArrow::product(
//!     FunctionArrow::arrowize(|x: i32| x + 1),
//!     FunctionArrow::arrowize(|text: &'static str| text.len()),
//! );
//! assert_eq!(FunctionArrow::invoke(&both, (1, "abc")), (2, 3));
//! ```

mod apply;
mod arrow;
mod function;
mod functor;
mod higher;
mod identity;
mod monoid;
mod morphism;
mod ord;
mod semigroup;
mod semigroupoid;
mod setoid;

pub use apply::{Apply, over, over3, provide, supply};
pub use arrow::{Arrow, reassociate_left, reassociate_right, split, swap, unsplit};
pub use function::Function;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monoid::Monoid;
pub use morphism::{FallibleArrow, FunctionArrow};
pub use ord::{Ordering, TotalOrder};
pub use semigroup::Semigroup;
pub use semigroupoid::{Category, Semigroupoid};
pub use setoid::Setoid;
