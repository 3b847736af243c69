//! Morphism composition macros.
//!
//! This module provides macros for composing morphisms of any
//! [`Semigroupoid`](crate::typeclass::Semigroupoid) family in either reading
//! direction, and two plain combinators that lift into any
//! [`Arrow`](crate::typeclass::Arrow) family.
//!
//! # Overview
//!
//! - [`compose!`]: Compose morphisms right-to-left (mathematical composition)
//! - [`pipe_compose!`]: Compose morphisms left-to-right
//! - [`pipe!`]: Push a value through morphisms left-to-right
//!
//! Every macro takes the family type first, followed by a semicolon:
//!
//! ```
//! use algebars::{compose, pipe};
//! use algebars::typeclass::{Arrow, FunctionArrow, Semigroupoid};
//!
//! let add_one = FunctionArrow::arrowize(|x: i32| x + 1);
//! let double = FunctionArrow::arrowize(|x: i32| x * 2);
//!
//! // compose!(F; f, g) runs g first
//! let composed = compose!(FunctionArrow; add_one.clone(), double.clone());
//! assert_eq!(FunctionArrow::invoke(&composed, 5), 11);
//!
//! // pipe!(F; x, f, g) runs f first
//! assert_eq!(pipe!(FunctionArrow; 5, double, add_one), 11);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(F; f, compose!(F; g, h)) == compose!(F; compose!(F; f, g), h)`
//! - **Identity**: `compose!(F; F::identity(), f) == f == compose!(F; f, F::identity())`
//! - **Reading order**: `pipe!(F; x, f, g, h) == F::invoke(&compose!(F; h, g, f), x)`

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
pub use crate::pipe_compose;
