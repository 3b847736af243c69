//! Registry-based dispatch over runtime-shaped values.
//!
//! The static traits in [`typeclass`](crate::typeclass) cover every shape that
//! is known at compile time. This module covers the rest: a [`Value`] carries
//! its [`Shape`] at runtime, and a [`Registry`] resolves each
//! (capability, shape) pair to one implementation.
//!
//! - Built-in shapes (function, integer, float, text, sequence, mapping, set,
//!   tuple) resolve through a fixed table.
//! - Record shapes resolve through conformances declared on a
//!   [`RegistryBuilder`]. Prerequisites are checked once, in
//!   [`RegistryBuilder::build`].
//!
//! There is no fallback: a capability requested for a shape without a
//! conformance fails with [`AlgebraError::NoConformance`].
//!
//! # Examples
//!
//! ```rust
//! use algebars::dynamic::{AlgebraError, Capability, Func, Registry, Shape, Value};
//!
//! let registry = Registry::builtin();
//!
//! let data = Value::tuple([
//!     Value::sequence([Value::from(1), Value::from(2)]),
//!     Value::from(5),
//! ]);
//! let functions = Value::tuple([
//!     Value::sequence([Value::from(3), Value::from(4)]),
//!     Value::unary(|x| Ok(Value::from(x.as_integer()? + 1))),
//! ]);
//! assert_eq!(registry.convey(data, functions)?.to_string(), "([1, 2, 3, 4], 6)");
//!
//! let error = registry.map(Value::from(1), &Func::identity()).unwrap_err();
//! assert_eq!(error, AlgebraError::NoConformance {
//!     capability: Capability::Functor,
//!     shape: Shape::Integer,
//! });
//! # Ok::<(), AlgebraError>(())
//! ```

mod apply;
mod arrow;
mod error;
mod func;
mod functor;
mod record;
mod registry;
mod semigroup;
mod setoid;
mod shape;
mod value;

pub use arrow::{reassociate, split, swap, unsplit};
pub use error::{AlgebraError, Result};
pub use func::Func;
pub use record::Record;
pub use registry::{Registry, RegistryBuilder};
pub use shape::{Capability, Shape};
pub use value::Value;
