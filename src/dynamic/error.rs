//! Errors raised by registry dispatch.
//!
//! The static layer has no runtime errors: a missing conformance is a compile
//! error there. Everything in this module belongs to the dynamic layer, where
//! the shape of a [`Value`](super::Value) is only known at runtime.

use std::sync::Arc;

use thiserror::Error;

use super::shape::{Capability, Shape};

/// Errors produced by [`Registry`](super::Registry) operations.
///
/// Derived combinators never recover from these; the first error is
/// propagated to the caller unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A capability was requested for a shape with no conformance.
    #[error("No {capability} conformance for {shape}")]
    NoConformance {
        /// The capability that was requested.
        capability: Capability,
        /// The shape of the offending value.
        shape: Shape,
    },

    /// Operands have incompatible shapes or arities.
    #[error("Shape mismatch in {operation}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// The operation that rejected its operands.
        operation: &'static str,
        /// What the operation required.
        expected: String,
        /// What it received.
        found: String,
    },

    /// A record conformance was registered without the capability it builds on.
    #[error("{capability} for {shape} requires {prerequisite}")]
    MissingPrerequisite {
        /// The capability that was registered.
        capability: Capability,
        /// The capability it depends on.
        prerequisite: Capability,
        /// The record shape.
        shape: Shape,
    },

    /// The same capability was registered twice for one record shape.
    #[error("{capability} registered twice for {shape}")]
    DuplicateConformance {
        /// The repeated capability.
        capability: Capability,
        /// The record shape.
        shape: Shape,
    },

    /// A fold with no starting element received no input.
    #[error("{operation} requires at least one element")]
    EmptyInput {
        /// The operation that received the empty input.
        operation: &'static str,
    },

    /// A record has no field with the requested name.
    #[error("Record {record} has no field {field}")]
    MissingField {
        /// The record name.
        record: Arc<str>,
        /// The missing field.
        field: String,
    },

    /// [`Registry::install`](super::Registry::install) was called twice.
    #[error("A registry has already been installed")]
    AlreadyInstalled,
}

impl AlgebraError {
    /// Builds a [`AlgebraError::ShapeMismatch`].
    pub fn mismatch(
        operation: &'static str,
        expected: impl ToString,
        found: impl ToString,
    ) -> Self {
        Self::ShapeMismatch {
            operation,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Builds a [`AlgebraError::NoConformance`].
    pub const fn no_conformance(capability: Capability, shape: Shape) -> Self {
        Self::NoConformance { capability, shape }
    }
}

/// Result alias for registry operations.
pub type Result<T> = std::result::Result<T, AlgebraError>;
