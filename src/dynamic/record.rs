//! Named records, the open extension point of the dynamic layer.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::error::{AlgebraError, Result};
use super::shape::Shape;
use super::value::Value;

/// A user-defined record: a name plus named fields.
///
/// Records have no built-in conformances. Capabilities are attached to a
/// record name through [`RegistryBuilder`](super::RegistryBuilder).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Record {
    name: Arc<str>,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a record with no fields.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Returns the record with `field` set to `value`.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// The record name.
    pub const fn name(&self) -> &Arc<str> {
        &self.name
    }

    /// The record's shape.
    pub fn shape(&self) -> Shape {
        Shape::Record(Arc::clone(&self.name))
    }

    /// Looks up a field.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::MissingField`] when the field is absent.
    pub fn get(&self, field: &str) -> Result<&Value> {
        self.fields.get(field).ok_or_else(|| AlgebraError::MissingField {
            record: Arc::clone(&self.name),
            field: field.to_owned(),
        })
    }

    /// Removes and returns a field.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::MissingField`] when the field is absent.
    pub fn take(&mut self, field: &str) -> Result<Value> {
        self.fields.remove(field).ok_or_else(|| AlgebraError::MissingField {
            record: Arc::clone(&self.name),
            field: field.to_owned(),
        })
    }

    /// Iterates fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {{", self.name)?;
        for (index, (field, value)) in self.fields.iter().enumerate() {
            let separator = if index == 0 { " " } else { ", " };
            write!(formatter, "{separator}{field}: {value}")?;
        }
        if self.fields.is_empty() {
            formatter.write_str("}")
        } else {
            formatter.write_str(" }")
        }
    }
}
