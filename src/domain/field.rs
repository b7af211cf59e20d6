//! Validated string fields.
//!
//! A [`Field`] is a string that has passed its [`FieldRule`] at construction
//! time. Concrete fields are type aliases over a rule, e.g.
//! [`Name`](super::Name) and [`Phone`](super::Phone), so every field shares
//! the same representation and accessors without any dynamic dispatch.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// The validation predicate of a field variant.
pub trait FieldRule {
    /// Type name used in `Debug` output.
    const NAME: &'static str;

    /// Check a raw value, returning the error to report if it is rejected.
    fn validate(raw: &str) -> Result<(), ValidationError>;
}

/// A string value guaranteed to satisfy the rule `R`.
///
/// The value is never mutated after construction.
pub struct Field<R> {
    value: String,
    _rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    /// Create a new field, validating the raw value.
    ///
    /// The value is stored unchanged; no trimming or case folding happens here.
    ///
    /// # Errors
    ///
    /// Returns the rule's `ValidationError` if the value is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        R::validate(&value)?;
        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }
}

impl<R> Field<R> {
    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

// Manual impls so that `R` itself needs none of these traits.
impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _rule: PhantomData,
        }
    }
}

impl<R: FieldRule> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(R::NAME).field(&self.value).finish()
    }
}

impl<R> PartialEq for Field<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R> Eq for Field<R> {}

impl<R> Hash for Field<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R> PartialEq<str> for Field<R> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl<R> PartialEq<&str> for Field<R> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl<R> AsRef<str> for Field<R> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

// Serde support - serialize as string
impl<R> Serialize for Field<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Field::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl<R> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
