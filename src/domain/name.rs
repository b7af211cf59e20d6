//! Name value object.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Rule for contact names: any non-empty string.
///
/// Whitespace is significant; trimming is up to the caller.
#[derive(Debug, Clone, Copy)]
pub struct NameRule;

impl FieldRule for NameRule {
    const NAME: &'static str = "Name";

    fn validate(raw: &str) -> Result<(), ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// A validated contact name.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert!(Name::new("").is_err());
/// ```
pub type Name = Field<NameRule>;
