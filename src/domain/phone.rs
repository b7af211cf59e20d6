//! Phone value object.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// Rule for phone numbers: exactly ten ASCII digits, nothing else.
#[derive(Debug, Clone, Copy)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    const NAME: &'static str = "Phone";

    /// # Validation Rules
    ///
    /// - Exactly 10 characters
    /// - Every character in `0-9`; other Unicode digits are rejected
    fn validate(raw: &str) -> Result<(), ValidationError> {
        // Byte length equals char count only for ASCII, which the digit check enforces.
        if raw.len() != PHONE_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(())
    }
}

/// A validated phone number.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("0123456789").unwrap();
/// assert_eq!(phone.as_str(), "0123456789");
/// assert!(Phone::new("123").is_err());
/// ```
pub type Phone = Field<PhoneRule>;
