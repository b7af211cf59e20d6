//! Record model: one contact in the address book.

use crate::domain::{Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Result of [`Record::add_phone`].
///
/// Adding a phone never fails the caller: a malformed number is reported
/// back as `Rejected` and the record stays as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneOutcome {
    /// The phone was appended.
    Added,
    /// The phone was malformed and nothing changed.
    Rejected(ValidationError),
}

impl PhoneOutcome {
    /// Whether the phone was appended.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added)
    }

    /// The validation error, if the phone was rejected.
    pub fn rejection(&self) -> Option<&ValidationError> {
        match self {
            Self::Added => None,
            Self::Rejected(err) => Some(err),
        }
    }
}

/// A contact: an immutable name plus an ordered list of phone numbers.
///
/// Duplicate phones are allowed; order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Append a phone if it is valid.
    ///
    /// Unlike [`Record::edit_phone`], a malformed number does not produce an
    /// `Err`: it is logged and handed back as [`PhoneOutcome::Rejected`].
    pub fn add_phone(&mut self, raw: &str) -> PhoneOutcome {
        match Phone::new(raw) {
            Ok(phone) => {
                self.phones.push(phone);
                PhoneOutcome::Added
            }
            Err(err) => {
                warn!(contact = %self.name, phone = raw, "Rejected phone: {}", err);
                PhoneOutcome::Rejected(err)
            }
        }
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// Returns `false` and leaves the list untouched if there is no match.
    pub fn delete_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == raw) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace every phone with the single number `raw`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` is malformed, in which
    /// case the existing phones are kept.
    pub fn edit_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Find the first phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
