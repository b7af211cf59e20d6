//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names and phone
//! numbers. These value objects provide validation at construction time and
//! prevent invalid data from being represented in the system.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::{Field, FieldRule};
pub use name::{Name, NameRule};
pub use phone::{Phone, PhoneRule, PHONE_DIGITS};
