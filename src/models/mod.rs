//! Data models for the address book.
//!
//! A [`Record`] is one contact; an [`AddressBook`] holds every record of a
//! session, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::{PhoneOutcome, Record};
