//! Address Book - an interactive, in-memory contact directory.
//!
//! Contacts are stored for the lifetime of a session only; nothing is
//! persisted between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and `ValidationError`
//! - **models**: `Record` (one contact) and `AddressBook` (all contacts, keyed by name)
//! - **shell**: Menu commands and the interactive `Session` loop
//! - **config**: Configuration management from environment variables
//! - **error**: Application error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

pub use config::Config;
pub use domain::{Name, Phone, ValidationError};
pub use error::{ConfigError, ShellError, UnknownCommand};
pub use models::{AddressBook, PhoneOutcome, Record};
pub use shell::{Command, Session};
