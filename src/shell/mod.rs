//! Interactive text shell.
//!
//! A thin layer that reads menu choices and answers, calls into the
//! [`AddressBook`](crate::models::AddressBook) and prints the results.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::{Flow, Session};
