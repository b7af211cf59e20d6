//! Error types for the address book application.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation failures live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can end an interactive session.
#[derive(Error, Debug)]
pub enum ShellError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A menu choice that names no known command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ShellError
pub type ShellResult<T> = Result<T, ShellError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
