//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The `Display` text of each variant is exactly the reply the user sees when a
//! command fails, since the dispatch boundary renders errors to plain text.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a command against the address book.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A domain value failed validation (name, phone, or birthday)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number targeted by a change was not on the contact
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    /// The command was invoked with fewer arguments than it requires
    #[error("Missing arguments. Usage: {0}")]
    MissingArguments(&'static str),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
