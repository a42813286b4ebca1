//! Contact Book - an interactive command-line assistant for a personal address book.
//!
//! This library holds the data model and validation/query engine behind the
//! `contact-book` binary: contacts with validated phone numbers and optional
//! birthdays, kept in an in-memory address book that answers line-oriented
//! commands.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record
//! - **book**: The in-memory address book and its queries
//! - **error**: Custom error types for precise error handling
//! - **commands**: Command handlers mapping arguments to display strings
//! - **repl**: The line loop and dispatch boundary

// Re-export commonly used types
pub mod book;
pub mod commands;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult};
pub use models::Contact;
