//! Command handlers.
//!
//! Each handler is a pure function from an argument list and the shared
//! address book to a display string. Failures come back as `CommandError`
//! and are rendered to their message text at the dispatch boundary, so the
//! caller only ever prints text.

pub mod birthday;
pub mod contact;

pub use birthday::{add_birthday, birthdays, show_birthday};
pub use contact::{add_contact, change_phone, show_all, show_phone};
