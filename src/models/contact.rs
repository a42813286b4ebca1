//! Contact model representing one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};

/// A single contact: a fixed name, its phone numbers, and an optional birthday.
///
/// The name is immutable for the lifetime of the contact — it is the key the
/// address book stores the contact under. Phone numbers keep their insertion
/// order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with no phone numbers and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Append a phone number to the contact.
    ///
    /// Duplicates are kept; validation already happened when the
    /// `PhoneNumber` was constructed.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the first phone number that exactly matches `old` with `new`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if no stored number matches `old`.
    pub fn change_phone(&mut self, old: &str, new: PhoneNumber) -> CommandResult<()> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(CommandError::PhoneNotFound(old.to_string())),
        }
    }

    /// Remove the first phone number that exactly matches `phone`.
    ///
    /// Returns whether a number was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Find a stored phone number by exact match.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// The contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Set the contact's birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }
}
