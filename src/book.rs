//! The address book: a name-keyed, insertion-ordered store of contacts.

use crate::models::Contact;
use chrono::NaiveDate;

/// How many days ahead (inclusive) the upcoming-birthday query looks.
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// An in-memory collection of contacts keyed by name.
///
/// Names match case-sensitively and each name maps to exactly one contact.
/// Iteration yields contacts in the order they were first added; re-adding
/// a name replaces the stored contact without moving it.
///
/// The book lives for the process lifetime and is never persisted.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, replacing any existing contact with the same name.
    ///
    /// Last writer wins: the previous contact (including its phone history)
    /// is dropped. Callers that want to extend an existing contact should
    /// `find_mut` first.
    pub fn add(&mut self, contact: Contact) {
        match self.position(contact.name().as_str()) {
            Some(index) => self.contacts[index] = contact,
            None => self.contacts.push(contact),
        }
    }

    /// Look up a contact by exact name.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.position(name).map(|index| &self.contacts[index])
    }

    /// Look up a contact by exact name, mutably.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.position(name).map(|index| &mut self.contacts[index])
    }

    /// Remove a contact by exact name, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        self.position(name).map(|index| self.contacts.remove(index))
    }

    /// Iterate over all contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Contacts whose birthday falls within the next week of `reference`.
    ///
    /// Each stored birthday is mapped onto `reference`'s year (Feb 29
    /// clamping to Feb 28 in common years) and included when it lands
    /// between `reference` and `reference + 7` days, inclusive. Birthdays
    /// that already passed this year are not carried over to next year,
    /// so a late-December reference never picks up early-January dates.
    ///
    /// Results come back in the book's insertion order.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<&Contact> {
        use chrono::Datelike;

        self.contacts
            .iter()
            .filter(|contact| {
                contact.birthday().is_some_and(|birthday| {
                    let this_year = birthday.in_year(reference.year());
                    let delta = (this_year - reference).num_days();
                    (0..=BIRTHDAY_WINDOW_DAYS).contains(&delta)
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.name().as_str() == name)
    }
}
