//! Contact commands: adding contacts, changing and listing phone numbers.

use crate::book::AddressBook;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Contact;

/// Handle `add <name> <phone>`.
///
/// Finds or creates the contact, then appends the phone number. The reply
/// distinguishes a brand-new contact from an update to an existing one.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, phone) = match args {
        [name, phone, ..] => (*name, *phone),
        _ => return Err(CommandError::MissingArguments("add <name> <phone>")),
    };

    let phone = PhoneNumber::new(phone)?;

    match book.find_mut(name) {
        Some(contact) => {
            contact.add_phone(phone);
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut contact = Contact::new(ContactName::new(name)?);
            contact.add_phone(phone);
            book.add(contact);
            Ok("Contact added.".to_string())
        }
    }
}

/// Handle `change <name> <old_phone> <new_phone>`.
pub fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, old, new) = match args {
        [name, old, new, ..] => (*name, *old, *new),
        _ => {
            return Err(CommandError::MissingArguments(
                "change <name> <old_phone> <new_phone>",
            ))
        }
    };

    let Some(contact) = book.find_mut(name) else {
        return Ok("Contact not found.".to_string());
    };

    contact.change_phone(old, PhoneNumber::new(new)?)?;
    Ok(format!(
        "Phone number for {} changed from {} to {}.",
        name, old, new
    ))
}

/// Handle `phone <name>`.
pub fn show_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = match args {
        [name, ..] => *name,
        _ => return Err(CommandError::MissingArguments("phone <name>")),
    };

    let Some(contact) = book.find(name) else {
        return Ok("Contact not found.".to_string());
    };

    if contact.phones().is_empty() {
        return Ok("No phone numbers.".to_string());
    }

    Ok(format!("Phones for {}: {}", name, join_phones(contact)))
}

/// Handle `all`.
///
/// One line per contact, in the order contacts were added.
pub fn show_all(_args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    let lines: Vec<String> = book
        .iter()
        .map(|contact| {
            let phones = if contact.phones().is_empty() {
                "no phones".to_string()
            } else {
                join_phones(contact)
            };
            match contact.birthday() {
                Some(birthday) => {
                    format!("{}: {}, Birthday: {}", contact.name(), phones, birthday)
                }
                None => format!("{}: {}", contact.name(), phones),
            }
        })
        .collect();

    Ok(lines.join("\n"))
}

fn join_phones(contact: &Contact) -> String {
    contact
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_contact_then_update() {
        let mut book = AddressBook::new();

        let reply = add_contact(&["Alice", "1234567890"], &mut book).unwrap();
        assert_eq!(reply, "Contact added.");

        let reply = add_contact(&["Alice", "0987654321"], &mut book).unwrap();
        assert_eq!(reply, "Contact updated.");

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_rejects_bad_phone_without_creating() {
        let mut book = AddressBook::new();

        let err = add_contact(&["Alice", "123"], &mut book).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid phone number '123'. Use exactly 10 digits."
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_contact_missing_arguments() {
        let mut book = AddressBook::new();

        let err = add_contact(&["Alice"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Missing arguments. Usage: add <name> <phone>");
    }

    #[test]
    fn test_change_phone_success_mentions_both_numbers() {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "1234567890"], &mut book).unwrap();

        let reply = change_phone(&["Alice", "1234567890", "5555555555"], &mut book).unwrap();
        assert_eq!(
            reply,
            "Phone number for Alice changed from 1234567890 to 5555555555."
        );
    }

    #[test]
    fn test_change_phone_unknown_contact() {
        let mut book = AddressBook::new();

        let reply = change_phone(&["Ghost", "1234567890", "5555555555"], &mut book).unwrap();
        assert_eq!(reply, "Contact not found.");
    }

    #[test]
    fn test_change_phone_unknown_number() {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "1234567890"], &mut book).unwrap();

        let err = change_phone(&["Alice", "0000000000", "1111111111"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Phone number 0000000000 not found.");
    }

    #[test]
    fn test_show_phone_lists_in_order() {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "1234567890"], &mut book).unwrap();
        add_contact(&["Alice", "0987654321"], &mut book).unwrap();

        let reply = show_phone(&["Alice"], &mut book).unwrap();
        assert_eq!(reply, "Phones for Alice: 1234567890, 0987654321");
    }

    #[test]
    fn test_show_phone_unknown_contact() {
        let mut book = AddressBook::new();

        let reply = show_phone(&["Alice"], &mut book).unwrap();
        assert_eq!(reply, "Contact not found.");
    }

    #[test]
    fn test_show_all_empty_book() {
        let mut book = AddressBook::new();

        let reply = show_all(&[], &mut book).unwrap();
        assert_eq!(reply, "Address book is empty.");
    }

    #[test]
    fn test_show_all_lines() {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "1234567890"], &mut book).unwrap();
        add_contact(&["Bob", "0987654321"], &mut book).unwrap();
        crate::commands::add_birthday(&["Bob", "15.05.1990"], &mut book).unwrap();

        let reply = show_all(&[], &mut book).unwrap();
        assert_eq!(
            reply,
            "Alice: 1234567890\nBob: 0987654321, Birthday: 15.05.1990"
        );
    }
}
