//! Birthday commands: setting, showing, and listing upcoming birthdays.

use crate::book::AddressBook;
use crate::domain::Birthday;
use crate::error::{CommandError, CommandResult};
use chrono::NaiveDate;

/// Handle `add-birthday <name> <DD.MM.YYYY>`.
///
/// Overwrites any birthday the contact already has.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let (name, date) = match args {
        [name, date, ..] => (*name, *date),
        _ => {
            return Err(CommandError::MissingArguments(
                "add-birthday <name> <DD.MM.YYYY>",
            ))
        }
    };

    let Some(contact) = book.find_mut(name) else {
        return Ok("Contact not found.".to_string());
    };

    contact.set_birthday(Birthday::parse(date)?);
    Ok(format!("Birthday for {} added/updated.", name))
}

/// Handle `show-birthday <name>`.
pub fn show_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = match args {
        [name, ..] => *name,
        _ => return Err(CommandError::MissingArguments("show-birthday <name>")),
    };

    let Some(contact) = book.find(name) else {
        return Ok("Contact not found.".to_string());
    };

    match contact.birthday() {
        Some(birthday) => Ok(format!("Birthday for {} is {}", name, birthday)),
        None => Ok("Birthday not set.".to_string()),
    }
}

/// Handle `birthdays`, relative to the given reference date.
///
/// The REPL passes today's date; tests pass a fixed one.
pub fn birthdays(
    _args: &[&str],
    book: &mut AddressBook,
    reference: NaiveDate,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(reference);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next week.".to_string());
    }

    let lines: Vec<String> = upcoming
        .iter()
        .map(|contact| {
            // Filtered on having a birthday above.
            let birthday = contact.birthday().expect("upcoming contact has a birthday");
            format!("{}: {}", contact.name(), birthday)
        })
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add_contact;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_add_birthday_unknown_contact() {
        let mut book = AddressBook::new();

        let reply = add_birthday(&["Bob", "15.05.1990"], &mut book).unwrap();
        assert_eq!(reply, "Contact not found.");
    }

    #[test]
    fn test_add_then_show_birthday() {
        let mut book = AddressBook::new();
        add_contact(&["Bob", "1111111111"], &mut book).unwrap();

        let reply = add_birthday(&["Bob", "15.05.1990"], &mut book).unwrap();
        assert_eq!(reply, "Birthday for Bob added/updated.");

        let reply = show_birthday(&["Bob"], &mut book).unwrap();
        assert_eq!(reply, "Birthday for Bob is 15.05.1990");
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut book = AddressBook::new();
        add_contact(&["Bob", "1111111111"], &mut book).unwrap();
        add_birthday(&["Bob", "15.05.1990"], &mut book).unwrap();
        add_birthday(&["Bob", "16.06.1991"], &mut book).unwrap();

        let reply = show_birthday(&["Bob"], &mut book).unwrap();
        assert_eq!(reply, "Birthday for Bob is 16.06.1991");
    }

    #[test]
    fn test_add_birthday_invalid_date() {
        let mut book = AddressBook::new();
        add_contact(&["Bob", "1111111111"], &mut book).unwrap();

        let err = add_birthday(&["Bob", "1990-05-15"], &mut book).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date '1990-05-15'. Use DD.MM.YYYY format."
        );
    }

    #[test]
    fn test_show_birthday_not_set() {
        let mut book = AddressBook::new();
        add_contact(&["Bob", "1111111111"], &mut book).unwrap();

        let reply = show_birthday(&["Bob"], &mut book).unwrap();
        assert_eq!(reply, "Birthday not set.");
    }

    #[test]
    fn test_birthdays_empty_window() {
        let mut book = AddressBook::new();

        let reply = birthdays(&[], &mut book, date(2024, 6, 10)).unwrap();
        assert_eq!(reply, "No upcoming birthdays in the next week.");
    }

    #[test]
    fn test_birthdays_lists_matches_only() {
        let mut book = AddressBook::new();
        add_contact(&["Alice", "1234567890"], &mut book).unwrap();
        add_birthday(&["Alice", "12.06.1990"], &mut book).unwrap();
        add_contact(&["Bob", "0987654321"], &mut book).unwrap();
        add_birthday(&["Bob", "01.01.1990"], &mut book).unwrap();

        let reply = birthdays(&[], &mut book, date(2024, 6, 10)).unwrap();
        assert_eq!(reply, "Alice: 12.06.1990");
    }
}
