//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// The textual date format used everywhere a birthday is read or shown.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// A birthday is parsed from `DD.MM.YYYY` text at construction time and
/// re-rendered in the same format for display. No range validation is
/// applied beyond what the calendar itself enforces.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("15.05.1990").unwrap();
/// assert_eq!(birthday.to_string(), "15.05.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text does not parse
    /// as a valid calendar date in that format.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(text.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month/day placed into the given year.
    ///
    /// A Feb-29 birthday clamps to Feb 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        self.0.with_year(year).unwrap_or_else(|| {
            // Only Feb 29 can fail to exist in another year.
            NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
        })
    }
}

// Display support - renders back in the input format
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
