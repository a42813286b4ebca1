//! Line-oriented command loop and dispatcher.
//!
//! This is thin I/O glue over the handler layer: it reads one command per
//! line, routes it to the matching handler, and prints whatever string
//! comes back. It communicates via stdin/stdout; diagnostics go to stderr
//! through `tracing` so stdout stays a clean command channel.

use crate::book::AddressBook;
use crate::commands;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Printed once when the loop starts.
pub const GREETING: &str = "Welcome to the assistant bot!";

/// Printed before each read, without a trailing newline.
pub const PROMPT: &str = "Enter a command: ";

/// Printed when the loop ends.
pub const FAREWELL: &str = "Good bye!";

/// Split an input line into a command token and its argument list.
///
/// Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?;
    Some((command, tokens.collect()))
}

/// Route one parsed command to its handler and render the reply.
///
/// Every handler error is converted to its message text here; no error
/// propagates past this boundary. `reference` is the date against which
/// `birthdays` computes its window.
pub fn dispatch(
    command: &str,
    args: &[&str],
    book: &mut AddressBook,
    reference: NaiveDate,
) -> String {
    debug!(command, ?args, "dispatching");

    let result = match command {
        "hello" => Ok("How can I help you?".to_string()),
        "add" => commands::add_contact(args, book),
        "change" => commands::change_phone(args, book),
        "phone" => commands::show_phone(args, book),
        "all" => commands::show_all(args, book),
        "add-birthday" => commands::add_birthday(args, book),
        "show-birthday" => commands::show_birthday(args, book),
        "birthdays" => commands::birthdays(args, book, reference),
        _ => Ok("Invalid command.".to_string()),
    };

    result.unwrap_or_else(|err| err.to_string())
}

/// Run the command loop until `close`/`exit` or end of input.
///
/// Generic over the reader and writer so tests can drive a whole session
/// in-process; `main` passes locked stdin/stdout.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    book: &mut AddressBook,
) -> io::Result<()> {
    writeln!(output, "{}", GREETING)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input: leave as politely as an explicit exit.
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        let Some((command, args)) = parse_line(&line) else {
            continue;
        };

        if command == "close" || command == "exit" {
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        let reply = dispatch(command, &args, book, Local::now().date_naive());
        writeln!(output, "{}", reply)?;
    }

    Ok(())
}
