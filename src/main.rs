//! Contact Book - Main entry point
//!
//! Runs the interactive assistant loop over stdin/stdout. The address book
//! starts empty, lives in memory for the session, and is discarded at exit.

use anyhow::Result;
use contact_book::AddressBook;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout a clean command channel)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut book = AddressBook::new();
    info!("Address book initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    contact_book::repl::run(stdin.lock(), &mut stdout.lock(), &mut book)?;

    info!("Session ended with {} contact(s) in the book", book.len());
    Ok(())
}
