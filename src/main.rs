//! Address Book - Main entry point
//!
//! Loads the address book, runs the interactive menu on stdin/stdout and
//! saves the book on exit.

use address_book::cli::Menu;
use address_book::{AddressBook, Config};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so the menu owns stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book at {}", config.book_path.display());

    let mut book = match AddressBook::open(&config.book_path) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut book, config.page_size, stdin.lock(), stdout.lock())
        .run()
        .context("Terminal I/O failed")?;

    book.save(&config.book_path)
        .with_context(|| format!("Failed to save {}", config.book_path.display()))?;

    let mut stdout = io::stdout();
    writeln!(stdout, "Goodbye!")?;

    info!("Address book saved, {} records", book.len());
    Ok(())
}
