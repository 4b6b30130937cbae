//! Interactive text menu over an [`AddressBook`].
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so the binary
//! drives it with stdin/stdout and tests drive it with in-memory buffers.

use crate::address_book::AddressBook;
use crate::domain::{FieldKind, ValidatedField};
use crate::models::Record;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nOptions:
1. Find records by name
2. Find records by phone number
3. Find records by birthday
4. List all records (with pagination)
5. Search
6. Add a record
7. Save and Exit";

/// Menu session bound to an input and an output stream.
pub struct Menu<'a, R, W> {
    book: &'a mut AddressBook,
    page_size: usize,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(book: &'a mut AddressBook, page_size: usize, input: R, output: W) -> Self {
        Self {
            book,
            page_size,
            input,
            output,
        }
    }

    /// Run until the user picks "Save and Exit" or input ends.
    ///
    /// Saving is left to the caller.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.find(FieldKind::Name, "Enter name to search for: ")?,
                "2" => self.find(FieldKind::Phone, "Enter phone number to search for: ")?,
                "3" => self.find(
                    FieldKind::Birthday,
                    "Enter birthday (YYYY-MM-DD) to search for: ",
                )?,
                "4" => self.list()?,
                "5" => self.search()?,
                "6" => self.add()?,
                "7" => return Ok(()),
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Print `message` and read one trimmed line, `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn find(&mut self, kind: FieldKind, message: &str) -> io::Result<()> {
        let Some(value) = self.prompt(message)? else {
            return Ok(());
        };
        match self.book.find_records(kind.as_str(), &value) {
            Ok(found) => write_records(&mut self.output, &found),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        let pages = match self.book.iterator(self.page_size) {
            Ok(pages) => pages,
            Err(e) => return writeln!(self.output, "{e}"),
        };
        if self.book.is_empty() {
            return writeln!(self.output, "No records found.");
        }
        for (number, page) in pages.enumerate() {
            writeln!(self.output, "\nPage {}:", number + 1)?;
            for record in page {
                write_record(&mut self.output, record)?;
            }
        }
        Ok(())
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(term) = self.prompt("Enter search term: ")? else {
            return Ok(());
        };
        let found = self.book.search(&term);
        write_records(&mut self.output, &found)
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt_valid(FieldKind::Phone, "Enter phone (optional): ")? else {
            return Ok(());
        };
        let Some(birthday) =
            self.prompt_valid(FieldKind::Birthday, "Enter birthday YYYY-MM-DD (optional): ")?
        else {
            return Ok(());
        };

        match Record::new(name, phone.get(), birthday.get()) {
            Ok(record) => {
                tracing::debug!(record = %record, "Adding record");
                self.book.add_record(record);
                writeln!(self.output, "Record added.")
            }
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    /// Ask for a field value until it passes validation or input ends.
    fn prompt_valid(
        &mut self,
        kind: FieldKind,
        message: &str,
    ) -> io::Result<Option<ValidatedField>> {
        loop {
            let Some(value) = self.prompt(message)? else {
                return Ok(None);
            };
            match ValidatedField::with_value(kind, value) {
                Ok(field) => return Ok(Some(field)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

fn write_records(output: &mut impl Write, records: &[&Record]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(output, "No records found.");
    }
    for record in records {
        write_record(output, record)?;
    }
    Ok(())
}

fn write_record(output: &mut impl Write, record: &Record) -> io::Result<()> {
    match record.days_to_birthday() {
        Some(days) => writeln!(output, "{record}, Days to birthday: {days}"),
        None => writeln!(output, "{record}"),
    }
}
