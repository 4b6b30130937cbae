//! JSON file implementation of `RecordStore`.

use super::traits::RecordStore;
use crate::error::{AddressBookError, BookResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Current version of the on-disk format.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct BookFileRef<'a> {
    version: u32,
    records: &'a [Record],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BookFile {
    version: u32,
    records: Vec<Record>,
}

/// Stores records as a versioned JSON document:
///
/// ```json
/// {"version": 1, "records": [{"name": "Alice", "phone": "555-1234", "birthday": null}]}
/// ```
///
/// Every record is re-validated on load, so a file edited by hand into an
/// invalid state is reported as corrupt instead of being accepted.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> AddressBookError {
        AddressBookError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, reason: impl Into<String>) -> AddressBookError {
        AddressBookError::CorruptData {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> BookResult<Vec<Record>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "Address book file not found, starting empty"
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: BookFile = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                self.io_error(e.into())
            } else {
                self.corrupt(e.to_string())
            }
        })?;

        if book.version != FORMAT_VERSION {
            return Err(self.corrupt(format!(
                "unsupported format version {} (expected {})",
                book.version, FORMAT_VERSION
            )));
        }

        tracing::debug!(
            path = %self.path.display(),
            records = book.records.len(),
            "Loaded address book"
        );
        Ok(book.records)
    }

    fn save(&self, records: &[Record]) -> BookResult<()> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);

        let book = BookFileRef {
            version: FORMAT_VERSION,
            records,
        };
        serde_json::to_writer_pretty(&mut writer, &book).map_err(|e| self.io_error(e.into()))?;
        writer.write_all(b"\n").map_err(|e| self.io_error(e))?;
        writer.flush().map_err(|e| self.io_error(e))?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Saved address book"
        );
        Ok(())
    }
}
