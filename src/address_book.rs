//! The address book container and its query and persistence operations.

use crate::domain::FieldKind;
use crate::error::{AddressBookError, BookResult};
use crate::models::Record;
use crate::repositories::{JsonFileStore, RecordStore};
use std::path::Path;
use std::slice::Chunks;

/// An ordered collection of records.
///
/// Insertion order is preserved and duplicates are allowed. All queries are
/// linear scans and return matches in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Page size used by [`AddressBook::pages`].
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the book.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose `field_name` value equals `value` exactly.
    ///
    /// Unset fields never match.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidField` unless `field_name` is one of
    /// `name`, `phone` or `birthday`.
    pub fn find_records(&self, field_name: &str, value: &str) -> BookResult<Vec<&Record>> {
        let kind: FieldKind = field_name.parse()?;

        Ok(self
            .records
            .iter()
            .filter(|record| record.field(kind).get() == Some(value))
            .collect())
    }

    /// Split the records into consecutive pages of `chunk_size`.
    ///
    /// The last page holds the remainder. Each call starts a fresh pass.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidArgument` if `chunk_size` is 0.
    pub fn iterator(&self, chunk_size: usize) -> BookResult<Chunks<'_, Record>> {
        if chunk_size == 0 {
            tracing::warn!("Rejected page size of 0");
            return Err(AddressBookError::InvalidArgument(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        Ok(self.records.chunks(chunk_size))
    }

    /// Pages of [`AddressBook::DEFAULT_PAGE_SIZE`] records.
    pub fn pages(&self) -> Chunks<'_, Record> {
        self.records.chunks(Self::DEFAULT_PAGE_SIZE)
    }

    /// Records whose name or phone contains `term` (case-sensitive).
    ///
    /// An empty term matches every record with a name or phone set.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        let contains = |value: Option<&str>| value.is_some_and(|v| v.contains(term));

        self.records
            .iter()
            .filter(|record| contains(record.name()) || contains(record.phone()))
            .collect()
    }

    /// Write every record to the JSON file at `path`, replacing its content.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Io` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> BookResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Replace the in-memory records with those stored at `path`.
    ///
    /// A missing file yields an empty book.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::CorruptData` if the file cannot be parsed
    /// into valid records and `AddressBookError::Io` if it cannot be read.
    /// The current records are kept on error.
    pub fn load(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }

    /// Open the book stored at `path`.
    pub fn open(path: impl AsRef<Path>) -> BookResult<Self> {
        let mut book = Self::new();
        book.load(path)?;
        Ok(book)
    }

    pub fn save_to(&self, store: &dyn RecordStore) -> BookResult<()> {
        store.save(&self.records)?;
        tracing::info!(records = self.records.len(), "Address book saved");
        Ok(())
    }

    pub fn load_from(&mut self, store: &dyn RecordStore) -> BookResult<()> {
        self.records = store.load()?;
        tracing::info!(records = self.records.len(), "Address book loaded");
        Ok(())
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
