use address_book::error::{AddressBookError, BookResult};
use address_book::models::Record;
use address_book::repositories::RecordStore;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock record store for testing.
///
/// Keeps records in memory, can be told to fail the next call, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockRecordStore {
    records: RefCell<Vec<Record>>,
    call_counts: RefCell<HashMap<String, usize>>,
    fail_with_corrupt: RefCell<bool>,
    fail_with_io: RefCell<bool>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a new empty MockRecordStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let store = Self::new();
        *store.records.borrow_mut() = records;
        store
    }

    /// Snapshot of the stored records.
    pub fn stored(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    /// Make every following `load` fail with `CorruptData`.
    pub fn fail_loads_as_corrupt(&self) {
        *self.fail_with_corrupt.borrow_mut() = true;
    }

    /// Make every following `save` fail with `Io`.
    pub fn fail_saves(&self) {
        *self.fail_with_io.borrow_mut() = true;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl RecordStore for MockRecordStore {
    fn load(&self) -> BookResult<Vec<Record>> {
        self.track_call("load");

        if *self.fail_with_corrupt.borrow() {
            return Err(AddressBookError::CorruptData {
                path: PathBuf::from("mock"),
                reason: "mock corruption".to_string(),
            });
        }
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[Record]) -> BookResult<()> {
        self.track_call("save");

        if *self.fail_with_io.borrow() {
            return Err(AddressBookError::Io {
                path: PathBuf::from("mock"),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            });
        }
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
