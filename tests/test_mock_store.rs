//! Tests for `AddressBook` persistence through the `RecordStore` seam.

mod mocks;

use address_book::{AddressBook, AddressBookError, Record};
use mocks::MockRecordStore;

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Alice", Some("555-1234"), Some("1990-05-17")).unwrap(),
        Record::new("Bob", Some("123-4567"), None).unwrap(),
    ]
}

#[test]
fn test_save_to_store() {
    let store = MockRecordStore::new();
    let book = AddressBook::from(sample_records());

    book.save_to(&store).unwrap();
    assert_eq!(store.stored(), sample_records());
    assert_eq!(store.get_call_count("save"), 1);
}

#[test]
fn test_load_from_store_replaces_contents() {
    let store = MockRecordStore::with_records(sample_records());
    let mut book = AddressBook::new();
    book.add_record(Record::new("Stale", None, None).unwrap());

    book.load_from(&store).unwrap();
    assert_eq!(book.records(), sample_records().as_slice());
    assert_eq!(store.get_call_count("load"), 1);
}

#[test]
fn test_corrupt_load_keeps_current_records() {
    let store = MockRecordStore::with_records(sample_records());
    store.fail_loads_as_corrupt();

    let mut book = AddressBook::new();
    book.add_record(Record::new("Kept", None, None).unwrap());

    let err = book.load_from(&store).unwrap_err();
    assert!(matches!(err, AddressBookError::CorruptData { .. }));
    assert_eq!(book.len(), 1);
    assert_eq!(book.records()[0].name(), Some("Kept"));
}

#[test]
fn test_failed_save_leaves_book_unchanged() {
    let store = MockRecordStore::new();
    store.fail_saves();
    let book = AddressBook::from(sample_records());

    let err = book.save_to(&store).unwrap_err();
    assert!(matches!(err, AddressBookError::Io { .. }));
    assert!(err.to_string().contains("disk full"));
    assert_eq!(book.records(), sample_records().as_slice());
    assert!(store.stored().is_empty());
}
