use crate::error::BookResult;
use crate::models::Record;

/// Storage for the ordered list of records.
///
/// Provides abstraction over where an address book is persisted,
/// enabling different implementations (JSON file, in-memory mock).
pub trait RecordStore {
    /// Read every stored record in order.
    ///
    /// A store with nothing persisted yet returns an empty list.
    fn load(&self) -> BookResult<Vec<Record>>;

    /// Replace the stored contents with `records`.
    fn save(&self, records: &[Record]) -> BookResult<()>;
}
