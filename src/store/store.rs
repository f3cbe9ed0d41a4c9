//! RecordStore - abstract CRUD storage for records.

use super::{Record, StoreError};

/// Abstract CRUD storage for records.
///
/// Methods that would read ambiguously next to the per-entity repository
/// traits carry a `_record` suffix. `Records` offers short names for all of them.
pub trait RecordStore: Send + Sync {
    /// Get a record by key. Returns `None` if not found.
    fn get_record<M: Record>(&self, key: &str) -> Result<Option<M>, StoreError>;

    /// Insert a new record. Fails with `Conflict` if the key is taken.
    fn insert<M: Record>(&self, record: &M) -> Result<(), StoreError>;

    /// Insert or overwrite a record.
    fn upsert<M: Record>(&self, record: &M) -> Result<(), StoreError>;

    /// Overwrite an existing record. Fails with `NotFound` if it is missing.
    fn replace<M: Record>(&self, record: &M) -> Result<(), StoreError>;

    /// Delete a record by key. Returns true if it existed.
    fn delete<M: Record>(&self, key: &str) -> Result<bool, StoreError>;

    /// All records of a collection matching a predicate, ordered by key.
    fn find_records<M: Record>(&self, predicate: &dyn Fn(&M) -> bool)
        -> Result<Vec<M>, StoreError>;

    /// Next value of a per-collection sequence, starting at 1.
    fn next_sequence(&self, collection: &str) -> Result<u64, StoreError>;
}
