//! Records - typed accessor for one collection of a store.

use std::marker::PhantomData;

use super::{Record, RecordStore, StoreError};

/// Typed view of a single collection.
///
/// Delegates to `RecordStore` with the record type fixed, so call sites read
/// `store.records::<OrderRecord>().get(number)`.
pub struct Records<'a, S, M> {
    store: &'a S,
    _marker: PhantomData<M>,
}

impl<'a, S: RecordStore, M: Record> Records<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<M>, StoreError> {
        self.store.get_record(key)
    }

    pub fn insert(&self, record: &M) -> Result<(), StoreError> {
        self.store.insert(record)
    }

    pub fn upsert(&self, record: &M) -> Result<(), StoreError> {
        self.store.upsert(record)
    }

    pub fn replace(&self, record: &M) -> Result<(), StoreError> {
        self.store.replace(record)
    }

    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.store.delete::<M>(key)
    }

    pub fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, StoreError> {
        self.store.find_records(predicate)
    }

    /// Every record in the collection.
    pub fn all(&self) -> Result<Vec<M>, StoreError> {
        self.store.find_records(&|_: &M| true)
    }

    /// Next identifier from this collection's sequence.
    pub fn next_id(&self) -> Result<u64, StoreError> {
        self.store.next_sequence(M::COLLECTION)
    }
}

/// Extension trait for typed collection access on any `RecordStore`.
pub trait RecordsExt: RecordStore + Sized {
    fn records<M: Record>(&self) -> Records<'_, Self, M> {
        Records::new(self)
    }
}

impl<S: RecordStore> RecordsExt for S {}
