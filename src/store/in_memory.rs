//! InMemoryStore - map-backed record store for services, tests, and development.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::{Record, RecordStore, StoreError};

#[derive(Default)]
struct Inner {
    /// collection -> key -> serialized record
    collections: HashMap<String, BTreeMap<String, Vec<u8>>>,
    sequences: HashMap<String, u64>,
}

/// In-memory record store.
///
/// Records are kept as JSON bytes so a stored value never aliases a caller's
/// copy. Clone-friendly via Arc: clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn encode<M: Record>(record: &M) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(record).map_err(|e| StoreError::Serde(e.to_string()))
    }

    fn decode<M: Record>(bytes: &[u8]) -> Result<M, StoreError> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))
    }

    fn write<M: Record>(&self, record: &M, mode: WriteMode) -> Result<(), StoreError> {
        let bytes = Self::encode(record)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;

        let collection = inner
            .collections
            .entry(M::COLLECTION.to_string())
            .or_default();
        let exists = collection.contains_key(record.key());

        match mode {
            WriteMode::Insert if exists => Err(StoreError::Conflict {
                collection: M::COLLECTION.to_string(),
                key: record.key().to_string(),
            }),
            WriteMode::Replace if !exists => Err(StoreError::NotFound {
                collection: M::COLLECTION.to_string(),
                key: record.key().to_string(),
            }),
            _ => {
                collection.insert(record.key().to_string(), bytes);
                Ok(())
            }
        }
    }
}

enum WriteMode {
    Insert,
    Upsert,
    Replace,
}

impl RecordStore for InMemoryStore {
    fn get_record<M: Record>(&self, key: &str) -> Result<Option<M>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        inner
            .collections
            .get(M::COLLECTION)
            .and_then(|collection| collection.get(key))
            .map(|bytes| Self::decode::<M>(bytes))
            .transpose()
    }

    fn insert<M: Record>(&self, record: &M) -> Result<(), StoreError> {
        self.write(record, WriteMode::Insert)
    }

    fn upsert<M: Record>(&self, record: &M) -> Result<(), StoreError> {
        self.write(record, WriteMode::Upsert)
    }

    fn replace<M: Record>(&self, record: &M) -> Result<(), StoreError> {
        self.write(record, WriteMode::Replace)
    }

    fn delete<M: Record>(&self, key: &str) -> Result<bool, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        Ok(inner
            .collections
            .get_mut(M::COLLECTION)
            .map(|collection| collection.remove(key).is_some())
            .unwrap_or(false))
    }

    fn find_records<M: Record>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<M>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        let mut results = Vec::new();
        if let Some(collection) = inner.collections.get(M::COLLECTION) {
            for bytes in collection.values() {
                let record: M = Self::decode(bytes)?;
                if predicate(&record) {
                    results.push(record);
                }
            }
        }
        Ok(results)
    }

    fn next_sequence(&self, collection: &str) -> Result<u64, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::LockPoisoned("sequence"))?;

        let seq = inner.sequences.entry(collection.to_string()).or_insert(0);
        *seq += 1;
        Ok(*seq)
    }
}
