//! Record stores - typed CRUD storage behind each service.
//!
//! Every service persists one kind of record (stock levels, orders, products).
//! A record type names its collection and exposes its key; a `RecordStore`
//! keeps any number of collections side by side.
//!
//! ## Example
//!
//! ```ignore
//! use commerce_rust::store::{InMemoryStore, Record, RecordsExt};
//!
//! #[derive(Serialize, Deserialize, Clone)]
//! struct Shelf {
//!     code: String,
//!     slots: u32,
//! }
//!
//! impl Record for Shelf {
//!     const COLLECTION: &'static str = "shelves";
//!     fn key(&self) -> &str {
//!         &self.code
//!     }
//! }
//!
//! let store = InMemoryStore::new();
//! store.records::<Shelf>().insert(&shelf)?;
//! let loaded = store.records::<Shelf>().get("A-1")?;
//! ```

mod in_memory;
mod records;
mod store;

use serde::{de::DeserializeOwned, Serialize};

/// Trait for types that can be kept in a record store.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Collection name (a table in SQL, a collection in a document store).
    const COLLECTION: &'static str;

    /// Unique key of this record within its collection.
    fn key(&self) -> &str;
}

/// Error type for record store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record with the same key already exists.
    #[error("record already exists: {collection}:{key}")]
    Conflict { collection: String, key: String },
    /// The record to replace does not exist.
    #[error("record not found: {collection}:{key}")]
    NotFound { collection: String, key: String },
    /// Serialization/deserialization error.
    #[error("record serialization error: {0}")]
    Serde(String),
    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

pub use in_memory::InMemoryStore;
pub use records::{Records, RecordsExt};
pub use store::RecordStore;
