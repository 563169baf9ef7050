//! # Storage Layer
//!
//! Single-document operations over the gelataria collection, behind the
//! [`GelatariaStore`] trait so route handlers are programmed against an
//! injected dependency rather than a concrete client.
//!
//! [`MongoGelatariaStore`] is the production implementation;
//! [`InMemoryGelatariaStore`] backs the HTTP-level test suite.

pub mod config;
pub mod errors;
pub mod memory;
pub mod mongo;

pub use config::{ConfigError, StoreConfig};
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryGelatariaStore;
pub use mongo::MongoGelatariaStore;

use async_trait::async_trait;

use crate::model::{GelatariaDocument, GelatariaUpdate, NewGelataria, RecordId};

/// Store operations for gelataria records.
///
/// All operations touch exactly one document and are atomic at the store's
/// single-document granularity; concurrent updates to the same record race
/// at that granularity. Implementations handle connection pooling and
/// request multiplexing internally.
#[async_trait]
pub trait GelatariaStore: Send + Sync {
    /// Inserts a record and reads it back by its assigned identifier.
    async fn insert(&self, record: NewGelataria) -> StoreResult<GelatariaDocument>;

    /// Reads up to `limit` records in store-native order.
    async fn list(&self, limit: usize) -> StoreResult<Vec<GelatariaDocument>>;

    /// Looks up a record by its decoded identifier.
    async fn find(&self, id: RecordId) -> StoreResult<Option<GelatariaDocument>>;

    /// Looks up a record by the raw external identifier string.
    ///
    /// Used only by the empty-update fallback, which matches `_id` against
    /// the string itself instead of the decoded identifier. Against MongoDB
    /// this only matches documents whose `_id` is stored as a string, so it
    /// misses records created through this API.
    async fn find_by_raw_id(&self, raw_id: &str) -> StoreResult<Option<GelatariaDocument>>;

    /// Atomically applies the provided fields and returns the post-update
    /// document, or `None` when no document matched.
    ///
    /// Callers must not pass an empty update; route handlers divert empty
    /// updates to [`find_by_raw_id`](GelatariaStore::find_by_raw_id).
    async fn update(
        &self,
        id: RecordId,
        update: GelatariaUpdate,
    ) -> StoreResult<Option<GelatariaDocument>>;

    /// Removes a record, returning whether a document was deleted.
    async fn delete(&self, id: RecordId) -> StoreResult<bool>;
}
