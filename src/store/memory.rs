//! In-memory store for testing.
//!
//! Assigns fresh ObjectIds on insert and preserves insertion order for
//! listing. The HTTP-level test suite runs against this implementation.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::model::{GelatariaDocument, GelatariaUpdate, NewGelataria, RecordId};

use super::errors::{StoreError, StoreResult};
use super::GelatariaStore;

/// Gelataria store held in process memory.
#[derive(Default)]
pub struct InMemoryGelatariaStore {
    records: RwLock<Vec<GelatariaDocument>>,
}

impl InMemoryGelatariaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl GelatariaStore for InMemoryGelatariaStore {
    async fn insert(&self, record: NewGelataria) -> StoreResult<GelatariaDocument> {
        let mut doc = GelatariaDocument::from(record);
        doc.id = Some(ObjectId::new());

        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        records.push(doc.clone());
        Ok(doc)
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<GelatariaDocument>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records.iter().take(limit).cloned().collect())
    }

    async fn find(&self, id: RecordId) -> StoreResult<Option<GelatariaDocument>> {
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records
            .iter()
            .find(|r| r.id == Some(id.as_object_id()))
            .cloned())
    }

    async fn find_by_raw_id(&self, raw_id: &str) -> StoreResult<Option<GelatariaDocument>> {
        // Identifiers here are ObjectIds rendered as hex, so the raw string
        // matches exactly when it equals that rendering.
        let records = self.records.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(records
            .iter()
            .find(|r| r.id.map(|id| id.to_hex()).as_deref() == Some(raw_id))
            .cloned())
    }

    async fn update(
        &self,
        id: RecordId,
        update: GelatariaUpdate,
    ) -> StoreResult<Option<GelatariaDocument>> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        match records
            .iter_mut()
            .find(|r| r.id == Some(id.as_object_id()))
        {
            Some(record) => {
                update.apply_to(record);
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: RecordId) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| StoreError::LockPoisoned)?;
        let before = records.len();
        records.retain(|r| r.id != Some(id.as_object_id()));
        Ok(records.len() < before)
    }
}
