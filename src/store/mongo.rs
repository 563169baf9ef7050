//! MongoDB-backed store.
//!
//! One client is connected at process start and reused for the process
//! lifetime; the driver pools connections and multiplexes concurrent
//! requests internally.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};

use crate::model::{GelatariaDocument, GelatariaUpdate, NewGelataria, RecordId};

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::GelatariaStore;

/// Name of the backing collection.
pub const COLLECTION_NAME: &str = "gelataria";

/// Gelataria store backed by a MongoDB collection.
pub struct MongoGelatariaStore {
    collection: Collection<GelatariaDocument>,
}

impl MongoGelatariaStore {
    /// Connects a client and binds the gelataria collection.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.url).await?;
        Ok(Self::with_client(&client, &config.database))
    }

    /// Binds the gelataria collection on an existing client.
    pub fn with_client(client: &Client, database: &str) -> Self {
        Self {
            collection: client.database(database).collection(COLLECTION_NAME),
        }
    }
}

#[async_trait]
impl GelatariaStore for MongoGelatariaStore {
    async fn insert(&self, record: NewGelataria) -> StoreResult<GelatariaDocument> {
        let result = self
            .collection
            .insert_one(GelatariaDocument::from(record))
            .await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedInsertId(result.inserted_id.clone()))?;

        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .ok_or(StoreError::ReadBackMissing(id))
    }

    async fn list(&self, limit: usize) -> StoreResult<Vec<GelatariaDocument>> {
        let cursor = self.collection.find(doc! {}).limit(limit as i64).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find(&self, id: RecordId) -> StoreResult<Option<GelatariaDocument>> {
        Ok(self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await?)
    }

    async fn find_by_raw_id(&self, raw_id: &str) -> StoreResult<Option<GelatariaDocument>> {
        // Matches `_id` as a string, not as an ObjectId. Records created
        // through this API store ObjectId identifiers, so this lookup does
        // not find them.
        Ok(self.collection.find_one(doc! { "_id": raw_id }).await?)
    }

    async fn update(
        &self,
        id: RecordId,
        update: GelatariaUpdate,
    ) -> StoreResult<Option<GelatariaDocument>> {
        Ok(self
            .collection
            .find_one_and_update(
                doc! { "_id": id.as_object_id() },
                doc! { "$set": update.set_document() },
            )
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, id: RecordId) -> StoreResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(result.deleted_count == 1)
    }
}
