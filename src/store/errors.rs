//! Storage error types.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::Bson;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the storage layer.
///
/// These are server-side failures; none of them map to a client-input
/// status. They propagate to the HTTP layer unretried.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying driver reported a failure (connection, I/O, codec).
    #[error("database operation failed: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The store assigned something other than an ObjectId on insert.
    #[error("store assigned a non-ObjectId identifier: {0}")]
    UnexpectedInsertId(Bson),

    /// An inserted document could not be read back by its identifier.
    #[error("inserted document {0} was not found on read-back")]
    ReadBackMissing(ObjectId),

    /// The in-memory store's lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_back_error_names_the_identifier() {
        let oid = ObjectId::new();
        let err = StoreError::ReadBackMissing(oid);
        assert!(err.to_string().contains(&oid.to_hex()));
    }

    #[test]
    fn unexpected_insert_id_displays_value() {
        let err = StoreError::UnexpectedInsertId(Bson::Int32(7));
        assert!(err.to_string().contains('7'));
    }
}
