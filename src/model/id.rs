//! External identifier codec.
//!
//! Records are addressed externally by a 24-character hex string and
//! internally by the store's 12-byte `ObjectId`. `RecordId` is the decoded
//! form; decoding failures are client-input errors.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use thiserror::Error;

/// The external identifier string was not a well-formed 12-byte hex id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed record identifier '{0}'")]
pub struct InvalidIdentifier(pub String);

/// A decoded record identifier.
///
/// Immutable once assigned by the store; rendered as lowercase hex at the
/// API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(ObjectId);

impl RecordId {
    /// Decodes an external identifier string (24 hex characters).
    pub fn parse(s: &str) -> Result<Self, InvalidIdentifier> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| InvalidIdentifier(s.to_string()))
    }

    /// The store-side identifier value.
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    /// The external hex rendering.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for RecordId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for RecordId {
    type Err = InvalidIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_hex_identifier() {
        let id = RecordId::parse("66b1f09e8a4c2d73a1e5b4c9").unwrap();
        assert_eq!(id.to_hex(), "66b1f09e8a4c2d73a1e5b4c9");
    }

    #[test]
    fn round_trips_through_display() {
        let oid = ObjectId::new();
        let id = RecordId::from(oid);
        assert_eq!(RecordId::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(RecordId::parse("66b1f09e8a4c2d73a1e5b4c").is_err());
        assert!(RecordId::parse("66b1f09e8a4c2d73a1e5b4c9ff").is_err());
        assert!(RecordId::parse("").is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        let err = RecordId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
        assert_eq!(err, InvalidIdentifier("zzzzzzzzzzzzzzzzzzzzzzzz".to_string()));
    }
}
