//! Stored beer record.
//!
//! This module defines the [`StoredBeer`] type, which wraps a beer payload
//! with persistence metadata such as version, timestamps, and ETag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A beer payload with persistence metadata.
///
/// `StoredBeer` wraps the payload (stored as opaque JSON) along with the
/// metadata required for persistence operations:
///
/// - **Identity**: The beer's UUID, immutable once assigned
/// - **Versioning**: Version ID, monotonically increasing from "1"
/// - **Timestamps**: Creation and modification times
/// - **ETag**: Weak ETag derived from the version ID
///
/// # Examples
///
/// ```
/// use taproom_store::StoredBeer;
/// use serde_json::json;
/// use uuid::Uuid;
///
/// let beer = StoredBeer::new(Uuid::new_v4(), json!({"beerName": "Galaxy Cat"}));
///
/// assert_eq!(beer.version_id(), "1");
/// assert_eq!(beer.etag(), "W/\"1\"");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBeer {
    /// The beer's unique identifier.
    id: Uuid,

    /// The version ID (monotonically increasing).
    version_id: String,

    /// The payload as JSON, opaque to the store.
    content: Value,

    /// When the record was first created.
    created_at: DateTime<Utc>,

    /// When the record was last modified.
    last_modified: DateTime<Utc>,

    /// ETag for HTTP caching (derived from version_id).
    etag: String,
}

impl StoredBeer {
    /// Creates a new stored beer at version "1" with current timestamps.
    pub fn new(id: Uuid, content: Value) -> Self {
        let now = Utc::now();
        let version_id = "1".to_string();
        let etag = format!("W/\"{}\"", version_id);

        Self {
            id,
            version_id,
            content,
            created_at: now,
            last_modified: now,
            etag,
        }
    }

    /// Returns the beer's unique identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the version ID.
    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    /// Returns the payload as JSON.
    pub fn content(&self) -> &Value {
        &self.content
    }

    /// Consumes self and returns the payload.
    pub fn into_content(self) -> Value {
        self.content
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the record was last modified.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Returns the ETag for HTTP caching.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Creates a new version of this record with updated content.
    ///
    /// The new version has an incremented version ID, an updated
    /// last_modified timestamp, and a new ETag. The ID and creation
    /// timestamp are preserved.
    pub fn new_version(self, content: Value) -> Self {
        let version: u64 = self.version_id.parse().unwrap_or(0);
        let new_version_id = (version + 1).to_string();
        let etag = format!("W/\"{}\"", new_version_id);

        Self {
            id: self.id,
            version_id: new_version_id,
            content,
            created_at: self.created_at,
            last_modified: Utc::now(),
            etag,
        }
    }

    /// Checks if the given ETag matches this record's ETag.
    ///
    /// Used for If-Match conditional updates.
    pub fn matches_etag(&self, etag: &str) -> bool {
        // Strip W/ prefix and quotes for comparison
        let normalized_self = self.etag.trim_start_matches("W/").trim_matches('"');
        let normalized_other = etag.trim_start_matches("W/").trim_matches('"');
        normalized_self == normalized_other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_stored_beer() {
        let id = Uuid::new_v4();
        let beer = StoredBeer::new(id, json!({"beerName": "Mango Bobs"}));

        assert_eq!(beer.id(), id);
        assert_eq!(beer.version_id(), "1");
        assert_eq!(beer.content()["beerName"], "Mango Bobs");
        assert_eq!(beer.created_at(), beer.last_modified());
    }

    #[test]
    fn test_new_version() {
        let beer = StoredBeer::new(Uuid::new_v4(), json!({"beerName": "v1"}));
        let created_at = beer.created_at();

        let updated = beer.new_version(json!({"beerName": "v2"}));

        assert_eq!(updated.version_id(), "2");
        assert_eq!(updated.content()["beerName"], "v2");
        assert_eq!(updated.created_at(), created_at);
        assert_eq!(updated.etag(), "W/\"2\"");
    }

    #[test]
    fn test_etag_matching() {
        let beer = StoredBeer::new(Uuid::new_v4(), json!({}));

        assert!(beer.matches_etag("W/\"1\""));
        assert!(beer.matches_etag("\"1\""));
        assert!(beer.matches_etag("1"));
        assert!(!beer.matches_etag("2"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let beer = StoredBeer::new(Uuid::new_v4(), json!({"beerName": "Pinball Porter"}));

        let encoded = serde_json::to_string(&beer).unwrap();
        let parsed: StoredBeer = serde_json::from_str(&encoded).unwrap();

        assert_eq!(parsed.id(), beer.id());
        assert_eq!(parsed.version_id(), beer.version_id());
        assert_eq!(parsed.content(), beer.content());
    }
}
