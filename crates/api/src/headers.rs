//! Response header generation.

use axum::http::{HeaderMap, HeaderValue, header};
use taproom_store::StoredBeer;
use tracing::warn;

/// Standard response headers for a stored beer record.
///
/// Carries the weak ETag and Last-Modified values derived from the record's
/// metadata.
#[derive(Debug, Clone)]
pub struct ResourceHeaders {
    etag: String,
    last_modified: String,
}

impl ResourceHeaders {
    /// Builds headers from a stored record.
    pub fn from_stored(stored: &StoredBeer) -> Self {
        Self {
            etag: stored.etag().to_string(),
            last_modified: stored
                .last_modified()
                .format("%a, %d %b %Y %H:%M:%S GMT")
                .to_string(),
        }
    }

    /// Converts to an HTTP header map.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        match HeaderValue::from_str(&self.etag) {
            Ok(value) => {
                headers.insert(header::ETAG, value);
            }
            Err(_) => warn!(etag = %self.etag, "Skipping unencodable ETag header"),
        }

        match HeaderValue::from_str(&self.last_modified) {
            Ok(value) => {
                headers.insert(header::LAST_MODIFIED, value);
            }
            Err(_) => warn!("Skipping unencodable Last-Modified header"),
        }

        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn test_headers_from_stored() {
        let stored = StoredBeer::new(Uuid::new_v4(), json!({}));
        let headers = ResourceHeaders::from_stored(&stored).to_header_map();

        assert_eq!(headers.get(header::ETAG).unwrap(), "W/\"1\"");
        let last_modified = headers.get(header::LAST_MODIFIED).unwrap();
        assert!(last_modified.to_str().unwrap().ends_with("GMT"));
    }
}
