//! In-process storage backend.
//!
//! [`MemoryStore`] keeps records in a `HashMap` behind an async `RwLock`.
//! Data lives only as long as the process; this is the backend used by the
//! server binary and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::record::StoredBeer;
use crate::storage::BeerStore;

/// In-memory beer storage backend.
///
/// # Example
///
/// ```rust,ignore
/// use taproom_store::{BeerStore, MemoryStore};
///
/// let store = MemoryStore::new();
/// let stored = store.create(serde_json::json!({})).await?;
/// assert!(store.exists(stored.id()).await?);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    beers: RwLock<HashMap<Uuid, StoredBeer>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BeerStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create(&self, content: Value) -> StoreResult<StoredBeer> {
        let stored = StoredBeer::new(Uuid::new_v4(), content);

        let mut beers = self.beers.write().await;
        beers.insert(stored.id(), stored.clone());

        debug!(id = %stored.id(), "Beer record created");
        Ok(stored)
    }

    async fn fetch(&self, id: Uuid) -> StoreResult<Option<StoredBeer>> {
        let beers = self.beers.read().await;
        Ok(beers.get(&id).cloned())
    }

    async fn upsert(&self, id: Uuid, content: Value) -> StoreResult<(StoredBeer, bool)> {
        let mut beers = self.beers.write().await;

        let (stored, created) = match beers.remove(&id) {
            Some(existing) => (existing.new_version(content), false),
            None => (StoredBeer::new(id, content), true),
        };
        beers.insert(id, stored.clone());

        debug!(
            id = %id,
            version = %stored.version_id(),
            created = created,
            "Beer record stored"
        );
        Ok((stored, created))
    }

    async fn count(&self) -> StoreResult<u64> {
        let beers = self.beers.read().await;
        Ok(beers.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_assigns_fresh_id() {
        let store = MemoryStore::new();

        let a = store.create(json!({"beerName": "Mango Bobs"})).await.unwrap();
        let b = store.create(json!({"beerName": "Mango Bobs"})).await.unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(a.version_id(), "1");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_fetch_returns_stored_content() {
        let store = MemoryStore::new();
        let stored = store.create(json!({"beerName": "Galaxy Cat"})).await.unwrap();

        let fetched = store.fetch(stored.id()).await.unwrap().unwrap();

        assert_eq!(fetched.id(), stored.id());
        assert_eq!(fetched.content()["beerName"], "Galaxy Cat");
    }

    #[tokio::test]
    async fn test_fetch_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.fetch(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_inserts_when_absent() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();

        let (stored, created) = store.upsert(id, json!({})).await.unwrap();

        assert!(created);
        assert_eq!(stored.id(), id);
        assert_eq!(stored.version_id(), "1");
    }

    #[tokio::test]
    async fn test_upsert_bumps_version_when_present() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();
        store.upsert(id, json!({"beerName": "v1"})).await.unwrap();

        let (stored, created) = store.upsert(id, json!({"beerName": "v2"})).await.unwrap();

        assert!(!created);
        assert_eq!(stored.version_id(), "2");
        assert_eq!(stored.content()["beerName"], "v2");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_exists() {
        let store = MemoryStore::new();
        let stored = store.create(json!({})).await.unwrap();

        assert!(store.exists(stored.id()).await.unwrap());
        assert!(!store.exists(Uuid::new_v4()).await.unwrap());
    }
}
