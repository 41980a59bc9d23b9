//! Core beer storage trait.
//!
//! This module defines the [`BeerStore`] trait, which provides the
//! fundamental operations for persisting beer records. The REST layer depends
//! only on this trait, never on a concrete backend.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::record::StoredBeer;

/// Core storage trait for beer records.
///
/// # Versioning
///
/// Mutating operations create new versions of records. The version ID is
/// monotonically increasing and backs the weak ETag exposed by the REST
/// layer.
///
/// # Idempotency
///
/// `create` is not idempotent: every call assigns a fresh ID and stores a
/// distinct record. `fetch` and `upsert` address a specific ID and repeating
/// them does not change the outcome status.
#[async_trait]
pub trait BeerStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Creates a new beer record, assigning a fresh ID.
    ///
    /// # Arguments
    ///
    /// * `content` - The payload as JSON
    ///
    /// # Returns
    ///
    /// The stored record with assigned ID, version "1", and metadata.
    async fn create(&self, content: Value) -> StoreResult<StoredBeer>;

    /// Fetches a beer record by ID.
    ///
    /// # Returns
    ///
    /// The stored record if found, or `None`.
    async fn fetch(&self, id: Uuid) -> StoreResult<Option<StoredBeer>>;

    /// Stores a beer record under a specific ID (PUT semantics).
    ///
    /// If no record exists under `id`, one is created at version "1".
    /// If a record exists, its content is replaced and its version
    /// incremented.
    ///
    /// # Returns
    ///
    /// A tuple of (StoredBeer, created: bool) where created indicates
    /// whether a new record was inserted (true) or an existing one
    /// updated (false).
    async fn upsert(&self, id: Uuid, content: Value) -> StoreResult<(StoredBeer, bool)>;

    /// Checks if a beer record exists.
    ///
    /// This is more efficient than `fetch` when you only need existence.
    async fn exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.fetch(id).await?.is_some())
    }

    /// Counts the stored beer records.
    async fn count(&self) -> StoreResult<u64>;
}
