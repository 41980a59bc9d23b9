//! # taproom-store - Storage Layer
//!
//! Storage abstraction for the Taproom beer service. The REST layer talks to
//! storage exclusively through the [`BeerStore`] trait, keeping the HTTP
//! surface independent of any particular backend.
//!
//! ## Modules
//!
//! - [`error`] - Storage error types
//! - [`record`] - The [`StoredBeer`] record with persistence metadata
//! - [`storage`] - The [`BeerStore`] trait
//! - [`memory`] - In-process [`MemoryStore`] backend
//!
//! ## Example
//!
//! ```rust,ignore
//! use taproom_store::{BeerStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let stored = store.create(serde_json::json!({"beerName": "Mango Bobs"})).await?;
//! assert_eq!(stored.version_id(), "1");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod record;
pub mod storage;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use record::StoredBeer;
pub use storage::BeerStore;
