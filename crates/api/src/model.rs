//! Beer payload schema at the HTTP boundary.
//!
//! The payload is decoded and encoded explicitly at the edge of the service;
//! the store below treats it as opaque JSON. Every field is optional so an
//! entirely-default payload (`{}`) is accepted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taproom_store::StoredBeer;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// A beer payload as exchanged over the wire.
///
/// `id`, `version`, `createdDate`, and `lastModifiedDate` are server-managed:
/// values sent by clients are ignored on create and only checked for
/// consistency on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    /// The beer's unique identifier (server-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// The record version (server-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    /// When the record was created (server-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,

    /// When the record was last modified (server-assigned).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<DateTime<Utc>>,

    /// The beer's display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_name: Option<String>,

    /// The beer's style.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beer_style: Option<BeerStyle>,

    /// Universal product code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,

    /// Unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Inventory on hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_on_hand: Option<i64>,
}

/// The set of supported beer styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl BeerDto {
    /// Builds the wire representation of a stored record.
    ///
    /// Decodes the stored payload and stamps the server-managed fields from
    /// the record's metadata.
    pub fn from_stored(stored: &StoredBeer) -> ApiResult<Self> {
        let mut dto: BeerDto =
            serde_json::from_value(stored.content().clone()).map_err(|e| {
                ApiError::InternalError {
                    message: format!("Stored payload is not decodable: {}", e),
                }
            })?;

        dto.id = Some(stored.id());
        dto.version = stored.version_id().parse().ok();
        dto.created_date = Some(stored.created_at());
        dto.last_modified_date = Some(stored.last_modified());
        Ok(dto)
    }

    /// Builds a default-valued payload carrying the given id.
    ///
    /// Served when a fetch addresses an id with no stored record.
    pub fn placeholder(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Strips the server-managed fields from a client-sent payload.
    pub fn without_server_fields(mut self) -> Self {
        self.id = None;
        self.version = None;
        self.created_date = None;
        self.last_modified_date = None;
        self
    }
}
