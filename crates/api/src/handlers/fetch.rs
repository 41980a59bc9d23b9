//! Fetch-by-id handler.
//!
//! `GET /api/v1/beer/{id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use taproom_store::BeerStore;
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiResult;
use crate::headers::ResourceHeaders;
use crate::model::BeerDto;
use crate::state::AppState;

/// Handler for the fetch interaction.
///
/// Fetches a beer by ID. An id with no stored record is answered with a
/// default-valued payload carrying the requested id, so any syntactically
/// valid UUID yields a success response. Malformed ids are rejected by the
/// typed path extractor before this handler runs.
///
/// # HTTP Request
///
/// `GET /api/v1/beer/{id}`
///
/// # Response
///
/// - `200 OK` - Returns the beer payload
/// - `400 Bad Request` - The id is not a valid UUID
pub async fn fetch_beer_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Response>
where
    S: BeerStore,
{
    debug!(id = %id, "Processing fetch request");

    let beer = state.store().fetch(id).await?;

    match beer {
        Some(stored) => {
            let headers = ResourceHeaders::from_stored(&stored);
            let dto = BeerDto::from_stored(&stored)?;

            debug!(id = %id, version = %stored.version_id(), "Returning beer");
            Ok((StatusCode::OK, headers.to_header_map(), Json(dto)).into_response())
        }
        None => {
            debug!(id = %id, "No stored beer, serving placeholder");
            Ok((StatusCode::OK, Json(BeerDto::placeholder(id))).into_response())
        }
    }
}
