//! Create handler.
//!
//! `POST /api/v1/beer`

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use taproom_store::BeerStore;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::headers::ResourceHeaders;
use crate::model::BeerDto;
use crate::state::AppState;

/// Handler for the create interaction.
///
/// Creates a new beer. The server assigns the ID; id, version, and
/// timestamps sent by the client are discarded. An entirely-default payload
/// is accepted.
///
/// # HTTP Request
///
/// `POST /api/v1/beer`
///
/// # Response
///
/// - `201 Created` - Beer created; `Location` points at the new record
/// - `400 Bad Request` - Malformed payload
pub async fn create_beer_handler<S>(
    State(state): State<AppState<S>>,
    Json(payload): Json<BeerDto>,
) -> ApiResult<Response>
where
    S: BeerStore,
{
    if payload.id.is_some() {
        debug!("Discarding client-sent id on create");
    }
    let content = serde_json::to_value(payload.without_server_fields())?;

    let stored = state.store().create(content).await?;

    let headers = ResourceHeaders::from_stored(&stored);
    let location = format!("{}/api/v1/beer/{}", state.base_url(), stored.id());
    let dto = BeerDto::from_stored(&stored)?;

    debug!(id = %stored.id(), "Beer created");

    let mut header_map = headers.to_header_map();
    header_map.insert(
        header::LOCATION,
        location.parse().map_err(|_| ApiError::InternalError {
            message: "Failed to encode Location header".to_string(),
        })?,
    );

    Ok((StatusCode::CREATED, header_map, Json(dto)).into_response())
}
