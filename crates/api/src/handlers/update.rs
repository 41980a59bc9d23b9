//! Update-by-id handler.
//!
//! `PUT /api/v1/beer/{id}`

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use taproom_store::BeerStore;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::model::BeerDto;
use crate::state::AppState;

/// Handler for the update interaction.
///
/// Replaces the payload stored under an ID, creating the record if it does
/// not exist (upsert). Accepts an entirely-default payload. Repeating the
/// same update yields the same status.
///
/// # HTTP Request
///
/// `PUT /api/v1/beer/{id}`
///
/// # Response
///
/// - `204 No Content` - Payload accepted
/// - `400 Bad Request` - Malformed payload, or body id differs from URL id
pub async fn update_beer_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BeerDto>,
) -> ApiResult<Response>
where
    S: BeerStore,
{
    debug!(id = %id, "Processing update request");

    // An id in the body must agree with the URL
    if let Some(body_id) = payload.id {
        if body_id != id {
            return Err(ApiError::BadRequest {
                message: format!("Beer id in body ({}) does not match URL ({})", body_id, id),
            });
        }
    }

    let content = serde_json::to_value(payload.without_server_fields())?;

    let (stored, created) = state.store().upsert(id, content).await?;

    debug!(
        id = %id,
        version = %stored.version_id(),
        created = created,
        "Beer updated"
    );

    Ok(StatusCode::NO_CONTENT.into_response())
}
