//! Handler for link creation.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{LinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// `POST /shorten` - creates a short link for the given origin URL.
pub async fn create_short_url(
    State(state): State<AppState>,
    Json(body): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state
        .link_service
        .create_link(&body.origin_url, body.owner_id)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}
