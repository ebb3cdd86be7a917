//! Handler for the redirect path.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// `GET /{key}` - resolves an active link, records the click, and redirects.
///
/// The active check happens in resolution, so an expired link answers 410
/// before any click is recorded. A failure while recording the click is a
/// hard error rather than a silent drop.
pub async fn redirect_to_origin(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve_active(&key).await?;
    state.click_service.record_click(&key).await?;

    Ok(Redirect::temporary(&link.origin_url))
}
