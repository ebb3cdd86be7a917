//! Handler for the statistics report.

use axum::{Json, extract::State};

use crate::api::dto::UrlStatistic;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /stats` - per-link rolling-window click counts, ranked by last-day clicks.
pub async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<Vec<UrlStatistic>>, AppError> {
    let snapshots = state.stats_service.full_statistics().await?;

    Ok(Json(snapshots.into_iter().map(Into::into).collect()))
}
