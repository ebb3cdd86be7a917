//! Handler for the link listing endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::ListLinksQuery;
use crate::domain::repositories::LinkFilter;
use crate::error::AppError;
use crate::state::AppState;

/// `GET /links` - lists short URLs with optional active filter and pagination.
pub async fn list_short_urls(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let urls = state
        .link_service
        .list_short_urls(LinkFilter {
            only_active: query.active_only,
            limit: query.limit,
            offset: query.offset,
        })
        .await?;

    Ok(Json(urls))
}
