//! Router wiring for the REST surface.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, links, redirect, shorten, stats};
use crate::state::AppState;

/// Builds the application router.
///
/// The catch-all `/{key}` route comes last so the fixed routes keep
/// priority over redirect resolution.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten::create_short_url))
        .route("/links", get(links::list_short_urls))
        .route("/stats", get(stats::get_statistics))
        .route("/health", get(health::health))
        .route("/{key}", get(redirect::redirect_to_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
