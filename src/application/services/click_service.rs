//! Click recording service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Service recording click events against short links.
pub struct ClickService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl ClickService {
    /// Creates a new click service.
    pub fn new(links: Arc<dyn LinkRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// Records one click against the link whose short URL ends with `/{key}`.
    ///
    /// The lookup intentionally ignores the active flag: a click on an
    /// expired link is still recorded. This is asymmetric with
    /// [`crate::application::services::LinkService::resolve_active`], which
    /// refuses inactive links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches. Store failures
    /// propagate; the click is never silently dropped.
    pub async fn record_click(&self, key: &str) -> Result<Click, AppError> {
        let link_id = self
            .links
            .find_id_by_suffix(key)
            .await?
            .ok_or_else(|| AppError::not_found("Url not found", json!({ "key": key })))?;

        self.clicks
            .insert(NewClick {
                link_id,
                clicked_at: Utc::now(),
            })
            .await
    }
}
