//! Repository trait for click event storage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;

/// Repository interface for the append-only click log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click event.
    ///
    /// The insert is atomic: on failure nothing is persisted and the error
    /// propagates to the caller.
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts clicks for a link with `clicked_at >= since`.
    async fn count_clicks_since(
        &self,
        link_id: i64,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError>;
}
