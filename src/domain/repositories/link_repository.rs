//! Repository trait for short link data access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;

/// Filter for listing short URLs.
#[derive(Debug, Clone, Default)]
pub struct LinkFilter {
    /// When true, only links with `is_active = true` are returned.
    pub only_active: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl LinkFilter {
    /// A filter matching every link, in listing order.
    pub fn all() -> Self {
        Self::default()
    }
}

/// Repository interface for link storage.
///
/// The store is the single source of truth for short-URL uniqueness: the
/// core keeps no in-memory uniqueness cache and relies on the store's
/// constraint for collision detection. Every method executes as its own
/// transaction; a failed [`insert`](Self::insert) leaves no partial row
/// visible to concurrent readers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_url` already exists, and
    /// [`AppError::Internal`] on other database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds the link whose short URL ends with `/{key}`.
    async fn find_by_suffix(&self, key: &str) -> Result<Option<Link>, AppError>;

    /// Finds only the id of the link whose short URL ends with `/{key}`.
    ///
    /// Used by click recording, which deliberately does not load (or check
    /// the active state of) the full link row.
    async fn find_id_by_suffix(&self, key: &str) -> Result<Option<i64>, AppError>;

    /// Finds a link by its exact short URL.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError>;

    /// Lists short URLs matching the filter.
    async fn list_short_urls(&self, filter: LinkFilter) -> Result<Vec<String>, AppError>;

    /// Deactivates every link with `expires_at <= now` and `is_active = true`
    /// in a single bulk statement. Returns the number of links deactivated.
    async fn deactivate_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;
}
