//! PostgreSQL implementation of the link repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkFilter, LinkRepository};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    origin_url: String,
    short_url: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    is_active: bool,
    owner_id: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link {
            id: row.id,
            origin_url: row.origin_url,
            short_url: row.short_url,
            created_at: row.created_at,
            expires_at: row.expires_at,
            is_active: row.is_active,
            owner_id: row.owner_id,
        }
    }
}

const LINK_COLUMNS: &str = "id, origin_url, short_url, created_at, expires_at, is_active, owner_id";

/// PostgreSQL repository for link storage.
///
/// Single-statement operations ride on PostgreSQL's per-statement
/// atomicity; a rejected insert leaves nothing behind for other readers.
/// Uniqueness of `short_url` is enforced by the table constraint and
/// surfaced as [`AppError::Conflict`].
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row: LinkRow = sqlx::query_as(&format!(
            "INSERT INTO links (origin_url, short_url, created_at, expires_at, is_active, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {LINK_COLUMNS}"
        ))
        .bind(&new_link.origin_url)
        .bind(&new_link.short_url)
        .bind(new_link.created_at)
        .bind(new_link.expires_at)
        .bind(new_link.is_active)
        .bind(new_link.owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_suffix(&self, key: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_url LIKE '%/' || $1"
        ))
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_id_by_suffix(&self, key: &str) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar("SELECT id FROM links WHERE short_url LIKE '%/' || $1")
            .bind(key)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_url = $1"
        ))
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list_short_urls(&self, filter: LinkFilter) -> Result<Vec<String>, AppError> {
        let urls = sqlx::query_scalar(
            "SELECT short_url FROM links \
             WHERE ($1 = FALSE OR is_active) \
             ORDER BY id \
             LIMIT $2 OFFSET $3",
        )
        .bind(filter.only_active)
        .bind(filter.limit)
        .bind(filter.offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(urls)
    }

    async fn deactivate_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE links SET is_active = FALSE WHERE expires_at <= $1 AND is_active")
            .bind(now)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
