//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its lifetime metadata.
///
/// The `short_url` is globally unique. The origin/short mapping is
/// immutable after creation; the only mutation a link ever sees is the
/// expiration sweep flipping `is_active` to `false`, and it never flips
/// back.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub origin_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
    pub owner_id: i64,
}

impl Link {
    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// The random key portion of the short URL (everything after the last `/`).
    pub fn short_key(&self) -> &str {
        self.short_url.rsplit('/').next().unwrap_or(&self.short_url)
    }
}

/// Input data for creating a new link. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub origin_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
    pub owner_id: i64,
}
