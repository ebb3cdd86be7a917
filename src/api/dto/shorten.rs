//! Request/response bodies for link creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Body of `POST /shorten`.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub origin_url: String,
    pub owner_id: i64,
}

/// A created (or resolved) link as returned to clients.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub origin_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
    pub owner_id: i64,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            origin_url: link.origin_url,
            short_url: link.short_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            is_active: link.is_active,
            owner_id: link.owner_id,
        }
    }
}
