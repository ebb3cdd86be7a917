//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a short link is accessed.
///
/// Append-only: clicks are never updated or deleted except by cascading
/// delete of the owning link.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
}

/// Input data for recording a new click event.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
}
