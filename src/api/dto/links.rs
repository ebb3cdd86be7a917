//! Query parameters for the link listing endpoint.

use serde::Deserialize;

/// Query of `GET /links`.
#[derive(Debug, Deserialize, Default)]
pub struct ListLinksQuery {
    /// When true, only active links are returned.
    #[serde(default)]
    pub active_only: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
