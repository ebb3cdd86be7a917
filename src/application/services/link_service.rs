//! Link creation, collision retry, and redirect resolution.

use std::iter;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use serde_json::json;
use tokio_retry::RetryIf;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkFilter, LinkRepository};
use crate::error::AppError;
use crate::utils::key_generator::generate_key;
use crate::utils::url_validator::{MIN_URL_SEGMENTS, segment_count, validate_origin_url};

/// Total insert attempts before giving up on finding a unique key.
const MAX_KEY_ATTEMPTS: usize = 10;

/// Service for creating short links and resolving them for redirects.
///
/// The short link is always `{base_url}/{key}` with a freshly generated
/// key; the serving prefix is configuration, never derived from the input
/// URL. Uniqueness is delegated to the store's constraint and resolved by
/// a bounded retry, each attempt inserting under its own transaction.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    base_url: String,
    link_ttl: Duration,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the serving prefix (`scheme://host:port`, no trailing
    /// slash); `link_ttl` is how long a fresh link stays active.
    pub fn new(links: Arc<dyn LinkRepository>, base_url: String, link_ttl: Duration) -> Self {
        Self {
            links,
            base_url: base_url.trim_end_matches('/').to_string(),
            link_ttl,
        }
    }

    /// Creates a short link for `origin_url` on behalf of `owner_id`.
    ///
    /// Validation happens in two steps, in this order:
    ///
    /// 1. the URL pattern check (scheme, host shape, optional port/path);
    /// 2. the segment-count gate: the *input* URL, split by `/`, must have
    ///    more than [`MIN_URL_SEGMENTS`] parts. `http://localhost:8000`
    ///    splits into 3 parts and is rejected as not worth shortening.
    ///
    /// On a uniqueness violation the insert is retried with a fresh key, up
    /// to [`MAX_KEY_ATTEMPTS`] attempts in total.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] - pattern check failed
    /// - [`AppError::TooShort`] - segment gate rejected the input
    /// - [`AppError::KeyExhaustion`] - all attempts hit a uniqueness violation
    /// - [`AppError::Internal`] - store failure
    pub async fn create_link(&self, origin_url: &str, owner_id: i64) -> Result<Link, AppError> {
        validate_origin_url(origin_url)?;

        let segments = segment_count(origin_url);
        if segments <= MIN_URL_SEGMENTS {
            return Err(AppError::too_short(
                "To generate a short url the original must have at least 3 \
                 path segments, like 'one://two/three'",
                json!({ "origin_url": origin_url, "segments": segments }),
            ));
        }

        let links = Arc::clone(&self.links);
        let origin = origin_url.to_string();
        let base = self.base_url.clone();
        let ttl = self.link_ttl;

        let attempt = move || {
            let links = Arc::clone(&links);
            let origin = origin.clone();
            let short_url = format!("{}/{}", base, generate_key());
            async move {
                let now = Utc::now();
                links
                    .insert(NewLink {
                        origin_url: origin,
                        short_url,
                        created_at: now,
                        expires_at: now + ttl,
                        is_active: true,
                        owner_id,
                    })
                    .await
            }
        };

        // Zero-delay retries after the initial attempt; collisions are
        // random, so there is nothing to back off from.
        let budget = iter::repeat(StdDuration::ZERO).take(MAX_KEY_ATTEMPTS - 1);

        RetryIf::spawn(budget, attempt, AppError::is_unique_violation)
            .await
            .map_err(|e| {
                if e.is_unique_violation() {
                    AppError::key_exhaustion(
                        format!(
                            "Failed to generate a unique short link in {MAX_KEY_ATTEMPTS} attempts"
                        ),
                        json!({ "attempts": MAX_KEY_ATTEMPTS }),
                    )
                } else {
                    e
                }
            })
    }

    /// Resolves an active link by its short key, for the redirect path.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link ends with `/{key}`, and
    /// [`AppError::Inactive`] if the link exists but has been deactivated.
    /// Unlike click recording, this path does check the active flag.
    pub async fn resolve_active(&self, key: &str) -> Result<Link, AppError> {
        let link = self
            .links
            .find_by_suffix(key)
            .await?
            .ok_or_else(|| AppError::not_found("Url not found", json!({ "key": key })))?;

        if !link.is_active {
            return Err(AppError::inactive("Not active", json!({ "key": key })));
        }

        Ok(link)
    }

    /// Lists short URLs, optionally only active ones, with pagination.
    pub async fn list_short_urls(&self, filter: LinkFilter) -> Result<Vec<String>, AppError> {
        self.links.list_short_urls(filter).await
    }
}
