//! Origin-URL validation and the shortening-eligibility gate.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// Accepted origin URLs: `http`/`https` scheme, then `localhost`, a dotted
/// IPv4 quad, or a DNS hostname with a 2+ letter TLD, optional port,
/// optional path.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(localhost|(\d{1,3}\.){3}\d{1,3}|([a-zA-Z0-9-]+\.)+[a-zA-Z]{2,})(:\d+)?(/.*)?$",
    )
    .expect("URL pattern must compile")
});

/// Minimum `/`-segment count an origin URL must exceed to be shortened.
pub const MIN_URL_SEGMENTS: usize = 3;

/// Validates an origin URL against the accepted pattern.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if the URL does not match.
pub fn validate_origin_url(origin_url: &str) -> Result<(), AppError> {
    if URL_PATTERN.is_match(origin_url) {
        Ok(())
    } else {
        Err(AppError::invalid_url(
            "Incorrect original url, must be like 'http(s)://example.com' \
             with only letters, digits, '.' and '-' in the host",
            json!({ "origin_url": origin_url }),
        ))
    }
}

/// Number of `/`-separated segments in a URL, empty segments included.
///
/// `"http://localhost:8000"` has 3 segments (`http:`, ``, `localhost:8000`),
/// `"https://example.com/a"` has 4. The count is taken over the *input* URL,
/// not the generated short link; see the eligibility gate in
/// [`crate::application::services::LinkService::create_link`].
pub fn segment_count(url: &str) -> usize {
    url.split('/').count()
}
