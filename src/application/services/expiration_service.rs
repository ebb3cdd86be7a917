//! Expiration sweep and its periodic driver task.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service deactivating links past their expiry time.
pub struct ExpirationService {
    links: Arc<dyn LinkRepository>,
}

impl ExpirationService {
    /// Creates a new expiration service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Deactivates every link with `expires_at <= now` that is still active.
    ///
    /// One bulk statement regardless of link count, so the sweep costs a
    /// single round trip. Idempotent: a second sweep with no newly expired
    /// links changes nothing and returns 0.
    ///
    /// # Errors
    ///
    /// Store errors propagate to the caller; the timer task logs them and
    /// retries on the next tick.
    pub async fn sweep(&self) -> Result<u64, AppError> {
        self.links.deactivate_expired(Utc::now()).await
    }
}

/// Runs the expiration sweep on a fixed interval until the process exits.
///
/// A failed sweep is logged and never tears down the task; expired links
/// are simply picked up on the next tick.
pub async fn run_sweeper(service: Arc<ExpirationService>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match service.sweep().await {
            Ok(0) => tracing::debug!("expiration sweep found nothing to deactivate"),
            Ok(n) => tracing::info!(deactivated = n, "deactivated expired links"),
            Err(e) => tracing::error!(error = %e, "expiration sweep failed"),
        }
    }
}
