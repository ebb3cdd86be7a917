//! Rolling-window click statistics.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::domain::repositories::{ClickRepository, LinkFilter, LinkRepository};
use crate::error::AppError;

/// Per-link click counts over the rolling windows. Derived on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticSnapshot {
    pub short_url: String,
    pub origin_url: String,
    pub last_hour_clicks: i64,
    pub last_day_clicks: i64,
}

/// Service computing the ranked per-link statistics report.
pub struct StatsService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(links: Arc<dyn LinkRepository>, clicks: Arc<dyn ClickRepository>) -> Self {
        Self { links, clicks }
    }

    /// Builds one [`StatisticSnapshot`] per link, sorted descending by
    /// last-day clicks.
    ///
    /// Windows are measured backward from a single `now` taken in UTC, so
    /// the report is independent of the server-local timezone. The sort is
    /// stable; ties keep listing order.
    ///
    /// Aggregation is two-phase: short URLs are listed first, then each
    /// link row is fetched for its counts. A link deleted between the
    /// phases fails the whole report with [`AppError::NotFound`] - no
    /// partial list is returned.
    pub async fn full_statistics(&self) -> Result<Vec<StatisticSnapshot>, AppError> {
        let now = Utc::now();
        let hour_ago = now - Duration::hours(1);
        let day_ago = now - Duration::hours(24);

        let mut snapshots = Vec::new();
        for short_url in self.links.list_short_urls(LinkFilter::all()).await? {
            snapshots.push(self.snapshot_for(&short_url, hour_ago, day_ago).await?);
        }

        snapshots.sort_by(|a, b| b.last_day_clicks.cmp(&a.last_day_clicks));
        Ok(snapshots)
    }

    async fn snapshot_for(
        &self,
        short_url: &str,
        hour_ago: DateTime<Utc>,
        day_ago: DateTime<Utc>,
    ) -> Result<StatisticSnapshot, AppError> {
        let link = self
            .links
            .find_by_short_url(short_url)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Url vanished during aggregation",
                    json!({ "short_url": short_url }),
                )
            })?;

        let last_hour_clicks = self.clicks.count_clicks_since(link.id, hour_ago).await?;
        let last_day_clicks = self.clicks.count_clicks_since(link.id, day_ago).await?;

        Ok(StatisticSnapshot {
            short_url: link.short_url,
            origin_url: link.origin_url,
            last_hour_clicks,
            last_day_clicks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};

    fn link(id: i64, short_url: &str) -> Link {
        let now = Utc::now();
        Link {
            id,
            origin_url: format!("https://example.com/page/{id}"),
            short_url: short_url.to_string(),
            created_at: now,
            expires_at: now + Duration::hours(24),
            is_active: true,
            owner_id: 1,
        }
    }

    #[tokio::test]
    async fn test_full_statistics_ranked_by_last_day() {
        let mut links = MockLinkRepository::new();
        let mut clicks = MockClickRepository::new();

        let urls = vec![
            "http://localhost:8000/key0000001".to_string(),
            "http://localhost:8000/key0000002".to_string(),
        ];
        links
            .expect_list_short_urls()
            .times(1)
            .returning(move |_| Ok(urls.clone()));
        links
            .expect_find_by_short_url()
            .times(2)
            .returning(|short_url| {
                let id = if short_url.ends_with("1") { 1 } else { 2 };
                Ok(Some(link(id, short_url)))
            });

        // Link 1: 1 click in the last hour; link 2: 5 clicks across the day.
        clicks
            .expect_count_clicks_since()
            .times(4)
            .returning(|link_id, since| {
                let within_hour = since > Utc::now() - Duration::hours(2);
                Ok(match (link_id, within_hour) {
                    (1, true) => 1,
                    (1, false) => 1,
                    (2, true) => 0,
                    (2, false) => 5,
                    _ => unreachable!(),
                })
            });

        let service = StatsService::new(Arc::new(links), Arc::new(clicks));
        let stats = service.full_statistics().await.unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].last_day_clicks, 5);
        assert!(stats[0].short_url.ends_with("key0000002"));
        assert_eq!(stats[1].last_hour_clicks, 1);
    }

    #[tokio::test]
    async fn test_full_statistics_ties_keep_listing_order() {
        let mut links = MockLinkRepository::new();
        let mut clicks = MockClickRepository::new();

        let urls = vec![
            "http://localhost:8000/keyaaaaaaa".to_string(),
            "http://localhost:8000/keybbbbbbb".to_string(),
        ];
        links
            .expect_list_short_urls()
            .times(1)
            .returning(move |_| Ok(urls.clone()));
        links
            .expect_find_by_short_url()
            .times(2)
            .returning(|short_url| Ok(Some(link(1, short_url))));
        clicks
            .expect_count_clicks_since()
            .times(4)
            .returning(|_, _| Ok(0));

        let service = StatsService::new(Arc::new(links), Arc::new(clicks));
        let stats = service.full_statistics().await.unwrap();

        assert!(stats[0].short_url.ends_with("keyaaaaaaa"));
        assert!(stats[1].short_url.ends_with("keybbbbbbb"));
    }

    #[tokio::test]
    async fn test_full_statistics_aborts_when_link_vanishes() {
        let mut links = MockLinkRepository::new();
        let clicks = MockClickRepository::new();

        let urls = vec!["http://localhost:8000/keygone123".to_string()];
        links
            .expect_list_short_urls()
            .times(1)
            .returning(move |_| Ok(urls.clone()));
        links
            .expect_find_by_short_url()
            .times(1)
            .returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(links), Arc::new(clicks));
        let result = service.full_statistics().await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_full_statistics_empty_store() {
        let mut links = MockLinkRepository::new();
        let clicks = MockClickRepository::new();

        links
            .expect_list_short_urls()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = StatsService::new(Arc::new(links), Arc::new(clicks));
        let stats = service.full_statistics().await.unwrap();

        assert!(stats.is_empty());
    }
}
