#![allow(dead_code)]

//! In-memory repository implementation shared by the integration tests.
//!
//! Implements the same contract as the PostgreSQL repositories, including
//! the uniqueness conflict on `short_url`, so service behavior can be
//! exercised end to end without a database.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use snaplink::prelude::*;
use snaplink::routes::app_router;

pub const BASE_URL: &str = "http://localhost:8000";

#[derive(Default)]
pub struct InMemoryStore {
    links: Mutex<Vec<Link>>,
    clicks: Mutex<Vec<Click>>,
    next_link_id: AtomicI64,
    next_click_id: AtomicI64,
    /// Counts every insert attempt, including rejected ones.
    pub insert_attempts: AtomicUsize,
    /// When set, every link insert fails with a uniqueness conflict.
    pub reject_all_inserts: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for InMemoryStore {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);

        if self.reject_all_inserts.load(Ordering::SeqCst) {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let mut links = self.links.lock().unwrap();
        if links.iter().any(|l| l.short_url == new_link.short_url) {
            return Err(AppError::conflict("Unique constraint violation", json!({})));
        }

        let link = Link {
            id: self.next_link_id.fetch_add(1, Ordering::SeqCst) + 1,
            origin_url: new_link.origin_url,
            short_url: new_link.short_url,
            created_at: new_link.created_at,
            expires_at: new_link.expires_at,
            is_active: new_link.is_active,
            owner_id: new_link.owner_id,
        };
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_suffix(&self, key: &str) -> Result<Option<Link>, AppError> {
        let suffix = format!("/{key}");
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.short_url.ends_with(&suffix)).cloned())
    }

    async fn find_id_by_suffix(&self, key: &str) -> Result<Option<i64>, AppError> {
        Ok(self.find_by_suffix(key).await?.map(|l| l.id))
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.iter().find(|l| l.short_url == short_url).cloned())
    }

    async fn list_short_urls(&self, filter: LinkFilter) -> Result<Vec<String>, AppError> {
        let links = self.links.lock().unwrap();
        let offset = filter.offset.unwrap_or(0).max(0) as usize;
        let limit = filter.limit.map(|l| l.max(0) as usize).unwrap_or(usize::MAX);

        Ok(links
            .iter()
            .filter(|l| !filter.only_active || l.is_active)
            .map(|l| l.short_url.clone())
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn deactivate_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let mut links = self.links.lock().unwrap();
        let mut deactivated = 0;
        for link in links.iter_mut() {
            if link.is_active && link.expires_at <= now {
                link.is_active = false;
                deactivated += 1;
            }
        }
        Ok(deactivated)
    }
}

#[async_trait]
impl ClickRepository for InMemoryStore {
    async fn insert(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = Click {
            id: self.next_click_id.fetch_add(1, Ordering::SeqCst) + 1,
            link_id: new_click.link_id,
            clicked_at: new_click.clicked_at,
        };
        self.clicks.lock().unwrap().push(click.clone());
        Ok(click)
    }

    async fn count_clicks_since(
        &self,
        link_id: i64,
        since: DateTime<Utc>,
    ) -> Result<i64, AppError> {
        let clicks = self.clicks.lock().unwrap();
        Ok(clicks
            .iter()
            .filter(|c| c.link_id == link_id && c.clicked_at >= since)
            .count() as i64)
    }
}

pub struct TestServices {
    pub links: LinkService,
    pub clicks: ClickService,
    pub stats: StatsService,
    pub expiration: ExpirationService,
}

pub fn build_services(store: &Arc<InMemoryStore>) -> TestServices {
    let links: Arc<dyn LinkRepository> = store.clone();
    let clicks: Arc<dyn ClickRepository> = store.clone();

    TestServices {
        links: LinkService::new(links.clone(), BASE_URL.to_string(), Duration::hours(24)),
        clicks: ClickService::new(links.clone(), clicks.clone()),
        stats: StatsService::new(links.clone(), clicks.clone()),
        expiration: ExpirationService::new(links),
    }
}

pub fn build_router(store: &Arc<InMemoryStore>) -> axum::Router {
    let links: Arc<dyn LinkRepository> = store.clone();
    let clicks: Arc<dyn ClickRepository> = store.clone();

    let state = AppState::new(
        Arc::new(LinkService::new(
            links.clone(),
            BASE_URL.to_string(),
            Duration::hours(24),
        )),
        Arc::new(ClickService::new(links.clone(), clicks.clone())),
        Arc::new(StatsService::new(links, clicks)),
    );
    app_router(state)
}

/// Inserts a link directly into the store, bypassing the service layer.
pub async fn seed_link(
    store: &Arc<InMemoryStore>,
    key: &str,
    origin_url: &str,
    expires_in: Duration,
) -> Link {
    let now = Utc::now();
    LinkRepository::insert(
        store.as_ref(),
        NewLink {
            origin_url: origin_url.to_string(),
            short_url: format!("{BASE_URL}/{key}"),
            created_at: now,
            expires_at: now + expires_in,
            is_active: true,
            owner_id: 1,
        },
    )
    .await
    .unwrap()
}

/// Inserts a click with a crafted timestamp, bypassing the service layer.
pub async fn seed_click(store: &Arc<InMemoryStore>, link_id: i64, clicked_at: DateTime<Utc>) {
    ClickRepository::insert(store.as_ref(), NewClick { link_id, clicked_at })
        .await
        .unwrap();
}
