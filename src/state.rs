//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::application::services::{ClickService, LinkService, StatsService};

/// Service handles shared across request handlers.
///
/// Repositories are injected into each service explicitly at construction;
/// there is no module-level session or global store handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub click_service: Arc<ClickService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        click_service: Arc<ClickService>,
        stats_service: Arc<StatsService>,
    ) -> Self {
        Self {
            link_service,
            click_service,
            stats_service,
        }
    }
}
