//! Business logic services for the application layer.

pub mod click_service;
pub mod expiration_service;
pub mod link_service;
pub mod stats_service;

pub use click_service::ClickService;
pub use expiration_service::{ExpirationService, run_sweeper};
pub use link_service::LinkService;
pub use stats_service::{StatisticSnapshot, StatsService};
