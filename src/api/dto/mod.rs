//! Request and response DTOs for the REST surface.

pub mod links;
pub mod shorten;
pub mod stats;

pub use links::ListLinksQuery;
pub use shorten::{LinkResponse, ShortenRequest};
pub use stats::UrlStatistic;
