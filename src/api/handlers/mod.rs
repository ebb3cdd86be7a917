//! REST API handlers.

pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod stats;
