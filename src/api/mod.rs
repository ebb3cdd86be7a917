//! REST API layer: handlers and DTOs.
//!
//! Thin plumbing over [`crate::application::services`]; all policy lives in
//! the services, all status-code mapping in [`crate::error::AppError`].

pub mod dto;
pub mod handlers;
