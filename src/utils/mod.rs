//! Utility functions for key generation and URL validation.
//!
//! - [`key_generator`] - Random short-key generation
//! - [`url_validator`] - Origin-URL pattern check and segment counting

pub mod key_generator;
pub mod url_validator;
