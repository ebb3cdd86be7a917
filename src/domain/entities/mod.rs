//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs use separate `New*` structs whose ids are assigned by the store.
//!
//! - [`Link`] - A shortened URL mapping with expiry state
//! - [`Click`] - A click event on a shortened link

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
