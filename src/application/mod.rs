//! Application layer orchestrating the domain over the repository traits.

pub mod services;
