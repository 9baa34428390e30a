//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: text-generation models used by both stages
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
