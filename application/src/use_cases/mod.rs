//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod enrich;
pub mod generate_report;
pub mod reframe;

#[cfg(test)]
mod test_support;
