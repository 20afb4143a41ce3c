//! Nestling Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Nestling, a baby
//! activity tracker. It is database-agnostic and defines traits that are
//! implemented by the `storage-sqlite` crate.

pub mod activity;
pub mod analytics;
pub mod babies;
pub mod constants;
pub mod errors;
pub mod events;
pub mod export;
pub mod feeding;
pub mod health;
pub mod lookup;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
