//! `coinbank-core` — shared building blocks for the ledger.
//!
//! Identifiers and the domain error model. No IO, no HTTP.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::AccountId;
