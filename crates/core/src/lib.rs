//! `crewdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod username;

pub use error::{DomainError, DomainResult};
pub use id::EmployeeId;
pub use username::Username;
