//! # Registry Core
//!
//! Domain entity, service, and repository trait for the NIK registry.

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
