//! # Registry Shared
//!
//! Configuration, telemetry, and startup errors shared by the NIK registry crates.

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::AppConfig;
pub use error::AppError;
