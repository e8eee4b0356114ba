//! # Registry Core - Domain Module

pub mod user;

pub use user::{User, UserInput};
