//! Repository traits (ports)

pub mod user_repository;

#[cfg(any(test, feature = "testing"))]
pub mod in_memory;

pub use user_repository::UserRepository;

#[cfg(any(test, feature = "testing"))]
pub use in_memory::InMemoryUserRepository;
