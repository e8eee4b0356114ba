//! User repository trait (port)
//!
//! Every query is scoped to active rows (`deleted_at IS NULL`).

use async_trait::async_trait;

use crate::domain::{User, UserInput};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// First active row with this NIK, in id order.
    async fn find_by_nik(&self, nik: &str) -> Result<Option<User>, DomainError>;

    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Fails with `DomainError::DuplicateNik` when an active row already holds the NIK.
    async fn insert(&self, input: &UserInput) -> Result<User, DomainError>;

    /// Replaces `name` and `company` on matching active rows. Returns rows affected.
    async fn update_by_nik(&self, input: &UserInput) -> Result<u64, DomainError>;

    /// Stamps `deleted_at` on matching active rows. Returns rows affected.
    async fn soft_delete_by_nik(&self, nik: &str) -> Result<u64, DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}
