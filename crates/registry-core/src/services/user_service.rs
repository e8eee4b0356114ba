// ============================================================================
// Registry Core - User Service
// File: crates/registry-core/src/services/user_service.rs
// ============================================================================
//! Register, look up, amend, and soft-delete users by NIK

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{User, UserInput};
use crate::error::DomainError;
use crate::repositories::UserRepository;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Register a new user. The repository rejects an NIK that is already active,
    /// so check and insert happen in one statement.
    pub async fn create(&self, input: &UserInput) -> Result<User, DomainError> {
        match self.user_repo.insert(input).await {
            Ok(user) => {
                info!("User created: id={} nik={}", user.id, user.nik);
                Ok(user)
            }
            Err(DomainError::DuplicateNik(nik)) => {
                warn!("Duplicate Detected: nik={}", nik);
                Err(DomainError::DuplicateNik(nik))
            }
            Err(e) => Err(e),
        }
    }

    pub async fn find(&self, nik: &str) -> Result<User, DomainError> {
        self.user_repo
            .find_by_nik(nik)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(nik.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.user_repo.list_all().await
    }

    /// Matching nothing is not an error; the count is only logged.
    pub async fn update(&self, input: &UserInput) -> Result<u64, DomainError> {
        let affected = self.user_repo.update_by_nik(input).await?;
        debug!("Update nik={} matched {} row(s)", input.nik, affected);
        Ok(affected)
    }

    pub async fn delete(&self, nik: &str) -> Result<u64, DomainError> {
        let affected = self.user_repo.soft_delete_by_nik(nik).await?;
        debug!("Soft delete nik={} matched {} row(s)", nik, affected);
        Ok(affected)
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.user_repo.ping().await
    }
}
