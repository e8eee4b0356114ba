//! In-memory `UserRepository` with the same scoping and uniqueness rules as PostgreSQL.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{User, UserInput};
use crate::error::DomainError;
use crate::repositories::UserRepository;

#[derive(Default)]
struct Table {
    rows: Vec<User>,
    next_id: i64,
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
    offline: AtomicBool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row, soft-deleted ones included.
    pub async fn unscoped_rows(&self) -> Vec<User> {
        self.table.read().await.rows.clone()
    }

    /// While offline every call fails with `DomainError::DatabaseError`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), DomainError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "connection refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_nik(&self, nik: &str) -> Result<Option<User>, DomainError> {
        self.check_online()?;
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|u| u.nik == nik && !u.is_deleted())
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        self.check_online()?;
        let table = self.table.read().await;
        Ok(table.rows.iter().filter(|u| !u.is_deleted()).cloned().collect())
    }

    async fn insert(&self, input: &UserInput) -> Result<User, DomainError> {
        self.check_online()?;
        let mut table = self.table.write().await;

        if table
            .rows
            .iter()
            .any(|u| u.nik == input.nik && !u.is_deleted())
        {
            return Err(DomainError::DuplicateNik(input.nik.clone()));
        }

        table.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: table.next_id,
            nik: input.nik.clone(),
            name: input.name.clone(),
            company: input.company.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn update_by_nik(&self, input: &UserInput) -> Result<u64, DomainError> {
        self.check_online()?;
        let mut table = self.table.write().await;
        let now = Utc::now();
        let mut affected = 0;
        for user in table
            .rows
            .iter_mut()
            .filter(|u| u.nik == input.nik && !u.is_deleted())
        {
            user.name = input.name.clone();
            user.company = input.company.clone();
            user.updated_at = now;
            affected += 1;
        }
        Ok(affected)
    }

    async fn soft_delete_by_nik(&self, nik: &str) -> Result<u64, DomainError> {
        self.check_online()?;
        let mut table = self.table.write().await;
        let now = Utc::now();
        let mut affected = 0;
        for user in table
            .rows
            .iter_mut()
            .filter(|u| u.nik == nik && !u.is_deleted())
        {
            user.deleted_at = Some(now);
            affected += 1;
        }
        Ok(affected)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.check_online()
    }
}
