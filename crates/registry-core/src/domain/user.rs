// ============================================================================
// Registry Core - User Entity
// File: crates/registry-core/src/domain/user.rs
// Description: Registered person, keyed by NIK, with soft-delete lifecycle
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity (maps to `users` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nik: String,
    pub name: String,
    pub company: String,

    // Lifecycle fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Writable fields of a user. `nik` is the match key on update and is never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserInput {
    pub nik: String,
    pub name: String,
    pub company: String,
}

impl UserInput {
    pub fn new(
        nik: impl Into<String>,
        name: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            nik: nik.into(),
            name: name.into(),
            company: company.into(),
        }
    }
}
