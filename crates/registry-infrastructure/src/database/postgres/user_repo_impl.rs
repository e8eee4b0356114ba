// ============================================================================
// Registry Infrastructure - PostgreSQL User Repository
// File: crates/registry-infrastructure/src/database/postgres/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use registry_core::domain::{User, UserInput};
use registry_core::error::DomainError;
use registry_core::repositories::UserRepository;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    pub id: i64,
    pub nik: String,
    pub name: String,
    pub company: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            nik: row.nik,
            name: row.name,
            company: row.company,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

fn database_error(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_nik(&self, nik: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, nik, name, company, created_at, updated_at, deleted_at
            FROM users
            WHERE nik = $1 AND deleted_at IS NULL
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(nik)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("finding user by nik", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, nik, name, company, created_at, updated_at, deleted_at
            FROM users
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("listing users", e))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn insert(&self, input: &UserInput) -> Result<User, DomainError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (nik, name, company)
            VALUES ($1, $2, $3)
            RETURNING id, nik, name, company, created_at, updated_at, deleted_at
            "#,
        )
        .bind(&input.nik)
        .bind(&input.name)
        .bind(&input.company)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            // uq_users_active_nik
            let duplicate = matches!(
                &e,
                sqlx::Error::Database(db_err) if db_err.is_unique_violation()
            );
            if duplicate {
                DomainError::DuplicateNik(input.nik.clone())
            } else {
                database_error("creating user", e)
            }
        })?;

        Ok(row.into())
    }

    async fn update_by_nik(&self, input: &UserInput) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, company = $3, updated_at = NOW()
            WHERE nik = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(&input.nik)
        .bind(&input.name)
        .bind(&input.company)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("updating user", e))?;

        Ok(result.rows_affected())
    }

    async fn soft_delete_by_nik(&self, nik: &str) -> Result<u64, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET deleted_at = NOW()
            WHERE nik = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(nik)
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("deleting user", e))?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("pinging database", e))?;
        Ok(())
    }
}
