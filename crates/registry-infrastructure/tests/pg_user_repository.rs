//! Runs against a live PostgreSQL. Point `DATABASE_URL` at a scratch database and
//! run with `cargo test -p registry-infrastructure -- --ignored`.

use registry_core::domain::UserInput;
use registry_core::error::DomainError;
use registry_core::repositories::UserRepository;
use registry_infrastructure::{create_pool, run_migrations, PgUserRepository};
use registry_shared::config::DatabaseSettings;
use sqlx::PgPool;

async fn setup() -> (PgPool, PgUserRepository) {
    let settings = DatabaseSettings {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
        max_connections: 2,
        min_connections: 0,
        acquire_timeout_seconds: 3,
        run_migrations: true,
    };
    let pool = create_pool(&settings).await.unwrap();
    run_migrations(&pool).await.unwrap();
    sqlx::query("TRUNCATE users RESTART IDENTITY")
        .execute(&pool)
        .await
        .unwrap();
    (pool.clone(), PgUserRepository::new(pool))
}

#[tokio::test]
#[ignore]
async fn test_duplicate_active_nik_is_rejected() {
    let (_pool, repo) = setup().await;

    repo.insert(&UserInput::new("123", "Alice", "Acme")).await.unwrap();
    let err = repo
        .insert(&UserInput::new("123", "Bob", "Acme"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicateNik(_)));

    let user = repo.find_by_nik("123").await.unwrap().unwrap();
    assert_eq!(user.name, "Alice");
}

#[tokio::test]
#[ignore]
async fn test_update_and_soft_delete() {
    let (pool, repo) = setup().await;

    repo.insert(&UserInput::new("123", "Alice", "Acme")).await.unwrap();
    repo.insert(&UserInput::new("456", "Dave", "Globex")).await.unwrap();

    assert_eq!(
        repo.update_by_nik(&UserInput::new("123", "Bob", "Acme")).await.unwrap(),
        1
    );
    assert_eq!(
        repo.update_by_nik(&UserInput::new("999", "Nobody", "None")).await.unwrap(),
        0
    );
    assert_eq!(repo.find_by_nik("123").await.unwrap().unwrap().name, "Bob");

    assert_eq!(repo.soft_delete_by_nik("123").await.unwrap(), 1);
    assert!(repo.find_by_nik("123").await.unwrap().is_none());

    let active: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.nik)
        .collect();
    assert_eq!(active, vec!["456".to_string()]);

    let deleted: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM users WHERE nik = '123' AND deleted_at IS NOT NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(deleted, 1);
}
