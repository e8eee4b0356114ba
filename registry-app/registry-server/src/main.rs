use anyhow::Context;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use registry_api::{build_router, AppState};
use registry_core::services::UserService;
use registry_infrastructure::{create_pool, run_migrations, PgUserRepository};
use registry_shared::{telemetry, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env is read inside)
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry
    telemetry::init_telemetry(&config.log)?;

    info!("{} starting (env: {})...", config.app.name, config.app.env);

    // Connect to Database
    let pool = create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;
    info!(
        "Database pool ready (max {} connections)",
        config.database.max_connections
    );

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to migrate database schema")?;
    }

    // Create App State
    let repository = Arc::new(PgUserRepository::new(pool.clone()));
    let state = AppState::new(config.app.name.clone(), UserService::new(repository));

    // Build router
    let app = build_router(state);

    // Bind address
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped, database pool closed");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
