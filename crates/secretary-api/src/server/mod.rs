//! Server setup and initialization
//!
//! Provides the application builder, the startup sequence and the server runner.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use secretary_common::{AppConfig, AppError};
use secretary_core::ProfileDirectory;
use secretary_db::{apply_schema, create_lazy_pool, wait_for_database, PgEventRepository, PgPool};
use secretary_service::ServiceContextBuilder;
use secretary_slack::SlackClient;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Blocks until the database answers, then makes sure the schema exists.
/// The pool is returned alongside the state so it can be closed on shutdown.
pub async fn create_app_state(
    config: &AppConfig,
    profiles: ProfileDirectory,
) -> Result<(AppState, PgPool), AppError> {
    let db_config = secretary_db::DatabaseConfig::from(&config.database);
    let pool = create_lazy_pool(&db_config).map_err(|e| AppError::Database(e.to_string()))?;

    info!("Waiting for PostgreSQL...");
    wait_for_database(&pool, db_config.connect_retry_interval).await;

    apply_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let slack = SlackClient::from_config(&config.slack);
    info!(api_url = %config.slack.api_url, "Slack client ready");

    let service_context = ServiceContextBuilder::new()
        .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
        .chat_client(Arc::new(slack))
        .profiles(Arc::new(profiles))
        .broadcast_channel(config.slack.broadcast_channel.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok((AppState::new(service_context), pool))
}

/// Bind the listening socket
pub async fn bind(address: &str) -> Result<TcpListener, AppError> {
    TcpListener::bind(address)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {address}: {e}")))
}

/// Serve `app` on `listener` until `shutdown` resolves
///
/// In-flight requests are allowed to finish after `shutdown` fires.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Server error: {e}")))
}

/// Resolves on SIGINT or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig, profiles: ProfileDirectory) -> Result<(), AppError> {
    let (state, pool) = create_app_state(&config, profiles).await?;
    let app = create_app(state);

    let listener = bind(&config.api.address()).await?;
    serve(listener, app, shutdown_signal()).await?;

    pool.close().await;
    info!("Database pool closed");
    Ok(())
}
