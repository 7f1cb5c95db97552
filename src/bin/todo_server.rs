//! Serves the todo list JSON API.
//!
//! Usage:
//!
//! ```text
//! todo_server [--bind <addr>] [--database-url <url> | --in-memory]
//! ```
//!
//! Every flag has an environment fallback (`TODO_BIND`, `DATABASE_URL`,
//! `TODO_POOL_SIZE`, `TODO_IN_MEMORY`, `TODO_LOG_FORMAT`). With a database
//! URL the `tasks` table is created on startup when missing.

use clap::Parser;
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use todolist::{
    config::{ConfigError, ServerConfig, StoreBackend},
    http::router,
    task::{
        adapters::{memory::InMemoryTaskRepository, postgres::PostgresTaskRepository},
        ports::{TaskRepository, TaskRepositoryError},
        services::TaskService,
    },
    telemetry::{TelemetryError, init_tracing},
};
use tokio::net::TcpListener;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("task store unavailable: {0}")]
    Store(#[from] TaskRepositoryError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    run(ServerConfig::parse()).await.map_err(Into::into)
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing(config.log_format)?;
    match config.store()? {
        StoreBackend::InMemory => {
            tracing::warn!("using the in-memory task store; tasks are lost on exit");
            serve(config.bind, InMemoryTaskRepository::new()).await
        }
        StoreBackend::Postgres {
            database_url,
            pool_size,
        } => {
            let repository = PostgresTaskRepository::connect(&database_url, pool_size)?;
            repository.ensure_schema().await?;
            tracing::info!(pool_size, "connected to PostgreSQL");
            serve(config.bind, repository).await
        }
    }
}

async fn serve<R>(addr: SocketAddr, repository: R) -> Result<(), ServerError>
where
    R: TaskRepository + 'static,
{
    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
