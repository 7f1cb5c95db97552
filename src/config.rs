//! Server configuration from command-line flags and environment variables.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use thiserror::Error;

/// Output format for log events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Settings for the `todo_server` binary.
///
/// Each flag falls back to the environment variable named in its help text.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo_server", version, about = "Serve the todo list JSON API")]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "TODO_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// `PostgreSQL` connection URL.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "TODO_POOL_SIZE", default_value_t = 4)]
    pub pool_size: u32,

    /// Keep tasks in process memory instead of `PostgreSQL`.
    #[arg(long, env = "TODO_IN_MEMORY")]
    pub in_memory: bool,

    /// Log output format.
    #[arg(long, env = "TODO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Task store selected by the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local store; contents are lost on exit.
    InMemory,
    /// `PostgreSQL` store.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Maximum pooled connections.
        pool_size: u32,
    },
}

/// Errors raised while resolving the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a database URL nor the in-memory store was chosen.
    #[error("no task store configured: set DATABASE_URL or pass --in-memory")]
    MissingDatabaseUrl,
    /// The pool must hold at least one connection.
    #[error("pool size must be at least 1")]
    EmptyPool,
}

impl ServerConfig {
    /// Resolves which store to run against. `--in-memory` takes precedence
    /// over a configured database URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when no store is
    /// configured, or [`ConfigError::EmptyPool`] for a zero pool size.
    pub fn store(&self) -> Result<StoreBackend, ConfigError> {
        if self.in_memory {
            return Ok(StoreBackend::InMemory);
        }
        let database_url = self
            .database_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        Ok(StoreBackend::Postgres {
            database_url,
            pool_size: self.pool_size,
        })
    }
}
