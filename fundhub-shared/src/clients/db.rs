//! Async MySQL connection pool and the error type every store adapter returns.

use std::time::Duration;

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::{AsyncMysqlConnection, SimpleAsyncConnection};

/// Failures raised by the relational store. Callers never see the message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No connection could be checked out or the connection dropped.
    #[error("store connection failed: {message}")]
    Connection { message: String },

    /// The statement reached the server and failed there.
    #[error("store query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<DieselError> for StoreError {
    fn from(error: DieselError) -> Self {
        match error {
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                Self::connection(info.message())
            }
            DieselError::DatabaseError(kind, info) => {
                tracing::debug!(?kind, message = info.message(), "diesel operation failed");
                Self::query(info.message())
            }
            other => Self::query(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Defaults: 10 connections, 2 idle, 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Pool handle owned by application state. Clones share the same connections.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncMysqlConnection>,
}

impl DbPool {
    pub async fn connect(config: PoolConfig) -> Result<Self, StoreError> {
        let manager =
            AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(config.database_url());

        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|e| StoreError::connection(e.to_string()))?;

        tracing::info!(
            max_size = config.max_size,
            min_idle = ?config.min_idle,
            "database connection pool created"
        );
        Ok(Self { inner })
    }

    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncMysqlConnection>, StoreError> {
        self.inner.get().await.map_err(|e| {
            tracing::error!(error = %e, "failed to get db connection");
            StoreError::connection(e.to_string())
        })
    }

    /// Round-trips a trivial statement to prove the store is reachable.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.get().await?;
        conn.batch_execute("SELECT 1").await?;
        Ok(())
    }
}
