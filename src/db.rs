use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::config::Config;

/// Connection pool wrapper, built once at startup and shared through
/// application state.
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    /// Builds the pool (at most 10 connections, waiters queue without bound)
    /// and verifies connectivity with a probe query.
    ///
    /// The probe acquires a connection, so failure here means the database is
    /// unreachable or the credentials are wrong. Callers treat that as fatal;
    /// there is no retry.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(config.connect_options())
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Closes the pool, waiting for checked-out connections to come back.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
