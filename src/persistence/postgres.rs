//! PostgreSQL implementation of the name store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::NameStore;
use super::models::NameRow;
use crate::config::AppConfig;
use crate::domain::{NameRecord, NewName};
use crate::error::AppError;

type NameTuple = (i64, String, String, DateTime<Utc>);

/// PostgreSQL-backed name store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresNameStore {
    pool: PgPool,
}

impl PostgresNameStore {
    /// Creates a store over an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool sized from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the database cannot be reached.
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(std::time::Duration::from_secs(
                config.database_connect_timeout_secs,
            ))
            .connect(&config.database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::Store(e.to_string()))?;
        tracing::info!("database migrations applied");
        Ok(())
    }
}

#[async_trait]
impl NameStore for PostgresNameStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn insert_name(&self, name: &NewName) -> Result<NameRecord, AppError> {
        let row = sqlx::query_as::<_, NameTuple>(
            "INSERT INTO names (first_name, last_name) VALUES ($1, $2) \
             RETURNING id, first_name, last_name, created_at",
        )
        .bind(name.first_name())
        .bind(name.last_name())
        .fetch_one(&self.pool)
        .await?;

        Ok(NameRow::from(row).into())
    }

    async fn list_names(&self) -> Result<Vec<NameRecord>, AppError> {
        let rows = sqlx::query_as::<_, NameTuple>(
            "SELECT id, first_name, last_name, created_at FROM names \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| NameRow::from(row).into())
            .collect())
    }
}
