//! Persistence layer: the names table and its store implementations.
//!
//! [`NameStore`] is the seam between the registry service and storage.
//! [`postgres::PostgresNameStore`] is the production backend;
//! [`memory::InMemoryNameStore`] mirrors its identity and ordering rules
//! for tests and database-less local runs.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{NameRecord, NewName};
use crate::error::AppError;

pub use memory::InMemoryNameStore;
pub use postgres::PostgresNameStore;

/// Durable storage for registered names.
///
/// Every method is a single independent statement; implementations
/// assign `id` and `created_at` themselves.
#[async_trait]
pub trait NameStore: Send + Sync + std::fmt::Debug {
    /// Short backend label reported by `/health`.
    fn backend(&self) -> &'static str;

    /// Inserts a name and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the insert fails.
    async fn insert_name(&self, name: &NewName) -> Result<NameRecord, AppError>;

    /// Returns every record, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the select fails.
    async fn list_names(&self) -> Result<Vec<NameRecord>, AppError>;
}
