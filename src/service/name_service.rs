//! Name registry service: validation and store orchestration.

use std::sync::Arc;

use crate::domain::{NameRecord, NewName};
use crate::error::AppError;
use crate::persistence::NameStore;

/// Registry of visitor names.
///
/// Stateless coordinator over a [`NameStore`]: validates input, issues a
/// single store statement per call, and logs the outcome. Records are
/// append-only.
#[derive(Debug, Clone)]
pub struct NameService {
    store: Arc<dyn NameStore>,
}

impl NameService {
    /// Creates a new `NameService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn NameStore>) -> Self {
        Self { store }
    }

    /// Label of the store backing this registry.
    #[must_use]
    pub fn store_backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Validates and stores a name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is absent or blank
    /// (nothing is written), or [`AppError::Store`] if the insert fails.
    pub async fn add_name(
        &self,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<NameRecord, AppError> {
        let name = NewName::parse(first_name, last_name)?;
        let record = self.store.insert_name(&name).await?;
        tracing::info!(id = %record.id, "name registered");
        Ok(record)
    }

    /// Returns all registered names, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the select fails.
    pub async fn list_names(&self) -> Result<Vec<NameRecord>, AppError> {
        let records = self.store.list_names().await?;
        tracing::debug!(count = records.len(), "names listed");
        Ok(records)
    }
}
