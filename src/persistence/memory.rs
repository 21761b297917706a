//! In-process name store.
//!
//! Assigns identity and timestamps the way the `names` table does, so the
//! registry behaves the same with or without a database. Contents vanish
//! with the process.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::NameStore;
use crate::domain::{NameId, NameRecord, NewName};
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    records: Vec<NameRecord>,
}

/// Name store backed by a `Vec` behind a [`tokio::sync::RwLock`].
#[derive(Debug, Default)]
pub struct InMemoryNameStore {
    inner: RwLock<Inner>,
}

impl InMemoryNameStore {
    /// Creates an empty store. The first insert receives id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Returns `true` if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

#[async_trait]
impl NameStore for InMemoryNameStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn insert_name(&self, name: &NewName) -> Result<NameRecord, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Store("name id sequence exhausted".to_string()))?;

        let record = NameRecord {
            id: NameId::new(inner.last_id),
            first_name: name.first_name().to_string(),
            last_name: name.last_name().to_string(),
            // Wall clock, like the table's `now()`: a backward clock step can
            // list a newer id below an older one, and that is accepted here.
            created_at: Utc::now(),
        };
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn list_names(&self) -> Result<Vec<NameRecord>, AppError> {
        let mut records = self.inner.read().await.records.clone();
        records.sort_by(NameRecord::cmp_recent_first);
        Ok(records)
    }
}
