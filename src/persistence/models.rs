//! Database row model for the `names` table.

use chrono::{DateTime, Utc};

use crate::domain::{NameId, NameRecord};

/// A row of the `names` table, in store-side snake_case.
#[derive(Debug, Clone)]
pub struct NameRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// `first_name` column.
    pub first_name: String,
    /// `last_name` column.
    pub last_name: String,
    /// `created_at` column, defaulted by the database.
    pub created_at: DateTime<Utc>,
}

impl From<(i64, String, String, DateTime<Utc>)> for NameRow {
    fn from((id, first_name, last_name, created_at): (i64, String, String, DateTime<Utc>)) -> Self {
        Self {
            id,
            first_name,
            last_name,
            created_at,
        }
    }
}

impl From<NameRow> for NameRecord {
    fn from(row: NameRow) -> Self {
        Self {
            id: NameId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_translates_to_record() {
        let now = Utc::now();
        let row = NameRow::from((3, "Grace".to_string(), "Hopper".to_string(), now));
        let record = NameRecord::from(row);
        assert_eq!(record.id, NameId::new(3));
        assert_eq!(record.first_name, "Grace");
        assert_eq!(record.last_name, "Hopper");
        assert_eq!(record.created_at, now);
    }
}
