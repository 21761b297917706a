//! Registered name records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::NameId;

/// A single registered name as exposed over the API.
///
/// Records are immutable once created: there is no update or delete
/// path. Field names are camelCase on the wire; the store's snake_case
/// columns are translated in [`crate::persistence::models`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// Store-assigned identifier.
    #[schema(value_type = i64)]
    pub id: NameId,
    /// First name exactly as submitted.
    pub first_name: String,
    /// Last name exactly as submitted.
    pub last_name: String,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NameRecord {
    /// Compares two records by listing order: most recent first, newer id
    /// first when timestamps tie.
    #[must_use]
    pub fn cmp_recent_first(&self, other: &Self) -> std::cmp::Ordering {
        other
            .created_at
            .cmp(&self.created_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(id: i64, secs: i64) -> NameRecord {
        NameRecord {
            id: NameId::new(id),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            created_at: Utc.timestamp_opt(secs, 0).single().unwrap_or_default(),
        }
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(record(1, 0)).unwrap_or_default();
        assert!(json.get("firstName").is_some());
        assert!(json.get("lastName").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn newer_timestamp_sorts_first() {
        let mut records = vec![record(1, 10), record(2, 20)];
        records.sort_by(NameRecord::cmp_recent_first);
        let ids: Vec<i64> = records.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn timestamp_tie_breaks_on_id() {
        let mut records = vec![record(3, 10), record(5, 10), record(4, 10)];
        records.sort_by(NameRecord::cmp_recent_first);
        let ids: Vec<i64> = records.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![5, 4, 3]);
    }
}
