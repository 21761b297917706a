//! Type-safe name record identifier.
//!
//! [`NameId`] is a newtype wrapper around the store-assigned `BIGSERIAL`
//! key so that record identifiers cannot be confused with other integers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a registered name.
///
/// Generated once by the store at insert time and immutable thereafter.
/// Values are unique and increase with insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameId(i64);

impl NameId {
    /// Wraps a raw store key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw store key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NameId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<NameId> for i64 {
    fn from(id: NameId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&NameId::new(42)).unwrap_or_default();
        assert_eq!(json, "42");
    }

    #[test]
    fn display_is_raw_number() {
        assert_eq!(format!("{}", NameId::new(7)), "7");
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(NameId::new(1) < NameId::new(2));
        assert_eq!(i64::from(NameId::from(9)), 9);
    }
}
