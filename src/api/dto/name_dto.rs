//! Name registry request and response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::NameRecord;

/// Message sent back with every successful registration.
pub const NAME_ADDED: &str = "Name added successfully";

/// Request body for `POST /api/names`.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddNameRequest {
    /// First name; must be non-blank.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name; must be non-blank.
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Response body for `POST /api/names` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct AddNameResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored record.
    pub name: NameRecord,
}

impl AddNameResponse {
    /// Wraps a freshly stored record with the confirmation message.
    #[must_use]
    pub fn created(name: NameRecord) -> Self {
        Self {
            message: NAME_ADDED.to_string(),
            name,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_decode_as_none() {
        let Ok(req) = serde_json::from_str::<AddNameRequest>(r#"{"firstName":"Ada"}"#) else {
            panic!("should decode");
        };
        assert_eq!(req.first_name.as_deref(), Some("Ada"));
        assert!(req.last_name.is_none());
    }

    #[test]
    fn wrong_field_type_fails_to_decode() {
        let result = serde_json::from_str::<AddNameRequest>(r#"{"firstName":1,"lastName":"x"}"#);
        assert!(result.is_err());
    }
}
