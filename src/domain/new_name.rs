//! Validated input for registering a name.

use crate::error::AppError;

/// Message returned when either name field is missing or blank.
pub const NAME_REQUIRED: &str = "First and last name required";

/// Message returned when a name contains a NUL character, which `TEXT`
/// columns cannot hold.
pub const NAME_HAS_NUL: &str = "Names must not contain NUL characters";

/// A name that has passed validation and may be handed to the store.
///
/// The only constructor is [`NewName::parse`], so holding a `NewName`
/// proves both fields are present and non-blank. Values are kept exactly
/// as submitted; whitespace is only inspected, never trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewName {
    first_name: String,
    last_name: String,
}

impl NewName {
    /// Validates raw request fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is absent, empty,
    /// whitespace only, or contains a NUL character.
    pub fn parse(first_name: Option<String>, last_name: Option<String>) -> Result<Self, AppError> {
        let (Some(first_name), Some(last_name)) = (non_blank(first_name), non_blank(last_name))
        else {
            return Err(AppError::Validation(NAME_REQUIRED.to_string()));
        };
        if first_name.contains('\0') || last_name.contains('\0') {
            return Err(AppError::Validation(NAME_HAS_NUL.to_string()));
        }
        Ok(Self {
            first_name,
            last_name,
        })
    }

    /// First name as submitted.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name as submitted.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_fields() {
        let parsed = NewName::parse(Some("Ada".into()), Some("Lovelace".into()));
        let Ok(name) = parsed else {
            panic!("expected valid name");
        };
        assert_eq!(name.first_name(), "Ada");
        assert_eq!(name.last_name(), "Lovelace");
    }

    #[test]
    fn keeps_input_verbatim() {
        let parsed = NewName::parse(Some(" Grace ".into()), Some("Hopper".into()));
        let Ok(name) = parsed else {
            panic!("expected valid name");
        };
        assert_eq!(name.first_name(), " Grace ");
    }

    #[test]
    fn rejects_empty_first_name() {
        let result = NewName::parse(Some(String::new()), Some("Hopper".into()));
        assert!(matches!(result, Err(AppError::Validation(ref m)) if m == NAME_REQUIRED));
    }

    #[test]
    fn rejects_missing_last_name() {
        let result = NewName::parse(Some("Grace".into()), None);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_whitespace_only() {
        let result = NewName::parse(Some("   ".into()), Some("\t".into()));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_nul_character() {
        let result = NewName::parse(Some("A\u{0}".into()), Some("B".into()));
        assert!(matches!(result, Err(AppError::Validation(ref m)) if m == NAME_HAS_NUL));

        let result = NewName::parse(Some("Ada".into()), Some("\0".into()));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
