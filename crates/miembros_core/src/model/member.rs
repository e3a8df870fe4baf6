//! Member record, create input and partial-update patch.
//!
//! # Responsibility
//! - Define the wire shape shared by the HTTP surface (`nombre`, `apellido`,
//!   `email`, `activo`).
//! - Validate and merge partial updates.
//!
//! # Invariants
//! - `id` is assigned by storage exactly once and never taken from input.
//! - Text fields only overwrite stored values when present and non-empty.
//! - `active` is always overwritten by a patch, including its implicit `false`.

use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned row identifier.
pub type MemberId = i64;

/// One person tracked by the system, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "activo")]
    pub active: bool,
}

/// Create input. Any `id` supplied by the caller is ignored on decode.
///
/// No validation is applied: empty strings and missing fields are stored
/// as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewMember {
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "activo", deserialize_with = "null_as_false")]
    pub active: bool,
}

impl NewMember {
    /// Attaches the storage-assigned id.
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            active: self.active,
        }
    }
}

/// Partial update input.
///
/// Text fields distinguish absent (`None`) from present. `active` cannot
/// express absence: a body without `activo` decodes to `false` and still
/// overwrites the stored flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberPatch {
    #[serde(rename = "nombre")]
    pub first_name: Option<String>,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "activo", deserialize_with = "null_as_false")]
    pub active: bool,
}

/// Patch validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberValidationError {
    /// `first_name`, `last_name` and `email` are all absent or empty.
    NoUpdatableField,
}

impl Display for MemberValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoUpdatableField => {
                write!(f, "at least one valid field must be provided to update")
            }
        }
    }
}

impl Error for MemberValidationError {}

impl MemberPatch {
    /// Checks that at least one text field carries a non-empty value.
    ///
    /// `active` never satisfies this check on its own.
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        let has_text_field = [&self.first_name, &self.last_name, &self.email]
            .into_iter()
            .any(|value| provided(value).is_some());

        if has_text_field {
            Ok(())
        } else {
            Err(MemberValidationError::NoUpdatableField)
        }
    }

    /// Merges this patch into `member` in place.
    ///
    /// # Contract
    /// - Present, non-empty text fields overwrite; others are left untouched.
    /// - `active` is copied unconditionally.
    /// - `id` is never modified.
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(value) = provided(&self.first_name) {
            member.first_name = Some(value.to_string());
        }
        if let Some(value) = provided(&self.last_name) {
            member.last_name = Some(value.to_string());
        }
        if let Some(value) = provided(&self.email) {
            member.email = Some(value.to_string());
        }
        member.active = self.active;
    }
}

// Only the exact empty string counts as missing; whitespace is kept.
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::{Member, MemberPatch, MemberValidationError};

    fn stored() -> Member {
        Member {
            id: 7,
            first_name: Some("Ana".to_string()),
            last_name: Some("Ruiz".to_string()),
            email: Some("a@x.com".to_string()),
            active: true,
        }
    }

    #[test]
    fn validate_rejects_patch_with_only_active() {
        let patch = MemberPatch {
            first_name: Some(String::new()),
            last_name: Some(String::new()),
            email: Some(String::new()),
            active: true,
        };
        assert_eq!(
            patch.validate(),
            Err(MemberValidationError::NoUpdatableField)
        );
        assert_eq!(
            MemberPatch::default().validate(),
            Err(MemberValidationError::NoUpdatableField)
        );
    }

    #[test]
    fn validate_accepts_whitespace_value() {
        let patch = MemberPatch {
            last_name: Some(" ".to_string()),
            ..MemberPatch::default()
        };
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn apply_to_keeps_missing_fields_and_overwrites_active() {
        let mut member = stored();
        let patch = MemberPatch {
            first_name: Some("Ana2".to_string()),
            email: Some(String::new()),
            ..MemberPatch::default()
        };

        patch.apply_to(&mut member);

        assert_eq!(member.id, 7);
        assert_eq!(member.first_name.as_deref(), Some("Ana2"));
        assert_eq!(member.last_name.as_deref(), Some("Ruiz"));
        assert_eq!(member.email.as_deref(), Some("a@x.com"));
        assert!(!member.active);
    }

    #[test]
    fn patch_decodes_missing_and_null_active_as_false() {
        let missing: MemberPatch = serde_json::from_str(r#"{"nombre":"X"}"#).unwrap();
        assert!(!missing.active);
        assert_eq!(missing.last_name, None);

        let null: MemberPatch = serde_json::from_str(r#"{"nombre":"X","activo":null}"#).unwrap();
        assert!(!null.active);
    }
}
