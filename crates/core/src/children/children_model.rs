use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_NAME_LEN;
use crate::errors::{Result, ValidationError};
use crate::utils::sanitize::{sanitize_optional, sanitize_text};

/// Domain model representing a child in a family account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: String,
    /// Account that owns this row. Stamped by the store adapter.
    pub owner: String,
    pub name: String,
    /// Display color tag used by consumers, e.g. "#f59e0b".
    pub color: Option<String>,
    pub age: Option<u8>,
    pub is_sample: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a child.
///
/// Carries no owner field: the authenticated identity is injected by the
/// store adapter and cannot be overridden by the payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChild {
    pub name: String,
    pub color: Option<String>,
    pub age: Option<u8>,
    #[serde(default)]
    pub is_sample: bool,
}

impl NewChild {
    /// Validates the new child data.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_age(self.age)?;
        Ok(())
    }

    /// Returns a copy with all free-text fields sanitized.
    pub fn sanitized(mut self) -> Self {
        self.name = sanitize_text(&self.name);
        self.color = sanitize_optional(self.color);
        self
    }
}

/// Update allow-list for a child.
///
/// Fields outside this struct cannot be written through the update path;
/// unknown payload keys are dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub age: Option<u8>,
}

impl ChildUpdate {
    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        validate_age(self.age)?;
        Ok(())
    }

    /// Returns a copy with all free-text fields sanitized.
    pub fn sanitized(mut self) -> Self {
        self.name = self.name.map(|name| sanitize_text(&name));
        self.color = sanitize_optional(self.color);
        self
    }

    /// True when no recognized field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none() && self.age.is_none()
    }

    /// Applies the set fields onto an existing child row.
    pub fn apply_to(&self, child: &mut Child) {
        if let Some(name) = &self.name {
            child.name = name.clone();
        }
        if let Some(color) = &self.color {
            child.color = Some(color.clone());
        }
        if let Some(age) = self.age {
            child.age = Some(age);
        }
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::OutOfRange(
            "name".to_string(),
            format!("longer than {MAX_NAME_LEN} characters"),
        )
        .into());
    }
    Ok(())
}

fn validate_age(age: Option<u8>) -> Result<()> {
    if let Some(age) = age {
        if age > 99 {
            return Err(
                ValidationError::OutOfRange("age".to_string(), format!("{age} > 99")).into(),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_names() {
        let child = NewChild {
            name: "  ".to_string(),
            color: None,
            age: None,
            is_sample: false,
        };
        assert!(child.validate().is_err());

        let child = NewChild {
            name: "x".repeat(MAX_NAME_LEN + 1),
            color: None,
            age: None,
            is_sample: false,
        };
        assert!(child.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_age() {
        let child = NewChild {
            name: "Emma".to_string(),
            color: None,
            age: Some(100),
            is_sample: false,
        };
        assert!(child.validate().is_err());
    }

    #[test]
    fn sanitizes_markup_from_name() {
        let child = NewChild {
            name: "Emma <script>x</script>".to_string(),
            color: None,
            age: Some(9),
            is_sample: false,
        }
        .sanitized();
        assert_eq!(child.name, "Emma");
        assert!(child.validate().is_ok());
    }

    #[test]
    fn validation_is_idempotent_after_sanitization() {
        let sanitized = NewChild {
            name: " <b>Emma</b> ".to_string(),
            color: Some("#f59e0b".to_string()),
            age: Some(9),
            is_sample: false,
        }
        .sanitized();
        let twice = sanitized.clone().sanitized();
        assert_eq!(sanitized.name, twice.name);
        assert_eq!(sanitized.color, twice.color);
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(ChildUpdate::default().is_empty());
        let update = ChildUpdate {
            age: Some(10),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
