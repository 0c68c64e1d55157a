//! Visitor registration details captured once per lead.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Maximum length for the visitor's name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length for a mobile number.
pub const MAX_MOBILE_LENGTH: usize = 32;

/// Name, email and mobile of the visitor.
///
/// # Invariants
///
/// - All three fields are trimmed and non-empty.
/// - Immutable once the lead is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    name: String,
    email: String,
    mobile: String,
}

impl Registration {
    /// Validates and trims the three registration fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if any field is blank
    /// - `TooLong` if a field exceeds its maximum length
    pub fn new(name: &str, email: &str, mobile: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Self::validate("name", name, MAX_NAME_LENGTH)?,
            email: Self::validate("email", email, MAX_EMAIL_LENGTH)?,
            mobile: Self::validate("mobile", mobile, MAX_MOBILE_LENGTH)?,
        })
    }

    /// Reconstitutes registration details from persistence (no validation).
    pub fn reconstitute(name: String, email: String, mobile: String) -> Self {
        Self { name, email, mobile }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    fn validate(field: &str, value: &str, max: usize) -> Result<String, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let len = trimmed.chars().count();
        if len > max {
            return Err(ValidationError::too_long(field, max, len));
        }
        Ok(trimmed.to_string())
    }
}
