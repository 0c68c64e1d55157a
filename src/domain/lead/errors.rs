//! Lead-specific error types.

use crate::domain::foundation::{ChatSessionId, DomainError, ErrorCode, LeadId, ValidationError};

/// Builds the store error for a lead id that has no row.
pub fn lead_not_found(id: LeadId) -> DomainError {
    DomainError::new(ErrorCode::LeadNotFound, format!("Lead not found: {}", id))
        .with_detail("lead_id", id.to_string())
}

/// Errors returned by the lead and chat-session handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    /// Lead was not found.
    NotFound(LeadId),
    /// Browser chat session was not found.
    ChatSessionNotFound(ChatSessionId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
    /// Unexpected failure outside the lead store.
    Internal(String),
}

impl LeadError {
    pub fn not_found(id: LeadId) -> Self {
        LeadError::NotFound(id)
    }
    pub fn chat_session_not_found(id: ChatSessionId) -> Self {
        LeadError::ChatSessionNotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        LeadError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        LeadError::Infrastructure(message.into())
    }
    pub fn internal(message: impl Into<String>) -> Self {
        LeadError::Internal(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            LeadError::NotFound(_) => ErrorCode::LeadNotFound,
            LeadError::ChatSessionNotFound(_) => ErrorCode::ChatSessionNotFound,
            LeadError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            LeadError::Infrastructure(_) => ErrorCode::DatabaseError,
            LeadError::Internal(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            LeadError::NotFound(id) => format!("Lead not found: {}", id),
            LeadError::ChatSessionNotFound(id) => format!("Chat session not found: {}", id),
            LeadError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            LeadError::Infrastructure(msg) => format!("Error: {}", msg),
            LeadError::Internal(msg) => format!("Internal error: {}", msg),
        }
    }
}

impl std::fmt::Display for LeadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LeadError {}

impl From<ValidationError> for LeadError {
    fn from(err: ValidationError) -> Self {
        LeadError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for LeadError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::LeadNotFound => match err.details.get("lead_id").and_then(|s| s.parse().ok()) {
                Some(id) => LeadError::NotFound(id),
                None => LeadError::Infrastructure(err.to_string()),
            },
            ErrorCode::ValidationFailed => LeadError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.to_string(),
            },
            _ => LeadError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_lead_not_found() {
        let err: LeadError = lead_not_found(LeadId::new(42)).into();
        assert_eq!(err, LeadError::NotFound(LeadId::new(42)));
        assert_eq!(err.code(), ErrorCode::LeadNotFound);
    }

    #[test]
    fn database_error_maps_to_infrastructure() {
        let err: LeadError = DomainError::database("locked").into();
        assert!(matches!(err, LeadError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn validation_error_keeps_field_name() {
        let err: LeadError = ValidationError::empty_field("email").into();
        match err {
            LeadError::ValidationFailed { field, .. } => assert_eq!(field, "email"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn message_formats() {
        assert_eq!(LeadError::not_found(LeadId::new(3)).message(), "Lead not found: 3");
        assert_eq!(
            LeadError::validation("utterance", "cannot be blank").to_string(),
            "Validation failed for 'utterance': cannot be blank"
        );
    }
}
