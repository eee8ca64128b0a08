use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of client-side application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
    Unauthorized,
    NetworkError,
    NotFound,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::NetworkError => write!(f, "NetworkError"),
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error surfaced to the user as inline messages
/// or notifications. Everything here is terminal; there is no backend to
/// retry against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NetworkError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// A user-friendly message for inline display.
    ///
    /// Network failures get a generic retry hint since the underlying
    /// transport error is rarely actionable for the reader.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::NetworkError => {
                "Failed to reach the service. Please try again later.".to_string()
            }
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unauthorized_error_has_correct_kind() {
        let err = AppError::unauthorized("Invalid username or password");
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid username or password");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn network_error_friendly_message_is_generic() {
        let err = AppError::network("dns lookup failed");
        assert_eq!(
            err.friendly_message(),
            "Failed to reach the service. Please try again later."
        );
    }

    #[test]
    fn validation_error_keeps_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("password".to_string(), "Passwords do not match".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("password").map(String::as_str),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::not_found("no such page");
        assert_eq!(err.to_string(), "NotFound: no such page");
    }

    #[test]
    fn serde_round_trip_omits_empty_field_errors() {
        let err = AppError::bad_request("bad input");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("field_errors"));
        let back: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
