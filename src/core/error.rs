//! Typed error handling for the student admin client
//!
//! Every failure the client can surface falls in one of three user-facing
//! categories, plus a few state and infrastructure errors:
//!
//! - [`ValidationError`]: a required field is missing or invalid, caught before
//!   any remote call
//! - [`AdminError::InvalidCredentials`]: the login predicate failed
//! - [`RemoteError`]: network failure or non-success status from the record store
//!
//! None of them is fatal. Callers report them through a notification and keep
//! the last stable state.
//!
//! # Example
//!
//! ```rust,ignore
//! match manager.create(draft).await {
//!     Ok(record) => println!("created {}", record.id),
//!     Err(AdminError::Validation(e)) => show_field_errors(e.field_errors()),
//!     Err(AdminError::Remote(e)) => eprintln!("store unavailable: {}", e),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use crate::core::student::StudentId;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = AdminError> = std::result::Result<T, E>;

/// The main error type of the crate
#[derive(Debug, Clone, Error)]
pub enum AdminError {
    /// Missing or invalid input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Username/password pair rejected by the session gate
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// The remote record store failed or could not be reached
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// A form is already open; only one record can be edited at a time
    #[error("Another student form is already open")]
    FormBusy,

    /// A form operation was issued while no form is being edited
    #[error("No student form is open")]
    NoActiveForm,

    /// The record is not part of the authoritative list
    #[error("Student '{id}' is not in the current list")]
    UnknownRecord { id: StudentId },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl AdminError {
    /// HTTP status code used when this error crosses the server boundary
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::Validation(_) => StatusCode::BAD_REQUEST,
            AdminError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AdminError::Remote(e) => e.status_code(),
            AdminError::FormBusy | AdminError::NoActiveForm => StatusCode::CONFLICT,
            AdminError::UnknownRecord { .. } => StatusCode::NOT_FOUND,
            AdminError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Validation(_) => "VALIDATION_ERROR",
            AdminError::InvalidCredentials => "INVALID_CREDENTIALS",
            AdminError::Remote(e) => e.error_code(),
            AdminError::FormBusy => "FORM_BUSY",
            AdminError::NoActiveForm => "NO_ACTIVE_FORM",
            AdminError::UnknownRecord { .. } => "UNKNOWN_RECORD",
            AdminError::Config { .. } => "CONFIG_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AdminError::Validation(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, AdminError::Remote(_))
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AdminError::Validation(e) => Some(serde_json::json!({ "fields": e.field_errors() })),
            AdminError::Remote(RemoteError::NotFound { id }) => {
                Some(serde_json::json!({ "id": id }))
            }
            AdminError::UnknownRecord { id } => Some(serde_json::json!({ "id": id })),
            _ => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field validation error
///
/// This is the only validation-result shape in the crate: login, create,
/// update and server-side body checks all report through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more fields failed validation
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// The request body was not valid JSON for the expected shape
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

impl ValidationError {
    /// Field-level errors, empty for non-field failures
    pub fn field_errors(&self) -> &[FieldValidationError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
            ValidationError::InvalidJson { .. } => &[],
        }
    }

    /// Message attached to a given field, if that field failed
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Remote Errors
// =============================================================================

/// Failures of the remote record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The store could not be reached (connect, IO, timeout)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The store answered with a non-success status
    #[error("Record store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The record does not exist in the store
    #[error("Student with id '{id}' not found")]
    NotFound { id: StudentId },

    /// The response body could not be decoded
    #[error("Failed to decode record store response: {message}")]
    Decode { message: String },

    /// The store itself failed internally
    #[error("Record store failure: {message}")]
    Storage { message: String },
}

impl RemoteError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RemoteError::Network { .. } => StatusCode::BAD_GATEWAY,
            RemoteError::Status { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RemoteError::NotFound { .. } => StatusCode::NOT_FOUND,
            RemoteError::Decode { .. } => StatusCode::BAD_GATEWAY,
            RemoteError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RemoteError::Network { .. } => "REMOTE_NETWORK_ERROR",
            RemoteError::Status { .. } => "REMOTE_STATUS_ERROR",
            RemoteError::NotFound { .. } => "STUDENT_NOT_FOUND",
            RemoteError::Decode { .. } => "REMOTE_DECODE_ERROR",
            RemoteError::Storage { .. } => "STORAGE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = AdminError::from(ValidationError::FieldErrors(vec![
            FieldValidationError::new("firstname", "First name is required"),
        ]));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AdminError::from(RemoteError::NotFound {
            id: StudentId::from("7"),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "STUDENT_NOT_FOUND");
        assert!(err.is_remote());
    }

    #[test]
    fn test_remote_status_passthrough() {
        let err = RemoteError::Status {
            status: 503,
            message: "down".into(),
        };
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_field_errors_display_and_lookup() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError::new("lastname", "Last name is required"),
            FieldValidationError::new("group", "Group is required"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation errors: lastname: Last name is required, group: Group is required"
        );
        assert_eq!(err.message_for("group"), Some("Group is required"));
        assert_eq!(err.message_for("firstname"), None);
    }

    #[test]
    fn test_response_details_list_fields() {
        let err = AdminError::from(ValidationError::FieldErrors(vec![
            FieldValidationError::new("group", "Group is required"),
        ]));
        let body = err.to_response();
        assert_eq!(body.code, "VALIDATION_ERROR");
        let details = body.details.unwrap();
        assert_eq!(details["fields"][0]["field"], "group");
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AdminError::InvalidCredentials.to_string(),
            "Invalid username or password."
        );
        assert_eq!(
            AdminError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }
}
