//! Error handling module for the taskboard backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const CONFLICT: &str = "CONFLICT";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const INVITE_NOT_FOUND: &str = "INVITE_NOT_FOUND";
    pub const INVITE_INACTIVE: &str = "INVITE_INACTIVE";
    pub const INVITE_EXPIRED: &str = "INVITE_EXPIRED";
    pub const INVITE_EXHAUSTED: &str = "INVITE_EXHAUSTED";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

/// Why an invite token cannot be redeemed.
///
/// Each kind is independently user-visible so the frontend can render a
/// distinct message per rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteRejection {
    /// No link exists for the presented token
    NotFound,
    /// The link was manually deactivated
    Inactive,
    /// The link's expiry timestamp has passed
    Expired,
    /// The link's use budget is spent
    Exhausted,
}

impl InviteRejection {
    pub fn code(&self) -> &'static str {
        match self {
            InviteRejection::NotFound => codes::INVITE_NOT_FOUND,
            InviteRejection::Inactive => codes::INVITE_INACTIVE,
            InviteRejection::Expired => codes::INVITE_EXPIRED,
            InviteRejection::Exhausted => codes::INVITE_EXHAUSTED,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            InviteRejection::NotFound => "Invite link not found",
            InviteRejection::Inactive => "Invite link has been deactivated",
            InviteRejection::Expired => "Invite link has expired",
            InviteRejection::Exhausted => "Invite link has reached its maximum number of uses",
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Authentication required
    Unauthorized(String),
    /// Resource not found
    NotFound(String),
    /// Validation error
    Validation(String),
    /// Conflicting state, e.g. a membership that already exists
    Conflict(String),
    /// Actor is not allowed to perform the operation
    PermissionDenied(String),
    /// Invite token cannot be redeemed
    InvalidInvite(InviteRejection),
    /// Database error
    Database(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AppError::InvalidInvite(InviteRejection::NotFound) => StatusCode::NOT_FOUND,
            AppError::InvalidInvite(_) => StatusCode::GONE,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => codes::UNAUTHORIZED,
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Conflict(_) => codes::CONFLICT,
            AppError::PermissionDenied(_) => codes::PERMISSION_DENIED,
            AppError::InvalidInvite(rejection) => rejection.code(),
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::Unauthorized(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::PermissionDenied(msg) => msg.clone(),
            AppError::InvalidInvite(rejection) => rejection.message().to_string(),
            AppError::Database(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<InviteRejection> for AppError {
    fn from(rejection: InviteRejection) -> Self {
        AppError::InvalidInvite(rejection)
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message(),
                details: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_rejections_map_to_distinct_codes() {
        let kinds = [
            InviteRejection::NotFound,
            InviteRejection::Inactive,
            InviteRejection::Expired,
            InviteRejection::Exhausted,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn unknown_token_is_not_found_others_are_gone() {
        assert_eq!(
            AppError::InvalidInvite(InviteRejection::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidInvite(InviteRejection::Expired).status_code(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::InvalidInvite(InviteRejection::Exhausted).status_code(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::InvalidInvite(InviteRejection::Inactive).status_code(),
            StatusCode::GONE
        );
    }
}
