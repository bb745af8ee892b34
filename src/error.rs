use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::repository::StoreError;

/// FieldError
///
/// A single field-level validation violation, reported back to the client as
/// part of the `errors` array in a 400 response. The `field` uses the dotted
/// wire path (e.g. `applicantDetails.email`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// ApiError
///
/// The full failure taxonomy of the service. Every variant maps to exactly one
/// HTTP status code and renders as the standard `{success: false, message, ...}`
/// envelope. Authentication and authorization failures are produced by the
/// `AuthUser` extractor and `Claims::require_role`; validation failures by the
/// field validator; the rest at the handler/repository boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer credential was supplied at all.
    #[error("Access denied: no token provided")]
    Unauthenticated,

    /// A credential was supplied but failed signature or expiry checks.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The authenticated role is not in the route's accepted set.
    #[error("Access forbidden: role '{role}' is not authorized")]
    Forbidden { role: String },

    /// One or more of the required submission fields were absent.
    #[error("Missing required fields")]
    MissingFields { fields: Vec<String> },

    /// The submission was present but violated field rules; carries the full
    /// ordered violation list (no short-circuiting).
    #[error("Validation failed")]
    ValidationFailed { errors: Vec<FieldError> },

    /// A status string outside the loan status enum was submitted.
    #[error("Invalid status value '{given}'")]
    InvalidStatus { given: String },

    /// A malformed or incomplete request body/parameter.
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0} not found")]
    NotFound(String),

    /// Insert collided with an existing loan identifier.
    #[error("Duplicate loan application: a loan with this ID already exists")]
    DuplicateApplication,

    /// Unclassified store failure; surfaces as a generic 500.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated | ApiError::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::MissingFields { .. }
            | ApiError::ValidationFailed { .. }
            | ApiError::InvalidStatus { .. }
            | ApiError::DuplicateApplication
            | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        } else {
            tracing::debug!(error = %message, "request rejected");
        }

        // Every failure shares the `success: false` envelope; the structured
        // variants attach their detail arrays alongside `message`.
        let body = match self {
            ApiError::MissingFields { fields } => json!({
                "success": false,
                "message": message,
                "missingFields": fields,
            }),
            ApiError::ValidationFailed { errors } => json!({
                "success": false,
                "message": message,
                "errors": errors,
            }),
            _ => json!({
                "success": false,
                "message": message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => ApiError::DuplicateApplication,
            other => ApiError::Persistence(other.to_string()),
        }
    }
}

/// Result type alias used by all handlers.
pub type ApiResult<T> = Result<T, ApiError>;
