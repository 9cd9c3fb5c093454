use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::error::DbErr;
use serde_json::json;

/// Error type shared by the service layer and surfaced by the HTTP
/// handlers in the uniform response envelope.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("{0} not found.")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Per-field validation failures for a create or update. `action` is
    /// the verb ("create" or "update"), `model` the lowercased display
    /// name; the field errors are serialized into the response body.
    #[error("Failed to {action} {model}.")]
    ValidationFailed {
        action: &'static str,
        model: String,
        errors: validator::ValidationErrors,
    },

    /// An explicitly checked precondition failed before normal validation
    /// ran (e.g. creating a detail for a missing purchase order). The
    /// message is returned to the caller verbatim.
    #[error("{0}")]
    PreconditionFailed(String),

    /// Delete rejected because other records still reference this one.
    /// Carries the lowercased display name.
    #[error("Failed to delete {0}.")]
    Protected(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::ValidationError(err.to_string())
    }
}

impl ServiceError {
    /// Single source of truth for error-to-status mapping.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_)
            | Self::ValidationFailed { .. }
            | Self::PreconditionFailed(_)
            | Self::Protected(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::DatabaseError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message suitable for HTTP responses. Internal errors are collapsed
    /// to a generic message so implementation details do not leak.
    pub fn response_message(&self) -> String {
        match self {
            Self::DatabaseError(_) | Self::InternalError(_) => {
                "Internal server error.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            Self::ValidationFailed { errors, .. } => json!({
                "status": "error",
                "errors": errors,
                "message": self.response_message(),
            }),
            _ => json!({
                "status": "error",
                "message": self.response_message(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
