//! Response envelope and request plumbing shared by every resource.
//!
//! Success and error bodies follow one shape: `{"status": "success", ...}`
//! or `{"status": "error", "message": ...}`. Mutations carry a
//! `"<Display Name> <verb>d successfully."` message built from the model
//! name.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use validator::Validate;

use crate::errors::ServiceError;
use crate::services::is_foreign_key_violation;

pub fn default_true() -> bool {
    true
}

/// Spaces out an UpperCamelCase model name for user-facing messages:
/// `PODetail` becomes `P O Detail`, `PurchaseOrder` becomes
/// `Purchase Order`.
pub fn display_name(model: &str) -> String {
    let mut out = String::with_capacity(model.len() + 4);
    for (i, ch) in model.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub fn created<T: Serialize>(model: &str, data: T) -> Response {
    let body = json!({
        "status": "success",
        "data": data,
        "message": format!("{} created successfully.", display_name(model)),
    });
    (StatusCode::CREATED, Json(body)).into_response()
}

pub fn updated<T: Serialize>(model: &str, data: T) -> Response {
    let body = json!({
        "status": "success",
        "data": data,
        "message": format!("{} updated successfully.", display_name(model)),
    });
    (StatusCode::OK, Json(body)).into_response()
}

pub fn fetched<T: Serialize>(data: T) -> Response {
    let body = json!({
        "status": "success",
        "data": data,
    });
    (StatusCode::OK, Json(body)).into_response()
}

pub fn deleted() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Runs payload validation, turning failures into the per-field error
/// envelope (`Failed to create customer.` plus an `errors` map).
pub fn validate_payload<T: Validate>(
    payload: &T,
    action: &'static str,
    model: &str,
) -> Result<(), ServiceError> {
    payload
        .validate()
        .map_err(|errors| ServiceError::ValidationFailed {
            action,
            model: display_name(model).to_lowercase(),
            errors,
        })
}

/// Converts a foreign-key-violation on delete into the protected-delete
/// envelope; other errors pass through.
pub fn protect_delete(err: ServiceError, model: &str) -> ServiceError {
    match &err {
        ServiceError::DatabaseError(db_err) if is_foreign_key_violation(db_err) => {
            ServiceError::Protected(display_name(model).to_lowercase())
        }
        _ => err,
    }
}

/// JSON extractor whose rejection uses the error envelope instead of
/// axum's plain-text default.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(map_json_rejection(rejection)),
        }
    }
}

fn map_json_rejection(rejection: JsonRejection) -> ServiceError {
    ServiceError::ValidationError(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_spaces_camel_case() {
        assert_eq!(display_name("Customer"), "Customer");
        assert_eq!(display_name("PurchaseOrder"), "Purchase Order");
        assert_eq!(display_name("PODetail"), "P O Detail");
        assert_eq!(display_name("TouchDetail"), "Touch Detail");
    }
}
