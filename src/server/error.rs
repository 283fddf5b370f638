//! HTTP error mapping.
//!
//! Every handler failure funnels through [`ApiError`], which picks the
//! status code and renders a JSON `{"detail": ...}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::registry::RegistryError;
use crate::validation::{ValidationError, ValidationErrors};
use crate::views::ViewError;

/// Message returned with every 404 for a missing user.
pub const USER_NOT_FOUND: &str = "User was not found";

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path parameters failed boundary validation (422).
    #[error("invalid path parameters: {0}")]
    Validation(#[from] ValidationErrors),

    /// No user with the requested id (404).
    #[error("user not found")]
    NotFound,

    /// A view could not be rendered (500).
    #[error(transparent)]
    Render(#[from] ViewError),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Validation(error.into())
    }
}

impl From<RegistryError> for ApiError {
    fn from(error: RegistryError) -> Self {
        match error {
            RegistryError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let detail: Vec<_> = errors
                    .errors()
                    .iter()
                    .map(|e| {
                        json!({
                            "loc": ["path", e.field],
                            "msg": e.constraint,
                        })
                    })
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": detail })),
                )
                    .into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": USER_NOT_FOUND }))).into_response()
            }
            ApiError::Render(e) => {
                tracing::error!(error = %e, "view rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
