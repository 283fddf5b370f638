//! Route handlers.
//!
//! Each handler validates its raw path segments first, then performs one
//! registry call, then renders JSON or HTML.

use axum::Json;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use serde_json::json;

use crate::models::User;
use crate::server::AppState;
use crate::server::error::ApiError;
use crate::validation::{self, ValidationError};
use crate::views::ViewContext;

/// `GET /` — render the user list.
pub async fn list_users(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, ApiError> {
    let users = state.registry.list().await;
    let html = state
        .views
        .render_users(&ViewContext::new(uri.path()), &users)?;
    Ok(Html(html))
}

/// `POST /user/{username}/{age}`
pub async fn create_user(
    State(state): State<AppState>,
    segments: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let (username, age) = path_segments(segments, &["username", "age"])?;
    let new_user = validation::validate_new_user(&username, &age)?;
    let user = state.registry.create(new_user.username, new_user.age).await;
    Ok(Json(user))
}

/// `GET /user/{user_id}` — render a single user.
pub async fn get_user(
    State(state): State<AppState>,
    uri: Uri,
    segments: Result<Path<String>, PathRejection>,
) -> Result<Html<String>, ApiError> {
    let user_id = path_segments(segments, &["user_id"])?;
    let id = validation::parse_lookup_id(&user_id)?.ok_or(ApiError::NotFound)?;
    let user = state.registry.get(id).await?;
    let html = state.views.render_user(&ViewContext::new(uri.path()), &user)?;
    Ok(Html(html))
}

/// `PUT /user/{user_id}/{username}/{age}`
pub async fn update_user(
    State(state): State<AppState>,
    segments: Result<Path<(String, String, String)>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let (user_id, username, age) = path_segments(segments, &["user_id", "username", "age"])?;
    let update = validation::validate_user_update(&user_id, &username, &age)?;
    let id = update.id.ok_or(ApiError::NotFound)?;
    let user = state
        .registry
        .update(id, update.username, update.age)
        .await?;
    Ok(Json(user))
}

/// `DELETE /user/{user_id}`
pub async fn delete_user(
    State(state): State<AppState>,
    segments: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let user_id = path_segments(segments, &["user_id"])?;
    let id = validation::parse_user_id(&user_id)?.ok_or(ApiError::NotFound)?;
    let user = state.registry.delete(id).await?;
    Ok(Json(user))
}

/// Unwrap extracted path segments, turning an extractor rejection into a
/// 422 against the field in that position.
///
/// `fields` names the segments in route order, matching the positional
/// parameter names `first`, `second` and `third`.
fn path_segments<T>(
    segments: Result<Path<T>, PathRejection>,
    fields: &[&'static str],
) -> Result<T, ApiError> {
    let rejection = match segments {
        Ok(Path(value)) => return Ok(value),
        Err(rejection) => rejection,
    };

    let field_for = |key: &str| {
        let position = match key {
            "second" => 1,
            "third" => 2,
            _ => 0,
        };
        fields.get(position).or(fields.first()).copied().unwrap_or("path")
    };

    let error = match &rejection {
        PathRejection::FailedToDeserializePathParams(e) => match e.kind() {
            ErrorKind::InvalidUtf8InPathParam { key } => {
                ValidationError::new(field_for(key.as_str()), "value is not valid UTF-8")
            }
            ErrorKind::ParseErrorAtKey { key, .. } => {
                ValidationError::new(field_for(key.as_str()), e.body_text())
            }
            _ => ValidationError::new(field_for(""), e.body_text()),
        },
        _ => ValidationError::new(field_for(""), rejection.body_text()),
    };
    tracing::debug!(field = error.field, %rejection, "path segments rejected");
    Err(error.into())
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
