//! Integration tests using mock view renderers.
//!
//! Verifies what the HTTP layer hands to the rendering seam and how it
//! reacts when rendering fails, without depending on the built-in HTML.

use std::sync::{Arc, Mutex};

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use user_registry::models::User;
use user_registry::registry::{SharedRegistry, UserRegistry};
use user_registry::server::{AppState, router};
use user_registry::views::{ViewContext, ViewError, ViewRenderer};

/// A renderer that records every call and returns a fixed marker.
#[derive(Default)]
struct RecordingRenderer {
    calls: Mutex<Vec<(String, ViewContext, Vec<User>)>>,
}

impl ViewRenderer for RecordingRenderer {
    fn render_users(&self, ctx: &ViewContext, users: &[User]) -> Result<String, ViewError> {
        self.calls
            .lock()
            .unwrap()
            .push(("users".to_string(), ctx.clone(), users.to_vec()));
        Ok("<users/>".to_string())
    }

    fn render_user(&self, ctx: &ViewContext, user: &User) -> Result<String, ViewError> {
        self.calls
            .lock()
            .unwrap()
            .push(("user".to_string(), ctx.clone(), vec![user.clone()]));
        Ok("<user/>".to_string())
    }
}

/// A renderer whose templates are always broken.
struct FailingRenderer;

impl ViewRenderer for FailingRenderer {
    fn render_users(&self, _ctx: &ViewContext, _users: &[User]) -> Result<String, ViewError> {
        Err(ViewError::Render {
            view: "users",
            reason: "template missing".to_string(),
        })
    }

    fn render_user(&self, _ctx: &ViewContext, _user: &User) -> Result<String, ViewError> {
        Err(ViewError::Render {
            view: "user",
            reason: "template missing".to_string(),
        })
    }
}

/// Helper: a registry pre-populated with two users.
fn seeded_registry() -> SharedRegistry {
    let mut registry = UserRegistry::new();
    registry.create("UrbanUser", 24);
    registry.create("UrbanTest", 36);
    SharedRegistry::from_registry(registry)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_passes_all_users_and_path() {
    let renderer = Arc::new(RecordingRenderer::default());
    let app = router(AppState::with_views(seeded_registry(), renderer.clone()));

    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<users/>");

    let calls = renderer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (view, ctx, users) = &calls[0];
    assert_eq!(view, "users");
    assert_eq!(ctx, &ViewContext::new("/"));
    let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["UrbanUser", "UrbanTest"]);
}

#[tokio::test]
async fn user_page_passes_single_user() {
    let renderer = Arc::new(RecordingRenderer::default());
    let app = router(AppState::with_views(seeded_registry(), renderer.clone()));

    let (status, body) = get(app, "/user/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<user/>");

    let calls = renderer.calls.lock().unwrap();
    let (view, ctx, users) = &calls[0];
    assert_eq!(view, "user");
    assert_eq!(ctx.path, "/user/2");
    assert_eq!(users, &vec![User::new(2, "UrbanTest", 36)]);
}

#[tokio::test]
async fn missing_user_never_reaches_renderer() {
    let renderer = Arc::new(RecordingRenderer::default());
    let app = router(AppState::with_views(seeded_registry(), renderer.clone()));

    let (status, _) = get(app, "/user/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(renderer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn render_failure_is_500() {
    let app = router(AppState::with_views(seeded_registry(), Arc::new(FailingRenderer)));

    let (status, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["detail"], "Internal Server Error");

    let (status, _) = get(app, "/user/1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
