//! HTTP surface of the registry.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/` | user list (HTML) |
//! | POST | `/user/{username}/{age}` | created user (JSON) |
//! | GET | `/user/{user_id}` | single user (HTML) |
//! | PUT | `/user/{user_id}/{username}/{age}` | updated user (JSON) |
//! | DELETE | `/user/{user_id}` | deleted user (JSON) |

pub mod error;
pub mod handlers;
pub mod request_log;
pub mod shutdown;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post, put};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::registry::SharedRegistry;
use crate::views::{HtmlRenderer, ViewRenderer};

pub use error::ApiError;

// The router rejects routes that name the same segment position
// differently, so segments are named by position and the handlers
// destructure them into user_id / username / age.
const ROUTE_ONE: &str = "/user/{first}";
const ROUTE_TWO: &str = "/user/{first}/{second}";
const ROUTE_THREE: &str = "/user/{first}/{second}/{third}";

/// Errors starting or running the server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
    pub views: Arc<dyn ViewRenderer>,
}

impl AppState {
    /// State with the built-in HTML renderer.
    pub fn new(registry: SharedRegistry) -> Self {
        Self::with_views(registry, Arc::new(HtmlRenderer))
    }

    pub fn with_views(registry: SharedRegistry, views: Arc<dyn ViewRenderer>) -> Self {
        Self { registry, views }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_users))
        .route(ROUTE_ONE, get(handlers::get_user).delete(handlers::delete_user))
        .route(ROUTE_TWO, post(handlers::create_user))
        .route(ROUTE_THREE, put(handlers::update_user))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(request_log::log_requests))
        .with_state(state)
}

/// Bind `addr` and serve until a shutdown signal arrives.
pub async fn serve(addr: SocketAddr, registry: SharedRegistry) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local_addr = listener.local_addr()?;

    tracing::info!(addr = %local_addr, "listening");

    axum::serve(listener, router(AppState::new(registry.clone())))
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!(users = registry.len().await, "server stopped");
    Ok(())
}
