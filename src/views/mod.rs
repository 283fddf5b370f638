//! HTML views: the user list and the single-user page.
//!
//! Handlers hand registry data plus a [`ViewContext`] to a [`ViewRenderer`]
//! and send back whatever HTML it produces. [`html::HtmlRenderer`] is the
//! built-in implementation.

pub mod html;

use thiserror::Error;

use crate::models::User;

pub use html::HtmlRenderer;

/// Errors from a view renderer.
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("failed to render {view}: {reason}")]
    Render { view: &'static str, reason: String },
}

/// Per-request data made available to every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    /// Request path, e.g. `/` or `/user/3`.
    pub path: String,
}

impl ViewContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Trait for rendering registry state to HTML.
pub trait ViewRenderer: Send + Sync {
    /// Render the list of all users.
    fn render_users(&self, ctx: &ViewContext, users: &[User]) -> Result<String, ViewError>;

    /// Render a single user.
    fn render_user(&self, ctx: &ViewContext, user: &User) -> Result<String, ViewError>;
}
