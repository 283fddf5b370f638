//! Built-in HTML renderer.
//!
//! Produces small self-contained pages. Every user-supplied string goes
//! through [`escape`] before it reaches the markup.

use crate::constants::APP_NAME;
use crate::models::User;
use crate::views::{ViewContext, ViewError, ViewRenderer};

/// Renders the two registry views as plain HTML5.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn render_users(&self, ctx: &ViewContext, users: &[User]) -> Result<String, ViewError> {
        let mut body = String::from("<h1>Users</h1>\n");

        if users.is_empty() {
            body.push_str("<p class=\"empty\">No users yet.</p>\n");
        } else {
            body.push_str("<ul class=\"users\">\n");
            for user in users {
                body.push_str(&format!(
                    "  <li><a href=\"/user/{id}\">Name: {name} | Age: {age}</a></li>\n",
                    id = user.id,
                    name = escape(&user.username),
                    age = user.age,
                ));
            }
            body.push_str("</ul>\n");
        }

        Ok(page("Users", ctx, &body))
    }

    fn render_user(&self, ctx: &ViewContext, user: &User) -> Result<String, ViewError> {
        let name = escape(&user.username);
        let body = format!(
            "<h1>{name}</h1>\n\
             <dl class=\"user\">\n  \
             <dt>ID</dt><dd>{id}</dd>\n  \
             <dt>Username</dt><dd>{name}</dd>\n  \
             <dt>Age</dt><dd>{age}</dd>\n\
             </dl>\n\
             <p><a href=\"/\">All users</a></p>\n",
            id = user.id,
            age = user.age,
        );

        Ok(page(&format!("User {}", user.id), ctx, &body))
    }
}

/// Wrap a body fragment in the shared page layout.
fn page(title: &str, ctx: &ViewContext, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} · {APP_NAME}</title>\n\
         <link rel=\"canonical\" href=\"{path}\">\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape(title),
        path = escape(&ctx.path),
    )
}

/// Escape the five HTML-significant characters.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
