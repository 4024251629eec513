pub mod add;
pub mod auth;
pub mod index;
pub mod profile;
pub mod property;

pub use add::{add_form, add_submit};
pub use auth::{login_form, login_submit, logout, register_form, register_submit};
pub use index::index;
pub use profile::profile;
pub use property::{place_bid, property_view};

use axum::response::{IntoResponse, Response};

use crate::error::Result;
use crate::render::{Page, PageContext};
use crate::session::{self, Session};
use crate::AppState;

/// Render a page through the view collaborator and attach the refreshed
/// session cookie
///
/// The pending flash message is consumed here, so it shows exactly once.
pub(crate) fn render_page(state: &AppState, mut sess: Session, page: Page) -> Result<Response> {
    let current_user = state.auth.current_user(&sess)?;
    let ctx = PageContext {
        current_user: current_user.map(|u| u.username),
        flash: sess.take_flash(),
    };

    let body = state.renderer.render(&page, &ctx);
    let response = body.into_response();
    Ok(session::attach_cookie(
        response,
        &sess,
        &state.config.session_key,
    ))
}

/// Redirect an anonymous visitor to the login page, remembering where they
/// were headed
pub(crate) fn login_redirect(
    state: &AppState,
    sess: Session,
    next: &str,
    message: &str,
) -> Response {
    tracing::debug!("Unauthenticated request, redirecting to login (next: {})", next);
    session::redirect(
        &format!("/login?next={}", next),
        &sess.with_flash(message),
        &state.config.session_key,
    )
}
