use axum::{
    extract::{Query, State},
    response::Response,
    Form,
};
use serde::Deserialize;

use super::render_page;
use crate::auth::AuthError;
use crate::error::Result;
use crate::render::Page;
use crate::session::{self, Session};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    /// Destination to return to after a successful sign-in
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("").trim()
    }

    fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

/// Login form
pub async fn login_form(
    State(state): State<AppState>,
    sess: Session,
    Query(params): Query<LoginParams>,
) -> Result<Response> {
    render_page(&state, sess, Page::Login { next: params.next })
}

/// Check credentials; success redirects to `next` (or home), failure shows
/// a generic message on the login page
pub async fn login_submit(
    State(state): State<AppState>,
    sess: Session,
    Query(params): Query<LoginParams>,
    Form(creds): Form<Credentials>,
) -> Result<Response> {
    match state.auth.login(creds.username(), creds.password()) {
        Ok(user) => {
            let sess = sess.with_user(user.id).with_flash("Signed in");
            let next = params
                .next
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "/".to_string());
            Ok(session::redirect(&next, &sess, &state.config.session_key))
        }
        Err(AuthError::Store(e)) => Err(e.into()),
        Err(e) => render_page(
            &state,
            sess.with_flash(e.to_string()),
            Page::Login { next: params.next },
        ),
    }
}

/// Registration form
pub async fn register_form(State(state): State<AppState>, sess: Session) -> Result<Response> {
    render_page(&state, sess, Page::Register)
}

/// Create an account; success redirects to the login page
pub async fn register_submit(
    State(state): State<AppState>,
    sess: Session,
    Form(creds): Form<Credentials>,
) -> Result<Response> {
    match state.auth.register(creds.username(), creds.password()) {
        Ok(_) => {
            let sess = sess.with_flash("Registration complete, please sign in");
            Ok(session::redirect("/login", &sess, &state.config.session_key))
        }
        Err(AuthError::Store(e)) => Err(e.into()),
        Err(e) => {
            let sess = sess.with_flash(e.to_string());
            Ok(session::redirect(
                "/register",
                &sess,
                &state.config.session_key,
            ))
        }
    }
}

/// Clear the session's user binding and head home
pub async fn logout(State(state): State<AppState>, sess: Session) -> Response {
    let sess = sess.without_user().with_flash("Signed out");
    session::redirect("/", &sess, &state.config.session_key)
}
