use axum::{extract::State, response::Response};

use super::{login_redirect, render_page};
use crate::error::Result;
use crate::render::Page;
use crate::session::Session;
use crate::AppState;

/// Current user's own listings
pub async fn profile(State(state): State<AppState>, sess: Session) -> Result<Response> {
    let Some(user) = state.auth.current_user(&sess)? else {
        return Ok(login_redirect(
            &state,
            sess,
            "/profile",
            "Sign in to view your profile",
        ));
    };

    let listings = state.listings.list_by_owner(&user.username)?;
    render_page(
        &state,
        sess,
        Page::Profile {
            username: user.username,
            listings,
        },
    )
}
