use axum::{extract::State, response::Response, Form};
use serde::Deserialize;

use super::{login_redirect, render_page};
use crate::error::Result;
use crate::listings::{coerce_price, NewListing};
use crate::render::Page;
use crate::session::{self, Session};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddListingForm {
    pub title: Option<String>,
    /// Raw string on purpose: unusable values coerce to 0 instead of
    /// failing deserialization
    pub price: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Add-listing form; requires a signed-in user like the submission does
pub async fn add_form(State(state): State<AppState>, sess: Session) -> Result<Response> {
    if state.auth.current_user(&sess)?.is_none() {
        return Ok(login_redirect(&state, sess, "/add", "Sign in to add a lot"));
    }
    render_page(&state, sess, Page::AddForm)
}

/// Create a listing owned by the current user
pub async fn add_submit(
    State(state): State<AppState>,
    sess: Session,
    Form(form): Form<AddListingForm>,
) -> Result<Response> {
    let Some(user) = state.auth.current_user(&sess)? else {
        return Ok(login_redirect(&state, sess, "/add", "Sign in to add a lot"));
    };

    let new = NewListing {
        title: form.title.unwrap_or_default(),
        price: coerce_price(form.price.as_deref()),
        description: form.description.unwrap_or_default(),
        image: form.image,
    };
    state.listings.create(new, &user.username)?;

    let sess = sess.with_flash("Lot added");
    Ok(session::redirect("/", &sess, &state.config.session_key))
}
