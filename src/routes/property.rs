use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};
use serde::Deserialize;

use super::{login_redirect, render_page};
use crate::error::{AppError, Result};
use crate::render::Page;
use crate::session::{self, Session};
use crate::AppState;

/// Parse the id path segment; anything that is not a positive integer is
/// the same 404 as an unknown id
fn parse_id(raw: &str) -> Result<u64> {
    raw.parse().map_err(|_| AppError::NotFound)
}

/// Single listing page
pub async fn property_view(
    State(state): State<AppState>,
    sess: Session,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let listing = state.listings.get_by_id(id)?.ok_or(AppError::NotFound)?;

    render_page(&state, sess, Page::Property { listing })
}

#[derive(Debug, Deserialize)]
pub struct BidForm {
    pub amount: Option<String>,
}

/// Accept a bid on a listing
///
/// Bids are acknowledged to the bidder but deliberately not persisted
/// anywhere; this is a notification path only.
pub async fn place_bid(
    State(state): State<AppState>,
    sess: Session,
    Path(id): Path<String>,
    Form(form): Form<BidForm>,
) -> Result<Response> {
    let id = parse_id(&id)?;

    if state.auth.current_user(&sess)?.is_none() {
        return Ok(login_redirect(
            &state,
            sess,
            &format!("/property/{}", id),
            "Sign in to place a bid",
        ));
    }

    let amount = form.amount.unwrap_or_default();
    tracing::info!("Bid of {:?} on lot {} acknowledged", amount, id);

    let sess = sess.with_flash(format!(
        "Bid {} received for lot #{}, sent for processing",
        amount, id
    ));
    Ok(session::redirect(
        &format!("/property/{}", id),
        &sess,
        &state.config.session_key,
    ))
}
