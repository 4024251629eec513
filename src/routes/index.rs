use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;

use super::render_page;
use crate::error::Result;
use crate::listings::SortMode;
use crate::render::Page;
use crate::session::Session;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct IndexParams {
    /// Case-insensitive title substring filter
    #[serde(default)]
    pub q: String,
    /// `asc` or `desc`; anything else keeps stored order
    pub sort: Option<String>,
}

/// Listing index with optional filter and price sort
pub async fn index(
    State(state): State<AppState>,
    sess: Session,
    Query(params): Query<IndexParams>,
) -> Result<Response> {
    let sort = SortMode::from_param(params.sort.as_deref());
    let listings = state.listings.list_all(Some(&params.q), sort)?;

    render_page(
        &state,
        sess,
        Page::Index {
            listings,
            query: params.q,
            sort,
        },
    )
}
