//! Lotmarket: a small property-listings marketplace server.
//!
//! Users register, sign in, browse and filter lots, post their own, and
//! submit bid notifications. State lives in two JSON array files; sessions
//! are stateless signed cookies. This module exports the core types and the
//! router builder for reuse in tests.

pub mod auth;
pub mod config;
pub mod error;
pub mod listings;
pub mod models;
pub mod render;
pub mod routes;
pub mod security;
pub mod seed;
pub mod session;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use auth::AuthService;
use listings::ListingService;
use render::{PlainRenderer, Renderer};
use store::{JsonListingStore, JsonUserStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub listings: ListingService,
    pub auth: AuthService,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    /// Wire up JSON-file stores and the built-in renderer from configuration
    pub fn new(config: Config) -> Self {
        let listings = ListingService::new(Arc::new(JsonListingStore::new(&config.data_file)));
        let auth = AuthService::new(Arc::new(JsonUserStore::new(&config.users_file)));
        Self {
            config,
            listings,
            auth,
            renderer: Arc::new(PlainRenderer),
        }
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/property/:id", get(routes::property_view))
        .route("/property/:id/bid", post(routes::place_bid))
        .route("/add", get(routes::add_form).post(routes::add_submit))
        .route(
            "/login",
            get(routes::login_form).post(routes::login_submit),
        )
        .route(
            "/register",
            get(routes::register_form).post(routes::register_submit),
        )
        .route("/profile", get(routes::profile))
        .route("/logout", get(routes::logout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
