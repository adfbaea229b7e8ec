//! fyyur-web library - venue and artist booking directory
//!
//! Server-rendered pages for listing venues and artists, scheduling shows
//! between them and searching both by name.

use axum::routing::{get, post};
use axum::{middleware, Router};
use fyyur_common::Config;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod error;
pub mod flash;
pub mod forms;
pub mod render;
pub mod views;

pub use error::{AppError, AppResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Resolved configuration; the secret key signs flash cookies
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home::index))
        .route("/venues", get(api::venues::list_venues))
        .route("/venues/search", post(api::venues::search_venues))
        .route(
            "/venues/create",
            get(api::venues::new_venue_form).post(api::venues::create_venue),
        )
        .route(
            "/venues/:id",
            get(api::venues::show_venue).delete(api::venues::delete_venue),
        )
        .route(
            "/venues/:id/edit",
            get(api::venues::edit_venue_form).post(api::venues::update_venue),
        )
        .route("/artists", get(api::artists::list_artists))
        .route("/artists/search", post(api::artists::search_artists))
        .route(
            "/artists/create",
            get(api::artists::new_artist_form).post(api::artists::create_artist),
        )
        .route("/artists/:id", get(api::artists::show_artist))
        .route(
            "/artists/:id/edit",
            get(api::artists::edit_artist_form).post(api::artists::update_artist),
        )
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::new_show_form).post(api::shows::create_show),
        )
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            flash::flash_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
