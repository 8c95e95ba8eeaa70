//! fyyur-web library - venue/artist booking service over HTTP
//!
//! JSON endpoints for browsing venues by area, artist and venue detail
//! pages with past/upcoming shows, search, and listing new shows.

use axum::Router;
use fyyur_common::SqliteStore;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Read store over the shared pool
    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.db.clone())
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::venue_routes())
        .merge(api::artist_routes())
        .merge(api::show_routes())
        .fallback(error::route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
