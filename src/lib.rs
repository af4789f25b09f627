//! Leads CRUD API Library
//!
//! A small HTTP API over a single `leads` table, plus static file serving
//! for the bundled frontend.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `db`: Database connection and pool management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Row, request and response models.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::AppState;

/// Directory the frontend is served from, relative to the working directory.
pub const PUBLIC_DIR: &str = "public";

/// Builds the application router: the JSON API, the health check, and the
/// static frontend under [`PUBLIC_DIR`].
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::serve_frontend))
        .route(
            "/api/leads",
            post(handlers::create_lead).get(handlers::list_leads),
        )
        .route(
            "/api/leads/:id",
            get(handlers::get_lead)
                .put(handlers::update_lead)
                .delete(handlers::delete_lead),
        )
        // Unmatched paths fall through to the static frontend assets
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(
            // Request size limit: 1MB max payload
            ServiceBuilder::new().layer(RequestBodyLimitLayer::new(1024 * 1024)),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
