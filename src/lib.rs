//! Backend for a plastics-packaging producer: customers, product
//! references, purchase orders with derived totals and per-field change
//! logging, and production tracking (work orders, stage records, counts).

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::db::DbPool;

async fn health() -> &'static str {
    "ok"
}

/// Assembles the application router over a live connection pool. Layers
/// applied here (tracing) wrap every resource route; CORS is attached by
/// the binary because it depends on runtime configuration.
pub fn app(db: Arc<DbPool>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", handlers::api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}
