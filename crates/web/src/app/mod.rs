//! Axum application wiring.
//!
//! - `state.rs`: the immutable catalog snapshot, clock and renderer shared by handlers
//! - `routes/`: HTTP handlers (HTML pages, JSON API, health)
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod errors;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(state))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}
