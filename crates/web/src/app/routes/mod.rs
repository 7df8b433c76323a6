use axum::{routing::get, Router};

pub mod pages;
pub mod shoes;
pub mod system;

/// Router for the catalog pages and JSON API.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::grid_page))
        .route("/shoe/:slug", get(pages::shoe_page))
        .nest("/api/shoes", shoes::router())
}
