use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_shoes))
        .route("/:slug", get(get_shoe))
}

pub async fn list_shoes(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    let grid = state.grid();
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "items": grid.cards,
            "counts": grid.counts,
            "recency_window_days": state.window().in_days(),
        })),
    )
        .into_response()
}

pub async fn get_shoe(
    Extension(state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    match state.card(&slug) {
        Ok(card) => (StatusCode::OK, Json(card)).into_response(),
        Err(e) => errors::domain_error_to_json(e),
    }
}
