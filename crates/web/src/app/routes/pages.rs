use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::{Html, IntoResponse},
};

use shoefront_core::DomainError;

use crate::app::{errors, AppState};

pub async fn grid_page(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    let grid = state.grid();
    match state.renderer().grid_page(&grid) {
        Ok(html) => Html(html).into_response(),
        Err(e) => errors::render_error_to_response(e),
    }
}

pub async fn shoe_page(
    Extension(state): Extension<Arc<AppState>>,
    Path(slug): Path<String>,
) -> axum::response::Response {
    let card = match state.card(&slug) {
        Ok(card) => card,
        Err(DomainError::NotFound) => {
            return errors::html_not_found(&state, &format!("No shoe called \"{slug}\"."));
        }
        Err(e) => return errors::domain_error_to_html(&state, e),
    };

    match state.renderer().shoe_page(&card) {
        Ok(html) => Html(html).into_response(),
        Err(e) => errors::render_error_to_response(e),
    }
}
