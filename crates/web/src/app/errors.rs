use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde_json::json;

use shoefront_core::DomainError;

use crate::app::AppState;
use crate::render::RenderError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn domain_error_to_json(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "shoe not found"),
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidSlug(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_slug", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
    }
}

pub fn render_error_to_response(err: RenderError) -> axum::response::Response {
    tracing::error!(error = %err, "page rendering failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}

/// HTML 404 page, falling back to plain text if the template itself fails.
pub fn html_not_found(state: &AppState, message: &str) -> axum::response::Response {
    match state.renderer().not_found_page(message) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => render_error_to_response(e),
    }
}

/// HTML counterpart of [`domain_error_to_json`] for page routes.
pub fn domain_error_to_html(state: &AppState, err: DomainError) -> axum::response::Response {
    let (status, title) = match &err {
        DomainError::NotFound => return html_not_found(state, "Shoe not found."),
        DomainError::Validation(_) | DomainError::InvalidSlug(_) => {
            (StatusCode::BAD_REQUEST, "Bad request")
        }
        DomainError::InvariantViolation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable"),
    };

    match state.renderer().error_page(title, &err.to_string()) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => render_error_to_response(e),
    }
}
