//! HTML rendering of [`AppError`] for browser-facing routes.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    title: String,
    message: String,
}

/// An [`AppError`] rendered as an HTML error page with the matching status.
#[derive(Debug)]
pub struct WebError(pub AppError);

impl From<AppError> for WebError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let info = self.0.to_error_info();

        if status.is_server_error() {
            tracing::error!(code = info.code, details = %info.details, "{}", info.message);
        }

        // Internal details stay in the log.
        let message = if status.is_server_error() {
            "An internal error occurred.".to_string()
        } else {
            info.message
        };

        let page = ErrorTemplate {
            status: status.as_u16(),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
        };

        (status, page).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
