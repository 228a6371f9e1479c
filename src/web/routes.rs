//! Browser-facing route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    dashboard_handler, edit_post_handler, login_page_handler, login_submit_handler,
    logout_handler, post_handler, recent_posts_handler, save_post_handler,
    settings_page_handler, settings_submit_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Admin routes requiring a session.
///
/// Protected via [`crate::web::middleware::web_auth`]. Mounted under `/admin`.
///
/// # Endpoints
///
/// - `GET  /` - Dashboard with recent items
/// - `POST /logout` - Clear the session cookie
/// - `GET  /settings`, `POST /settings` - Enabled content types
/// - `GET  /posts/{id}/edit` - Edit screen with the redirect link box
/// - `POST /posts/{id}` - Save hook
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/logout", post(logout_handler))
        .route(
            "/settings",
            get(settings_page_handler).post(settings_submit_handler),
        )
        .route("/posts/{id}/edit", get(edit_post_handler))
        .route("/posts/{id}", post(save_post_handler))
}

/// Admin routes without authentication. Mounted under `/admin`.
///
/// # Endpoints
///
/// - `GET  /login` - Login page
/// - `POST /login` - Exchange a token for a session cookie
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/login", get(login_page_handler).post(login_submit_handler))
}

/// Public site routes.
///
/// # Endpoints
///
/// - `GET /` - Recent posts listing
/// - `GET /posts/{id}` - Permalink: redirect or render
pub fn front_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(recent_posts_handler))
        .route("/posts/{id}", get(post_handler))
}
