//! Top-level router configuration combining public and admin routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Recent posts listing (public)
//! - `GET  /posts/{id}`   - Permalink: redirect or render (public)
//! - `GET  /health`       - Health check: store connectivity (public)
//! - `/admin/login`       - Login form (public, strict rate limit)
//! - `/admin/*`           - Admin screens (cookie session required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on admin routes
//! - **Authentication** - Cookie session on admin screens
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Admin routes are rate limited by peer address; serve the result with
/// `into_make_service_with_connect_info::<SocketAddr>()` or provide
/// `ConnectInfo` some other way.
pub fn router(state: AppState) -> Router {
    let admin_protected = web::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(rate_limit::layer());

    let admin_public = web::routes::public_routes().layer(rate_limit::secure_layer());

    let admin_router = Router::new().merge(admin_protected).merge(admin_public);

    Router::new()
        .merge(web::routes::front_routes())
        .route("/health", get(health_handler))
        .nest("/admin", admin_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// [`router`] with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
