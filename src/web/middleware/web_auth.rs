//! Cookie-based authentication middleware for admin pages.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::api::middleware::tracing::CALLER_ID_FIELD;
use crate::state::AppState;

/// Name of the session cookie holding the raw access token.
pub const SESSION_COOKIE: &str = "auth_token";

/// Login page unauthenticated admin requests are sent to.
pub const LOGIN_PATH: &str = "/admin/login";

/// Authenticates admin requests using the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: auth_token=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `auth_token` cookie from request
/// 2. Resolve the caller via [`crate::application::services::auth_service::AuthService`]
/// 3. On success, record `caller_id` on the request span, insert the
///    [`crate::domain::entities::Caller`] as a request extension and continue
///    to the handler
/// 4. On failure or missing token, redirect to `/admin/login`
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/settings", get(settings_page_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(token) = session_token(req.headers()) else {
        return Err(Redirect::to(LOGIN_PATH));
    };

    match st.auth_service.authenticate(&token).await {
        Ok(caller) => {
            tracing::Span::current().record(CALLER_ID_FIELD, caller.id);
            tracing::debug!(role = %caller.role, "Admin request authenticated");
            req.extensions_mut().insert(caller);
            Ok(next.run(req).await)
        }
        Err(_) => Err(Redirect::to(LOGIN_PATH)),
    }
}

/// Extracts the session token from the `Cookie` header.
///
/// Handles multiple cookies in one header by splitting on semicolons and
/// ignoring every cookie other than `auth_token`.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(SESSION_COOKIE), Some(value)) if !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}
