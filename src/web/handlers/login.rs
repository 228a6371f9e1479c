//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;
use crate::web::forms::FormFields;
use crate::web::middleware::web_auth::{LOGIN_PATH, SESSION_COOKIE};

/// Template for the login page.
///
/// Renders `templates/login.html` with a token input form and an optional
/// error line.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /admin/login`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {
        error: String::new(),
    }
}

/// Exchanges an access token for a session cookie.
///
/// # Endpoint
///
/// `POST /admin/login`
///
/// # Form Fields
///
/// - `token` - raw access token issued by the admin CLI
///
/// # Responses
///
/// - **303 See Other** to `/admin` with `Set-Cookie: auth_token=...`
/// - **401 Unauthorized** with the login page and an error line
pub async fn login_submit_handler(State(state): State<AppState>, form: FormFields) -> Response {
    let token = form.get("token").unwrap_or_default().trim().to_string();

    match state.auth_service.authenticate(&token).await {
        Ok(caller) => {
            tracing::info!(caller_id = caller.id, name = %caller.name, "Admin login");
            with_cookie(
                Redirect::to("/admin"),
                &format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax"),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "Admin login failed");
            (
                StatusCode::UNAUTHORIZED,
                LoginTemplate {
                    error: "Invalid or revoked token.".to_string(),
                },
            )
                .into_response()
        }
    }
}

/// Clears the session cookie.
///
/// # Endpoint
///
/// `POST /admin/logout`
pub async fn logout_handler() -> Response {
    with_cookie(
        Redirect::to(LOGIN_PATH),
        &format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
    )
}

fn with_cookie(redirect: Redirect, cookie: &str) -> Response {
    let mut response = redirect.into_response();
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            response.headers_mut().insert(SET_COOKIE, value);
            response
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            LoginTemplate {
                error: "Invalid or revoked token.".to_string(),
            },
        )
            .into_response(),
    }
}
