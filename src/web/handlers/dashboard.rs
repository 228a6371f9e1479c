//! Admin dashboard handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Extension, extract::State, response::IntoResponse};

use crate::domain::entities::Caller;
use crate::state::AppState;
use crate::web::error_page::WebResult;

struct DashboardRow {
    id: i64,
    title: String,
    content_type: String,
    published_at: String,
}

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with the recent items and a link to
/// the settings page for callers allowed to see it.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    caller_name: String,
    caller_role: String,
    can_manage_settings: bool,
    rows: Vec<DashboardRow>,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /admin`
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> WebResult<impl IntoResponse> {
    let items = state
        .content_service
        .recent(state.recent_posts_limit)
        .await?;

    let rows = items
        .into_iter()
        .map(|item| DashboardRow {
            id: item.id,
            title: item.title,
            content_type: item.content_type,
            published_at: item.published_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    Ok(DashboardTemplate {
        can_manage_settings: state.permissions.can_manage_settings(&caller),
        caller_role: caller.role.to_string(),
        caller_name: caller.name,
        rows,
    })
}
