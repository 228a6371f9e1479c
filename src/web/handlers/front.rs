//! Public pages: the recent posts listing and single-item permalinks.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::application::services::{Dispatch, ResolvedLink};
use crate::state::AppState;
use crate::utils::url_validator::is_linkable_url;
use crate::web::error_page::WebResult;

#[derive(Template, WebTemplate)]
#[template(path = "recent.html")]
struct RecentTemplate {
    links: Vec<ResolvedLink>,
}

#[derive(Template, WebTemplate)]
#[template(path = "post.html")]
struct PostTemplate {
    title: String,
    body: String,
    published_at: String,
}

/// Renders the recent posts listing.
///
/// # Endpoint
///
/// `GET /`
///
/// Title links point at the configured redirect URL for items of enabled
/// content types and at the permalink otherwise.
pub async fn recent_posts_handler(State(state): State<AppState>) -> WebResult<impl IntoResponse> {
    let items = state
        .content_service
        .recent(state.recent_posts_limit)
        .await?;
    let links = state.redirect_service.resolve_all(&items).await?;

    Ok(RecentTemplate { links })
}

/// Serves a content item's permalink.
///
/// # Endpoint
///
/// `GET /posts/{id}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the redirect URL when one applies
/// - **200 OK** with the rendered item otherwise
/// - **404 Not Found** for an unknown item
pub async fn post_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Response> {
    let item = state.content_service.get_item(id).await?;

    if let Dispatch::Redirect(target) = state.redirect_service.dispatch(&item).await?
        && let Some(location) = location_header(&target)
    {
        return Ok((StatusCode::FOUND, [(LOCATION, location)]).into_response());
    }

    Ok(PostTemplate {
        title: item.title,
        body: item.body,
        published_at: item.published_at.format("%Y-%m-%d").to_string(),
    }
    .into_response())
}

/// Header value for a stored URL. Non-ASCII targets are sent in their
/// percent-encoded form; targets with a scheme that may not be linked yield
/// `None`.
fn location_header(target: &str) -> Option<HeaderValue> {
    if !is_linkable_url(target) {
        return None;
    }

    if target.is_ascii()
        && let Ok(value) = HeaderValue::from_str(target)
    {
        return Some(value);
    }

    let normalized = url::Url::parse(target).ok()?;
    match HeaderValue::from_str(normalized.as_str()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, target, "Redirect target not usable as Location");
            None
        }
    }
}
