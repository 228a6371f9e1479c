//! Post edit screen and its save hook.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::application::services::{LINK_FIELD, LINK_NONCE_ACTION, LINK_NONCE_FIELD};
use crate::domain::entities::Caller;
use crate::state::AppState;
use crate::web::error_page::WebResult;
use crate::web::forms::FormFields;

/// The redirect URL field shown on the edit screen.
struct LinkMetaBox {
    url: String,
    nonce: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "edit_post.html")]
struct EditPostTemplate {
    id: i64,
    title: String,
    content_type: String,
    body: String,
    link_field: &'static str,
    nonce_field: &'static str,
    meta_box: Option<LinkMetaBox>,
    updated: bool,
}

#[derive(Debug, Deserialize)]
pub struct EditQuery {
    message: Option<u8>,
}

/// Renders the edit screen of a content item.
///
/// # Endpoint
///
/// `GET /admin/posts/{id}/edit`
///
/// The redirect link box appears only for items of type `post` and only for
/// callers holding the link capability.
pub async fn edit_post_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i64>,
    Query(query): Query<EditQuery>,
) -> WebResult<impl IntoResponse> {
    let item = state.content_service.get_item(id).await?;

    let can_link = state.permissions.can_edit_links(&caller);
    let meta_box = if state.link_editor.meta_box_visible(&item, can_link) {
        Some(LinkMetaBox {
            url: state.link_editor.current_url(item.id).await?,
            nonce: state.nonce_service.create(LINK_NONCE_ACTION, caller.id),
        })
    } else {
        None
    };

    Ok(EditPostTemplate {
        id: item.id,
        title: item.title,
        content_type: item.content_type,
        body: item.body,
        link_field: LINK_FIELD,
        nonce_field: LINK_NONCE_FIELD,
        meta_box,
        updated: query.message == Some(1),
    })
}

/// Save hook of the edit screen.
///
/// # Endpoint
///
/// `POST /admin/posts/{id}`
///
/// # Form Fields
///
/// - `vk-ltc-link-field` - redirect URL; absent means "leave unchanged"
/// - `vk-ltc-link-nonce` - link nonce
///
/// # Responses
///
/// - **303 See Other** back to the edit screen with `message=1`, also when
///   the nonce or the URL was rejected
/// - **403 Forbidden** without the link capability, whether or not the item exists
/// - **404 Not Found** for an unknown item
pub async fn save_post_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<i64>,
    form: FormFields,
) -> WebResult<Redirect> {
    let can_link = state.permissions.can_edit_links(&caller);
    state.link_editor.ensure_can_link(id, can_link)?;

    let item = state.content_service.get_item(id).await?;

    let nonce_valid = form
        .get(LINK_NONCE_FIELD)
        .is_some_and(|nonce| state.nonce_service.verify(nonce, LINK_NONCE_ACTION, caller.id));

    let saved_id = state
        .link_editor
        .save_link(item.id, form.get(LINK_FIELD), can_link, nonce_valid)
        .await?;

    Ok(Redirect::to(&format!("/admin/posts/{saved_id}/edit?message=1")))
}
