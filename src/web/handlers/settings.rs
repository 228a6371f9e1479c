//! Settings page: which content types use redirect links.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use serde_json::json;

use crate::application::services::{
    OPTION_GROUP, SELECTION_FIELD, SETTINGS_NONCE_ACTION, SETTINGS_NONCE_FIELD, SettingsCheckbox,
};
use crate::domain::entities::Caller;
use crate::error::{AppError, EXPIRED_LINK_MESSAGE};
use crate::state::AppState;
use crate::web::error_page::WebResult;
use crate::web::forms::FormFields;

#[derive(Template, WebTemplate)]
#[template(path = "settings.html")]
struct SettingsTemplate {
    option_group: &'static str,
    nonce: String,
    checkboxes: Vec<SettingsCheckbox>,
    saved: bool,
}

#[derive(Debug, Deserialize)]
pub struct SettingsQuery {
    #[serde(rename = "settings-updated")]
    settings_updated: Option<String>,
}

/// Renders the settings form.
///
/// # Endpoint
///
/// `GET /admin/settings`
///
/// Callers without the settings capability get 404: the page is only
/// registered for those who hold it.
pub async fn settings_page_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Query(query): Query<SettingsQuery>,
) -> WebResult<impl IntoResponse> {
    ensure_settings_page(&state, &caller)?;

    let checkboxes = state.settings_service.settings_form().await?;

    Ok(SettingsTemplate {
        option_group: OPTION_GROUP,
        nonce: state.nonce_service.create(SETTINGS_NONCE_ACTION, caller.id),
        checkboxes,
        saved: query.settings_updated.as_deref() == Some("true"),
    })
}

/// Stores the submitted selection.
///
/// # Endpoint
///
/// `POST /admin/settings`
///
/// # Form Fields
///
/// - `option_page` - must be `vk-ltc-options`
/// - `_wpnonce` - settings nonce
/// - `custom-post-types[]` - zero or more slugs, stored verbatim
///
/// # Responses
///
/// - **303 See Other** to `/admin/settings?settings-updated=true`
/// - **400 Bad Request** for an unknown `option_page`
/// - **403 Forbidden** for a missing or stale nonce
/// - **404 Not Found** without the settings capability
pub async fn settings_submit_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    form: FormFields,
) -> WebResult<Redirect> {
    ensure_settings_page(&state, &caller)?;

    if form.get("option_page") != Some(OPTION_GROUP) {
        return Err(AppError::bad_request(
            "Options page not found.",
            json!({ "option_page": form.get("option_page") }),
        )
        .into());
    }

    let nonce_valid = form
        .get(SETTINGS_NONCE_FIELD)
        .is_some_and(|nonce| state.nonce_service.verify(nonce, SETTINGS_NONCE_ACTION, caller.id));
    if !nonce_valid {
        tracing::warn!(caller_id = caller.id, "Settings submission with invalid nonce");
        return Err(AppError::forbidden(EXPIRED_LINK_MESSAGE, json!({})).into());
    }

    state
        .settings_service
        .submit_settings(form.get_all(SELECTION_FIELD))
        .await?;

    Ok(Redirect::to("/admin/settings?settings-updated=true"))
}

fn ensure_settings_page(state: &AppState, caller: &Caller) -> Result<(), AppError> {
    if state.permissions.can_manage_settings(caller) {
        Ok(())
    } else {
        tracing::debug!(caller_id = caller.id, role = %caller.role, "Settings page hidden");
        Err(AppError::not_found("Not Found", json!({})))
    }
}
