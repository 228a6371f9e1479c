//! Settings manager: which content types use redirect links.

use std::sync::Arc;

use crate::domain::entities::{
    BASE_CONTENT_TYPE, ENABLED_CONTENT_TYPES_KEY, EnabledContentTypes,
};
use crate::domain::repositories::{ContentTypeRepository, OptionRepository};
use crate::error::AppError;

/// Settings group posted back in the `option_page` field.
pub const OPTION_GROUP: &str = "vk-ltc-options";
/// Nonce action protecting the settings form.
pub const SETTINGS_NONCE_ACTION: &str = "vk-ltc-options-options";
/// Form field carrying the settings nonce.
pub const SETTINGS_NONCE_FIELD: &str = "_wpnonce";
/// Multi-valued form field carrying the selected slugs.
pub const SELECTION_FIELD: &str = "custom-post-types[]";

/// Label used when the base type is missing from the registry.
const BASE_CONTENT_TYPE_FALLBACK_LABEL: &str = "Posts";

/// A content type offered on the settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeChoice {
    pub slug: String,
    pub label: String,
}

/// One checkbox of the settings form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsCheckbox {
    pub slug: String,
    pub label: String,
    pub checked: bool,
}

/// Service owning the enabled-content-types setting.
pub struct SettingsService<O, T>
where
    O: OptionRepository + ?Sized,
    T: ContentTypeRepository + ?Sized,
{
    options: Arc<O>,
    content_types: Arc<T>,
}

impl<O, T> SettingsService<O, T>
where
    O: OptionRepository + ?Sized,
    T: ContentTypeRepository + ?Sized,
{
    pub fn new(options: Arc<O>, content_types: Arc<T>) -> Self {
        Self {
            options,
            content_types,
        }
    }

    /// Lists the content types the feature can be enabled for.
    ///
    /// The base type comes first, followed by every public, non-builtin
    /// type in registration order. Slugs are unique.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_enabled_content_types(&self) -> Result<Vec<ContentTypeChoice>, AppError> {
        let base_label = self
            .content_types
            .find_by_slug(BASE_CONTENT_TYPE)
            .await?
            .map(|t| t.label)
            .unwrap_or_else(|| BASE_CONTENT_TYPE_FALLBACK_LABEL.to_string());

        let mut choices = vec![ContentTypeChoice {
            slug: BASE_CONTENT_TYPE.to_string(),
            label: base_label,
        }];

        for content_type in self.content_types.list().await? {
            if !content_type.is_public_custom()
                || choices.iter().any(|c| c.slug == content_type.slug)
            {
                continue;
            }
            choices.push(ContentTypeChoice {
                slug: content_type.slug,
                label: content_type.label,
            });
        }

        Ok(choices)
    }

    /// Reads the stored selection. `None` if settings were never submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn current_selection(&self) -> Result<Option<EnabledContentTypes>, AppError> {
        Ok(self
            .options
            .get_option(ENABLED_CONTENT_TYPES_KEY)
            .await?
            .map(EnabledContentTypes::from_value))
    }

    /// Builds the checkboxes of the settings form.
    ///
    /// A box is pre-checked iff its slug is in the stored selection and the
    /// stored value is not the legacy sentinel `1`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn settings_form(&self) -> Result<Vec<SettingsCheckbox>, AppError> {
        let selection = self.current_selection().await?;
        let choices = self.list_enabled_content_types().await?;

        Ok(choices
            .into_iter()
            .map(|choice| SettingsCheckbox {
                checked: is_checked(selection.as_ref(), &choice.slug),
                slug: choice.slug,
                label: choice.label,
            })
            .collect())
    }

    /// Stores the submitted selection verbatim.
    ///
    /// Unknown slugs, duplicates and ordering are kept; no filtering happens
    /// on the server side.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn submit_settings(&self, selected_slugs: Vec<String>) -> Result<(), AppError> {
        let selection = EnabledContentTypes::from_slugs(selected_slugs);

        self.options
            .update_option(ENABLED_CONTENT_TYPES_KEY, selection.to_value())
            .await?;

        tracing::info!(selection = ?selection, "Enabled content types updated");
        Ok(())
    }
}

fn is_checked(selection: Option<&EnabledContentTypes>, slug: &str) -> bool {
    match selection {
        Some(selection) => !selection.is_legacy_sentinel() && selection.contains(slug),
        None => false,
    }
}
