//! Site-wide selection of content types that use redirect links.

use serde_json::Value;

/// Settings key holding the selection.
pub const ENABLED_CONTENT_TYPES_KEY: &str = "custom-post-types";

/// Stored selection of content types, as read back from the settings store.
///
/// Selections are written verbatim, so the stored value is not guaranteed to
/// be a list. A legacy scalar `1` is recognised and treated as "nothing
/// selected". Any other non-list value matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum EnabledContentTypes {
    /// Slugs as submitted, including duplicates and unknown slugs.
    Slugs(Vec<String>),
    /// The legacy scalar `1`.
    LegacySentinel,
    /// Any other stored value.
    Unrecognized(Value),
}

impl EnabledContentTypes {
    /// Builds a selection from submitted slugs.
    pub fn from_slugs(slugs: Vec<String>) -> Self {
        Self::Slugs(slugs)
    }

    /// Interprets a raw stored value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => Self::Slugs(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(slug) => Some(slug),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Number(ref n) if n.as_f64() == Some(1.0) => Self::LegacySentinel,
            Value::String(ref s) if s == "1" => Self::LegacySentinel,
            Value::Bool(true) => Self::LegacySentinel,
            other => Self::Unrecognized(other),
        }
    }

    /// Raw value to persist.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Slugs(slugs) => Value::Array(slugs.iter().cloned().map(Value::String).collect()),
            Self::LegacySentinel => Value::from(1),
            Self::Unrecognized(value) => value.clone(),
        }
    }

    /// Returns true if `slug` is part of the selection.
    pub fn contains(&self, slug: &str) -> bool {
        match self {
            Self::Slugs(slugs) => slugs.iter().any(|s| s == slug),
            Self::LegacySentinel | Self::Unrecognized(_) => false,
        }
    }

    pub fn is_legacy_sentinel(&self) -> bool {
        matches!(self, Self::LegacySentinel)
    }
}
