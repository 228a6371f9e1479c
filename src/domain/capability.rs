//! Capability checks.
//!
//! Handlers and services never inspect roles directly; they ask a
//! [`CapabilityChecker`] whether a caller holds a named capability.

use crate::domain::entities::{Caller, Role};

/// Capability required to attach redirect links to posts.
pub const EDIT_POSTS: &str = "edit_posts";
/// Capability required to reach the settings page.
pub const MANAGE_OPTIONS: &str = "manage_options";

#[cfg_attr(test, mockall::automock)]
pub trait CapabilityChecker: Send + Sync {
    fn has_capability(&self, caller: &Caller, capability: &str) -> bool;
}

/// Role-based capability checker with the conventional role table.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleCapabilities;

impl RoleCapabilities {
    pub fn capabilities_for(role: Role) -> &'static [&'static str] {
        match role {
            Role::Administrator => &[
                MANAGE_OPTIONS,
                EDIT_POSTS,
                "edit_others_posts",
                "publish_posts",
                "edit_pages",
                "read",
            ],
            Role::Editor => &[
                EDIT_POSTS,
                "edit_others_posts",
                "publish_posts",
                "edit_pages",
                "read",
            ],
            Role::Author => &[EDIT_POSTS, "publish_posts", "read"],
            Role::Contributor => &[EDIT_POSTS, "read"],
            Role::Subscriber => &["read"],
        }
    }
}

impl CapabilityChecker for RoleCapabilities {
    fn has_capability(&self, caller: &Caller, capability: &str) -> bool {
        Self::capabilities_for(caller.role).contains(&capability)
    }
}
