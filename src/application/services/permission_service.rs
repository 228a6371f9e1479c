//! Capability gates for the two admin surfaces.

use std::sync::Arc;

use crate::domain::capability::CapabilityChecker;
use crate::domain::entities::Caller;

/// Answers "may this caller edit redirect links / manage settings?".
///
/// The capability names are configuration; the checker decides whether a
/// caller holds them.
pub struct PermissionService {
    checker: Arc<dyn CapabilityChecker>,
    link_capability: String,
    settings_capability: String,
}

impl PermissionService {
    pub fn new(
        checker: Arc<dyn CapabilityChecker>,
        link_capability: impl Into<String>,
        settings_capability: impl Into<String>,
    ) -> Self {
        Self {
            checker,
            link_capability: link_capability.into(),
            settings_capability: settings_capability.into(),
        }
    }

    /// Whether the caller may see the link field and save redirect links.
    pub fn can_edit_links(&self, caller: &Caller) -> bool {
        self.checker.has_capability(caller, &self.link_capability)
    }

    /// Whether the settings page exists for this caller.
    pub fn can_manage_settings(&self, caller: &Caller) -> bool {
        self.checker
            .has_capability(caller, &self.settings_capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capability::{EDIT_POSTS, MANAGE_OPTIONS, MockCapabilityChecker};
    use crate::domain::entities::Role;

    fn caller() -> Caller {
        Caller {
            id: 1,
            name: "ops".to_string(),
            role: Role::Subscriber,
        }
    }

    #[test]
    fn test_checks_configured_capability_names() {
        let mut checker = MockCapabilityChecker::new();
        checker
            .expect_has_capability()
            .withf(|_, cap| cap == "publish_posts")
            .times(1)
            .returning(|_, _| true);
        checker
            .expect_has_capability()
            .withf(|_, cap| cap == "switch_themes")
            .times(1)
            .returning(|_, _| false);

        let service = PermissionService::new(Arc::new(checker), "publish_posts", "switch_themes");

        assert!(service.can_edit_links(&caller()));
        assert!(!service.can_manage_settings(&caller()));
    }

    #[test]
    fn test_default_capabilities_with_role_table() {
        use crate::domain::capability::RoleCapabilities;

        let service = PermissionService::new(Arc::new(RoleCapabilities), EDIT_POSTS, MANAGE_OPTIONS);
        let mut editor = caller();
        editor.role = Role::Editor;

        assert!(service.can_edit_links(&editor));
        assert!(!service.can_manage_settings(&editor));
    }
}
