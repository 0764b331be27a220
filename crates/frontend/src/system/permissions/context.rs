use contracts::system::permissions::{Permission, PermissionSet};
use leptos::prelude::*;

/// Permissions granted to the current session
#[derive(Clone, Copy)]
pub struct PermissionsContext {
    pub granted: RwSignal<PermissionSet>,
}

impl PermissionsContext {
    pub fn new(initial: PermissionSet) -> Self {
        Self {
            granted: RwSignal::new(initial),
        }
    }

    /// Tracked read: views re-render when the grant set changes
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.granted.with(|set| set.contains(permission))
    }

    pub fn set(&self, permission: Permission, enabled: bool) {
        log::info!("permission {} -> {}", permission.key(), enabled);
        self.granted.update(|set| set.set(permission, enabled));
    }
}

/// Permissions provider component
#[component]
pub fn PermissionsProvider(initial: PermissionSet, children: Children) -> impl IntoView {
    provide_context(PermissionsContext::new(initial));
    children()
}

/// Hook to access the session permissions
pub fn use_permissions() -> PermissionsContext {
    use_context::<PermissionsContext>().expect("PermissionsProvider not found in component tree")
}
