use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils::today;
use crate::store::{seed::demo_workshop, AppStore};
use crate::system::permissions::PermissionsProvider;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let initial_permissions = config.permissions.clone();

    // Provide the settings and shell state to the whole app via context.
    provide_context(config);
    provide_context(AppGlobalContext::new());

    // In-memory workshop data seeded for the demo session
    provide_context(AppStore::new(demo_workshop(today())));

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <PermissionsProvider initial=initial_permissions>
                    <AppShell />
                </PermissionsProvider>
            </ToasterProvider>
        </ConfigProvider>
    }
}
