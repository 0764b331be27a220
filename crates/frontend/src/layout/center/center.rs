use contracts::shared::navigation::find_item;
use leptos::prelude::*;

use super::registry::render_screen;
use crate::layout::global_context::AppGlobalContext;
use crate::system::permissions::use_permissions;

/// Main content area showing the active screen
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let perms = use_permissions();

    // Re-render only when the screen or its own permission changes
    let screen = Memo::new(move |_| {
        let key = ctx.active.get();
        let allowed = find_item(&key)
            .map(|item| perms.has_permission(item.required_permission))
            .unwrap_or(false);
        (key, allowed)
    });

    view! {
        <main data-zone="center" class="app-main">
            {move || {
                let (key, allowed) = screen.get();
                render_screen(&key, allowed)
            }}
        </main>
    }
}
